pub mod mood_response;
pub mod test_result_response;

pub use mood_response::{MoodHistoryItem, MoodResponse, SaveMoodResponse};
pub use test_result_response::{SaveTestResultResponse, TestResultResponse};
