pub mod mood;
pub mod test_result;

pub use mood::{MoodLevelInput, SaveMoodRequest};
pub use test_result::SaveTestResultRequest;
