pub mod mood_repo;
pub mod test_result_repo;

pub use mood_repo::MoodRepository;
pub use test_result_repo::TestResultRepository;

/// 최근 기록 조회 시 반환하는 최대 개수
pub const RECENT_LIMIT: i64 = 10;
