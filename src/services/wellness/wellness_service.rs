//! 웰니스 로그 서비스
//!
//! 기분 기록과 자가진단 결과의 저장 및 최근 기록 조회를 담당합니다.

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::domain::dto::wellness::request::{SaveMoodRequest, SaveTestResultRequest};
use crate::domain::dto::wellness::response::{
    MoodHistoryItem, SaveMoodResponse, SaveTestResultResponse, TestResultResponse,
};
use crate::repositories::wellness::{MoodRepository, TestResultRepository, RECENT_LIMIT};

pub struct WellnessService {
    mood_repo: Arc<MoodRepository>,
    test_result_repo: Arc<TestResultRepository>,
}

impl WellnessService {
    pub fn new(mood_repo: Arc<MoodRepository>, test_result_repo: Arc<TestResultRepository>) -> Self {
        Self {
            mood_repo,
            test_result_repo,
        }
    }

    /// 기분 기록 저장. 숫자 입력은 기호로 변환되어 저장됩니다.
    pub async fn save_mood(&self, request: SaveMoodRequest) -> AppResult<SaveMoodResponse> {
        let new_mood = request.into_new_mood()?;
        let mood = self.mood_repo.create(new_mood).await?;

        log::debug!("기분 기록 저장: id={} level={}", mood.id, mood.mood_level);
        Ok(SaveMoodResponse::from(mood))
    }

    /// 최근 기분 기록 (최신순, 최대 10개)
    pub async fn recent_moods(&self) -> AppResult<Vec<MoodHistoryItem>> {
        let moods = self.mood_repo.find_recent(RECENT_LIMIT).await?;
        Ok(moods.into_iter().map(MoodHistoryItem::from).collect())
    }

    pub async fn save_test_result(
        &self,
        request: SaveTestResultRequest,
    ) -> AppResult<SaveTestResultResponse> {
        let new_result = request.into_new_test_result()?;
        let result = self.test_result_repo.create(new_result).await?;

        log::debug!("자가진단 결과 저장: id={} type={}", result.id, result.test_type);
        Ok(SaveTestResultResponse::from(result))
    }

    /// 최근 자가진단 결과 (최신순, 최대 10개)
    pub async fn recent_test_results(&self) -> AppResult<Vec<TestResultResponse>> {
        let results = self.test_result_repo.find_recent(RECENT_LIMIT).await?;
        Ok(results.into_iter().map(TestResultResponse::from).collect())
    }
}
