//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기(가입, 로그인, 조회, 수정, 삭제, 중복 확인)를
//! 담당하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! │  Registration      Authentication      Profile Mgmt      │
//! │  • 입력 정규화     • 식별자 조회       • 병합/재검증     │
//! │  • 중복 사전 검사                                        │
//! │  • bcrypt 해싱     • bcrypt 검증       • 삭제            │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                     UserRepository                       │
//! │  • 트랜잭션 내 중복 검사 + 쓰기                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안
//!
//! - 비밀번호는 bcrypt로 해싱되며 평문은 어디에도 기록되지 않습니다
//! - 응답은 항상 [`UserResponse`] 투영을 거치므로 해시가 노출되지 않습니다
//! - 존재하지 않는 사용자와 잘못된 비밀번호는 같은 401 메시지를 받습니다

use std::sync::Arc;
use std::time::Instant;

use crate::core::errors::{AppError, AppResult, Conflict};
use crate::domain::dto::users::request::{
    CheckEmailRequest, CheckUsernameRequest, LoginRequest, RegisterRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::{
    AvailabilityResponse, MessageResponse, UserActionResponse, UserResponse,
};
use crate::domain::entities::users::NewUser;
use crate::repositories::users::UserRepository;

const INVALID_CREDENTIALS: &str = "Invalid email/username or password";
const USER_NOT_FOUND: &str = "User not found";

/// 사용자 관리 서비스
///
/// 리포지토리와 bcrypt cost를 생성 시 주입받습니다. 테스트에서는
/// 낮은 cost(4)를 넘겨 해싱 시간을 줄입니다.
pub struct UserService {
    user_repo: Arc<UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// 전체 사용자 목록
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 회원가입
    ///
    /// 1. 누락 필드 / 길이 검증 (저장소 접근 전)
    /// 2. 중복 사전 검사 (사용자명 → 이메일), 해싱 전에 충돌을 보고
    /// 3. bcrypt 해싱
    /// 4. 트랜잭션 내 중복 재검사 및 저장
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserActionResponse> {
        let start_time = Instant::now();
        let registration = request.into_registration()?;

        if self.user_repo.exists_by_username(&registration.username).await? {
            return Err(AppError::Conflict(Conflict::UsernameTaken));
        }
        if self.user_repo.exists_by_email(&registration.email).await? {
            return Err(AppError::Conflict(Conflict::EmailTaken));
        }

        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(&registration.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self
            .user_repo
            .create(NewUser {
                username: registration.username,
                email: registration.email,
                password_hash,
            })
            .await?;

        log::info!(
            "사용자 등록 완료: id={} ({:?})",
            created.id,
            start_time.elapsed()
        );

        Ok(UserActionResponse::registered(created))
    }

    /// 로그인
    ///
    /// 식별자는 정규화 없이 저장된 이메일 또는 사용자명과 정확히 비교됩니다.
    /// 손상된 해시는 검증 실패로 취급합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<UserActionResponse> {
        let credentials = request.into_credentials()?;

        let user = self
            .user_repo
            .find_by_identifier(&credentials.identifier)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verify_start = Instant::now();
        let is_valid = user.verify_password(&credentials.password).unwrap_or_else(|e| {
            log::warn!("저장된 비밀번호 해시 검증 실패 (user id={}): {}", user.id, e);
            false
        });
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        log::info!("로그인 성공: id={}", user.id);
        Ok(UserActionResponse::logged_in(user))
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 정보 수정
    pub async fn update_user(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> AppResult<UserActionResponse> {
        let updated = self
            .user_repo
            .update(id, |current| request.apply_to(current))
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        log::info!("사용자 정보 수정 완료: id={}", updated.id);
        Ok(UserActionResponse::updated(updated))
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, id: i64) -> AppResult<MessageResponse> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        log::info!("사용자 삭제 완료: id={}", id);
        Ok(MessageResponse::new("User deleted successfully"))
    }

    /// 이메일 사용 가능 여부
    pub async fn check_email(&self, request: CheckEmailRequest) -> AppResult<AvailabilityResponse> {
        let email = request.normalized_email()?;
        let taken = self.user_repo.exists_by_email(&email).await?;
        Ok(AvailabilityResponse { available: !taken })
    }

    /// 사용자명 사용 가능 여부 (대소문자 구분)
    pub async fn check_username(
        &self,
        request: CheckUsernameRequest,
    ) -> AppResult<AvailabilityResponse> {
        let username = request.normalized_username()?;
        let taken = self.user_repo.exists_by_username(&username).await?;
        Ok(AvailabilityResponse { available: !taken })
    }
}
