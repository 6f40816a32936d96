//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 디렉터리 DTO
//! │   ├── request/        # 가입, 로그인, 수정, 중복 확인
//! │   └── response/       # 공개 사용자 투영, 메시지 봉투
//! └── wellness/           # 웰니스 로그 DTO
//!     ├── request/        # 기분 기록, 자가진단 결과
//!     └── response/       # 저장 봉투, 최근 기록 목록
//! ```
//!
//! ## 요청 DTO 규칙
//!
//! 요청 본문의 모든 필드는 `Option`으로 역직렬화됩니다. 누락/빈 값 판정과
//! 정규화는 `into_*` 변환 메서드에서 수행되며, 결과는 검증된 입력 타입입니다.
//! 형식 규칙(최소 길이 등)은 `validator` derive로 표현합니다.
//!
//! ## 응답 DTO 규칙
//!
//! 엔티티에서 `From`으로 변환합니다. 사용자 응답에는 비밀번호 해시가 없습니다.

pub mod users;
pub mod wellness;
