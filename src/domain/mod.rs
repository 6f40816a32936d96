//! # Domain Module
//!
//! 비즈니스 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 저장소 테이블과 1:1 대응되는 엔티티
//! └── dto/          ← 엔드포인트별 요청/응답 구조체
//! ```
//!
//! 엔티티는 저장소 행의 형태를 그대로 따르고, 외부로 나가는 모든 데이터는
//! DTO 투영(projection)을 거칩니다. 비밀번호 해시는 DTO에 존재하지 않습니다.

pub mod entities;
pub mod dto;
