//! # Wellness Backend
//!
//! 웰니스 트래킹 앱을 위한 REST 백엔드입니다.
//!
//! - **사용자 디렉터리**: 가입, 로그인, 조회, 수정, 삭제, 중복 확인
//! - **웰니스 로그**: 기분 기록과 자가진단 결과 저장, 최근 기록 조회
//! - **프론트엔드 서빙**: 정적 파일과 API 키가 주입된 `index.html`
//!
//! ## 계층 구조
//!
//! ```text
//! handlers  ──▶  services  ──▶  repositories  ──▶  db::Database (SQLite)
//!    │              │                │
//!    └── domain::dto └── domain::entities
//! ```
//!
//! 전역 싱글톤 없이 `main`에서 `Database` → 리포지토리 → 서비스 순으로 생성해
//! `web::Data`로 핸들러에 주입합니다.

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
