//! Database Connection Management Module
//!
//! 관계형 저장소(SQLite) 연결을 관리하는 모듈입니다.
//! 커넥션 풀 생성, 데이터베이스 파일 디렉터리 준비, 테이블 부트스트랩을 담당합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # 파일 기반 저장소
//! export DATABASE_URL="sqlite://database/app.db"
//!
//! # 인메모리 저장소 (프로세스 종료 시 소멸)
//! export DATABASE_URL="sqlite::memory:"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new().await?;
//! let users = UserRepository::new(database.clone());
//! ```
//!
//! `Database`는 전역 싱글톤이 아니라 값으로 전달되는 저장소 컨텍스트입니다.
//! 테스트는 [`Database::in_memory`]로 테스트마다 격리된 저장소를 만듭니다.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use crate::config::DatabaseConfig;

/// 테이블 생성 구문
///
/// `users.username` / `users.email`의 UNIQUE 제약이 중복 방지의 최종 방어선입니다.
const SCHEMA: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      TEXT    NOT NULL UNIQUE,
        email         TEXT    NOT NULL UNIQUE,
        password_hash TEXT    NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS moods (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        mood_level   TEXT    NOT NULL,
        notes        TEXT    NOT NULL DEFAULT '',
        date_created TEXT    NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS test_results (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        test_type       TEXT    NOT NULL,
        score           REAL    NOT NULL,
        result_category TEXT    NOT NULL,
        date_created    TEXT    NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_moods_date_created ON moods (date_created DESC)",
    "CREATE INDEX IF NOT EXISTS idx_test_results_date_created ON test_results (date_created DESC)",
];

/// 쓰기 잠금 대기 시간. 동시 쓰기 트랜잭션은 이 시간 안에서 순서대로 실행됩니다.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// 관계형 저장소 연결 래퍼
///
/// 커넥션 풀을 감싸며, 리포지토리 계층에서 쿼리와 트랜잭션의 시작점으로 사용됩니다.
/// `Clone`은 풀 핸들만 복제합니다.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 환경 변수 설정으로 저장소에 연결합니다.
    ///
    /// ## 환경 변수
    /// - `DATABASE_URL`: 연결 URL (기본값: `sqlite://database/app.db`)
    /// - `DATABASE_MAX_CONNECTIONS`: 풀 크기 (기본값: 5)
    pub async fn new() -> Result<Self, sqlx::Error> {
        Self::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await
    }

    /// 주어진 URL로 연결하고 테이블을 준비합니다.
    ///
    /// 파일 저장소의 상위 디렉터리가 없으면 생성합니다.
    /// 인메모리 URL은 [`Database::in_memory`]와 동일하게 단일 연결로 고정됩니다.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        if url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        ensure_parent_dir(options.get_filename())?;

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.create_tables().await?;

        info!("✅ 저장소 연결 성공: {}", url);
        Ok(database)
    }

    /// 테이블이 준비된 격리 인메모리 저장소를 생성합니다.
    ///
    /// 연결이 닫히면 데이터가 사라지므로 단일 연결을 만료 없이 유지합니다.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.create_tables().await?;

        Ok(database)
    }

    /// 커넥션 풀
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 쓰기 잠금을 먼저 잡는 트랜잭션을 시작합니다 (`BEGIN IMMEDIATE`).
    ///
    /// 읽은 뒤 쓰는 트랜잭션에 사용합니다. 지연 트랜잭션은 읽기 후 쓰기 잠금으로
    /// 올라갈 때 다른 쓰기와 부딪히면 대기 없이 `database is locked`로 실패합니다.
    pub async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }

    async fn create_tables(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), sqlx::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)
        }
        _ => Ok(()),
    }
}
