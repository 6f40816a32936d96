use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use wellness_backend::config::{
    CorsConfig, Environment, FrontendConfig, PasswordConfig, ServerConfig,
};
use wellness_backend::db::Database;
use wellness_backend::handlers::frontend::serve_frontend;
use wellness_backend::repositories::{MoodRepository, TestResultRepository, UserRepository};
use wellness_backend::routes::configure_all_routes;
use wellness_backend::services::{UserService, WellnessService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 웰니스 백엔드 시작중... ({:?})", Environment::current());

    // 프론트엔드 설정 (production에서는 API 키 필수)
    let frontend = FrontendConfig::from_env().map_err(|e| {
        error!("❌ 설정 오류: {}", e);
        std::io::Error::other(e)
    })?;
    info!("📁 정적 파일 경로: {}", frontend.static_dir.display());

    // 저장소 초기화
    let database = initialize_database().await?;

    // 리포지토리 → 서비스 주입
    let user_service = web::Data::new(UserService::new(
        Arc::new(UserRepository::new(database.clone())),
        PasswordConfig::bcrypt_cost(),
    ));
    let wellness_service = web::Data::new(WellnessService::new(
        Arc::new(MoodRepository::new(database.clone())),
        Arc::new(TestResultRepository::new(database)),
    ));
    let frontend = web::Data::new(frontend);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/health", bind_address);

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(wellness_service.clone())
            .app_data(frontend.clone())
            // 라우트 설정
            .configure(configure_all_routes)
            .default_service(web::to(serve_frontend))
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    info!("Current profile: {}", if profile.is_empty() { "-" } else { &profile });

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            if dotenv().is_ok() {
                info!("기본 .env 파일 로드");
            }
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_database() -> std::io::Result<Database> {
    info!("📡 저장소 연결 중...");

    Database::new().await.map_err(|e| {
        error!("❌ 저장소 연결 실패: {}", e);
        std::io::Error::other(e)
    })
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default();

    // 허용할 Origin 설정
    if CorsConfig::allows_any_origin(allowed_origins) {
        cors = cors.allow_any_origin();
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    if allowed_origins.is_empty() {
        warn!("CORS_ALLOWED_ORIGINS가 비어 있어 교차 출처 요청이 모두 거부됩니다");
    }

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
