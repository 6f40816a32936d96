//! 통합 테스트 공용 헬퍼
//!
//! 테스트마다 격리된 인메모리 저장소로 전체 앱을 구성합니다.

#![allow(dead_code)]

use std::path::PathBuf;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use wellness_backend::config::FrontendConfig;

/// 정적 파일이 없는 기본 프론트엔드 설정
pub fn frontend_without_assets() -> FrontendConfig {
    FrontendConfig {
        static_dir: PathBuf::from("target/no-such-static-dir"),
        api_key: "test-key".to_string(),
    }
}

/// 응답 상태와 JSON 본문
pub async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// 인메모리 저장소로 앱 서비스를 초기화합니다.
///
/// `init_app!()` 또는 `init_app!(frontend_config)`
#[macro_export]
macro_rules! init_app {
    () => {
        $crate::init_app!($crate::common::frontend_without_assets())
    };
    ($frontend:expr) => {{
        use std::sync::Arc;
        use actix_web::{middleware, test, web, App};
        use wellness_backend::db::Database;
        use wellness_backend::handlers::frontend::serve_frontend;
        use wellness_backend::repositories::{
            MoodRepository, TestResultRepository, UserRepository,
        };
        use wellness_backend::routes::configure_all_routes;
        use wellness_backend::services::{UserService, WellnessService};

        let database = Database::in_memory().await.unwrap();
        let user_service = web::Data::new(UserService::new(
            Arc::new(UserRepository::new(database.clone())),
            4,
        ));
        let wellness_service = web::Data::new(WellnessService::new(
            Arc::new(MoodRepository::new(database.clone())),
            Arc::new(TestResultRepository::new(database)),
        ));

        test::init_service(
            App::new()
                .wrap(middleware::NormalizePath::trim())
                .app_data(user_service)
                .app_data(wellness_service)
                .app_data(web::Data::new($frontend))
                .configure(configure_all_routes)
                .default_service(web::to(serve_frontend)),
        )
        .await
    }};
}

/// 요청을 보내고 `(StatusCode, Value)`를 돌려받습니다.
///
/// `send!(app, get "/api/users")`, `send!(app, post "/api/register", json!({...}))`
#[macro_export]
macro_rules! send {
    ($app:expr, get $uri:expr) => {
        $crate::common::json_body(
            actix_web::test::call_service(
                &$app,
                actix_web::test::TestRequest::get().uri($uri).to_request(),
            )
            .await,
        )
        .await
    };
    ($app:expr, delete $uri:expr) => {
        $crate::common::json_body(
            actix_web::test::call_service(
                &$app,
                actix_web::test::TestRequest::delete().uri($uri).to_request(),
            )
            .await,
        )
        .await
    };
    ($app:expr, post $uri:expr, $body:expr) => {
        $crate::common::json_body(
            actix_web::test::call_service(
                &$app,
                actix_web::test::TestRequest::post()
                    .uri($uri)
                    .set_json($body)
                    .to_request(),
            )
            .await,
        )
        .await
    };
    ($app:expr, put $uri:expr, $body:expr) => {
        $crate::common::json_body(
            actix_web::test::call_service(
                &$app,
                actix_web::test::TestRequest::put()
                    .uri($uri)
                    .set_json($body)
                    .to_request(),
            )
            .await,
        )
        .await
    };
}
