//! 프론트엔드 정적 파일 서빙 통합 테스트

#[macro_use]
mod common;

use std::fs;

use actix_web::http::StatusCode;
use actix_web::test;
use wellness_backend::config::FrontendConfig;
use wellness_backend::handlers::frontend::API_KEY_PLACEHOLDER;

fn frontend_with_assets(dir: &tempfile::TempDir) -> FrontendConfig {
    fs::write(
        dir.path().join("index.html"),
        format!("<html><script>{}</script></html>", API_KEY_PLACEHOLDER),
    )
    .unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("app.css"), "body { margin: 0; }").unwrap();

    FrontendConfig {
        static_dir: dir.path().to_path_buf(),
        api_key: "abc123".to_string(),
    }
}

#[actix_web::test]
async fn index_has_api_key_injected() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(frontend_with_assets(&dir));

    for uri in ["/", "/dashboard", "/assets"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("const API_KEY = 'abc123';"), "{uri}");
        assert!(!html.contains("window.API_KEY"), "{uri}");
    }
}

#[actix_web::test]
async fn existing_files_are_served_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(frontend_with_assets(&dir));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/assets/app.css").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
    assert_eq!(test::read_body(resp).await, "body { margin: 0; }");
}

#[actix_web::test]
async fn percent_encoded_file_names_are_served() {
    let dir = tempfile::tempdir().unwrap();
    let config = frontend_with_assets(&dir);
    fs::write(dir.path().join("my file.txt"), "FILE").unwrap();
    fs::write(dir.path().join("assets").join("문서.txt"), "KOREAN").unwrap();
    let app = init_app!(config);

    for (uri, expected) in [
        ("/my%20file.txt", "FILE"),
        ("/assets/%EB%AC%B8%EC%84%9C.txt", "KOREAN"),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(test::read_body(resp).await, expected, "{uri}");
    }
}

#[actix_web::test]
async fn traversal_and_unknown_api_paths_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(frontend_with_assets(&dir));

    for uri in ["/assets/../../secret", "/%2e%2e/secret", "/api/unknown"] {
        let (status, body) = send!(app, get uri);
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Not found");
    }
}

#[actix_web::test]
async fn missing_index_is_not_found() {
    let app = init_app!();

    let (status, body) = send!(app, get "/");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "index.html not found");
}
