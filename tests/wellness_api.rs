//! 웰니스 로그 API 통합 테스트

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

fn created_at(entry: &Value) -> DateTime<Utc> {
    entry["date_created"].as_str().unwrap().parse().unwrap()
}

#[actix_web::test]
async fn numeric_and_symbolic_moods_store_identically() {
    let app = init_app!();

    let (status, numeric) = send!(app, post "/api/mood", json!({"mood_level": 4, "notes": "sunny"}));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(numeric["message"], "Mood saved successfully");
    assert_eq!(numeric["mood"]["mood_level"], "happy");
    assert_eq!(numeric["mood"]["notes"], "sunny");

    let (status, symbolic) = send!(app, post "/api/mood", json!({"mood_level": "happy"}));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(symbolic["mood"]["mood_level"], numeric["mood"]["mood_level"]);
    assert_eq!(symbolic["mood"]["notes"], "");
}

#[actix_web::test]
async fn invalid_moods_are_rejected() {
    let app = init_app!();

    let (status, body) = send!(app, post "/api/mood", json!({"notes": "no level"}));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Mood level is required");

    let (status, body) = send!(app, post "/api/mood", json!({"mood_level": null}));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Mood level is required");

    for level in [json!(0), json!(6), json!(3.5), json!(false), json!("ecstatic"), json!({})] {
        let (status, body) = send!(app, post "/api/mood", json!({ "mood_level": level }));
        assert_eq!(status, StatusCode::BAD_REQUEST, "level {level}");
        assert_eq!(body["error"], "Invalid mood level");
    }

    let (_, moods) = send!(app, get "/api/mood");
    assert_eq!(moods, json!([]));
}

#[actix_web::test]
async fn recent_moods_are_newest_first_and_capped() {
    let app = init_app!();

    for i in 0..12 {
        let (status, _) = send!(
            app,
            post "/api/mood",
            json!({"mood_level": i % 5 + 1, "notes": format!("entry {i}")})
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, moods) = send!(app, get "/api/mood");
    assert_eq!(status, StatusCode::OK);

    let moods = moods.as_array().unwrap();
    assert_eq!(moods.len(), 10);
    assert_eq!(moods[0]["notes"], "entry 11");
    assert_eq!(moods[9]["notes"], "entry 2");

    for pair in moods.windows(2) {
        assert!(pair[0]["id"].as_i64().unwrap() > pair[1]["id"].as_i64().unwrap());
        assert!(created_at(&pair[0]) >= created_at(&pair[1]));
    }

    // entry 11 → 11 % 5 + 1 = 2
    assert_eq!(moods[0]["mood"], 2);
    assert_eq!(moods[0]["mood_level"], "sad");
    let date = moods[0]["date"].as_str().unwrap();
    assert_eq!(date.len(), 10);
    assert!(moods[0]["date_created"].as_str().unwrap().starts_with(date));
}

#[actix_web::test]
async fn test_results_accept_zero_score() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        post "/api/test-result",
        json!({"test_type": "stress", "score": 0, "result_category": "low"})
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Test result saved successfully");
    assert_eq!(body["result"]["test_type"], "stress");
    assert_eq!(body["result"]["score"], 0.0);
    assert_eq!(body["result"]["result_category"], "low");
    assert!(body["result"]["date_created"].is_string());
}

#[actix_web::test]
async fn test_results_require_all_fields() {
    let app = init_app!();

    for payload in [
        json!({"test_type": "stress", "score": 12}),
        json!({"test_type": "", "score": 12, "result_category": "moderate"}),
        json!({"test_type": "stress", "result_category": "moderate"}),
    ] {
        let (status, body) = send!(app, post "/api/test-result", payload);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "All fields are required");
    }

    let (status, results) = send!(app, get "/api/test-results");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!([]));
}

#[actix_web::test]
async fn recent_test_results_are_newest_first() {
    let app = init_app!();

    for (test_type, score) in [("stress", 5.0), ("anxiety", 11.5), ("sleep", 3.0)] {
        send!(
            app,
            post "/api/test-result",
            json!({"test_type": test_type, "score": score, "result_category": "moderate"})
        );
    }

    let (_, results) = send!(app, get "/api/test-results");
    let types: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|result| result["test_type"].as_str().unwrap())
        .collect();

    assert_eq!(types, vec!["sleep", "anxiety", "stress"]);
    assert_eq!(results[1]["score"], 11.5);
}

#[actix_web::test]
async fn register_then_log_mood_scenario() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        post "/api/register",
        json!({"username": "alice", "email": "alice@example.com", "password": "secret1"})
    );
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["user"]["id"].is_i64());
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = send!(
        app,
        post "/api/register",
        json!({"username": "alice", "email": "different@example.com", "password": "secret1"})
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    let (status, body) = send!(app, post "/api/mood", json!({"mood_level": 4}));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mood"]["mood_level"], "happy");
    let mood_id = body["mood"]["id"].clone();

    let (status, moods) = send!(app, get "/api/mood");
    assert_eq!(status, StatusCode::OK);
    let saved = moods
        .as_array()
        .unwrap()
        .iter()
        .find(|mood| mood["id"] == mood_id)
        .unwrap();
    assert_eq!(saved["mood"], 4);
}
