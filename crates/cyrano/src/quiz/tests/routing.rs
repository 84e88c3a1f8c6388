use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::identity::USER_HEADER;
use crate::quiz::router::{AnswerRequest, QuestionsQuery};
use crate::quiz::QuizMode;
use crate::test_support::MemoryStore;

fn json_request(method: &str, uri: &str, user: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user);
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
        .expect("request builds")
}

fn empty_request(method: &str, uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user);
    }
    builder.body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn questions_handler_lists_the_quick_subset() {
    let response = crate::quiz::router::questions_handler(Query(QuestionsQuery {
        mode: Some("quick".to_string()),
        variant: None,
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["mode"], json!("quick"));
    let questions = payload["questions"].as_array().expect("question array");
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["options"][0]["choice"], json!("A"));
    assert!(questions[0].get("weights").is_none());
}

#[tokio::test]
async fn questions_handler_rejects_unknown_variants() {
    let response = crate::quiz::router::questions_handler(Query(QuestionsQuery {
        mode: None,
        variant: Some("enneagram".to_string()),
    }))
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn answer_handler_rejects_invalid_choices() {
    let service = service_with(store_with_user("user-1"));
    let started = service
        .start(&crate::accounts::UserId("user-1".to_string()), QuizMode::Full)
        .await
        .expect("session starts");

    let response = crate::quiz::router::answer_handler::<MemoryStore>(
        State(service),
        caller_headers("user-1"),
        Path(started.session_id.0.clone()),
        Json(AnswerRequest {
            question_id: 1,
            choice: "C".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].as_str().expect("message").contains("'C'"));
}

#[tokio::test]
async fn answer_handler_maps_out_of_order_to_conflict() {
    let service = service_with(store_with_user("user-1"));
    let started = service
        .start(&crate::accounts::UserId("user-1".to_string()), QuizMode::Full)
        .await
        .expect("session starts");

    let response = crate::quiz::router::answer_handler::<MemoryStore>(
        State(service),
        caller_headers("user-1"),
        Path(started.session_id.0.clone()),
        Json(AnswerRequest {
            question_id: 5,
            choice: "A".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn result_handler_returns_internal_error_when_storage_is_down() {
    let service = service_with(UnavailableStore);

    let response = crate::quiz::router::result_handler::<UnavailableStore>(
        State(service),
        caller_headers("user-1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn session_routes_require_a_caller() {
    let router = router_with(service_with(store_with_user("user-1")));

    let response = router
        .oneshot(json_request("POST", "/api/v1/quiz/sessions", None, json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn starting_without_an_account_is_not_found() {
    let service = service_with(store_with_user("user-1"));
    let router = router_with(service.clone());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/quiz/sessions",
            Some("never-signed-in"),
            json!({ "mode": "quick" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(service.active_sessions(), 0);
}

#[tokio::test]
async fn start_route_returns_internal_error_when_storage_is_down() {
    let router = router_with(service_with(UnavailableStore));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/quiz/sessions",
            Some("user-1"),
            json!({}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn full_quiz_over_http_saves_the_result() {
    let store = store_with_user("user-1");
    let router = router_with(service_with(store.clone()));

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/quiz/sessions",
            Some("user-1"),
            json!({ "mode": "full" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let started = read_json_body(response).await;
    let session_id = started["session_id"].as_str().expect("session id").to_string();
    assert_eq!(started["total"], json!(20));

    let mut last = Value::Null;
    for (index, letter) in CONTROLLING_LETTERS.chars().enumerate() {
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/quiz/sessions/{session_id}/answers"),
                Some("user-1"),
                json!({ "question_id": index + 1, "choice": letter.to_string() }),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        last = read_json_body(response).await;
    }

    assert_eq!(last["status"], json!("completed"));
    assert_eq!(last["saved"], json!(true));
    assert_eq!(last["result"]["primary"], json!("INTERROGATOR"));
    assert_eq!(last["result"]["secondary"], json!("LOGICIAN"));
    assert_eq!(last["result"]["scores"]["control"], json!(11));

    let response = router
        .oneshot(empty_request("GET", "/api/v1/quiz/result", Some("user-1")))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["has_completed_quiz"], json!(true));
    assert_eq!(payload["archetype"], json!("INTERROGATOR"));
    assert_eq!(store.user("user-1").and_then(|user| user.archetype).map(|id| id.as_str()), Some("INTERROGATOR"));
}

#[tokio::test]
async fn discard_route_removes_sessions_once() {
    let service = service_with(store_with_user("user-1"));
    let router = router_with(service.clone());
    let started = service
        .start(&crate::accounts::UserId("user-1".to_string()), QuizMode::Quick)
        .await
        .expect("session starts");
    let uri = format!("/api/v1/quiz/sessions/{}", started.session_id);

    let first = router
        .clone()
        .oneshot(empty_request("DELETE", &uri, Some("user-1")))
        .await
        .expect("route executes");
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = router
        .oneshot(empty_request("DELETE", &uri, Some("user-1")))
        .await
        .expect("route executes");
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn archetype_routes_serve_reference_profiles() {
    let router = router_with(service_with(MemoryStore::default()));

    let response = router
        .clone()
        .oneshot(empty_request("GET", "/api/v1/quiz/archetypes/GHOST", None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!("GHOST"));

    let missing = router
        .oneshot(empty_request("GET", "/api/v1/quiz/archetypes/WIZARD", None))
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mbti_route_classifies_stateless_answer_sets() {
    let router = router_with(service_with(MemoryStore::default()));
    let answers: serde_json::Map<String, Value> = (1..=16)
        .map(|id| (id.to_string(), json!(if id <= 4 { "B" } else { "A" })))
        .collect();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/quiz/mbti",
            None,
            json!({ "answers": answers }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["code"], json!("ISTJ"));
    assert_eq!(payload["scores"]["I"], json!(4));

    let unknown = router
        .oneshot(json_request(
            "POST",
            "/api/v1/quiz/mbti",
            None,
            json!({ "answers": { "42": "A" } }),
        ))
        .await
        .expect("route executes");
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
}
