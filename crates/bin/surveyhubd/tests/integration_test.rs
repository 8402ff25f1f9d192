//! End-to-end tests for the full surveyhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surveyhub_adapter_http_axum::router;
use surveyhub_adapter_http_axum::state::AppState;
use surveyhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteMentalHealthRepository, SqliteSocialMediaRepository,
};
use surveyhub_app::services::record_service::RecordService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
///
/// A single pooled connection keeps every request on the same in-memory
/// database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        RecordService::new(SqliteMentalHealthRepository::new(pool.clone())),
        RecordService::new(SqliteSocialMediaRepository::new(pool)),
    );

    router::build(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn mental_health(age: u8, sleep_issues: u8) -> Value {
    json!({
        "age": age,
        "gender": "Female",
        "relationship_status": "Single",
        "bothered_by_worries": 3,
        "difficulty_concentrating": 2,
        "comparison_feelings": 4,
        "feel_depressed": 1,
        "fluctuation_interest": 2,
        "sleep_issues": sleep_issues,
        "date": "2024-03-01"
    })
}

fn social_media(age: u8, gender: &str) -> Value {
    json!({
        "age": age,
        "gender": gender,
        "occupation_status": "University Student",
        "organization_affiliation": "University",
        "uses_social_media": "Yes",
        "platforms_used": "Instagram, YouTube",
        "daily_use_average": "Between 2 and 3 hours",
        "usage_without_purpose": 4,
        "distraction_when_busy": 3,
        "restless_without_social_media": 2,
        "easily_distracted": 4,
        "compare_with_successful_people": 3,
        "seek_validation": 2,
        "date": "2024-03-01"
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Health check and greetings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_greet_on_root() {
    let app = app().await;
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Mental Health and Social Media API"}));
}

// ---------------------------------------------------------------------------
// Mental health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_fetch_and_delete_mental_health_entry() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(25, 3)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["age"], 25);
    assert_eq!(created["sleep_issues"], 3);

    let uri = format!("/mental_health/{id}");
    let (status, fetched) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, removed) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, created);

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "An error occurred!");
    assert_eq!(body["path"], uri);
}

#[tokio::test]
async fn should_assign_distinct_ids_and_list_in_id_order() {
    let app = app().await;
    for age in [30, 20, 40] {
        let (status, _) = send(
            &app,
            json_request("POST", "/mental_health/", &mental_health(age, 2)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/mental_health/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn should_apply_partial_update() {
    let app = app().await;
    let (_, created) = send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(25, 3)),
    )
    .await;
    let uri = format!("/mental_health/{}", created["id"]);

    let (status, updated) = send(
        &app,
        json_request("PUT", &uri, &json!({"sleep_issues": 5, "gender": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["sleep_issues"], 5);
    assert_eq!(updated["gender"], "Female");
    assert_eq!(updated["age"], 25);

    let (_, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_keep_record_when_update_violates_bounds() {
    let app = app().await;
    let (_, created) = send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(25, 3)),
    )
    .await;
    let uri = format!("/mental_health/{}", created["id"]);

    let (status, _) = send(&app, json_request("PUT", &uri, &json!({"sleep_issues": 9}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_reject_out_of_range_age_without_persisting() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(5, 3)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "age must be between 10 and 100, got 5");

    let (_, listed) = send(&app, get("/mental_health/")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn should_sort_by_sleep_issues() {
    let app = app().await;
    for sleep_issues in [4, 1, 3] {
        send(
            &app,
            json_request("POST", "/mental_health/", &mental_health(25, sleep_issues)),
        )
        .await;
    }

    let (status, body) = send(&app, get("/mental_health/filter_by_sleep_issues/")).await;
    assert_eq!(status, StatusCode::OK);
    let levels: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["sleep_issues"].as_i64().unwrap())
        .collect();
    assert_eq!(levels, vec![1, 3, 4]);
}

#[tokio::test]
async fn should_search_mental_health_by_age() {
    let app = app().await;
    for age in [25, 30, 25] {
        send(
            &app,
            json_request("POST", "/mental_health/", &mental_health(age, 2)),
        )
        .await;
    }

    let (status, body) = send(&app, get("/mental_health/search_by_age/?age=25")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);

    let (status, body) = send(&app, get("/mental_health/search_by_age?age=99")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, get("/mental_health/search_by_age/?age=300")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_twice() {
    let app = app().await;
    let (_, created) = send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(25, 3)),
    )
    .await;
    let uri = format!("/mental_health/{}", created["id"]);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Social media
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_social_media_entry_without_affiliation() {
    let app = app().await;
    let mut payload = social_media(21, "Male");
    payload.as_object_mut().unwrap().remove("organization_affiliation");

    let (status, created) = send(&app, json_request("POST", "/social_media/", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["organization_affiliation"], Value::Null);

    let (status, fetched) = send(&app, get(&format!("/social_media/{}", created["id"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_reject_unknown_uses_social_media_answer() {
    let app = app().await;
    let mut payload = social_media(21, "Male");
    payload["uses_social_media"] = json!("Maybe");

    let (status, _) = send(&app, json_request("POST", "/social_media/", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = send(&app, get("/social_media/")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn should_search_gender_case_insensitively() {
    let app = app().await;
    for gender in ["Female", "Male", "female"] {
        send(
            &app,
            json_request("POST", "/social_media/", &social_media(21, gender)),
        )
        .await;
    }

    let (status, body) = send(&app, get("/social_media/search_by_gender/?gender=FEMALE")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);

    let (status, body) = send(&app, get("/social_media/search_by_gender/?gender=Other")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_sort_social_media_by_age() {
    let app = app().await;
    for age in [40, 18, 25] {
        send(
            &app,
            json_request("POST", "/social_media/", &social_media(age, "Male")),
        )
        .await;
    }

    let (status, body) = send(&app, get("/social_media/filter_by_age")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 3, 1]);
}

#[tokio::test]
async fn should_update_social_media_entry() {
    let app = app().await;
    let (_, created) = send(
        &app,
        json_request("POST", "/social_media/", &social_media(21, "Male")),
    )
    .await;
    let uri = format!("/social_media/{}", created["id"]);

    let (status, updated) = send(
        &app,
        json_request("PUT", &uri, &json!({"uses_social_media": "No", "seek_validation": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["uses_social_media"], "No");
    assert_eq!(updated["seek_validation"], 5);
    assert_eq!(updated["platforms_used"], "Instagram, YouTube");
}

#[tokio::test]
async fn should_keep_kinds_independent() {
    let app = app().await;
    send(
        &app,
        json_request("POST", "/mental_health/", &mental_health(25, 3)),
    )
    .await;

    let (status, body) = send(&app, get("/social_media/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "SocialMediaEntry 1 not found");
}
