//! End-to-end route tests: build the real router over a throwaway database
//! and drive it with tower's `oneshot`, no socket involved.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use riverview_api::{AppStateInner, mail::Mailer, router};
use riverview_db::{Database, seed};

fn test_app() -> (Router, riverview_api::AppState) {
    let db = Database::open_in_memory().unwrap();
    seed::seed_rooms(&db).unwrap();

    let state: riverview_api::AppState = Arc::new(AppStateInner {
        db,
        mailer: Mailer::disabled(),
    });
    (router(state.clone()), state)
}

async fn send_json(app: Router, method: &str, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    do_send(app, request).await
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    do_send(app, request).await
}

async fn do_send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn lists_all_seeded_rooms() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/api/rooms").await;

    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0]["slug"], "premium-king");
    assert!(!rooms[0]["imageUrl"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn gets_room_by_slug() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/api/rooms/premium-king").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "premium-king");
    assert_eq!(body["name"], "Premium King Room");
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/api/rooms/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Room not found" }));
}

#[tokio::test]
async fn valid_booking_is_created_and_persisted() {
    let (app, state) = test_app();
    let before = chrono::Utc::now();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/bookings",
        json!({
            "name": "Jane Guest",
            "email": "jane@example.com",
            "phone": "+8801700000000",
            "checkIn": "2026-09-01T12:00:00Z",
            "checkOut": "2026-09-04T10:00:00Z",
            "adults": "2",
            "roomType": "Premium King Room"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Booking request received");

    let id = body["id"].as_i64().unwrap();
    let stored = state.db.booking_request_by_id(id).unwrap().unwrap();
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.adults, Some(2));
    assert!(stored.created_at >= before);
}

#[tokio::test]
async fn booking_missing_email_reports_the_field() {
    let (app, _) = test_app();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/bookings",
        json!({ "name": "Jane Guest", "phone": "+8801700000000" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid booking data");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "email"));
}

#[tokio::test]
async fn booking_with_negative_counts_is_rejected() {
    let (app, _) = test_app();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/bookings",
        json!({
            "name": "Jane Guest",
            "email": "jane@example.com",
            "phone": "+8801700000000",
            "adults": -3,
            "children": "-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "adults"));
    assert!(errors.iter().any(|e| e["field"] == "children"));
}

#[tokio::test]
async fn malformed_json_body_gets_the_validation_shape() {
    let (app, _) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = do_send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid booking data");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "body"));
}

#[tokio::test]
async fn contact_succeeds_with_mailer_disabled() {
    // Unset SMTP credentials must not change the HTTP outcome.
    let (app, _) = test_app();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/contact",
        json!({
            "name": "Jane Guest",
            "email": "jane@example.com",
            "phone": "+8801700000000",
            "subject": "Parking",
            "message": "Do you have parking?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Inquiry received");
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn invalid_inquiry_is_rejected_per_field() {
    let (app, _) = test_app();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/contact",
        json!({ "email": "jane@example.com", "message": 42 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "name"));
    assert!(errors.iter().any(|e| e["field"] == "message"));
}

#[tokio::test]
async fn two_bookings_get_distinct_ids() {
    let (app, _) = test_app();
    let payload = json!({
        "name": "Jane Guest",
        "email": "jane@example.com",
        "phone": "+8801700000000"
    });

    let (status_a, body_a) = send_json(app.clone(), "POST", "/api/bookings", payload.clone()).await;
    let (status_b, body_b) = send_json(app, "POST", "/api/bookings", payload).await;

    assert_eq!(status_a, StatusCode::CREATED);
    assert_eq!(status_b, StatusCode::CREATED);
    assert_ne!(body_a["id"], body_b["id"]);
}
