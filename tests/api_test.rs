use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    middleware::from_fn,
    routing::get,
};
use chrono::{Duration, Local, NaiveDate};
use serde_json::{Value, json};
use tower::ServiceExt;

use orgzaar_api::gateway::{build_router, catch_panic_middleware, state::AppState};

/// Fixed "today" for boundary checks
fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn app() -> Router {
    build_router(Arc::new(AppState::new()))
}

fn pinned_app() -> Router {
    build_router(Arc::new(AppState::new().with_today(pinned_today)))
}

fn days_from_now(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_booking(app: Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

// ============================================================================
// Services
// ============================================================================

#[tokio::test]
async fn test_get_services_success() {
    let (status, body) = get_json(app(), "/api/v1/services").await;

    assert_eq!(status, StatusCode::OK);
    let services = body.as_array().expect("services should be an array");
    assert!(services.len() >= 3);
    for key in ["id", "name", "category", "price"] {
        assert!(services[0].get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn test_get_services_content() {
    let (_, body) = get_json(app(), "/api/v1/services").await;

    let dj = body
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == 1)
        .expect("service 1 should exist");
    assert_eq!(dj["name"], "DJ Hizmeti (2 Saat)");
    assert_eq!(dj["category"], "Müzik & Sanatçı");
    assert_eq!(dj["price"], 5000);
}

#[tokio::test]
async fn test_get_services_stable_order() {
    let (_, first) = get_json(app(), "/api/v1/services").await;
    let (_, second) = get_json(app(), "/api/v1/services").await;
    assert_eq!(first, second);

    let ids: Vec<u64> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// ============================================================================
// Bookings: accepted
// ============================================================================

#[tokio::test]
async fn test_create_booking_success() {
    let (status, body) = post_booking(
        app(),
        json!({
            "service_ids": [1, 3],
            "event_date": days_from_now(30),
            "notes": "Test booking"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Booking request received.");
    let id = body["booking_id"].as_u64().unwrap();
    assert!((1000..=9999).contains(&id));
}

#[tokio::test]
async fn test_create_booking_without_notes() {
    let (status, _) = post_booking(
        app(),
        json!({"service_ids": [2], "event_date": days_from_now(15)}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_booking_empty_service_ids() {
    let (status, _) = post_booking(
        app(),
        json!({"service_ids": [], "event_date": days_from_now(20)}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_booking_today_accepted() {
    let (status, _) = post_booking(
        pinned_app(),
        json!({"service_ids": [4], "event_date": "2026-10-18"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// Bookings: rejected
// ============================================================================

#[tokio::test]
async fn test_create_booking_missing_service_ids() {
    let (status, body) = post_booking(app(), json!({"event_date": days_from_now(10)})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data.");
    assert_eq!(body["details"]["service_ids"], "service_ids is required.");
}

#[tokio::test]
async fn test_create_booking_missing_event_date() {
    let (status, body) = post_booking(app(), json!({"service_ids": [1, 2]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["event_date"], "event_date is required.");
}

#[tokio::test]
async fn test_create_booking_both_missing_reports_service_ids_only() {
    let (status, body) = post_booking(app(), json!({"notes": "only notes"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_object().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details.contains_key("service_ids"));
}

#[tokio::test]
async fn test_create_booking_service_ids_not_a_list() {
    let (status, body) = post_booking(
        app(),
        json!({"service_ids": "1,2", "event_date": days_from_now(10)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["service_ids"], "service_ids must be a list.");
}

#[tokio::test]
async fn test_create_booking_invalid_date_format() {
    let (status, body) = post_booking(
        app(),
        json!({"service_ids": [1], "event_date": "24-12-2025"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["details"]["event_date"].as_str().unwrap();
    assert!(message.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_create_booking_past_date() {
    let (status, body) = post_booking(
        app(),
        json!({"service_ids": [1], "event_date": days_from_now(-1)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["details"]["event_date"].as_str().unwrap();
    assert!(message.to_lowercase().contains("future"));
}

#[tokio::test]
async fn test_create_booking_yesterday_with_pinned_clock() {
    let (status, body) = post_booking(
        pinned_app(),
        json!({"service_ids": [1], "event_date": "2026-10-17"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["event_date"].is_string());
}

#[tokio::test]
async fn test_create_booking_no_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/bookings")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid data.", "details": {"request": "No JSON payload sent."}})
    );
}

#[tokio::test]
async fn test_create_booking_broken_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"service_ids\": [1,"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["request"], "No JSON payload sent.");
}

#[tokio::test]
async fn test_create_booking_null_body() {
    let (status, body) = post_booking(app(), Value::Null).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["request"], "No JSON payload sent.");
}

#[tokio::test]
async fn test_create_booking_array_or_string_body() {
    for payload in [json!([1, 2, 3]), json!("hello")] {
        let (status, body) = post_booking(app(), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid data.");
        assert_eq!(
            body["details"],
            json!({"service_ids": "service_ids is required."})
        );
    }
}

#[tokio::test]
async fn test_create_booking_scalar_body() {
    for payload in [json!(42), json!(true)] {
        let (status, body) = post_booking(app(), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["request"], "No JSON payload sent.");
    }
}

#[tokio::test]
async fn test_create_booking_non_string_event_date() {
    for date in [json!(20301231), json!(null), json!(["2030-12-31"])] {
        let (status, body) =
            post_booking(app(), json!({"service_ids": [1], "event_date": date})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid data.", "details": {"request": "No JSON payload sent."}})
        );
    }
}

#[tokio::test]
async fn test_create_booking_non_string_event_date_hides_service_ids_error() {
    let (status, body) =
        post_booking(app(), json!({"service_ids": "1", "event_date": 7})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_object().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details.contains_key("request"));
}

// ============================================================================
// Index, fallback and fault handling
// ============================================================================

#[tokio::test]
async fn test_index() {
    let (status, body) = get_json(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["endpoints"]["services"], "/api/v1/services (GET)");
    assert_eq!(body["endpoints"]["bookings"], "/api/v1/bookings (POST)");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get_json(app(), "/api/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found.");
}

#[tokio::test]
async fn test_openapi_json_served() {
    let (status, body) = get_json(app(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/bookings").is_some());
}

async fn boom() -> StatusCode {
    panic!("boom")
}

#[tokio::test]
async fn test_panic_becomes_server_error() {
    let app = Router::new()
        .route("/boom", get(boom))
        .layer(from_fn(catch_panic_middleware));
    let (status, body) = get_json(app, "/boom").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Server error occurred."}));
}
