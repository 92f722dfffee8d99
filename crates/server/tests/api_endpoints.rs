//! End-to-end tests for the HTTP routes
//!
//! Requests are driven through the full router with `tower::ServiceExt`,
//! so middleware, extractors and error mapping are all exercised.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{build_router, ServerConfig, ServerState};
use store::{
    InMemoryNotesRepository, InMemoryUserRepository, Repositories, StoreResult, User,
    UserRepository,
};

/// Records every id passed to `find_user_by_id`
#[derive(Default)]
struct SpyUserRepository {
    inner: InMemoryUserRepository,
    calls: Mutex<Vec<i64>>,
}

impl SpyUserRepository {
    fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

impl UserRepository for SpyUserRepository {
    fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        self.calls.lock().unwrap().push(id);
        self.inner.find_user_by_id(id)
    }
}

fn create_test_app() -> Router {
    let state = ServerState::new(ServerConfig::default());
    build_router(Arc::new(state))
}

fn create_spy_app() -> (Router, Arc<SpyUserRepository>) {
    let spy = Arc::new(SpyUserRepository::default());
    let repositories = Repositories {
        users: spy.clone(),
        notes: Arc::new(InMemoryNotesRepository::new()),
    };
    let state = ServerState::with_repositories(ServerConfig::default(), repositories);
    (build_router(Arc::new(state)), spy)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, Method::GET, uri, None).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, Some(body)).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send raw bytes, optionally with a content type, and parse the JSON reply
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let response = app
        .clone()
        .oneshot(builder.body(body.into()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// The body must be exactly `{ "error": "<message>" }`; returns the message
fn error_message(body: &Value) -> &str {
    let object = body.as_object().expect("error body is a JSON object");
    assert_eq!(object.len(), 1, "unexpected fields in {body}");
    object["error"].as_str().expect("error is a string")
}

#[tokio::test]
async fn root_returns_hello_world() {
    let app = create_test_app();
    let (status, bytes) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Hello World!");
}

#[tokio::test]
async fn existing_user_is_returned_as_json() {
    let (app, spy) = create_spy_app();

    let response = app
        .clone()
        .oneshot(Request::get("/about/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "id": 1, "name": "Alice" }));
    assert_eq!(spy.calls(), vec![1]);
}

#[tokio::test]
async fn unknown_user_is_404() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
    assert_eq!(spy.calls(), vec![999]);
}

#[tokio::test]
async fn non_numeric_id_is_400_without_lookup() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id format" }));
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn decimal_id_is_400_without_lookup() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id format" }));
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn zero_fraction_id_is_normalized_before_lookup() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/2.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "name": "Bob" }));
    assert_eq!(spy.calls(), vec![2]);
}

#[tokio::test]
async fn negative_id_is_looked_up_and_missing() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
    assert_eq!(spy.calls(), vec![-1]);
}

#[tokio::test]
async fn reverse_returns_original_and_reversed() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/reverse/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "original": "hello", "reversed": "olleh" }));
}

#[tokio::test]
async fn part_of_day_from_query() {
    let app = create_test_app();

    let cases = [
        ("7", "Daylight"),
        ("17", "Daylight"),
        ("18", "Night"),
        ("0", "Night"),
        ("24", "Undetermined"),
        ("-1", "Undetermined"),
        ("3.5", "Undetermined"),
        ("noon", "Undetermined"),
    ];
    for (hour, expected) in cases {
        let (status, body) = get_json(&app, &format!("/part-of-day?hour={hour}")).await;
        assert_eq!(status, StatusCode::OK, "hour {hour}");
        assert_eq!(body["part_of_day"], expected, "hour {hour}");
        assert_eq!(body["hour"], hour);
    }
}

#[tokio::test]
async fn part_of_day_without_hour_is_400() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/part-of-day").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing hour parameter" }));
}

#[tokio::test]
async fn part_of_day_body_is_type_strict() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::POST, "/part-of-day", json!({ "hour": 7 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hour": 7, "part_of_day": "Daylight" }));

    let (_, body) = send_json(&app, Method::POST, "/part-of-day", json!({ "hour": "7" })).await;
    assert_eq!(body["part_of_day"], "Undetermined");

    let (_, body) = send_json(&app, Method::POST, "/part-of-day", json!({})).await;
    assert_eq!(body["part_of_day"], "Undetermined");
}

#[tokio::test]
async fn configured_max_hour_is_honoured() {
    let mut config = ServerConfig::default();
    config.hours = config.hours.with_max_hour(24);
    let app = build_router(Arc::new(ServerState::new(config)));

    let (_, body) = get_json(&app, "/part-of-day?hour=24").await;
    assert_eq!(body["part_of_day"], "Night");
}

#[tokio::test]
async fn notes_lifecycle() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/notes",
        json!({ "title": "Test note", "content": "Content" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Test note");
    assert!(created.get("created_at").is_some());
    assert!(created.get("updated_at").is_some());

    let (status, fetched) = get_json(&app, "/notes/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/notes/1",
        json!({ "title": "Nota actualizada", "content": "Contenido actualizado" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Nota actualizada");
    assert_eq!(updated["content"], "Contenido actualizado");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, listed) = get_json(&app, "/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, bytes) = send(&app, Method::DELETE, "/notes/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, body) = get_json(&app, "/notes/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Note not found" }));
}

#[tokio::test]
async fn note_validation_errors_are_400() {
    let app = create_test_app();

    let (status, body) =
        send_json(&app, Method::POST, "/notes", json!({ "content": "no title" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title is required" }));

    send_json(&app, Method::POST, "/notes", json!({ "title": "Original" })).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/notes/1",
        json!({ "title": "", "content": "Contenido" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title cannot be empty" }));
}

#[tokio::test]
async fn note_ids_are_validated() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/notes/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id format" }));

    let (status, body) =
        send_json(&app, Method::PUT, "/notes/999", json!({ "title": "" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Note not found" }));

    let (status, _) = send(&app, Method::DELETE, "/notes/1.5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/does/not/exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn malformed_json_body_is_400_json() {
    let app = create_test_app();
    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/notes",
        Some("application/json"),
        "{not json",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Failed to parse the request body as JSON"));

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/part-of-day",
        Some("application/json"),
        "[",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Failed to parse the request body as JSON"));
}

#[tokio::test]
async fn missing_content_type_is_415_json() {
    let app = create_test_app();
    let (status, body) =
        send_raw(&app, Method::POST, "/notes", None, r#"{"title":"Hi"}"#).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        error_message(&body),
        "Expected request with `Content-Type: application/json`"
    );

    let (status, body) = send_raw(
        &app,
        Method::PUT,
        "/notes/1",
        Some("text/plain"),
        r#"{"title":"Hi"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    error_message(&body);
}

#[tokio::test]
async fn wrongly_typed_field_is_422_json() {
    let app = create_test_app();
    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/notes",
        Some("application/json"),
        r#"{"title":5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error_message(&body).starts_with("Failed to deserialize the JSON body"));

    let (status, body) = get_json(&app, "/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn invalid_utf8_path_segment_is_400_json() {
    let (app, spy) = create_spy_app();
    let (status, body) = get_json(&app, "/about/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid URL: Invalid UTF-8 in `id`");
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn oversized_body_is_413_json() {
    let mut config = ServerConfig::default();
    config.max_body_size_kb = 1;
    let app = build_router(Arc::new(ServerState::new(config)));

    let payload = json!({ "title": "x".repeat(4096) }).to_string();
    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/notes",
        Some("application/json"),
        payload,
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    error_message(&body);
}

#[tokio::test]
async fn metrics_render_prometheus_text_when_recorder_attached() {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = ServerState::new(ServerConfig::default()).with_metrics(handle);
    let app = build_router(Arc::new(state));

    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "{content_type}");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}

#[tokio::test]
async fn health_and_readiness() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["notes"], "ready");

    let (status, body) = get_json(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("uptime_seconds").is_some());
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
