use super::*;
use crate::config::{DEFAULT_TABLE, StoreTimeouts};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::any;
use records::Role;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// =========================================================================
// Fake REST endpoint
// =========================================================================

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: Method,
    query: Option<String>,
    apikey: Option<String>,
    authorization: Option<String>,
    prefer: Option<String>,
    body: String,
}

#[derive(Clone)]
struct Fake {
    status: StatusCode,
    response: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn handle(State(fake): State<Fake>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, String) {
    fake.captured
        .lock()
        .unwrap()
        .push(CapturedRequest {
            method,
            query: uri.query().map(str::to_owned),
            apikey: header(&headers, "apikey"),
            authorization: header(&headers, "authorization"),
            prefer: header(&headers, "prefer"),
            body,
        });
    (fake.status, fake.response.clone())
}

async fn spawn_fake(status: StatusCode, response: &str) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let fake = Fake { status, response: response.to_owned(), captured: captured.clone() };
    let app = Router::new()
        .route("/rest/v1/messages", any(handle))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), captured)
}

fn config(url: &str, api_key: Option<&str>) -> StoreConfig {
    StoreConfig {
        url: url.to_owned(),
        api_key: api_key.map(str::to_owned),
        table: DEFAULT_TABLE.to_owned(),
        timeouts: StoreTimeouts::default(),
    }
}

// =========================================================================
// Pure helpers
// =========================================================================

#[test]
fn table_endpoint_joins_rest_path() {
    assert_eq!(table_endpoint("https://p.example.co", "messages"), "https://p.example.co/rest/v1/messages");
    assert_eq!(table_endpoint("https://p.example.co/", "messages"), "https://p.example.co/rest/v1/messages");
}

#[test]
fn parse_rows_reads_array() {
    let rows = parse_rows(r#"[{"id":1,"content":"Hi","role":"user"},{"id":2,"content":null,"role":"assistant"}]"#).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].content.as_deref(), Some("Hi"));
    assert_eq!(rows[1].role, Role::Assistant);
}

#[test]
fn parse_rows_rejects_invalid_json() {
    assert!(matches!(parse_rows("not json"), Err(StoreError::Decode(_))));
}

#[test]
fn parse_rows_rejects_unknown_role() {
    assert!(matches!(parse_rows(r#"[{"content":"x","role":"system"}]"#), Err(StoreError::Decode(_))));
}

#[test]
fn first_inserted_empty_is_error() {
    assert!(matches!(first_inserted(Vec::new()), Err(StoreError::EmptyInsert)));
}

// =========================================================================
// Against the fake endpoint
// =========================================================================

#[tokio::test]
async fn insert_posts_single_row_with_auth_headers() {
    let row = json!([{ "id": 1, "created_at": "2025-01-01T00:00:00+00:00", "content": "Hello", "role": "user" }]);
    let (url, captured) = spawn_fake(StatusCode::CREATED, &row.to_string()).await;
    let store = RestStore::new(&config(&url, Some("anon"))).unwrap();
    assert!(store.is_authenticated());

    let record = store
        .insert(&NewMessage::new("Hello", Role::User))
        .await
        .unwrap();
    assert_eq!(record.id, Some(1));
    assert_eq!(record.content.as_deref(), Some("Hello"));

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.apikey.as_deref(), Some("anon"));
    assert_eq!(req.authorization.as_deref(), Some("Bearer anon"));
    assert_eq!(req.prefer.as_deref(), Some("return=representation"));
    let body: Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body, json!([{ "content": "Hello", "role": "user" }]));
}

#[tokio::test]
async fn fetch_all_selects_every_column() {
    let rows = json!([
        { "id": 1, "content": "Hi", "role": "user" },
        { "id": 2, "content": "Hello there", "role": "assistant" }
    ]);
    let (url, captured) = spawn_fake(StatusCode::OK, &rows.to_string()).await;
    let store = RestStore::new(&config(&url, Some("anon"))).unwrap();

    let records = store.fetch_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].content.as_deref(), Some("Hello there"));

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].query.as_deref(), Some("select=*"));
}

#[tokio::test]
async fn unauthenticated_requests_omit_key_headers() {
    let (url, captured) = spawn_fake(StatusCode::UNAUTHORIZED, r#"{"message":"No API key found"}"#).await;
    let store = RestStore::new(&config(&url, None)).unwrap();
    assert!(!store.is_authenticated());

    let err = store
        .insert(&NewMessage::new("Hello", Role::User))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Response { status: 401, ref body } if body.contains("No API key")));

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests[0].apikey, None);
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn insert_with_empty_representation_is_error() {
    let (url, _captured) = spawn_fake(StatusCode::CREATED, "[]").await;
    let store = RestStore::new(&config(&url, Some("anon"))).unwrap();
    let err = store
        .insert(&NewMessage::new("Hello", Role::User))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptyInsert));
}

#[tokio::test]
async fn unreachable_store_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = RestStore::new(&config(&format!("http://{addr}"), None)).unwrap();
    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Request(_)));
    assert!(err.retryable());
}
