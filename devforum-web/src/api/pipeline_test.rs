//! Request pipeline behaviour against a mock backend.
//!
//! Covers header assembly, body handling, response normalization, and the
//! no-retry failure policy.

use std::{rc::Rc, time::Duration};

use reqwest::{
    StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use super::{ApiError, FileUpload, ForumClient, RequestOptions};
use crate::{storage::MemoryStorage, token::TokenStore};

async fn setup(token: Option<&str>) -> (MockServer, ForumClient) {
    let server = MockServer::start().await;
    let tokens = TokenStore::with_default_key(Rc::new(MemoryStorage::new()));
    if let Some(token) = token {
        tokens.set(token);
    }
    let client = ForumClient::new(&format!("{}/api", server.uri()), tokens);
    (server, client)
}

async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one outgoing request");
    requests.remove(0)
}

#[tokio::test]
async fn test_bearer_token_attached_exactly_once() {
    let (server, client) = setup(Some("tok-123")).await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client
        .request_value("/users/me", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value["ok"], Value::Bool(true));

    let request = single_request(&server).await;
    assert_eq!(request.headers.get_all("authorization").iter().count(), 1);
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let (server, client) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client
        .request_value("/categories", RequestOptions::get())
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_anonymous_request_skips_stored_token() {
    let (server, client) = setup(Some("tok-123")).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client
        .request_value("/auth/login", RequestOptions::post().anonymous())
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_json_body_and_default_content_type() {
    let (server, client) = setup(None).await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"content": "hello"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client
        .request_value("/posts", RequestOptions::post().json(json!({"content": "hello"})))
        .await
        .unwrap();
    assert_eq!(value["id"], json!(1));
}

#[tokio::test]
async fn test_get_never_sends_a_body() {
    let (server, client) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/threads/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client
        .request_value("/threads/1", RequestOptions::get().json(json!({"ignored": true})))
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_caller_headers_override_default() {
    let (server, client) = setup(None).await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/merge-patch+json"));
    headers.insert("x-request-source", HeaderValue::from_static("tests"));
    client
        .request_value(
            "/posts/1",
            RequestOptions::put().headers(headers).json(json!({"content": "x"})),
        )
        .await
        .unwrap();

    let request = single_request(&server).await;
    let content_types: Vec<_> = request.headers.get_all("content-type").iter().collect();
    assert_eq!(content_types, vec!["application/merge-patch+json"]);
    assert_eq!(request.headers.get("x-request-source").unwrap(), "tests");
}

#[tokio::test]
async fn test_multipart_upload_lets_transport_set_boundary() {
    let (server, client) = setup(Some("tok-123")).await;
    Mock::given(method("POST"))
        .and(path("/api/files"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "user_id": "3b241101-e2bb-4255-8caf-4136c566a962",
            "filename": "stored.txt",
            "original_filename": "notes.txt",
            "file_type": "text/plain",
            "file_size": 5,
            "created_at": "2024-03-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let upload = FileUpload::new("notes.txt", b"hello".to_vec()).with_mime_type("text/plain");
    let record = client.upload_file(upload).await.unwrap();
    assert_eq!(record.original_filename, "notes.txt");

    let request = single_request(&server).await;
    let content_types: Vec<_> = request.headers.get_all("content-type").iter().collect();
    assert_eq!(content_types.len(), 1);
    assert!(
        content_types[0]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );
    assert_eq!(request.headers.get("authorization").unwrap(), "Bearer tok-123");
    assert!(String::from_utf8_lossy(&request.body).contains("hello"));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_locally() {
    let (server, client) = setup(None).await;
    let client = client.with_max_upload_size(4);

    let err = client
        .upload_file(FileUpload::new("big.bin", vec![0; 5]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::PayloadTooLarge { size: 5, limit: 4 }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_message_from_json_body() {
    let (server, client) = setup(None).await;
    Mock::given(method("POST"))
        .and(path("/api/threads"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"status": "bad_request", "message": "bad input"})),
        )
        .mount(&server)
        .await;

    let err = client
        .request_value("/threads", RequestOptions::post().json(json!({})))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "bad input");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_unparsable_error_body_uses_generic_message() {
    let (server, client) = setup(None).await;
    Mock::given(method("POST"))
        .and(path("/api/threads"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<h1>Bad Request</h1>"))
        .mount(&server)
        .await;

    let err = client
        .request_value("/threads", RequestOptions::post().json(json!({})))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "request failed with status 400");
}

#[tokio::test]
async fn test_failed_request_is_not_retried() {
    let (server, client) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .request_value("/streams", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "request failed with status 503");
    server.verify().await;
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let (server, client) = setup(None).await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = client
        .request_value("/posts/7", RequestOptions::delete())
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_unparsable_success_body_is_empty_object() {
    let (server, client) = setup(None).await;
    Mock::given(method("POST"))
        .and(path("/api/streams/7/start"))
        .respond_with(ResponseTemplate::new(200).set_body_string("started"))
        .mount(&server)
        .await;

    let value = client
        .request_value("/streams/7/start", RequestOptions::post())
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let (server, client) = setup(Some("tok")).await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_transport_failure_surfaces_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let tokens = TokenStore::with_default_key(Rc::new(MemoryStorage::new()));
    let client = ForumClient::new(&format!("http://127.0.0.1:{port}/api"), tokens);

    let err = client
        .request_value("/categories", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_request_timeout_cancels_slow_call() {
    let (server, client) = setup(None).await;
    Mock::given(method("GET"))
        .and(path("/api/streams/active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client
        .request_value(
            "/streams/active",
            RequestOptions::get().timeout(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();
    match err {
        ApiError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_default_timeout_applies() {
    let (server, client) = setup(None).await;
    let client = client.with_default_timeout(Some(Duration::from_millis(100)));
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.list_files().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(ref inner) if inner.is_timeout()));
}
