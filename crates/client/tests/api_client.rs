// HTTP-level tests for the API client, run against a local mock server.

use std::sync::Arc;

use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docextract_client::{ApiClient, ApiConfig, ApiError};
use docextract_session::{MemoryStore, SessionStore};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 200, "message": "ok", "data": data })
}

async fn client_against(server: &MockServer, store: Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()), store).unwrap()
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_cached() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    store.set_token("tok-1");

    Mock::given(method("GET"))
        .and(path("/api/tasks/5"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "taskId": 5,
            "userId": 1,
            "taskName": "contracts"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, store).await;
    let response = client.task(5).await.unwrap();
    assert_eq!(response.data.unwrap().task_id, 5);
}

#[tokio::test]
async fn test_no_bearer_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    client.task_status(9).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_token_is_read_on_every_request() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;

    let client = client_against(&server, store.clone()).await;
    client.task_status(1).await.unwrap();

    // A token stored after construction is picked up by the next call
    store.set_token("late-token");
    client.task_status(1).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap(),
        "Bearer late-token"
    );
}

#[tokio::test]
async fn test_login_returns_the_body_exactly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "login ok",
            "data": {
                "user": { "userId": 7, "username": "alice", "email": "alice@example.com" }
            }
        })))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let response = client.login("alice", "secret").await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.message, "login ok");
    let data = response.data.unwrap();
    assert_eq!(data.user.user_id, 7);
    assert_eq!(data.user.username, "alice");
    assert!(data.token.is_none());

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "username": "alice", "password": "secret" }));
}

#[tokio::test]
async fn test_register_sends_form_urlencoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "userId": 8,
            "username": "bob"
        }))))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let response = client.register("bob", "pw", "bob@example.com").await.unwrap();
    assert_eq!(response.data.unwrap().user_id, 8);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("application/x-www-form-urlencoded"));
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("username=bob"));
    assert!(body.contains("email=bob%40example.com"));
}

#[tokio::test]
async fn test_failure_keeps_the_original_detail() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("task is still running"))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let err = client.delete_task(3).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "task is still running");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_tasks_pagination_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("userId", "7"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "content": [],
            "totalElements": 0,
            "totalPages": 0,
            "number": 0,
            "size": 10
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let response = client.tasks(7, None, None).await.unwrap();
    assert_eq!(response.data.unwrap().size, 10);
}

#[tokio::test]
async fn test_batch_task_details_encodes_the_task_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    client.batch_task_details(42, "Job #1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/api/tasks/batch/Job%20%231");
}

#[tokio::test]
async fn test_delete_batch_task() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/batch/nightly"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "deleted",
            "data": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let response = client.delete_batch_task(42, "nightly").await.unwrap();
    assert_eq!(response.code, 200);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_create_json_zip_sends_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/create-json-zip"))
        .and(query_param("taskName", "demo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!({ "zipPath": "/data/demo.zip" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    client.create_json_zip("demo").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_create_task_posts_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let form = reqwest::multipart::Form::new()
        .text("taskName", "contracts")
        .text("extractFields", "amount,date")
        .text("userId", "7")
        .part(
            "files",
            reqwest::multipart::Part::bytes(b"%PDF-1.4".to_vec()).file_name("a.pdf"),
        );
    client.create_task(form).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_stream_progress_yields_events() {
    let server = MockServer::start().await;

    let body = "data: {\"taskId\":1,\"stage\":\"OCR_PROCESSING\",\"progress\":40}\n\n\
                data: {\"taskId\":1,\"stage\":\"COMPLETED\",\"progress\":100}\n\n";
    Mock::given(method("GET"))
        .and(path("/api/tasks/1/progress/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let stream = client.stream_progress(1).await.unwrap();
    let updates: Vec<_> = stream.collect().await;

    assert_eq!(updates.len(), 2);
    let first = updates[0].as_ref().unwrap();
    assert_eq!(first.progress, 40);
    assert_eq!(first.stage.as_deref(), Some("OCR_PROCESSING"));
    let last = updates[1].as_ref().unwrap();
    assert_eq!(last.progress, 100);
}

#[tokio::test]
async fn test_stream_progress_rejection_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/2/progress/stream"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such task"))
        .mount(&server)
        .await;

    let client = client_against(&server, Arc::new(MemoryStore::new())).await;
    let Err(err) = client.stream_progress(2).await else {
        panic!("expected status error, got stream");
    };
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such task");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
