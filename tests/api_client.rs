mod scenarii;

use reqwest::Method;
use serde_json::json;

use brb_client::client::RequestOptions;
use brb_client::mock_transport::MockReply;
use brb_client::{ApiError, SignRequest, Status, TaskRequest, Todo, TodoRequest};

use scenarii::*;

#[tokio::test]
async fn list_todos() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/todos", MockReply::ok(&json!([
        todo_json(1, 10, "pending", Some("2024-02-15T09:30")),
        todo_json(2, 11, "completed", None),
    ])));

    let todos = client.todos().list().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].task_id(), 10);
    assert_eq!(todos[1].status(), &Status::Completed);

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url, format!("{}/api/todos", SERVER));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn empty_list_on_no_content() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/events", MockReply::no_content());

    let events = client.events().list().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn create_task_sends_minimal_body() {
    let (client, mock) = mocked_client();
    mock.on(Method::POST, "/api/tasks", MockReply::created(&task_json(12, 3, "write report")));

    let task = client.tasks().create(&TaskRequest::new(3, "write report")).await.unwrap();
    assert_eq!(task.id(), 12);

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, Method::POST);
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"eventId": 3, "description": "write report", "status": "pending"}));
}

#[tokio::test]
async fn update_and_delete_accept_no_content() {
    let (client, mock) = mocked_client();
    mock.on(Method::PUT, "/api/todos/4", MockReply::no_content())
        .on(Method::DELETE, "/api/todos/4", MockReply::no_content());

    let mut request = TodoRequest::new(9, Status::InProgress);
    request.actual_start = Some("2024-02-15T10:00".parse().unwrap());
    client.todos().update(4, &request).await.unwrap();

    let sent = mock.last_request().unwrap();
    assert_eq!(sent.method, Method::PUT);
    assert_eq!(sent.url, format!("{}/api/todos/4", SERVER));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"taskId": 9, "status": "in_progress", "actualStart": "2024-02-15T10:00"}));

    client.todos().delete(4).await.unwrap();
    assert_eq!(mock.last_request().unwrap().method, Method::DELETE);
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn errors_are_classified() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/todos/1", MockReply::status(500))
        .on(Method::GET, "/api/todos/2", MockReply::raw(200, "<html>oops</html>"))
        .on(Method::GET, "/api/todos/3", MockReply::unreachable())
        .on(Method::GET, "/api/todos/4", MockReply::no_content());

    let err = client.todos().get(1).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");

    let err = client.todos().get(2).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    let err = client.todos().get(3).await.unwrap_err();
    assert!(err.is_transport());

    // A record was expected
    let err = client.todos().get(4).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    // Unscripted routes answer 404
    let err = client.todos().get(5).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn signs() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/signs/7", MockReply::ok(&sign_json(7, "red light", "stop")))
        .on(Method::POST, "/api/signs", MockReply::created(&sign_json(8, "green light", "go")));

    let sign = client.signs().get(7).await.unwrap();
    assert_eq!(sign.signifier(), "red light");
    assert_eq!(sign.signified(), "stop");

    let created = client.signs().create(&SignRequest::new("green light", "go")).await.unwrap();
    assert_eq!(created.id(), 8);
    let body: serde_json::Value = serde_json::from_str(mock.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"signifier": "green light", "signified": "go"}));
}

#[tokio::test]
async fn raw_requests_with_params_and_headers() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/todos", MockReply::ok(&json!([])));

    let options = RequestOptions::new(Method::GET)
        .param("status", "pending")
        .optional_param("taskId", None::<u64>)
        .header("content-type", "text/plain")
        .header("X-Trace", "abc");
    let todos: Option<Vec<Todo>> = client.request("/todos", options).await.unwrap();
    assert_eq!(todos, Some(Vec::new()));

    let request = mock.last_request().unwrap();
    assert_eq!(request.url, format!("{}/api/todos?status=pending", SERVER));
    assert_eq!(request.header("Content-Type"), Some("text/plain"));
    assert_eq!(request.header("x-trace"), Some("abc"));
}
