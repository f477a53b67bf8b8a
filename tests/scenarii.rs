//! Fixtures shared by the integration tests: sample records as the server sends them, and a client wired to a mock transport
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};

use brb_client::mock_transport::MockTransport;
use brb_client::{HttpClient, Settings};

pub const SERVER: &str = "http://brb.test:5050";

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A client whose requests are answered by the returned mock
pub fn mocked_client() -> (HttpClient, Arc<MockTransport>) {
    init_logs();
    let mock = Arc::new(MockTransport::new());
    let settings = Settings::new(SERVER).unwrap();
    let client = HttpClient::with_transport(settings, mock.clone());
    (client, mock)
}

pub fn event_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "isTemplate": false,
        "title": title,
        "description": "",
        "location": "Town hall",
        "priority": 3,
        "category": "work",
    })
}

pub fn task_json(id: u64, event_id: u64, description: &str) -> Value {
    json!({
        "id": id,
        "eventId": event_id,
        "parentTaskId": null,
        "preTaskIds": null,
        "description": description,
        "allowedTime": {"start": null, "end": null},
        "plannedTime": {"start": null, "end": null},
        "status": "pending",
        "createdAt": "2024-02-01T08:00:00Z",
    })
}

/// A todo planned to start at `planned_start` (e.g. `2024-02-15T09:30`), or with no planned time at all
pub fn todo_json(id: u64, task_id: u64, status: &str, planned_start: Option<&str>) -> Value {
    json!({
        "id": id,
        "eventId": null,
        "taskId": task_id,
        "status": status,
        "plannedTime": {"start": planned_start, "end": null},
        "actualTime": {"start": null, "end": null},
        "completedTime": null,
    })
}

pub fn sign_json(id: u64, signifier: &str, signified: &str) -> Value {
    json!({"id": id, "signifier": signifier, "signified": signified})
}
