//! Tasks: units of work attached to an event
//!
//! Tasks can form a tree (through `parent_task_id`) and a dependency graph (through `pre_task_ids`).
//! Neither structure is checked for cycles here.

use serde::{Deserialize, Deserializer, Serialize};

use crate::resource::ResourceId;
use crate::status::Status;
use crate::time_span::{TimeSpan, Timestamp};

/// A task, as stored on the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: ResourceId,
    event_id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_task_id: Option<ResourceId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pre_task_ids: Vec<ResourceId>,
    description: String,
    /// When this task may be done
    #[serde(default)]
    allowed_time: TimeSpan,
    /// When this task is meant to be done
    #[serde(default)]
    planned_time: TimeSpan,
    status: Status,
    /// Set by the server
    created_at: Timestamp,
}

impl Task {
    pub fn id(&self) -> ResourceId                   { self.id             }
    pub fn event_id(&self) -> ResourceId             { self.event_id       }
    pub fn parent_task_id(&self) -> Option<ResourceId> { self.parent_task_id }
    pub fn pre_task_ids(&self) -> &[ResourceId]      { &self.pre_task_ids   }
    pub fn description(&self) -> &str                { &self.description    }
    pub fn allowed_time(&self) -> &TimeSpan          { &self.allowed_time   }
    pub fn planned_time(&self) -> &TimeSpan          { &self.planned_time   }
    pub fn status(&self) -> &Status                  { &self.status         }
    pub fn created_at(&self) -> &Timestamp           { &self.created_at     }

    /// The payload that would replace this task with its current content
    pub fn to_request(&self) -> TaskRequest {
        TaskRequest {
            event_id: self.event_id,
            parent_task_id: self.parent_task_id,
            pre_task_ids: self.pre_task_ids.clone(),
            description: self.description.clone(),
            allowed_start: self.allowed_time.start,
            allowed_end: self.allowed_time.end,
            planned_start: self.planned_time.start,
            planned_end: self.planned_time.end,
            status: self.status.clone(),
        }
    }
}

/// The creatable and updatable fields of a [`Task`].
///
/// Absent optional fields (and an empty `pre_task_ids`) are left out of the JSON body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub event_id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_task_ids: Vec<ResourceId>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_end: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<Timestamp>,
    pub status: Status,
}

impl TaskRequest {
    /// A pending task, with every optional field left out
    pub fn new<S: ToString>(event_id: ResourceId, description: S) -> Self {
        Self {
            event_id,
            parent_task_id: None,
            pre_task_ids: Vec::new(),
            description: description.to_string(),
            allowed_start: None,
            allowed_end: None,
            planned_start: None,
            planned_end: None,
            status: Status::default(),
        }
    }
}

/// The server may send `null` for an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ResourceId>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids: Option<Vec<ResourceId>> = Option::deserialize(deserializer)?;
    Ok(ids.unwrap_or_default())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_omits_optionals() {
        let request = TaskRequest::new(3, "write report");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({
            "eventId": 3,
            "description": "write report",
            "status": "pending",
        }));
    }

    #[test]
    fn record_with_null_lists() {
        let json = r#"{
            "id": 12, "eventId": 3, "parentTaskId": null, "preTaskIds": null,
            "description": "write report",
            "allowedTime": {"start": null, "end": null},
            "plannedTime": {"start": "2024-02-15T09:00:00Z", "end": null},
            "status": "in_progress",
            "createdAt": "2024-02-01T08:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id(), 12);
        assert_eq!(task.parent_task_id(), None);
        assert!(task.pre_task_ids().is_empty());
        assert!(task.allowed_time().is_empty());
        assert_eq!(task.status(), &Status::InProgress);

        let request = task.to_request();
        assert_eq!(request.planned_start, task.planned_time().start);
        assert_eq!(request.description, "write report");
    }

    #[test]
    fn dependencies_survive_round_trip() {
        let mut request = TaskRequest::new(1, "deploy");
        request.parent_task_id = Some(4);
        request.pre_task_ids = vec![2, 3];
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parentTaskId"], 4);
        assert_eq!(value["preTaskIds"], serde_json::json!([2, 3]));
    }
}
