//! Todos: execution records of a task
//!
//! A todo is created against a task. Its status moves freely (there is no enforced state machine),
//! and it may later be stamped with the time it was actually worked on and completed.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceId;
use crate::status::Status;
use crate::time_span::{TimeSpan, Timestamp};

/// A todo, as stored on the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: ResourceId,
    /// Only set when this todo differs from its task's event (e.g. a one-off location)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_id: Option<ResourceId>,
    task_id: ResourceId,
    status: Status,
    #[serde(default)]
    planned_time: TimeSpan,
    #[serde(default)]
    actual_time: TimeSpan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_time: Option<Timestamp>,
}

impl Todo {
    pub fn id(&self) -> ResourceId                      { self.id              }
    pub fn event_id(&self) -> Option<ResourceId>        { self.event_id        }
    pub fn task_id(&self) -> ResourceId                 { self.task_id         }
    pub fn status(&self) -> &Status                     { &self.status          }
    pub fn planned_time(&self) -> &TimeSpan             { &self.planned_time    }
    pub fn actual_time(&self) -> &TimeSpan              { &self.actual_time     }
    pub fn completed_time(&self) -> Option<&Timestamp>  { self.completed_time.as_ref() }

    /// The payload that would replace this todo with its current content
    pub fn to_request(&self) -> TodoRequest {
        TodoRequest {
            event_id: self.event_id,
            task_id: self.task_id,
            status: self.status.clone(),
            planned_start: self.planned_time.start,
            planned_end: self.planned_time.end,
            actual_start: self.actual_time.start,
            actual_end: self.actual_time.end,
        }
    }
}

/// The creatable and updatable fields of a [`Todo`]. Absent optional fields are left out of the JSON body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<ResourceId>,
    pub task_id: ResourceId,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end: Option<Timestamp>,
}

impl TodoRequest {
    pub fn new(task_id: ResourceId, status: Status) -> Self {
        Self {
            event_id: None,
            task_id,
            status,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
        }
    }
}
