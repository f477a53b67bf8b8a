//! Inline editor of a single todo

use crate::resource::ResourceId;
use crate::status::Status;
use crate::time_span::Timestamp;
use crate::todo::{Todo, TodoRequest};
use crate::utils::{parse_optional_id, parse_optional_timestamp};

/// Editable copy of a todo.
///
/// Saving it replaces the whole todo on the server, so every field is carried, even those that are not edited.
#[derive(Clone, Debug, PartialEq)]
pub struct TodoEditor {
    todo_id: ResourceId,
    task_id: ResourceId,
    pub event_id: String,
    pub status: Status,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: String,
    pub actual_end: String,
    error: Option<String>,
}

impl TodoEditor {
    pub fn new(todo: &Todo) -> Self {
        Self {
            todo_id: todo.id(),
            task_id: todo.task_id(),
            event_id: todo.event_id().map(|id| id.to_string()).unwrap_or_default(),
            status: todo.status().clone(),
            planned_start: field(todo.planned_time().start),
            planned_end: field(todo.planned_time().end),
            actual_start: field(todo.actual_time().start),
            actual_end: field(todo.actual_time().end),
            error: None,
        }
    }

    pub fn todo_id(&self) -> ResourceId { self.todo_id }
    pub fn task_id(&self) -> ResourceId { self.task_id }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn to_request(&self) -> Result<TodoRequest, String> {
        let mut request = TodoRequest::new(self.task_id, self.status.clone());
        request.event_id = parse_optional_id("Event ID", &self.event_id)?;
        request.planned_start = parse_optional_timestamp("Planned start", &self.planned_start)?;
        request.planned_end = parse_optional_timestamp("Planned end", &self.planned_end)?;
        request.actual_start = parse_optional_timestamp("Actual start", &self.actual_start)?;
        request.actual_end = parse_optional_timestamp("Actual end", &self.actual_end)?;
        Ok(request)
    }

    pub fn render(&self) -> String {
        let mut out = format!("Editing todo #{} (task #{})\n", self.todo_id, self.task_id);
        out.push_str(&format!("  Event ID: {}\n", self.event_id));
        out.push_str(&format!("  Status:   {}\n", self.status.label()));
        out.push_str(&format!("  Planned:  {} - {}\n", self.planned_start, self.planned_end));
        out.push_str(&format!("  Actual:   {} - {}\n", self.actual_start, self.actual_end));
        if let Some(error) = &self.error {
            out.push_str(&format!("  Error: {}\n", error));
        }
        out
    }
}

fn field(timestamp: Option<Timestamp>) -> String {
    timestamp.map(|ts| ts.to_string()).unwrap_or_default()
}
