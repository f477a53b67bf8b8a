//! Form that creates a task

use crate::client::HttpClient;
use crate::status::Status;
use crate::task::{Task, TaskRequest};
use crate::utils::{parse_optional_id, parse_optional_timestamp};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Event ID and Description are required";
pub const FAILURE_MESSAGE: &str = "Failed to add task";

/// The uncommitted content of the form, as typed by the user
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub event_id: String,
    pub parent_task_id: String,
    pub description: String,
    pub allowed_start: String,
    pub allowed_end: String,
    pub planned_start: String,
    pub planned_end: String,
    pub status: Status,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            event_id: String::new(),
            parent_task_id: String::new(),
            description: String::new(),
            allowed_start: String::new(),
            allowed_end: String::new(),
            planned_start: String::new(),
            planned_end: String::new(),
            status: Status::Pending,
        }
    }
}

impl TaskDraft {
    /// Check the required fields and turn the draft into a request. Empty optional fields are left out
    pub fn to_request(&self) -> Result<TaskRequest, String> {
        if self.event_id.trim().is_empty() || self.description.trim().is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE.to_string());
        }

        let event_id = parse_optional_id("Event ID", &self.event_id)?
            .ok_or_else(|| REQUIRED_FIELDS_MESSAGE.to_string())?;

        let mut request = TaskRequest::new(event_id, self.description.trim());
        request.parent_task_id = parse_optional_id("Parent task ID", &self.parent_task_id)?;
        request.allowed_start = parse_optional_timestamp("Allowed start", &self.allowed_start)?;
        request.allowed_end = parse_optional_timestamp("Allowed end", &self.allowed_end)?;
        request.planned_start = parse_optional_timestamp("Planned start", &self.planned_start)?;
        request.planned_end = parse_optional_timestamp("Planned end", &self.planned_end)?;
        request.status = self.status.clone();
        Ok(request)
    }
}

/// "Add New Task"
#[derive(Clone, Debug, Default)]
pub struct AddTaskForm {
    pub draft: TaskDraft,
    submitting: bool,
    error: Option<String>,
}

impl AddTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool { self.submitting }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    /// Validate and send the draft.
    ///
    /// Returns the created task, in which case the draft is cleared and the caller should refresh its task list.
    /// Returns `None` if the draft is invalid (nothing is sent) or if the request failed; `error()` tells why.
    pub async fn submit(&mut self, client: &HttpClient) -> Option<Task> {
        let request = match self.draft.to_request() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message);
                return None;
            },
        };

        self.submitting = true;
        self.error = None;
        let result = client.tasks().create(&request).await;
        self.submitting = false;

        match result {
            Ok(task) => {
                log::info!("Created task #{}", task.id());
                self.draft = TaskDraft::default();
                Some(task)
            },
            Err(err) => {
                log::error!("Error adding task: {}", err);
                self.error = Some(FAILURE_MESSAGE.to_string());
                None
            },
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Add New Task\n");
        let d = &self.draft;
        out.push_str(&format!("  Event ID:       {}\n", d.event_id));
        out.push_str(&format!("  Parent task ID: {}\n", d.parent_task_id));
        out.push_str(&format!("  Description:    {}\n", d.description));
        out.push_str(&format!("  Status:         {}\n", d.status.label()));
        out.push_str(&format!("  Allowed:        {} - {}\n", d.allowed_start, d.allowed_end));
        out.push_str(&format!("  Planned:        {} - {}\n", d.planned_start, d.planned_end));
        if self.submitting {
            out.push_str("  Adding...\n");
        }
        if let Some(error) = &self.error {
            out.push_str(&format!("  Error: {}\n", error));
        }
        out
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        let mut draft = TaskDraft::default();
        assert_eq!(draft.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        draft.event_id = "4".to_string();
        assert_eq!(draft.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        draft.description = "   ".to_string();
        assert_eq!(draft.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        draft.description = "buy paint".to_string();
        let request = draft.to_request().unwrap();
        assert_eq!(request.event_id, 4);
        assert_eq!(request.status, Status::Pending);
        assert_eq!(request.parent_task_id, None);
        assert_eq!(request.planned_start, None);
    }

    #[test]
    fn invalid_fields() {
        let draft = TaskDraft {
            event_id: "four".to_string(),
            description: "buy paint".to_string(),
            ..TaskDraft::default()
        };
        assert!(draft.to_request().unwrap_err().contains("Event ID"));

        let draft = TaskDraft {
            event_id: "4".to_string(),
            description: "buy paint".to_string(),
            planned_end: "next week".to_string(),
            ..TaskDraft::default()
        };
        assert!(draft.to_request().unwrap_err().contains("Planned end"));
    }
}
