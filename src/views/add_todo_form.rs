//! Form that creates a todo from a known task

use crate::event::Event;
use crate::resource::ResourceId;
use crate::status::Status;
use crate::task::Task;
use crate::todo::TodoRequest;
use crate::utils::parse_optional_timestamp;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Task ID and Status are required";

/// "Add New Todo".
///
/// Task and event are picked among fetched records, so they are stored as ids rather than free text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddTodoForm {
    pub task_id: Option<ResourceId>,
    pub event_id: Option<ResourceId>,
    pub status: Option<Status>,
    pub planned_start: String,
    pub planned_end: String,
    error: Option<String>,
}

impl AddTodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Check the required fields and turn the draft into a request
    pub fn to_request(&self) -> Result<TodoRequest, String> {
        let (task_id, status) = match (self.task_id, &self.status) {
            (Some(task_id), Some(status)) => (task_id, status.clone()),
            _ => return Err(REQUIRED_FIELDS_MESSAGE.to_string()),
        };

        let mut request = TodoRequest::new(task_id, status);
        request.event_id = self.event_id;
        request.planned_start = parse_optional_timestamp("Planned start", &self.planned_start)?;
        request.planned_end = parse_optional_timestamp("Planned end", &self.planned_end)?;
        Ok(request)
    }

    /// Back to an empty draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn render(&self, tasks: &[Task], events: &[Event]) -> String {
        let mut out = String::from("Add New Todo\n");
        out.push_str(&format!("  Task:    {}\n", choice_label(self.task_id, &task_choices(tasks), "Select Task")));
        out.push_str(&format!("  Event:   {}\n", choice_label(self.event_id, &event_choices(events), "Select Event (Optional)")));
        out.push_str(&format!("  Status:  {}\n", self.status.as_ref().map(|s| s.label()).unwrap_or("Select Status")));
        out.push_str(&format!("  Planned: {} - {}\n", self.planned_start, self.planned_end));
        if let Some(error) = &self.error {
            out.push_str(&format!("  Error: {}\n", error));
        }
        out
    }
}

/// Options of the task picker
pub fn task_choices(tasks: &[Task]) -> Vec<(ResourceId, String)> {
    tasks.iter()
        .map(|task| (task.id(), format!("{} (ID: {})", task.description(), task.id())))
        .collect()
}

/// Options of the event picker
pub fn event_choices(events: &[Event]) -> Vec<(ResourceId, String)> {
    events.iter()
        .map(|event| (event.id(), format!("{} (ID: {})", event.title(), event.id())))
        .collect()
}

fn choice_label(selected: Option<ResourceId>, choices: &[(ResourceId, String)], placeholder: &str) -> String {
    match selected {
        None => placeholder.to_string(),
        Some(id) => choices.iter()
            .find(|(choice_id, _)| *choice_id == id)
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| format!("#{}", id)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_and_status_are_required() {
        let mut form = AddTodoForm::new();
        assert_eq!(form.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        form.task_id = Some(2);
        assert_eq!(form.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        form.task_id = None;
        form.status = Some(Status::Pending);
        assert_eq!(form.to_request().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        form.task_id = Some(2);
        form.planned_start = "2024-02-15T09:30".to_string();
        let request = form.to_request().unwrap();
        assert_eq!(request.task_id, 2);
        assert_eq!(request.event_id, None);
        assert!(request.planned_start.is_some());
        assert!(request.planned_end.is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = AddTodoForm {
            task_id: Some(1),
            status: Some(Status::Completed),
            planned_end: "2024-02-15T09:30".to_string(),
            ..AddTodoForm::default()
        };
        form.set_error("oops".to_string());
        form.reset();
        assert_eq!(form, AddTodoForm::default());
    }
}
