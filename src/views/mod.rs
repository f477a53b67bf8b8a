//! Views over the API: lists, forms and the month calendar
//!
//! Each view owns its own state (fetched records, drafts, loading and error flags) and its own [`HttpClient`].
//! Views never touch each other's state: a parent refreshes its lists after a child form reports success.
//! Failures are caught at the view boundary, logged, and turned into a fixed message.

use std::future::Future;

use crate::error::ApiError;

pub mod add_task_form;
pub mod add_todo_form;
pub mod event_task;
pub mod todo_calendar;
pub mod todo_editor;
pub mod todo_list;

pub use add_task_form::{AddTaskForm, TaskDraft};
pub use add_todo_form::AddTodoForm;
pub use event_task::{EventTaskView, QuickTodoForm};
pub use todo_calendar::TodoCalendarView;
pub use todo_editor::TodoEditor;
pub use todo_list::TodoListView;

/// What a view is currently doing
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    /// The last operation failed, with a message for the user
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Idle
    }
}

/// Run `operation` while `state` shows it as loading.
///
/// On failure, the error is logged with `context`, `state` holds `message`, and `None` is returned.
pub(crate) async fn track<T, F>(state: &mut ViewState, message: &str, context: &str, operation: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    *state = ViewState::Loading;
    match operation.await {
        Ok(value) => {
            *state = ViewState::Idle;
            Some(value)
        },
        Err(err) => {
            log::error!("{}: {}", context, err);
            *state = ViewState::Failed(message.to_string());
            None
        },
    }
}

/// Renders the state line of a list: a loading notice, an error, or an "empty" notice
pub(crate) fn state_line(state: &ViewState, is_empty: bool, what: &str) -> Option<String> {
    match state {
        ViewState::Loading => Some(format!("Loading {}...", what)),
        ViewState::Failed(message) => Some(format!("Error: {}", message)),
        ViewState::Idle if is_empty => Some(format!("No {} found", what)),
        ViewState::Idle => None,
    }
}
