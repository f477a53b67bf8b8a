//! Events and tasks side by side, with the task creation form and a quick way to create a todo from a task

use crate::client::HttpClient;
use crate::event::Event;
use crate::resource::ResourceId;
use crate::status::Status;
use crate::task::Task;
use crate::todo::TodoRequest;
use crate::utils::{format_time_span, parse_optional_timestamp, status_marker};
use crate::views::{state_line, track, AddTaskForm, ViewState};

pub const TODO_ADDED_NOTICE: &str = "Todo added successfully!";
pub const TODO_FAILED_NOTICE: &str = "Failed to add todo";

/// The small todo form opened from a task
#[derive(Clone, Debug, PartialEq)]
pub struct QuickTodoForm {
    task_id: ResourceId,
    pub status: Option<Status>,
    pub planned_start: String,
    pub planned_end: String,
}

impl QuickTodoForm {
    pub fn new(task_id: ResourceId) -> Self {
        Self { task_id, status: None, planned_start: String::new(), planned_end: String::new() }
    }

    pub fn task_id(&self) -> ResourceId { self.task_id }
}

#[derive(Debug)]
pub struct EventTaskView {
    client: HttpClient,
    events: Vec<Event>,
    events_state: ViewState,
    tasks: Vec<Task>,
    tasks_state: ViewState,
    pub add_task: AddTaskForm,
    quick_todo: Option<QuickTodoForm>,
    adding_todo: bool,
    notice: Option<String>,
}

impl EventTaskView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            events: Vec::new(),
            events_state: ViewState::Idle,
            tasks: Vec::new(),
            tasks_state: ViewState::Idle,
            add_task: AddTaskForm::new(),
            quick_todo: None,
            adding_todo: false,
            notice: None,
        }
    }

    pub fn events(&self) -> &[Event]        { &self.events       }
    pub fn tasks(&self) -> &[Task]          { &self.tasks        }
    pub fn events_state(&self) -> &ViewState { &self.events_state }
    pub fn tasks_state(&self) -> &ViewState  { &self.tasks_state  }
    pub fn is_adding_todo(&self) -> bool    { self.adding_todo   }
    /// The outcome of the last quick todo submission
    pub fn notice(&self) -> Option<&str>    { self.notice.as_deref() }
    pub fn quick_todo(&self) -> Option<&QuickTodoForm> { self.quick_todo.as_ref() }
    pub fn quick_todo_mut(&mut self) -> Option<&mut QuickTodoForm> { self.quick_todo.as_mut() }

    /// Fetch events and tasks concurrently. Each list succeeds or fails on its own
    pub async fn load(&mut self) {
        let events = self.client.events();
        let tasks = self.client.tasks();
        let events_state = &mut self.events_state;
        let tasks_state = &mut self.tasks_state;

        let (fetched_events, fetched_tasks) = tokio::join!(
            track(events_state, "Failed to load events", "Error fetching events", events.list()),
            track(tasks_state, "Failed to load tasks", "Error fetching tasks", tasks.list()),
        );

        if let Some(events) = fetched_events {
            self.events = events;
        }
        if let Some(tasks) = fetched_tasks {
            self.tasks = tasks;
        }
    }

    pub async fn fetch_events(&mut self) {
        let events = self.client.events();
        if let Some(events) = track(&mut self.events_state, "Failed to load events", "Error fetching events", events.list()).await {
            self.events = events;
        }
    }

    pub async fn fetch_tasks(&mut self) {
        let tasks = self.client.tasks();
        if let Some(tasks) = track(&mut self.tasks_state, "Failed to load tasks", "Error fetching tasks", tasks.list()).await {
            self.tasks = tasks;
        }
    }

    /// Send the task creation form, and fetch the tasks again if it was accepted
    pub async fn submit_new_task(&mut self) -> bool {
        match self.add_task.submit(&self.client).await {
            None => false,
            Some(_task) => {
                self.fetch_tasks().await;
                true
            },
        }
    }

    /// Open the quick todo form on a task, replacing any form that was open
    pub fn open_quick_todo(&mut self, task_id: ResourceId) {
        self.quick_todo = Some(QuickTodoForm::new(task_id));
    }

    pub fn cancel_quick_todo(&mut self) {
        self.quick_todo = None;
    }

    /// Create a todo from the open quick form.
    ///
    /// Nothing happens when no form is open or when no status was picked.
    /// On success the form is closed; either way, `notice()` tells how it went.
    pub async fn submit_quick_todo(&mut self) -> bool {
        let form = match &self.quick_todo {
            None => return false,
            Some(form) => form,
        };
        let status = match &form.status {
            None => return false,
            Some(status) => status.clone(),
        };

        let mut request = TodoRequest::new(form.task_id, status);
        let times = parse_optional_timestamp("Planned start", &form.planned_start)
            .and_then(|start| parse_optional_timestamp("Planned end", &form.planned_end).map(|end| (start, end)));
        match times {
            Ok((start, end)) => {
                request.planned_start = start;
                request.planned_end = end;
            },
            Err(message) => {
                self.notice = Some(message);
                return false;
            },
        }

        self.adding_todo = true;
        let result = self.client.todos().create(&request).await;
        self.adding_todo = false;

        match result {
            Ok(todo) => {
                log::info!("Created todo #{} for task #{}", todo.id(), todo.task_id());
                self.quick_todo = None;
                self.notice = Some(TODO_ADDED_NOTICE.to_string());
                true
            },
            Err(err) => {
                log::error!("Error adding todo: {}", err);
                self.notice = Some(TODO_FAILED_NOTICE.to_string());
                false
            },
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Events\n");
        if let Some(line) = state_line(&self.events_state, self.events.is_empty(), "events") {
            out.push_str(&format!("  {}\n", line));
        }
        for event in &self.events {
            out.push_str(&format!("  #{} {}\n", event.id(), event.title()));
            if event.description().is_empty() == false {
                out.push_str(&format!("      {}\n", event.description()));
            }
            if event.location().is_empty() == false {
                out.push_str(&format!("      Location: {}\n", event.location()));
            }
            out.push_str(&format!("      Priority: {}  Category: {}\n", event.priority(), event.category()));
        }

        out.push_str("\nTasks\n");
        if let Some(line) = state_line(&self.tasks_state, self.tasks.is_empty(), "tasks") {
            out.push_str(&format!("  {}\n", line));
        }
        for task in &self.tasks {
            out.push_str(&format!("  {} #{} {} [{}] (event #{})\n", status_marker(task.status()), task.id(), task.description(), task.status().label(), task.event_id()));
            out.push_str(&format!("      Planned: {}\n", format_time_span(task.planned_time())));
            if let Some(form) = self.quick_todo.as_ref().filter(|form| form.task_id == task.id()) {
                let status = form.status.as_ref().map(|s| s.label()).unwrap_or("Select Status");
                out.push_str(&format!("      New todo: {} {} - {}\n", status, form.planned_start, form.planned_end));
                if self.adding_todo {
                    out.push_str("      Adding...\n");
                }
            }
        }

        if let Some(notice) = &self.notice {
            out.push_str(&format!("\n{}\n", notice));
        }

        out.push('\n');
        out.push_str(&self.add_task.render());
        out
    }
}
