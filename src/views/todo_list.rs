//! The todo management page: every todo, with its task and event resolved, plus the creation form and inline editing

use crate::client::HttpClient;
use crate::event::Event;
use crate::resource::ResourceId;
use crate::task::Task;
use crate::todo::Todo;
use crate::traits::Confirm;
use crate::utils::{format_time_span, format_timestamp, status_marker};
use crate::views::{state_line, track, AddTodoForm, TodoEditor, ViewState};

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this todo?";

#[derive(Debug)]
pub struct TodoListView {
    client: HttpClient,
    todos: Vec<Todo>,
    tasks: Vec<Task>,
    events: Vec<Event>,
    state: ViewState,
    adding: bool,
    updating: bool,
    pub add_form: AddTodoForm,
    editor: Option<TodoEditor>,
}

impl TodoListView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            tasks: Vec::new(),
            events: Vec::new(),
            state: ViewState::Idle,
            adding: false,
            updating: false,
            add_form: AddTodoForm::new(),
            editor: None,
        }
    }

    pub fn todos(&self) -> &[Todo]   { &self.todos  }
    pub fn tasks(&self) -> &[Task]   { &self.tasks  }
    pub fn events(&self) -> &[Event] { &self.events }
    pub fn state(&self) -> &ViewState { &self.state }
    pub fn is_adding(&self) -> bool  { self.adding  }
    pub fn is_updating(&self) -> bool { self.updating }
    pub fn editor(&self) -> Option<&TodoEditor> { self.editor.as_ref() }
    pub fn editor_mut(&mut self) -> Option<&mut TodoEditor> { self.editor.as_mut() }

    /// Fetch todos, tasks and events concurrently.
    ///
    /// This is all-or-nothing: if any of the three requests fails, none of the lists is changed.
    pub async fn load(&mut self) {
        let todos = self.client.todos();
        let tasks = self.client.tasks();
        let events = self.client.events();

        let fetched = track(
            &mut self.state,
            "Failed to load data",
            "Error fetching data",
            async { tokio::try_join!(todos.list(), tasks.list(), events.list()) },
        ).await;

        if let Some((todos, tasks, events)) = fetched {
            log::debug!("Loaded {} todos, {} tasks, {} events", todos.len(), tasks.len(), events.len());
            self.todos = todos;
            self.tasks = tasks;
            self.events = events;
        }
    }

    /// Fetch the todos again, leaving tasks and events alone
    pub async fn refresh_todos(&mut self) {
        let todos = self.client.todos();
        if let Some(todos) = track(&mut self.state, "Failed to load todos", "Error fetching todos", todos.list()).await {
            self.todos = todos;
        }
    }

    /// Send the creation form.
    ///
    /// An incomplete form sends nothing and sets the form error. On success, the form is cleared and the todos are fetched again.
    pub async fn submit_new_todo(&mut self) -> bool {
        let request = match self.add_form.to_request() {
            Ok(request) => {
                self.add_form.clear_error();
                request
            },
            Err(message) => {
                self.add_form.set_error(message);
                return false;
            },
        };

        self.adding = true;
        let todos = self.client.todos();
        let created = track(&mut self.state, "Failed to add todo", "Error adding todo", todos.create(&request)).await;
        self.adding = false;

        match created {
            None => false,
            Some(todo) => {
                log::info!("Created todo #{}", todo.id());
                self.add_form.reset();
                self.refresh_todos().await;
                true
            },
        }
    }

    /// Delete a todo, once `confirm` has agreed to it. Nothing is sent if it does not
    pub async fn delete_todo(&mut self, id: ResourceId, confirm: &dyn Confirm) -> bool {
        if confirm.confirm(DELETE_QUESTION) == false {
            log::debug!("Deletion of todo #{} cancelled", id);
            return false;
        }

        let todos = self.client.todos();
        match track(&mut self.state, "Failed to delete todo", "Error deleting todo", todos.delete(id)).await {
            None => false,
            Some(()) => {
                log::info!("Deleted todo #{}", id);
                self.refresh_todos().await;
                true
            },
        }
    }

    /// Open the inline editor on a todo. Returns `false` if this todo is not in the list
    pub fn start_edit(&mut self, id: ResourceId) -> bool {
        match self.todos.iter().find(|todo| todo.id() == id) {
            None => false,
            Some(todo) => {
                self.editor = Some(TodoEditor::new(todo));
                true
            },
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Replace the edited todo on the server. The editor is closed on success, and stays open otherwise
    pub async fn save_edit(&mut self) -> bool {
        let editor = match self.editor.as_mut() {
            None => return false,
            Some(editor) => editor,
        };
        let request = match editor.to_request() {
            Ok(request) => {
                editor.clear_error();
                request
            },
            Err(message) => {
                editor.set_error(message);
                return false;
            },
        };
        let id = editor.todo_id();

        self.updating = true;
        let todos = self.client.todos();
        let updated = track(&mut self.state, "Failed to update todo", "Error updating todo", todos.update(id, &request)).await;
        self.updating = false;

        match updated {
            None => false,
            Some(()) => {
                log::info!("Updated todo #{}", id);
                self.editor = None;
                self.refresh_todos().await;
                true
            },
        }
    }

    /// The description of a task, or `Task #id` if it is unknown
    pub fn task_name(&self, id: ResourceId) -> String {
        self.tasks.iter()
            .find(|task| task.id() == id)
            .map(|task| task.description().to_string())
            .unwrap_or_else(|| format!("Task #{}", id))
    }

    /// The title of an event, or `Event #id` if it is unknown
    pub fn event_name(&self, id: ResourceId) -> String {
        self.events.iter()
            .find(|event| event.id() == id)
            .map(|event| event.title().to_string())
            .unwrap_or_else(|| format!("Event #{}", id))
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Todo Management\n\n");
        out.push_str(&self.add_form.render(&self.tasks, &self.events));
        if self.adding {
            out.push_str("  Adding...\n");
        }
        out.push('\n');

        if let Some(line) = state_line(&self.state, self.todos.is_empty(), "todos") {
            out.push_str(&line);
            out.push('\n');
        }

        for todo in &self.todos {
            if let Some(editor) = self.editor.as_ref().filter(|editor| editor.todo_id() == todo.id()) {
                out.push_str(&editor.render());
                continue;
            }
            out.push_str(&self.render_todo(todo));
        }
        out
    }

    fn render_todo(&self, todo: &Todo) -> String {
        let mut out = format!("{} #{} {} [{}]\n", status_marker(todo.status()), todo.id(), self.task_name(todo.task_id()), todo.status().label());
        if let Some(event_id) = todo.event_id() {
            out.push_str(&format!("    Event:     {}\n", self.event_name(event_id)));
        }
        out.push_str(&format!("    Planned:   {}\n", format_time_span(todo.planned_time())));
        if todo.actual_time().is_empty() == false {
            out.push_str(&format!("    Actual:    {}\n", format_time_span(todo.actual_time())));
        }
        if todo.completed_time().is_some() {
            out.push_str(&format!("    Completed: {}\n", format_timestamp(todo.completed_time())));
        }
        out
    }
}
