use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use brb_client::config::{Settings, BASE_PATH_ENV, DEFAULT_BASE_PATH};
use brb_client::traits::Confirm;
use brb_client::utils::TerminalPrompt;
use brb_client::views::{EventTaskView, TodoCalendarView, TodoListView};
use brb_client::{HttpClient, SignRequest, Status};

#[derive(Parser, Debug)]
#[command(name = "brb", version, about = "Terminal front-end for the BRB planning API")]
struct Cli {
    /// Server origin, e.g. http://localhost:5050 (defaults to $BRB_SERVER_URL, then http://localhost:5050)
    #[arg(long, global = true)]
    server: Option<String>,

    /// API base path (defaults to $BRB_API_BASE, then /api)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List todos with their tasks and events
    Todos,

    /// Show todos on a month calendar
    Calendar {
        /// Month to show, as YYYY-MM (default: the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// List events and tasks
    Events,

    /// Create a task
    AddTask {
        #[arg(long)]
        event_id: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        parent_task_id: String,
        #[arg(long, default_value = "pending")]
        status: String,
        #[arg(long, default_value = "")]
        allowed_start: String,
        #[arg(long, default_value = "")]
        allowed_end: String,
        #[arg(long, default_value = "")]
        planned_start: String,
        #[arg(long, default_value = "")]
        planned_end: String,
    },

    /// Create a todo for a task
    AddTodo {
        #[arg(long)]
        task_id: u64,
        #[arg(long)]
        status: String,
        #[arg(long)]
        event_id: Option<u64>,
        #[arg(long, default_value = "")]
        planned_start: String,
        #[arg(long, default_value = "")]
        planned_end: String,
    },

    /// Change a todo. Fields that are not given keep their current value
    EditTodo {
        id: u64,
        #[arg(long)]
        status: Option<String>,
        /// Pass an empty string to clear it
        #[arg(long)]
        event_id: Option<String>,
        #[arg(long)]
        planned_start: Option<String>,
        #[arg(long)]
        planned_end: Option<String>,
        #[arg(long)]
        actual_start: Option<String>,
        #[arg(long)]
        actual_end: Option<String>,
    },

    /// Delete a todo
    DeleteTodo {
        id: u64,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Manage signs
    Sign {
        #[command(subcommand)]
        command: SignCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SignCommand {
    Get { id: u64 },
    Create { signifier: String, signified: String },
    Update { id: u64, signifier: String, signified: String },
    Delete { id: u64 },
}

struct AlwaysYes;

impl Confirm for AlwaysYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = settings(&cli)?;
    log::info!("Talking to {}", settings.endpoint_url(""));
    let client = HttpClient::new(settings);

    match cli.command {
        Command::Todos => {
            let mut view = TodoListView::new(client);
            view.load().await;
            print!("{}", view.render());
            fail_on(view.state().error())?;
        },

        Command::Calendar { month } => {
            let anchor = match month {
                None => Local::now().naive_local().date(),
                Some(month) => NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
                    .map_err(|_| format!("Invalid month {}, expected YYYY-MM", month))?,
            };
            let mut view = TodoCalendarView::new(client, anchor);
            view.load().await;
            print!("{}", view.render());
            fail_on(view.state().error())?;
        },

        Command::Events => {
            let mut view = EventTaskView::new(client);
            view.load().await;
            print!("{}", view.render());
            fail_on(view.events_state().error())?;
            fail_on(view.tasks_state().error())?;
        },

        Command::AddTask { event_id, description, parent_task_id, status, allowed_start, allowed_end, planned_start, planned_end } => {
            let mut view = EventTaskView::new(client);
            let draft = &mut view.add_task.draft;
            draft.event_id = event_id;
            draft.description = description;
            draft.parent_task_id = parent_task_id;
            draft.status = Status::from(status.as_str());
            draft.allowed_start = allowed_start;
            draft.allowed_end = allowed_end;
            draft.planned_start = planned_start;
            draft.planned_end = planned_end;

            if view.submit_new_task().await {
                println!("Task added");
            }
            fail_on(view.add_task.error())?;
        },

        Command::AddTodo { task_id, status, event_id, planned_start, planned_end } => {
            let mut view = TodoListView::new(client);
            view.add_form.task_id = Some(task_id);
            view.add_form.event_id = event_id;
            view.add_form.status = non_empty(status).map(|status| Status::from(status.as_str()));
            view.add_form.planned_start = planned_start;
            view.add_form.planned_end = planned_end;

            if view.submit_new_todo().await {
                println!("Todo added");
            }
            fail_on(view.add_form.error())?;
            fail_on(view.state().error())?;
        },

        Command::EditTodo { id, status, event_id, planned_start, planned_end, actual_start, actual_end } => {
            let mut view = TodoListView::new(client);
            view.refresh_todos().await;
            fail_on(view.state().error())?;
            if view.start_edit(id) == false {
                return Err(format!("No todo #{}", id).into());
            }

            if let Some(editor) = view.editor_mut() {
                if let Some(status) = status {
                    editor.status = Status::from(status.as_str());
                }
                if let Some(event_id) = event_id {
                    editor.event_id = event_id;
                }
                if let Some(value) = planned_start {
                    editor.planned_start = value;
                }
                if let Some(value) = planned_end {
                    editor.planned_end = value;
                }
                if let Some(value) = actual_start {
                    editor.actual_start = value;
                }
                if let Some(value) = actual_end {
                    editor.actual_end = value;
                }
            }

            if view.save_edit().await {
                println!("Todo #{} updated", id);
            }
            fail_on(view.editor().and_then(|editor| editor.error()))?;
            fail_on(view.state().error())?;
        },

        Command::DeleteTodo { id, yes } => {
            let confirm: Box<dyn Confirm> = if yes { Box::new(AlwaysYes) } else { Box::new(TerminalPrompt) };
            let mut view = TodoListView::new(client);
            if view.delete_todo(id, confirm.as_ref()).await {
                println!("Todo #{} deleted", id);
            }
            fail_on(view.state().error())?;
        },

        Command::Sign { command } => {
            let signs = client.signs();
            match command {
                SignCommand::Get { id } => {
                    let sign = signs.get(id).await?;
                    println!("#{} {} => {}", sign.id(), sign.signifier(), sign.signified());
                },
                SignCommand::Create { signifier, signified } => {
                    let sign = signs.create(&SignRequest::new(signifier, signified)).await?;
                    println!("Created sign #{}", sign.id());
                },
                SignCommand::Update { id, signifier, signified } => {
                    signs.update(id, &SignRequest::new(signifier, signified)).await?;
                    println!("Sign #{} updated", id);
                },
                SignCommand::Delete { id } => {
                    signs.delete(id).await?;
                    println!("Sign #{} deleted", id);
                },
            }
        },
    }

    Ok(())
}

fn settings(cli: &Cli) -> Result<Settings, Box<dyn Error>> {
    match (&cli.server, &cli.api_base) {
        (None, None) => Settings::from_env(),
        (server, api_base) => {
            let env_settings = Settings::from_env()?;
            let server = server.clone().unwrap_or_else(|| env_settings.server_url().to_string());
            let api_base = api_base.clone()
                .or_else(|| std::env::var(BASE_PATH_ENV).ok())
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
            Settings::with_base_path(server, api_base)
        },
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

fn fail_on(error: Option<&str>) -> Result<(), Box<dyn Error>> {
    match error {
        None => Ok(()),
        Some(message) => Err(message.to_string().into()),
    }
}
