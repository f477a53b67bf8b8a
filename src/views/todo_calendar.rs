//! Todos laid out on a month calendar

use chrono::{Datelike, NaiveDate};

use crate::calendar::{self, CalendarCell, MonthGrid, WEEKDAY_LABELS};
use crate::client::HttpClient;
use crate::todo::Todo;
use crate::utils::status_marker;
use crate::views::{track, ViewState};

/// Markers shown in a day before summarizing the rest as `+N`
const MAX_MARKERS: usize = 3;
const CELL_WIDTH: usize = 9;

#[derive(Debug)]
pub struct TodoCalendarView {
    client: HttpClient,
    todos: Vec<Todo>,
    state: ViewState,
    anchor: NaiveDate,
}

impl TodoCalendarView {
    /// A calendar showing the month of `anchor` (usually today)
    pub fn new(client: HttpClient, anchor: NaiveDate) -> Self {
        Self { client, todos: Vec::new(), state: ViewState::Idle, anchor }
    }

    pub fn todos(&self) -> &[Todo]      { &self.todos  }
    pub fn state(&self) -> &ViewState   { &self.state  }
    pub fn anchor(&self) -> NaiveDate   { self.anchor  }

    pub async fn load(&mut self) {
        let todos = self.client.todos();
        if let Some(todos) = track(&mut self.state, "Failed to load todos", "Error fetching todos", todos.list()).await {
            self.todos = todos;
        }
    }

    pub fn prev_month(&mut self) {
        self.anchor = calendar::prev_month(self.anchor);
    }

    pub fn next_month(&mut self) {
        self.anchor = calendar::next_month(self.anchor);
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.anchor, &self.todos)
    }

    pub fn render(&self) -> String {
        let grid = self.grid();
        let mut out = format!("< {} >\n", grid.title());

        match &self.state {
            ViewState::Loading => return out + "Loading...\n",
            ViewState::Failed(message) => return out + &format!("Error: {}\n", message),
            ViewState::Idle => {},
        }

        for label in WEEKDAY_LABELS.iter() {
            out.push_str(&format!("{:<width$}", label, width = CELL_WIDTH));
        }
        out.push('\n');

        for week in grid.weeks() {
            for cell in week {
                out.push_str(&render_cell(cell));
            }
            out.push('\n');
        }
        out
    }
}

fn render_cell(cell: &CalendarCell) -> String {
    let day = if cell.in_month() {
        format!("{:>2}", cell.date().day())
    } else {
        // Padding days are shown between parentheses
        format!("({})", cell.date().day())
    };

    let markers: String = cell.todos().iter()
        .take(MAX_MARKERS)
        .map(|todo| status_marker(todo.status()))
        .collect();
    let overflow = cell.todos().len().saturating_sub(MAX_MARKERS);
    let extra = if overflow > 0 { format!("+{}", overflow) } else { String::new() };

    // Each marker takes a single column once printed
    let visible = day.chars().count() + 1 + cell.todos().len().min(MAX_MARKERS) + extra.len();
    let padding = " ".repeat(CELL_WIDTH.saturating_sub(visible).max(1));
    format!("{} {}{}{}", day, markers, extra, padding)
}
