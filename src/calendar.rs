//! Month view of todos
//!
//! A month is always laid out as 6 weeks of 7 days, starting on Sunday.
//! Days of the previous and next months pad the grid so that the first of the month sits under its weekday.
//!
//! The only exception is the last month chrono can represent: padding stops at [`NaiveDate::MAX`], so that grid is shorter.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::todo::Todo;

/// Number of cells in a month grid (6 weeks of 7 days)
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, in grid order
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day of the grid
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarCell {
    date: NaiveDate,
    in_month: bool,
    todos: Vec<Todo>,
}

impl CalendarCell {
    pub fn date(&self) -> NaiveDate { self.date     }
    /// Whether this day belongs to the displayed month (rather than being padding)
    pub fn in_month(&self) -> bool  { self.in_month }
    /// Todos planned to start on this day, in the order they were given
    pub fn todos(&self) -> &[Todo]  { &self.todos   }
}

/// The 42 days shown for a month
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Lay out the month that contains `anchor`, and put every todo in the day its planned start falls on.
    ///
    /// Todos without a planned start, or planned outside this month, do not show up at all.
    pub fn build(anchor: NaiveDate, todos: &[Todo]) -> Self {
        let year = anchor.year();
        let month = anchor.month();
        let first = first_of_month(anchor);
        let days_in_month = days_in_month(anchor);
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells = Vec::with_capacity(GRID_CELLS);

        // Trailing days of the previous month
        for offset in (1..=leading).rev() {
            if let Some(date) = first.checked_sub_days(Days::new(offset as u64)) {
                cells.push(CalendarCell { date, in_month: false, todos: Vec::new() });
            }
        }

        for date in (0..days_in_month as u64).filter_map(|offset| first.checked_add_days(Days::new(offset))) {
            let day_todos = todos.iter()
                .filter(|todo| planned_on(todo, date))
                .cloned()
                .collect();
            cells.push(CalendarCell { date, in_month: true, todos: day_todos });
        }

        // Leading days of the next month
        let remaining = GRID_CELLS.saturating_sub(cells.len());
        let last = cells.last().map(|cell| cell.date).unwrap_or(first);
        for date in (1..=remaining as u64).filter_map(|offset| last.checked_add_days(Days::new(offset))) {
            cells.push(CalendarCell { date, in_month: false, todos: Vec::new() });
        }

        log::debug!("Built grid for {}-{:02}: {} leading, {} days, {} trailing", year, month, leading, days_in_month, remaining);
        Self { year, month, cells }
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }
    pub fn cells(&self) -> &[CalendarCell] { &self.cells }

    /// The grid split in rows of 7 days, Sunday first
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The cell of a given date, if it is displayed
    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// e.g. "February 2024"
    pub fn title(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }
}

fn planned_on(todo: &Todo, date: NaiveDate) -> bool {
    match &todo.planned_time().start {
        None => false,
        Some(start) => start.local_date() == date,
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

/// The same day one month later, clamped to the length of that month (Jan 31 gives Feb 28 or 29)
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_add_months(Months::new(1)).unwrap_or(anchor)
}

/// The same day one month earlier, clamped to the length of that month (Mar 31 gives Feb 28 or 29)
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor)
}
