mod scenarii;

use chrono::NaiveDate;
use reqwest::Method;
use serde_json::json;

use brb_client::calendar::{next_month, prev_month, GRID_CELLS, WEEKDAY_LABELS};
use brb_client::mock_transport::MockReply;
use brb_client::views::{TodoCalendarView, ViewState};
use brb_client::{MonthGrid, Todo};

use scenarii::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn todo(id: u64, planned_start: Option<&str>) -> Todo {
    serde_json::from_value(todo_json(id, 1, "pending", planned_start)).unwrap()
}

#[test]
fn february_2024_layout() {
    let grid = MonthGrid::build(date(2024, 2, 10), &[]);
    assert_eq!(grid.cells().len(), GRID_CELLS);
    assert_eq!(grid.title(), "February 2024");

    // February 1st, 2024 is a Thursday: 4 days of January come first
    let leading: Vec<NaiveDate> = grid.cells().iter()
        .take_while(|cell| cell.in_month() == false)
        .map(|cell| cell.date())
        .collect();
    assert_eq!(leading, vec![date(2024, 1, 28), date(2024, 1, 29), date(2024, 1, 30), date(2024, 1, 31)]);

    assert_eq!(grid.cells().iter().filter(|cell| cell.in_month()).count(), 29);
    assert_eq!(grid.cells()[4].date(), date(2024, 2, 1));
    assert_eq!(grid.cells()[32].date(), date(2024, 2, 29));
    assert_eq!(grid.cells()[33].date(), date(2024, 3, 1));
    assert_eq!(grid.cells()[41].date(), date(2024, 3, 9));
}

#[test]
fn todos_land_on_their_planned_day() {
    let todos = vec![
        todo(1, Some("2024-02-15T09:30")),
        todo(2, None),
        todo(3, Some("2024-03-01T08:00")),
        todo(4, Some("2024-02-15T17:00")),
    ];
    let grid = MonthGrid::build(date(2024, 2, 10), &todos);

    let holding_first: Vec<NaiveDate> = grid.cells().iter()
        .filter(|cell| cell.todos().iter().any(|t| t.id() == 1))
        .map(|cell| cell.date())
        .collect();
    assert_eq!(holding_first, vec![date(2024, 2, 15)]);

    let fifteenth = grid.cell(date(2024, 2, 15)).unwrap();
    let ids: Vec<u64> = fifteenth.todos().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![1, 4]);

    // Neither unplanned todos, nor todos of other months (even in padding cells) are shown
    let shown: usize = grid.cells().iter().map(|cell| cell.todos().len()).sum();
    assert_eq!(shown, 2);
    assert!(grid.cell(date(2024, 3, 1)).unwrap().todos().is_empty());
}

#[test]
fn navigation_round_trip() {
    let anchor = date(2024, 2, 10);
    assert_eq!(prev_month(next_month(anchor)), anchor);
    assert_eq!(next_month(prev_month(anchor)), anchor);

    let grid = MonthGrid::build(next_month(date(2024, 12, 5)), &[]);
    assert_eq!(grid.title(), "January 2025");
}

#[tokio::test]
async fn calendar_view() {
    let (client, mock) = mocked_client();
    mock.on(Method::GET, "/api/todos", MockReply::status(503))
        .on(Method::GET, "/api/todos", MockReply::ok(&json!([
            todo_json(1, 1, "pending", Some("2024-02-15T09:30")),
            todo_json(2, 1, "completed", Some("2024-02-20T09:30")),
        ])));

    let mut view = TodoCalendarView::new(client, date(2024, 2, 10));
    view.load().await;
    assert_eq!(view.state(), &ViewState::Failed("Failed to load todos".to_string()));
    assert!(view.todos().is_empty());
    assert!(view.render().contains("Error: Failed to load todos"));

    view.load().await;
    assert_eq!(view.state(), &ViewState::Idle);
    assert_eq!(view.todos().len(), 2);

    let rendered = view.render();
    assert!(rendered.starts_with("< February 2024 >\n"));
    let header = rendered.lines().nth(1).unwrap();
    for label in WEEKDAY_LABELS.iter() {
        assert!(header.contains(label));
    }
    // Title, weekday header, and 6 weeks
    assert_eq!(rendered.lines().count(), 8);

    view.next_month();
    assert_eq!(view.grid().title(), "March 2024");
    assert!(view.grid().cells().iter().all(|cell| cell.todos().is_empty()));
    view.prev_month();
    assert_eq!(view.anchor(), date(2024, 2, 10));
    assert_eq!(view.grid().cell(date(2024, 2, 20)).unwrap().todos().len(), 1);

    // Navigating does not fetch anything
    assert_eq!(mock.request_count(), 2);
}
