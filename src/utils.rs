//! Some utility functions

use std::io::{stdin, stdout, BufRead, Write};

use crate::status::Status;
use crate::time_span::{TimeSpan, Timestamp};
use crate::traits::Confirm;

/// `2024-02-15 09:30`, or an empty string
pub fn format_timestamp(timestamp: Option<&Timestamp>) -> String {
    timestamp.map(|ts| ts.display_local()).unwrap_or_default()
}

/// `<start> - <end>`, with `Not set` for a missing end, or `No time set` when both are missing
pub fn format_time_span(span: &TimeSpan) -> String {
    if span.is_empty() {
        return "No time set".to_string();
    }
    let start = span.start.map(|ts| ts.display_local()).unwrap_or_else(|| "Not set".to_string());
    let end = span.end.map(|ts| ts.display_local()).unwrap_or_else(|| "Not set".to_string());
    format!("{} - {}", start, end)
}

/// A small block painted in the colour of a status, using 24-bit ANSI escapes
pub fn status_marker(status: &Status) -> String {
    let color = status.color();
    let (r, g, b) = (to_u8(color.r), to_u8(color.g), to_u8(color.b));
    format!("\x1b[38;2;{};{};{}m\u{25a0}\x1b[0m", r, g, b)
}

fn to_u8(channel: f64) -> u8 {
    (channel.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Parse an optional numeric form field: empty means absent
pub fn parse_optional_id(field: &str, value: &str) -> Result<Option<u64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<u64>()
        .map(Some)
        .map_err(|_| format!("{} must be a positive number", field))
}

/// Parse an optional date-time form field: empty means absent
pub fn parse_optional_timestamp(field: &str, value: &str) -> Result<Option<Timestamp>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<Timestamp>()
        .map(Some)
        .map_err(|_| format!("{} must look like 2024-02-15T09:30", field))
}


/// Asks a yes/no question on the terminal
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = stdout();
        if stdout.write_all(format!("{} [y/N] ", message).as_bytes()).is_err() || stdout.flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
