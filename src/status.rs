//! Progress status of tasks and todos

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use csscolorparser::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The status of a task or a todo.
///
/// The server stores free-form strings. The four well-known values get their own variants,
/// anything else is kept verbatim in [`Status::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl Status {
    /// The values offered to users when they pick a status
    pub const SUGGESTED: [Status; 4] = [Status::Pending, Status::InProgress, Status::Completed, Status::Cancelled];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::Other(other) => other,
        }
    }

    /// A label for menus
    pub fn label(&self) -> &str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
            Status::Other(other) => other,
        }
    }

    /// The colour used to mark items with this status
    pub fn color(&self) -> Color {
        let hex = match self {
            Status::Pending => "#ff6b6b",
            Status::InProgress => "#4ecdc4",
            Status::Completed => "#1dd1a1",
            Status::Cancelled => "#8395a7",
            Status::Other(_) => "#3498db",
        };
        csscolorparser::parse(hex).unwrap_or_else(|err| {
            log::warn!("Invalid status colour {}: {}", hex, err);
            Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 }
        })
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Status::Pending,
            "in_progress" => Status::InProgress,
            "completed" => Status::Completed,
            "cancelled" => Status::Cancelled,
            other => Status::Other(other.to_string()),
        }
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Used to support serde
impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Status, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Status::from(s.as_str()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_values() {
        assert_eq!(Status::from("in_progress"), Status::InProgress);
        assert_eq!(Status::from("doing"), Status::Other("doing".to_string()));
        assert_eq!(Status::Other("doing".to_string()).to_string(), "doing");

        let parsed: Vec<Status> = serde_json::from_str(r#"["pending","done"]"#).unwrap();
        assert_eq!(parsed, vec![Status::Pending, Status::Other("done".to_string())]);
        assert_eq!(serde_json::to_string(&Status::Cancelled).unwrap(), r#""cancelled""#);
    }

    #[test]
    fn colors() {
        let completed = Status::Completed.color();
        assert_eq!((completed.r * 255.0).round() as u8, 0x1d);
        assert_eq!((completed.g * 255.0).round() as u8, 0xd1);
        assert_eq!((completed.b * 255.0).round() as u8, 0xa1);

        let other = Status::Other("blocked".to_string()).color();
        assert_eq!((other.b * 255.0).round() as u8, 0xdb);
    }
}
