//! Instants and time windows, as exchanged with the server

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The minute-precision wall-clock format the server uses for todo times (`2024-02-15T09:30`)
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M";
const WALL_CLOCK_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// How instants are shown to users
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// An instant.
///
/// The server emits both zone-less wall-clock times and RFC 3339 timestamps.
/// A `Timestamp` remembers which form it came from, and serializes back to that same form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// A local wall-clock time, without any time zone
    WallClock(NaiveDateTime),
    /// An instant with a known UTC offset
    Zoned(DateTime<FixedOffset>),
}

impl Timestamp {
    /// The date this instant falls on, in the local calendar
    pub fn local_date(&self) -> NaiveDate {
        match self {
            Timestamp::WallClock(naive) => naive.date(),
            Timestamp::Zoned(zoned) => zoned.with_timezone(&Local).date_naive(),
        }
    }

    /// This instant as a local wall-clock time
    pub fn local_naive(&self) -> NaiveDateTime {
        match self {
            Timestamp::WallClock(naive) => *naive,
            Timestamp::Zoned(zoned) => zoned.with_timezone(&Local).naive_local(),
        }
    }

    /// A human-friendly rendering, in local time
    pub fn display_local(&self) -> String {
        self.local_naive().format(DISPLAY_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::WallClock(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(zoned: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(zoned)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp::Zoned(zoned));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, WALL_CLOCK_SECONDS_FORMAT) {
            return Ok(Timestamp::WallClock(naive));
        }
        NaiveDateTime::parse_from_str(s, WALL_CLOCK_FORMAT).map(Timestamp::WallClock)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Timestamp::WallClock(naive) => write!(f, "{}", naive.format(WALL_CLOCK_FORMAT)),
            Timestamp::Zoned(zoned) => write!(f, "{}", zoned.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// Used to support serde
impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|err| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", s, err)))
    }
}


/// A window of time. Both ends are independently optional, and `start <= end` is not checked
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
}

impl TimeSpan {
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
