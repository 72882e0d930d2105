//! Time-of-day normalization and display formatting.
//!
//! Editors type times in whatever shape comes to mind (`2p`, `2:30 PM`,
//! `14:30`, `7`). Every value is normalized to canonical 24-hour `HH:MM`
//! before a record is persisted, and rendered back as `2:30 PM` for display.
//!
//! Recognized input shapes, tried in order (first match wins):
//!
//! 1. Abbreviated: `2p`, `9a`, `2:30p`, `12am`, `2:30 pm`
//! 2. 12-hour with a full meridiem word: `2:30 PM`
//! 3. 24-hour: `14:30`, `9:00`
//! 4. Single number with a letter suffix: `1P`, `9A`
//! 5. Bare single number `1`-`12`: `7`, `11`, `12`
//!
//! Bare hours and short 24-hour values are ambiguous when they describe the
//! end of an event; see [`TimeRole`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder rendered for a missing time.
pub const EMPTY_DISPLAY: &str = "—";

static ABBREVIATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(am|a|pm|p)$").unwrap());

static TWELVE_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s+(am|pm)$").unwrap());

static TWENTY_FOUR_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

static SUFFIXED_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})([ap])$").unwrap());

static BARE_HOUR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,2})$").unwrap());

/// Canonical stored form, optionally carrying seconds as the backend returns them.
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").unwrap());

/// Errors for strict time and date parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Hour outside `0..=23`.
    #[error("hour must be between 0 and 23, got {0}")]
    HourOutOfRange(u32),

    /// Minute outside `0..=59`.
    #[error("minute must be between 0 and 59, got {0}")]
    MinuteOutOfRange(u32),

    /// The string is not in canonical `HH:MM` form.
    #[error("invalid time: {0}, expected HH:MM")]
    InvalidTime(String),

    /// The string is not an ISO 8601 calendar date.
    #[error("invalid date: {value}, expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A validated time of day with minute precision.
///
/// Renders as canonical `HH:MM` and (de)serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 12:00 PM.
    pub const NOON: Self = Self {
        hour: 12,
        minute: 0,
    };

    /// Creates a time after range validation.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or(TimeError::HourOutOfRange(hour))?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m < 60)
            .ok_or(TimeError::MinuteOutOfRange(minute))?;
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Renders the time on a 12-hour clock, e.g. `2:30 PM` or `12:05 AM`.
    pub fn to_display(self) -> String {
        let (hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{hour}:{:02} {meridiem}", self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses canonical `H:MM`/`HH:MM`, discarding a trailing `:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CANONICAL_RE
            .captures(s)
            .ok_or_else(|| TimeError::InvalidTime(s.to_string()))?;
        let (hour, minute) = hour_minute(&caps[1], &caps[2])
            .ok_or_else(|| TimeError::InvalidTime(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Which end of an event a time describes.
///
/// End times are biased toward the afternoon: an event ending at `9` or
/// `9:00` most likely ends at 9 PM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRole {
    #[default]
    Start,
    End,
}

/// Normalizes a free-form time expression to a [`TimeOfDay`].
///
/// `context_start` is the already-normalized start time of the same event.
/// It is consulted only for bare-number end times. Returns `None` for
/// absent, empty, or unrecognized input.
pub fn normalize_time(
    input: Option<&str>,
    role: TimeRole,
    context_start: Option<&str>,
) -> Option<TimeOfDay> {
    let input = input.filter(|s| !s.is_empty())?;

    if let Some(caps) = ABBREVIATED_RE.captures(input) {
        let minute = caps.get(2).map_or("00", |m| m.as_str());
        return from_meridiem(&caps[1], minute, is_pm(&caps[3]));
    }

    if let Some(caps) = TWELVE_HOUR_RE.captures(input) {
        return from_meridiem(&caps[1], &caps[2], is_pm(&caps[3]));
    }

    if let Some(caps) = TWENTY_FOUR_HOUR_RE.captures(input) {
        let (mut hour, minute) = hour_minute(&caps[1], &caps[2])?;
        // Ignores the start time entirely, unlike the bare-number shape.
        if role == TimeRole::End && (1..=11).contains(&hour) {
            hour += 12;
        }
        return TimeOfDay::new(hour, minute).ok();
    }

    if let Some(caps) = SUFFIXED_HOUR_RE.captures(input) {
        return from_meridiem(&caps[1], "00", is_pm(&caps[2]));
    }

    if let Some(caps) = BARE_HOUR_RE.captures(input) {
        return from_bare_hour(&caps, role, context_start);
    }

    tracing::trace!(input, "time matched no recognized shape");
    None
}

/// String form of [`normalize_time`]: canonical `HH:MM` or `None`.
pub fn normalize_time_str(
    input: Option<&str>,
    role: TimeRole,
    context_start: Option<&str>,
) -> Option<String> {
    normalize_time(input, role, context_start).map(|t| t.to_string())
}

/// Formats a stored `HH:MM` or `HH:MM:SS` value for display, e.g. `2:30 PM`.
///
/// Missing values render as [`EMPTY_DISPLAY`]. Values that are not a valid
/// stored time are returned unchanged.
pub fn format_display_time(time24: Option<&str>) -> Cow<'_, str> {
    let Some(value) = time24.filter(|s| !s.is_empty()) else {
        return Cow::Borrowed(EMPTY_DISPLAY);
    };
    value
        .parse::<TimeOfDay>()
        .map_or(Cow::Borrowed(value), |t| Cow::Owned(t.to_display()))
}

/// Formats a date as ISO 8601 `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses an ISO 8601 `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|source| TimeError::InvalidDate {
        value: s.to_string(),
        source,
    })
}

fn is_pm(meridiem: &str) -> bool {
    meridiem.starts_with(['p', 'P'])
}

fn hour_minute(hour: &str, minute: &str) -> Option<(u32, u32)> {
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

/// Converts a 12-hour clock reading (hour `1..=12`) to 24-hour time.
fn from_meridiem(hour: &str, minute: &str, pm: bool) -> Option<TimeOfDay> {
    let (hour, minute) = hour_minute(hour, minute)?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (pm, hour) {
        (false, 12) => 0,
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, h) => h,
    };
    TimeOfDay::new(hour, minute).ok()
}

fn from_bare_hour(
    caps: &Captures<'_>,
    role: TimeRole,
    context_start: Option<&str>,
) -> Option<TimeOfDay> {
    let hour: u32 = caps[1].parse().ok()?;
    match hour {
        12 => Some(TimeOfDay::NOON),
        1..=11 if role == TimeRole::End => {
            TimeOfDay::new(bare_end_hour(hour, context_start), 0).ok()
        }
        1..=11 => TimeOfDay::new(hour, 0).ok(),
        _ => None,
    }
}

/// Resolves a bare end hour against the event's start time.
///
/// The end stays in the morning only when the start is a morning hour and
/// the end does not precede it. Without a usable start, the end is PM.
fn bare_end_hour(hour: u32, context_start: Option<&str>) -> u32 {
    match context_start.and_then(leading_hour) {
        Some(start) if start < 12 && hour >= start => hour,
        _ => hour + 12,
    }
}

/// Leading integer hour of a time string such as `09:30` or `9`.
fn leading_hour(s: &str) -> Option<u32> {
    let head = s.split(':').next()?.trim_start();
    let end = head
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(head.len());
    head[..end].parse().ok()
}
