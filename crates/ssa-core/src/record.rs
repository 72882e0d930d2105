//! Event records and the editing form that produces them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::{InvalidTransition, RecordStatus};
use crate::time::{self, TimeError, TimeOfDay, TimeRole};

/// Validation errors raised while turning form input into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A time field was filled in but could not be understood.
    #[error("unrecognized {field}: {value}")]
    UnrecognizedTime { field: &'static str, value: String },

    #[error(transparent)]
    Date(#[from] TimeError),

    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

/// A scheduled event as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    /// Set when the record is soft-deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EventRecord {
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Published and not soft-deleted.
    pub const fn is_public(&self) -> bool {
        matches!(self.status, RecordStatus::Published) && !self.is_deleted()
    }

    /// Marks the record deleted without removing it.
    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }

    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    /// Moves the record through the status workflow.
    pub fn set_status(&mut self, next: RecordStatus) -> Result<(), RecordError> {
        self.status = self.status.transition(next)?;
        tracing::debug!(id = %self.id, status = %self.status, "record status changed");
        Ok(())
    }
}

/// Raw values as typed into the event editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl EventForm {
    /// Normalizes the start time, then the end time in light of the start.
    ///
    /// Surrounding whitespace is ignored and blank fields count as empty.
    pub fn normalize_times(&self) -> (Option<TimeOfDay>, Option<TimeOfDay>) {
        let start = time::normalize_time(self.start_input(), TimeRole::Start, None);
        let start_str = start.map(|t| t.to_string());
        let end = time::normalize_time(self.end_input(), TimeRole::End, start_str.as_deref());
        (start, end)
    }

    /// Validates the form and builds the record to persist.
    ///
    /// Blank time fields are left empty; filled-in times that cannot be
    /// normalized are rejected.
    pub fn into_record(self) -> Result<EventRecord, RecordError> {
        let id = non_empty(&self.id, "id")?;
        let title = non_empty(&self.title, "title")?;
        let date = time::parse_iso_date(self.date.trim())?;

        let (start_time, end_time) = self.normalize_times();
        check_time("start time", self.start_input(), start_time)?;
        check_time("end time", self.end_input(), end_time)?;

        Ok(EventRecord {
            id,
            title,
            description: self.description.and_then(blank_to_none),
            date,
            start_time,
            end_time,
            location: self.location.and_then(blank_to_none),
            status: self.status,
            deleted_at: None,
        })
    }

    fn start_input(&self) -> Option<&str> {
        trimmed(self.start_time.as_deref())
    }

    fn end_input(&self) -> Option<&str> {
        trimmed(self.end_time.as_deref())
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, RecordError> {
    trimmed(Some(value))
        .map(str::to_string)
        .ok_or(RecordError::Empty { field })
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn blank_to_none(value: String) -> Option<String> {
    trimmed(Some(&value)).map(str::to_string)
}

/// `raw` is the trimmed input; `None` means the field was left blank.
fn check_time(
    field: &'static str,
    raw: Option<&str>,
    normalized: Option<TimeOfDay>,
) -> Result<(), RecordError> {
    match raw {
        Some(raw) if normalized.is_none() => Err(RecordError::UnrecognizedTime {
            field,
            value: raw.to_string(),
        }),
        _ => Ok(()),
    }
}
