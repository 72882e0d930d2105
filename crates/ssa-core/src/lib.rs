//! Core domain logic for SSA Admin.
//!
//! This crate contains the fundamental types and logic for:
//! - Time normalization: turning typed times like `2p` or `9:15 AM` into `HH:MM`
//! - Records: event records, soft deletion, and the editor form that builds them
//! - Status workflow: draft, published, and archived records
//! - Agenda: date-range and keyword filtering for the public event listing

pub mod agenda;
pub mod record;
pub mod status;
pub mod time;

pub use agenda::{AgendaFilter, filter_events, group_by_date};
pub use record::{EventForm, EventRecord, RecordError};
pub use status::{InvalidTransition, RecordStatus, UnknownStatus};
pub use time::{
    TimeError, TimeOfDay, TimeRole, format_display_time, format_iso_date, normalize_time,
    normalize_time_str, parse_iso_date,
};
