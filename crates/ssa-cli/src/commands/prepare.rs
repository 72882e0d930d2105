//! Prepare command for turning event editor input into records.
//!
//! Reads one JSON `EventForm` per line, normalizes its times, and writes one
//! JSON `EventRecord` per line, ready to send to the backend.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use ssa_core::{EventForm, EventRecord};

/// Runs the prepare command, returning the number of records written.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<usize> {
    let records = parse_forms(reader)?;
    for record in &records {
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{json}")?;
    }
    tracing::debug!(count = records.len(), "prepared event records");
    Ok(records.len())
}

fn parse_forms<R: BufRead>(reader: R) -> Result<Vec<EventRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let form: EventForm = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;
        let record = form
            .into_record()
            .with_context(|| format!("invalid event on line {}", idx + 1))?;
        records.push(record);
    }
    Ok(records)
}
