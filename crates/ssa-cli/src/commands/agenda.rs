//! Agenda command previewing the public event listing.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use ssa_core::{
    AgendaFilter, EventRecord, TimeOfDay, filter_events, format_display_time, group_by_date,
};

/// A day of listed events, as emitted by `--json`.
#[derive(Debug, Serialize)]
struct AgendaDay<'a> {
    date: NaiveDate,
    events: Vec<&'a EventRecord>,
}

/// Runs the agenda command over JSONL event records read from `reader`.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    filter: &AgendaFilter,
    json: bool,
) -> Result<()> {
    let events = parse_records(reader)?;
    let listed = filter_events(&events, filter);
    let days = group_by_date(listed);

    if json {
        let days: Vec<AgendaDay<'_>> = days
            .into_iter()
            .map(|(date, events)| AgendaDay { date, events })
            .collect();
        writeln!(writer, "{}", serde_json::to_string_pretty(&days)?)?;
        return Ok(());
    }

    if days.is_empty() {
        writeln!(writer, "No events listed.")?;
        return Ok(());
    }

    for (i, (date, events)) in days.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", date.format("%A, %B %-d, %Y"))?;
        for event in events {
            write!(writer, "  {:<20}  {}", time_range(event), event.title)?;
            if let Some(location) = &event.location {
                write!(writer, " @ {location}")?;
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn time_range(event: &EventRecord) -> String {
    match (event.start_time, event.end_time) {
        (start, Some(end)) => format!("{} - {}", display(start), display(Some(end))),
        (start, None) => display(start),
    }
}

fn display(time: Option<TimeOfDay>) -> String {
    let stored = time.map(|t| t.to_string());
    format_display_time(stored.as_deref()).into_owned()
}

fn parse_records<R: BufRead>(reader: R) -> Result<Vec<EventRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: EventRecord = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid event record on line {}", idx + 1))?;
        records.push(record);
    }
    Ok(records)
}
