//! Normalize command for checking how a typed time will be stored.

use std::io::Write;

use anyhow::Result;

use ssa_core::{TimeRole, normalize_time};

/// Prints the canonical `HH:MM` form of `input`.
pub fn run<W: Write>(writer: &mut W, input: &str, end: bool, start: Option<&str>) -> Result<()> {
    let role = if end { TimeRole::End } else { TimeRole::Start };
    let Some(time) = normalize_time(Some(input), role, start) else {
        anyhow::bail!("unrecognized time: {input}. Try forms like 2p, 2:30 PM, 14:30, or 7");
    };
    tracing::debug!(input, ?role, %time, "normalized time");
    writeln!(writer, "{time}")?;
    Ok(())
}
