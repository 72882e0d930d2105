//! Display command for rendering stored times on a 12-hour clock.

use std::io::Write;

use anyhow::Result;

use ssa_core::format_display_time;

pub fn run<W: Write>(writer: &mut W, time: Option<&str>) -> Result<()> {
    writeln!(writer, "{}", format_display_time(time))?;
    Ok(())
}
