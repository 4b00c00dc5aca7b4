//! Text adapters around the simulator: process lists in, schedules out.
//!
//! Input is one `id arrival burst` triple per line, whitespace separated.
//! Output is one `(tick, id)` line per context switch followed by
//! `average waiting time <value>` rounded to two decimals.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::process::ProcessDescriptor;
use crate::{
    core::{SimulationResult, Ticks},
    error::{Result, SchedError},
};

pub fn parse_descriptors(reader: impl BufRead) -> Result<Vec<ProcessDescriptor>> {
    let mut jobs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, arrival, burst] = fields.as_slice() else {
            return Err(SchedError::malformed_input(
                line_no,
                format!("expected 3 fields (id arrival burst), found {}", fields.len()),
            ));
        };

        jobs.push(ProcessDescriptor::new(
            parse_field(id, "id", line_no)?,
            parse_field(arrival, "arrival time", line_no)?,
            parse_field(burst, "burst time", line_no)?,
        ));
    }

    Ok(jobs)
}

fn parse_field(token: &str, field: &str, line: usize) -> Result<Ticks> {
    token.parse::<Ticks>().map_err(|e| {
        SchedError::malformed_input(line, format!("invalid {field} {token:?}: {e}"))
    })
}

pub fn read_descriptors(path: impl AsRef<Path>) -> Result<Vec<ProcessDescriptor>> {
    let file = File::open(path)?;
    parse_descriptors(BufReader::new(file))
}

pub fn write_schedule(mut writer: impl Write, result: &SimulationResult) -> Result<()> {
    for entry in &result.schedule {
        writeln!(writer, "{entry}")?;
    }
    writeln!(
        writer,
        "average waiting time {:.2}",
        result.average_waiting_time
    )?;
    writer.flush()?;
    Ok(())
}

pub fn write_json(mut writer: impl Write, result: &SimulationResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn render_schedule(result: &SimulationResult) -> Result<String> {
    let mut buf = Vec::new();
    write_schedule(&mut buf, result)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `result` to `path` as text or JSON.
pub fn write_result(path: impl AsRef<Path>, result: &SimulationResult, json: bool) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    if json {
        write_json(writer, result)
    } else {
        write_schedule(writer, result)
    }
}
