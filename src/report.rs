//! Evaluation Reporting.
//!
//! Renders an [`Evaluation`] either as the line-per-fact text log or as a
//! JSON document. Rendering reads the evaluation only; it never affects
//! the verdict.

use crate::config::ReportFormat;
use crate::core::arch::pmpcfg::RegionMode;
use crate::core::units::pmp::{AccessRequest, AccessResult, Evaluation, RegionTrace};
use serde::Serialize;
use std::io::{self, Write};

/// Writes `eval` in the requested format and flushes `out`. With `trace`
/// unset only the verdict is emitted.
pub fn write_report<W: Write>(
    out: &mut W,
    eval: &Evaluation,
    format: ReportFormat,
    trace: bool,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(out, eval, trace)?,
        ReportFormat::Json => write_json(out, eval, trace)?,
    }
    out.flush()
}

/// Writes the text log: two lines per examined region, then the verdict.
pub fn write_text<W: Write>(out: &mut W, eval: &Evaluation, trace: bool) -> io::Result<()> {
    if trace {
        for step in &eval.trace {
            for line in region_lines(step) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    writeln!(out, "{}", verdict_line(eval.request, eval.result))
}

/// Returns the header and range lines for one examined region.
pub fn region_lines(step: &RegionTrace) -> [String; 2] {
    let header = format!(
        "Region {}: A-Field = {}, Config = 0x{:X}, Address = 0x{:X}",
        step.index,
        step.mode.to_u8(),
        step.config.bits(),
        step.addr
    );
    let detail = match (step.mode, step.range) {
        (RegionMode::Off, _) | (_, None) => format!("Region {}: PMP Disabled", step.index),
        (mode, Some(range)) => format!(
            "Region {}: {} Mode, Base = 0x{:X}, Limit = 0x{:X}",
            step.index, mode, range.base, range.limit
        ),
    };
    [header, detail]
}

pub fn verdict_line(request: AccessRequest, result: AccessResult) -> String {
    let verdict = if result.is_granted() {
        "Access Granted"
    } else {
        "Access Fault"
    };
    match result.region_index() {
        Some(index) => format!(
            "{}: Address 0x{:X} in region {}",
            verdict, request.addr, index
        ),
        None => format!(
            "{}: Address 0x{:X} (No PMP region found)",
            verdict, request.addr
        ),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    request: &'a AccessRequest,
    result: &'a AccessResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [RegionTrace]>,
}

/// Writes `eval` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, eval: &Evaluation, trace: bool) -> io::Result<()> {
    let report = JsonReport {
        request: &eval.request,
        result: &eval.result,
        trace: trace.then_some(eval.trace.as_slice()),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
