//! Render a batch report as text or JSON lines.

use std::io::Write;

use serde_json::json;

use crate::config::OutputFormat;
use crate::error::TaggerError;
use crate::tagger::BatchReport;

pub fn write_report(
    out: &mut impl Write,
    report: &BatchReport,
    format: OutputFormat,
) -> Result<(), TaggerError> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_text(out: &mut impl Write, report: &BatchReport) -> Result<(), TaggerError> {
    for game in &report.games {
        match &game.error {
            Some(error) => writeln!(out, "{}: error: {}", game.id, error)?,
            None => writeln!(out, "{}: {}", game.id, game.labels.join(", "))?,
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Tagged {} games ({} failed)",
        report.tagged(),
        report.failed()
    )?;
    for (label, count) in &report.label_counts {
        writeln!(out, "  {label}: {count}")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &BatchReport) -> Result<(), TaggerError> {
    for game in &report.games {
        writeln!(out, "{}", serde_json::to_string(game)?)?;
    }
    let summary = json!({
        "summary": {
            "tagged": report.tagged(),
            "failed": report.failed(),
            "labels": report.label_counts,
        }
    });
    writeln!(out, "{summary}")?;
    Ok(())
}
