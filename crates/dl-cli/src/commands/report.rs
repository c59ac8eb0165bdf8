//! Report command: per-day activity durations.
//!
//! Renders the quarter-hour time ledger for every entry, latest date first,
//! as plain text or JSON.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use dl_core::{Document, Entry, LedgerRow, TimeLedger};
use serde::Serialize;

/// Separator between the label rows and the total row.
const SEPARATOR: &str = "----------------------------------------";

/// Formats the report section for one entry.
///
/// An entry with fewer than two items gets only its header: a single
/// timestamp bounds no interval.
fn format_entry(entry: &Entry, out: &mut String) {
    writeln!(out, "{}", entry.header()).unwrap();
    writeln!(out).unwrap();

    if let Some(ledger) = TimeLedger::for_entry(entry) {
        for row in &ledger.rows {
            writeln!(out, "{}: {:.2}h ({}m)", row.label, row.hours, row.minutes).unwrap();
        }
        writeln!(out, "{SEPARATOR}").unwrap();
        writeln!(
            out,
            "[Total]: {:.2}h ({}m)",
            ledger.total_hours, ledger.total_minutes
        )
        .unwrap();
    }

    writeln!(out).unwrap();
}

/// Formats the human-readable report, latest date first.
pub fn format_report(doc: &Document) -> String {
    let mut output = String::new();
    for entry in doc.entries().rev() {
        format_entry(entry, &mut output);
    }
    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub date: String,
    pub rows: Vec<LedgerRow>,
    pub total_minutes: i64,
    pub total_hours: f64,
}

/// Formats the report as JSON, latest date first.
pub fn format_report_json(doc: &Document, generated_at: DateTime<Utc>) -> Result<String> {
    let entries = doc
        .entries()
        .rev()
        .map(|entry| {
            let (rows, total_minutes, total_hours) = TimeLedger::for_entry(entry)
                .map_or((Vec::new(), 0, 0.0), |ledger| {
                    (ledger.rows, ledger.total_minutes, ledger.total_hours)
                });
            JsonEntry {
                date: entry.date().to_string(),
                rows,
                total_minutes,
                total_hours,
            }
        })
        .collect();

    let report = JsonReport {
        generated_at: generated_at.to_rfc3339(),
        entries,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Runs the report command.
pub fn run(path: &Path, json: bool) -> Result<()> {
    let doc = dl_core::load(path)?;
    tracing::debug!(entries = doc.entry_count(), "rendering report");

    if json {
        let output = format_report_json(&doc, Utc::now())?;
        println!("{output}");
    } else {
        let output = format_report(&doc);
        print!("{output}");
    }

    Ok(())
}
