//! Per-entry time aggregation.
//!
//! Consecutive item timestamps within one entry bound the day's intervals;
//! each interval is credited to the activity logged at its start. Raw minutes
//! are then quantized to quarter-hour billing figures.
//!
//! # Algorithm Summary
//!
//! 1. Walk the entry's items latest-first; the latest parseable timestamp
//!    seeds the running boundary.
//! 2. Each earlier item closes the interval up to the boundary, credits it to
//!    the item's own label, and becomes the new boundary.
//! 3. Minutes per label (and the grand total) are quantized: a 15-minute
//!    correction applies below the minimum charge or past 8 minutes into a
//!    quarter, then the result floors to the nearest quarter hour.

use serde::Serialize;

use crate::entry::Entry;

/// Accumulated time for one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRow {
    /// The activity label, leading whitespace trimmed.
    pub label: String,
    /// Raw accumulated minutes.
    pub minutes: i64,
    /// Quantized quarter-hour billing value.
    pub hours: f64,
}

/// The computed time report for a single entry.
///
/// Rows keep the order their intervals were produced in (descending time of
/// each label's governing item), not alphabetical order.
#[derive(Debug, Clone, Serialize)]
pub struct TimeLedger {
    pub rows: Vec<LedgerRow>,
    pub total_minutes: i64,
    pub total_hours: f64,
}

impl TimeLedger {
    /// Computes the ledger for one entry.
    ///
    /// Returns `None` when the entry holds fewer than two items: a single
    /// timestamp bounds no interval. An item whose timestamp cannot be
    /// combined with the entry date contributes a zero-length interval: it is
    /// skipped and the running boundary is left unchanged.
    #[must_use]
    pub fn for_entry(entry: &Entry) -> Option<Self> {
        if entry.item_count() < 2 {
            return None;
        }

        let mut rows: Vec<LedgerRow> = Vec::new();
        let mut total_minutes = 0;
        let mut boundary = None;

        for item in entry.items().rev() {
            let Some(ts) = item.timestamp(entry.date()) else {
                continue;
            };
            let Some(later) = boundary.replace(ts) else {
                continue;
            };
            let minutes = (later - ts).num_minutes();
            let label = item.label().trim_start();
            match rows.iter_mut().find(|row| row.label == label) {
                Some(row) => row.minutes += minutes,
                None => rows.push(LedgerRow {
                    label: label.to_string(),
                    minutes,
                    hours: 0.0,
                }),
            }
            total_minutes += minutes;
        }

        for row in &mut rows {
            row.hours = quantize_hours(row.minutes);
        }

        Some(Self {
            rows,
            total_minutes,
            total_hours: quantize_hours(total_minutes),
        })
    }
}

/// Quantizes raw minutes into a quarter-hour billing figure.
///
/// A 15-minute correction is added when the raw value is below the minimum
/// charge (`minutes < 15`) or more than 8 minutes into a started quarter
/// (`minutes % 15 > 8`); the corrected value then floors to the nearest
/// quarter hour.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quantize_hours(minutes: i64) -> f64 {
    let correction = if minutes < 15 || minutes % 15 > 8 { 15 } else { 0 };
    ((minutes + correction) / 15) as f64 * 0.25
}
