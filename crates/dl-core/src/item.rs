//! A single timestamped item within an entry.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::block::Block;
use crate::line::{LineKind, classify};

/// One timestamped note. Identity within an entry is its `HH:MM` time key;
/// the label is the free-text portion of the head line and doubles as the
/// aggregation key.
#[derive(Debug, Clone)]
pub struct Item {
    head_line: String,
    label: String,
    body: Block,
}

impl Item {
    /// Creates an item from its head line and extracted label.
    pub(crate) fn new(line: &str, label: &str) -> Self {
        let mut body = Block::new();
        body.push(line);
        Self {
            head_line: line.to_string(),
            label: label.to_string(),
            body,
        }
    }

    /// Appends a follow-up line (a merged same-minute head or a continuation
    /// line) into the item body.
    pub(crate) fn push(&mut self, line: &str) {
        self.body.push(line);
    }

    /// The label text as captured from the head line, untrimmed.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The verbatim head line this item was created from.
    pub fn head_line(&self) -> &str {
        &self.head_line
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    /// Combines the entry date with this item's time into an absolute
    /// timestamp.
    ///
    /// The head line is re-classified rather than trusting stored state, so
    /// an item whose first line is not a well-formed item head (possible via
    /// the degenerate-capture fallback) yields `None`. So does any date or
    /// time that fails `%Y-%m-%d` / `%H:%M` parsing, e.g. a `25:99` key that
    /// matched the two-digit pattern. Callers treat `None` as a zero-length
    /// interval, never an error.
    #[must_use]
    pub fn timestamp(&self, date: &str) -> Option<NaiveDateTime> {
        let LineKind::ItemStart { time, .. } = classify(self.body.first()?) else {
            return None;
        };
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }

    pub(crate) fn render(&self, out: &mut String) {
        self.body.render(out);
    }
}
