//! Line classification and the on-disk line formats.
//!
//! The changelog knows exactly two structural line shapes:
//!
//! - entry header: `# <YYYY-MM-DD><optional trailing text>`
//! - item head:    `*<tab>*(<HH:MM>)* <text>`
//!
//! Everything else is plain text routed to a preamble or the current
//! continuation target. The read patterns are deliberately looser than the
//! write formats: any single whitespace is accepted where the writer puts a
//! tab.

use std::sync::LazyLock;

use regex::Regex;

static ENTRY_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# (\d{4}-\d{2}-\d{2})").unwrap());

static ITEM_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s\*\((\d{2}:\d{2})\)\*(.*)$").unwrap());

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Header line opening a dated entry; `date` is its identity key.
    EntryStart { date: &'a str },
    /// Head line of a timestamped item; `time` is its identity key within
    /// the entry and `label` the free-text activity name.
    ItemStart { time: &'a str, label: &'a str },
    /// Any other line.
    Plain { text: &'a str },
}

/// Classifies one line against the entry-start and item-start patterns.
///
/// If a pattern matches but a capture is somehow absent, the whole line
/// stands in for the missing value. That degenerate key is carried through
/// rather than rejected; downstream timestamp parsing treats it as
/// unparseable.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = ENTRY_START_RE.captures(line) {
        let date = caps.get(1).map_or(line, |m| m.as_str());
        return LineKind::EntryStart { date };
    }
    if let Some(caps) = ITEM_START_RE.captures(line) {
        let time = caps.get(1).map_or(line, |m| m.as_str());
        let label = caps.get(2).map_or(line, |m| m.as_str());
        return LineKind::ItemStart { time, label };
    }
    LineKind::Plain { text: line }
}

/// Builds the header line for a freshly created entry.
#[must_use]
pub fn entry_header(date: &str) -> String {
    format!("# {date} {}", "#".repeat(60))
}

/// Builds an item head line in the on-disk format.
#[must_use]
pub fn item_line(time: &str, text: &str) -> String {
    format!("*\t*({time})* {text}")
}
