//! One calendar day's section of the changelog.

use std::collections::BTreeMap;

use crate::block::Block;
use crate::item::Item;
use crate::line::{LineKind, classify};

/// Selects the section that absorbs a continuation line: the value at the
/// first key in ascending order.
///
/// Files are written latest-first, so a top-to-bottom re-parse keeps the
/// most recently touched section at index 0 of the ascending key list. The
/// same rule applies one level up for routing lines between entries. Kept as
/// a standalone policy function so the routing rule can change without
/// touching the parsers.
pub(crate) fn continuation_target<K: Ord, V>(sections: &mut BTreeMap<K, V>) -> Option<&mut V> {
    sections.values_mut().next()
}

/// A date-keyed container of timestamped items plus free-form preamble text.
///
/// Items are stored ascending by `HH:MM` key (zero-padded, so lexicographic
/// order is chronological) and written back descending.
#[derive(Debug, Clone)]
pub struct Entry {
    date: String,
    header: String,
    preamble: Block,
    items: BTreeMap<String, Item>,
}

impl Entry {
    /// Creates an entry from its header line and extracted date key.
    pub(crate) fn new(header: &str, date: &str) -> Self {
        Self {
            date: date.to_string(),
            header: header.to_string(),
            preamble: Block::new(),
            items: BTreeMap::new(),
        }
    }

    /// Routes one line into this entry.
    ///
    /// An item head with an unseen time key creates a new [`Item`]; one with
    /// a seen time key merges into the existing item. Anything else is a
    /// continuation of the routing target, or preamble while no items exist.
    pub(crate) fn feed(&mut self, line: &str) {
        match classify(line) {
            LineKind::ItemStart { time, label } => {
                if let Some(item) = self.items.get_mut(time) {
                    item.push(line);
                } else {
                    self.items.insert(time.to_string(), Item::new(line, label));
                }
            }
            LineKind::EntryStart { .. } | LineKind::Plain { .. } => {
                if let Some(item) = continuation_target(&mut self.items) {
                    item.push(line);
                } else {
                    self.preamble.push(line);
                }
            }
        }
    }

    /// The entry's `YYYY-MM-DD` identity key.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The verbatim header line, as first seen or as generated.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn preamble(&self) -> &Block {
        &self.preamble
    }

    /// Items in ascending (chronological) time order.
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &Item> {
        self.items.values()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Writes the entry: header, blank line, preamble, items latest-first,
    /// and a trailing blank line when any item exists.
    pub(crate) fn render(&self, out: &mut String) {
        out.push_str(&self.header);
        out.push('\n');
        out.push('\n');
        self.preamble.render(out);
        if !self.items.is_empty() {
            for item in self.items.values().rev() {
                item.render(out);
            }
            out.push('\n');
        }
    }
}
