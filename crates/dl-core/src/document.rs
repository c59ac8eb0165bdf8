//! The in-memory changelog document.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::block::Block;
use crate::entry::{Entry, continuation_target};
use crate::line::{self, LineKind};

/// A parsed changelog: leading preamble plus one [`Entry`] per distinct date.
///
/// Entries are stored ascending by `YYYY-MM-DD` key (lexicographic ISO order
/// is chronological) and written back descending, so the newest day sits at
/// the top of the file.
#[derive(Debug, Clone, Default)]
pub struct Document {
    preamble: Block,
    entries: BTreeMap<String, Entry>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preamble: Block::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Parses a full text stream, top-to-bottom.
    ///
    /// There is no failure mode: a foreign-format input degrades into a
    /// document that is all preamble.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::new();
        for line in text.lines() {
            doc.feed(line);
        }
        doc
    }

    /// Routes one line into the document.
    ///
    /// An entry header with an unseen date key opens a new entry and is
    /// consumed here; one with a seen date key is dropped (the first-seen
    /// header wins). Every other line goes to the continuation-target entry,
    /// or to the document preamble while no entries exist.
    pub fn feed(&mut self, line: &str) {
        match line::classify(line) {
            LineKind::EntryStart { date } => {
                if !self.entries.contains_key(date) {
                    self.entries
                        .insert(date.to_string(), Entry::new(line, date));
                }
            }
            LineKind::ItemStart { .. } | LineKind::Plain { .. } => {
                if let Some(entry) = continuation_target(&mut self.entries) {
                    entry.feed(line);
                } else {
                    self.preamble.push(line);
                }
            }
        }
    }

    /// Adds a timestamped item for the current local date and time.
    ///
    /// Re-uses the parse path, so adding twice within the same minute merges
    /// into a single item exactly like re-reading the file would.
    pub fn add_item(&mut self, text: &str) {
        self.add_item_at(chrono::Local::now().naive_local(), text);
    }

    /// Adds a timestamped item at an explicit wall-clock instant.
    pub fn add_item_at(&mut self, now: NaiveDateTime, text: &str) {
        let date = now.format("%Y-%m-%d").to_string();
        if !self.entries.contains_key(&date) {
            let header = line::entry_header(&date);
            self.entries
                .insert(date.clone(), Entry::new(&header, &date));
        }
        let item = line::item_line(&now.format("%H:%M").to_string(), text);
        if let Some(entry) = self.entries.get_mut(&date) {
            entry.feed(&item);
        }
    }

    /// Entries in ascending (chronological) date order; reverse for the
    /// on-disk latest-first order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn preamble(&self) -> &Block {
        &self.preamble
    }

    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.entries.is_empty()
    }

    /// Serializes the document: preamble, then entries latest-first, then a
    /// trailing blank line when any entry exists.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.preamble.render(&mut out);
        if !self.entries.is_empty() {
            for entry in self.entries.values().rev() {
                entry.render(&mut out);
            }
            out.push('\n');
        }
        out
    }
}
