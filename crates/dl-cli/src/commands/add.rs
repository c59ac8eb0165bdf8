//! Add command: merge a timestamped item into today's entry.

use std::path::Path;

use anyhow::{Context, Result};

/// Loads the changelog, adds an item for the current local time, and writes
/// the file back.
///
/// A missing changelog starts empty, so the first add creates the file.
/// Adding twice within the same minute merges into a single item.
pub fn run(path: &Path, text: &str) -> Result<()> {
    let mut doc = dl_core::load(path).context("failed to load changelog")?;
    doc.add_item(text);
    dl_core::save(path, &doc).context("failed to save changelog")?;
    tracing::debug!(path = %path.display(), "item added");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_add_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.md");

        run(&path, "did a thing").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert!(text.starts_with(&format!("# {today} ")));
        assert!(text.contains(")* did a thing"));
    }

    #[test]
    fn add_preserves_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.md");
        std::fs::write(
            &path,
            "# 2000-01-01 ############################################################\n\n\
             *\t*(10:00)* ancient history\n\n\n",
        )
        .unwrap();

        run(&path, "fresh work").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("*\t*(10:00)* ancient history"));
        assert!(text.contains(")* fresh work"));
        let pos_new = text.find(")* fresh work").unwrap();
        let pos_old = text.find("2000-01-01").unwrap();
        assert!(pos_new < pos_old, "today's entry is written first");
    }
}
