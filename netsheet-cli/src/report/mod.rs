//! Screen views and exportable documents.
//!
//! Renderers only read calculator outputs; every amount they show was
//! computed in `netsheet-core`.

pub mod batch;
pub mod glossary;
pub mod net_sheet;
pub mod roi;
pub mod timeline;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 16;
const RULE_WIDTH: usize = LABEL_WIDTH + AMOUNT_WIDTH;

/// `label` left-aligned, `value` right-aligned, on one line.
fn row(
    label: &str,
    value: &str,
) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}\n")
}

fn rule(c: char) -> String {
    let mut line: String = std::iter::repeat_n(c, RULE_WIDTH).collect();
    line.push('\n');
    line
}

fn centered(text: &str) -> String {
    format!("{text:^RULE_WIDTH$}").trim_end().to_string() + "\n"
}

/// Writes `contents` to `dir/file_name`, creating `dir` if needed.
pub fn write_document(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create export directory '{}'", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, contents)
        .with_context(|| format!("cannot write document '{}'", path.display()))?;
    info!(path = %path.display(), "Exported document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn row_pads_label_and_right_aligns_value() {
        let line = row("Listing Price:", "$500,000");

        assert_eq!(line.len(), RULE_WIDTH + 1);
        assert!(line.starts_with("Listing Price:"));
        assert!(line.ends_with("$500,000\n"));
    }

    #[test]
    fn write_document_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");

        let path = write_document(&target, "report.txt", "hello\n").unwrap();

        assert_eq!(path, target.join("report.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
    }
}
