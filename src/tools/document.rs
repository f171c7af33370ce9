use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::insert_after_anchor::insert_after_anchor;
use crate::types::{InsertionRule, Outcome};

/// A text file held in memory as lines. Each line remembers its own
/// terminator, so untouched lines are written back byte for byte.
#[derive(Clone, Debug)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    // Parallel to `lines`: "\n", "\r\n", or "" for a final unterminated line
    endings: Vec<&'static str>,
}

impl Document {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

        Ok(Self::from_text(path, &text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();

        for piece in text.split_inclusive('\n') {
            let (line, ending) = if let Some(line) = piece.strip_suffix("\r\n") {
                (line, "\r\n")
            } else if let Some(line) = piece.strip_suffix('\n') {
                (line, "\n")
            } else {
                (piece, "")
            };
            lines.push(line.to_string());
            endings.push(ending);
        }

        Self {
            path: path.into(),
            lines,
            endings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Applies one rule. Inserted lines take the terminator of the line
    /// right before them.
    pub fn apply(&mut self, rule: &InsertionRule) -> Outcome {
        let before = self.lines.len();
        let outcome = insert_after_anchor(&mut self.lines, rule);

        if let Outcome::Inserted { at, .. } = outcome {
            let added = self.lines.len() - before;
            let fill = match self.endings[at - 1] {
                "" => self.default_ending(),
                ending => ending,
            };

            if at == before && self.endings[at - 1].is_empty() {
                // Appending after an unterminated last line: it gains a
                // terminator and the new last line stays unterminated.
                self.endings[at - 1] = fill;
                let mut tail = vec![fill; added];
                tail[added - 1] = "";
                self.endings.splice(at..at, tail);
            } else {
                self.endings.splice(at..at, vec![fill; added]);
            }
        }

        outcome
    }

    // First terminator seen in the document, "\n" if it has none.
    fn default_ending(&self) -> &'static str {
        self.endings
            .iter()
            .copied()
            .find(|ending| !ending.is_empty())
            .unwrap_or("\n")
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .flat_map(|(line, ending)| [line.as_str(), *ending])
            .collect()
    }

    /// Overwrites the file this document was loaded from.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.to_text())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
