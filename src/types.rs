use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which of several matching lines receives the insertion.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    #[default]
    FirstMatch,
    /// 1-based occurrence; `NthMatch(0)` never matches.
    NthMatch(usize),
    /// Skip `n` matches and take the next one.
    AfterSkipping(usize),
}

impl Selector {
    /// Whether the `ordinal`-th match (1-based) is the one this selector picks.
    pub fn accepts(self, ordinal: usize) -> bool {
        match self {
            Selector::FirstMatch => ordinal == 1,
            Selector::NthMatch(k) => ordinal == k,
            Selector::AfterSkipping(n) => ordinal == n + 1,
        }
    }
}

fn default_offset() -> usize {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InsertionRule {
    pub anchor: String,
    pub block: String,
    #[serde(default)]
    pub selector: Selector,
    // Next line must contain this for a candidate to count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followed_by: Option<String>,
    #[serde(default = "default_offset")]
    pub offset: usize, // 1 = directly after the matched line
}

impl InsertionRule {
    pub fn new(anchor: &str, block: &str) -> Self {
        Self {
            anchor: anchor.to_string(),
            block: block.to_string(),
            selector: Selector::FirstMatch,
            followed_by: None,
            offset: default_offset(),
        }
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn followed_by(mut self, guard: &str) -> Self {
        self.followed_by = Some(guard.to_string());
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct DocumentPlan {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub rules: Vec<InsertionRule>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    pub documents: Vec<DocumentPlan>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `anchor_line` is where the match was, `at` is the index of the
    /// leading blank line of the inserted block.
    Inserted { anchor_line: usize, at: usize },
    AnchorNotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub label: Option<String>,
    pub planned: usize,
    pub inserted: usize,
    pub missed: Vec<String>, // anchors that matched nothing
}

impl DocumentReport {
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.path.display().to_string(),
        }
    }
}
