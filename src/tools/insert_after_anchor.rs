use super::find_anchor::find_anchor;
use crate::types::{InsertionRule, Outcome};

/// Inserts `rule.block` after the line selected by `rule`.
///
/// The block is wrapped in a leading and trailing blank line and lands at
/// `matched + rule.offset`, clamped to the end of the document. When the
/// anchor is not found the lines are left untouched.
///
/// # Arguments
///
/// * `lines` - The document lines, without terminators.
/// * `rule` - Anchor, block and occurrence selector to apply.
///
pub fn insert_after_anchor(lines: &mut Vec<String>, rule: &InsertionRule) -> Outcome {
    let Some(anchor_line) = find_anchor(
        lines.as_slice(),
        &rule.anchor,
        rule.followed_by.as_deref(),
        rule.selector,
    ) else {
        tracing::debug!(anchor = %rule.anchor, "anchor not found");
        return Outcome::AnchorNotFound;
    };

    // Offset 0 is treated as 1: the block never lands above its anchor.
    let at = (anchor_line + rule.offset.max(1)).min(lines.len());
    lines.splice(at..at, block_lines(&rule.block));

    tracing::debug!(anchor = %rule.anchor, anchor_line, at, "inserted block");
    Outcome::Inserted { anchor_line, at }
}

// Blank separator, one line per segment of `block`, blank separator.
fn block_lines(block: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(block.lines().count() + 2);
    out.push(String::new());
    out.extend(block.lines().map(str::to_string));
    out.push(String::new());
    out
}
