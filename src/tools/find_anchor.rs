use crate::types::Selector;

// Scan `lines` for the line holding `anchor` at the ordinal `selector` picks.
// When `followed_by` is set, a line only counts as a match if the next line
// contains it, so a candidate on the last line never qualifies.
pub fn find_anchor<S: AsRef<str>>(
    lines: &[S],
    anchor: &str,
    followed_by: Option<&str>,
    selector: Selector,
) -> Option<usize> {
    let mut seen = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        if !line.as_ref().contains(anchor) {
            continue;
        }
        if let Some(guard) = followed_by {
            match lines.get(idx + 1) {
                Some(next) if next.as_ref().contains(guard) => {}
                _ => continue,
            }
        }

        seen += 1;
        if selector.accepts(seen) {
            return Some(idx);
        }
    }

    None
}

/// Counts lines containing `anchor`.
pub fn count_matches<S: AsRef<str>>(lines: &[S], anchor: &str) -> usize {
    lines
        .iter()
        .filter(|line| line.as_ref().contains(anchor))
        .count()
}
