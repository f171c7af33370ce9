use anyhow::Result;

use crate::tools::{Document, count_matches};
use crate::types::{DocumentPlan, DocumentReport, Outcome, Plan};

/// Applies every rule of `plan` to `document`, in order.
///
/// Each rule re-scans the current lines, so earlier insertions are seen by
/// later rules. Rules whose anchor is missing are recorded and skipped.
pub fn apply_rules(document: &mut Document, plan: &DocumentPlan) -> DocumentReport {
    let mut report = DocumentReport {
        path: plan.path.clone(),
        label: plan.label.clone(),
        planned: plan.rules.len(),
        inserted: 0,
        missed: Vec::new(),
    };

    for rule in &plan.rules {
        let candidates = count_matches(document.lines(), &rule.anchor);
        if candidates > 1 {
            tracing::debug!(
                anchor = %rule.anchor,
                candidates,
                selector = ?rule.selector,
                "anchor matches several lines"
            );
        }

        match document.apply(rule) {
            Outcome::Inserted { .. } => report.inserted += 1,
            Outcome::AnchorNotFound => report.missed.push(rule.anchor.clone()),
        }
    }

    report
}

/// Loads the document, applies its rules and writes it back.
///
/// The file is left alone when no rule inserted anything.
pub fn run_document(plan: &DocumentPlan) -> Result<DocumentReport> {
    let mut document = Document::load(&plan.path)?;
    let before = document.len();

    let report = apply_rules(&mut document, plan);
    if report.inserted > 0 {
        document.save()?;
    }

    tracing::info!(
        path = %plan.path.display(),
        inserted = report.inserted,
        planned = report.planned,
        lines_before = before,
        lines_after = document.len(),
        "document processed"
    );
    Ok(report)
}

/// Processes documents one after another; the first I/O error stops the run.
pub fn run_plan(plan: &Plan) -> Result<Vec<DocumentReport>> {
    plan.documents.iter().map(run_document).collect()
}
