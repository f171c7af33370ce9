use crossterm::style::Stylize;

use crate::types::DocumentReport;
use crate::utils::clip;

const ANCHOR_CLIP: usize = 60;
const RULE_WIDTH: usize = 60;

/// One-line tally for a document, using the count of insertions that
/// actually happened.
pub fn summary_line(report: &DocumentReport) -> String {
    format!(
        "{}: added {}/{} images to {}",
        report.display_name(),
        report.inserted,
        report.planned,
        report.path.display()
    )
}

pub fn totals(reports: &[DocumentReport]) -> (usize, usize) {
    reports
        .iter()
        .fold((0, 0), |(inserted, planned), r| (inserted + r.inserted, planned + r.planned))
}

pub fn print_header(documents: usize, rules: usize) {
    println!(
        "{}",
        format!("Inserting images: {} rules across {} documents", rules, documents).blue()
    );
    println!("{}", "=".repeat(RULE_WIDTH).dark_grey());
}

pub fn print_reports(reports: &[DocumentReport]) {
    for report in reports {
        let line = summary_line(report);
        if report.missed.is_empty() {
            println!("{} {}", "✓".green(), line);
        } else {
            println!("{} {}", "!".yellow(), line);
            for anchor in &report.missed {
                println!("    {} {}", "not found:".dark_grey(), clip(anchor, ANCHOR_CLIP));
            }
        }
    }

    let (inserted, planned) = totals(reports);
    println!("{}", "=".repeat(RULE_WIDTH).dark_grey());
    let total = format!("Inserted {}/{} images in total", inserted, planned);
    if inserted == planned {
        println!("{}", total.green());
    } else {
        println!("{}", total.yellow());
    }
}
