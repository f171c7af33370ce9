use crate::report::{summary_line, totals};
use crate::runner::{apply_rules, run_document, run_plan};
use crate::tools::Document;
use crate::types::{DocumentPlan, InsertionRule, Plan, Selector};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(path: PathBuf, rules: Vec<InsertionRule>) -> DocumentPlan {
        DocumentPlan {
            path,
            label: Some("Week 1".to_string()),
            rules,
        }
    }

    #[test]
    fn test_apply_rules_counts_inserted_and_missed() {
        let mut doc = Document::from_text("post.md", "### A\ntext\n### B\n");
        let plan = plan_for(
            PathBuf::from("post.md"),
            vec![
                InsertionRule::new("### A", "![a](u)"),
                InsertionRule::new("missing text", "![m](u)"),
                InsertionRule::new("### B", "![b](u)"),
            ],
        );

        let report = apply_rules(&mut doc, &plan);

        assert_eq!(report.planned, 3);
        assert_eq!(report.inserted, 2);
        assert_eq!(report.missed, vec!["missing text".to_string()]);
        assert_eq!(
            doc.lines(),
            vec!["### A", "", "![a](u)", "", "text", "### B", "", "![b](u)", ""]
        );
    }

    #[test]
    fn test_rules_rescan_after_each_insertion() {
        // Both rules target "step"; the second picks the 2nd occurrence in
        // the already-mutated document.
        let mut doc = Document::from_text("post.md", "step one\nstep two\nend\n");
        let plan = plan_for(
            PathBuf::from("post.md"),
            vec![
                InsertionRule::new("step", "IMG1"),
                InsertionRule::new("step", "IMG2").with_selector(Selector::NthMatch(2)),
            ],
        );

        apply_rules(&mut doc, &plan);

        assert_eq!(
            doc.lines(),
            vec!["step one", "", "IMG1", "", "step two", "", "IMG2", "", "end"]
        );
    }

    #[test]
    fn test_run_document_rewrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("post.md");
        fs::write(&file_path, "# Title\nSome intro text.\n### Section A\nBody.\n").unwrap();

        let plan = plan_for(
            file_path.clone(),
            vec![InsertionRule::new("### Section A", "![x](url)")],
        );
        let report = run_document(&plan).unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "# Title\nSome intro text.\n### Section A\n\n![x](url)\n\nBody.\n"
        );
    }

    #[test]
    fn test_run_document_without_matches_leaves_file_identical() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("post.md");
        let original = "# Title\r\nBody without trailing newline";
        fs::write(&file_path, original).unwrap();

        let plan = plan_for(
            file_path.clone(),
            vec![InsertionRule::new("missing text", "![x](url)")],
        );
        let report = run_document(&plan).unwrap();

        assert_eq!(report.inserted, 0);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), original);
    }

    #[test]
    fn test_running_twice_duplicates_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("post.md");
        fs::write(&file_path, "### Section A\nBody.\n").unwrap();

        let plan = plan_for(
            file_path.clone(),
            vec![InsertionRule::new("### Section A", "![x](url)")],
        );
        run_document(&plan).unwrap();
        run_document(&plan).unwrap();

        let text = fs::read_to_string(&file_path).unwrap();
        assert_eq!(text.matches("![x](url)").count(), 2);
    }

    #[test]
    fn test_run_plan_stops_on_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.md");
        fs::write(&present, "anchor\n").unwrap();

        let plan = Plan {
            documents: vec![
                plan_for(present.clone(), vec![InsertionRule::new("anchor", "IMG")]),
                plan_for(
                    temp_dir.path().join("absent.md"),
                    vec![InsertionRule::new("anchor", "IMG")],
                ),
            ],
        };

        let err = run_plan(&plan).unwrap_err();
        assert!(err.to_string().contains("absent.md"));
        // Documents before the failure were already written.
        assert_eq!(fs::read_to_string(&present).unwrap(), "anchor\n\nIMG\n\n");
    }

    #[test]
    fn test_report_uses_actual_counts() {
        let mut doc = Document::from_text("post.md", "hit\n");
        let plan = plan_for(
            PathBuf::from("post.md"),
            vec![
                InsertionRule::new("hit", "IMG"),
                InsertionRule::new("miss", "IMG"),
            ],
        );
        let report = apply_rules(&mut doc, &plan);

        assert_eq!(summary_line(&report), "Week 1: added 1/2 images to post.md");
        assert_eq!(totals(&[report.clone(), report]), (2, 4));
    }
}
