use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::types::{DocumentPlan, Plan};

pub const DEFAULT_PLAN_PATH: &str = "plans/ml-posts.json";

impl Plan {
    /// Reads and validates a plan file.
    pub fn load(path: impl AsRef<Path>) -> Result<Plan> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan {}", path.display()))?;
        let plan = Plan::from_json(&raw)
            .with_context(|| format!("Invalid plan {}", path.display()))?;
        Ok(plan)
    }

    pub fn from_json(raw: &str) -> Result<Plan> {
        let plan: Plan = serde_json::from_str(raw).context("Failed to parse plan JSON")?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        for doc in &self.documents {
            doc.validate()?;
        }
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.documents.iter().map(|d| d.rules.len()).sum()
    }
}

impl DocumentPlan {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            bail!("Document plan has an empty path");
        }
        for (idx, rule) in self.rules.iter().enumerate() {
            // An empty anchor would match every line.
            if rule.anchor.is_empty() {
                bail!("{}: rule {} has an empty anchor", self.path.display(), idx);
            }
            if rule.block.is_empty() {
                bail!(
                    "{}: rule {} ('{}') has an empty block",
                    self.path.display(),
                    idx,
                    rule.anchor
                );
            }
            if rule.offset == 0 {
                bail!(
                    "{}: rule {} ('{}') has offset 0, must be at least 1",
                    self.path.display(),
                    idx,
                    rule.anchor
                );
            }
        }
        Ok(())
    }
}
