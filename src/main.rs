use anyhow::Result;
use std::env;

use inserter::plan::DEFAULT_PLAN_PATH;
use inserter::types::Plan;
use inserter::{logging, report, runner};

fn main() -> Result<()> {
    logging::init_logging();

    // Only argument is an optional plan path
    let plan_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PLAN_PATH.to_string());

    let plan = Plan::load(&plan_path)?;
    tracing::info!(plan = %plan_path, documents = plan.documents.len(), "plan loaded");

    report::print_header(plan.documents.len(), plan.rule_count());
    let reports = runner::run_plan(&plan)?;
    report::print_reports(&reports);

    Ok(())
}
