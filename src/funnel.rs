//! Sales funnel stage distribution analysis

use std::collections::HashMap;
use std::path::Path;

use crate::data::{self, LEAD_COLUMNS};

/// Funnel stages in pipeline order, first touch to latest
pub const FUNNEL_STAGES: [&str; 4] = [
    "New",
    "Marketing Qualified Lead",
    "Sales Qualified Lead",
    "In Process",
];

/// Lead count for a single funnel stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub stage: &'static str,
    pub count: u64,
}

/// Load the leads table and count statuses per funnel stage
///
/// The output always covers every stage in [`FUNNEL_STAGES`], in that order;
/// stages with no leads report zero and statuses outside the pipeline are
/// dropped.
pub fn analyze_funnel(leads_path: &Path) -> crate::Result<Vec<StageCount>> {
    let leads = data::load_table(leads_path, LEAD_COLUMNS)?;

    let statuses = leads.column("status")?.str()?;
    let mut raw_counts: HashMap<&str, u64> = HashMap::new();
    for status in statuses.into_iter().flatten() {
        *raw_counts.entry(status).or_insert(0) += 1;
    }

    // Reindex onto the fixed stage order with zero-fill
    Ok(FUNNEL_STAGES
        .iter()
        .map(|&stage| StageCount {
            stage,
            count: raw_counts.get(stage).copied().unwrap_or(0),
        })
        .collect())
}
