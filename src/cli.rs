//! Command-line interface definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Subscriptions export filename, fixed by the upstream export job
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions.csv";
/// Marketing costs export filename, fixed by the upstream export job
pub const MARKETING_FILE: &str = "marketing_costs.csv";
/// Leads export filename, fixed by the upstream export job
pub const LEADS_FILE: &str = "leads.csv";

/// ROI chart output filename
pub const ROI_CHART_FILE: &str = "marketing_roi.png";
/// Funnel chart output filename
pub const FUNNEL_CHART_FILE: &str = "sales_funnel.png";

/// Business analytics CLI producing ROI and sales-funnel charts from CSV exports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the input CSV files
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the chart images are written to (created if missing)
    #[arg(short, long, default_value = "images")]
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Path to the subscriptions CSV under the data directory
    pub fn subscriptions_path(&self) -> PathBuf {
        self.data_dir.join(SUBSCRIPTIONS_FILE)
    }

    /// Path to the marketing costs CSV under the data directory
    pub fn marketing_path(&self) -> PathBuf {
        self.data_dir.join(MARKETING_FILE)
    }

    /// Path to the leads CSV under the data directory
    pub fn leads_path(&self) -> PathBuf {
        self.data_dir.join(LEADS_FILE)
    }

    /// Output path for the ROI chart
    pub fn roi_chart_path(&self) -> PathBuf {
        self.output_dir.join(ROI_CHART_FILE)
    }

    /// Output path for the funnel chart
    pub fn funnel_chart_path(&self) -> PathBuf {
        self.output_dir.join(FUNNEL_CHART_FILE)
    }
}
