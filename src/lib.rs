//! MetricsForge: A Rust CLI application for business analytics reporting
//!
//! This library loads subscription, marketing-spend, and sales-lead CSV
//! exports, computes aggregate metrics (revenue vs ad spend per country,
//! lead counts per funnel stage), and renders each result as a PNG bar chart.

pub mod cli;
pub mod data;
pub mod funnel;
pub mod roi;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::load_table;
pub use funnel::{analyze_funnel, StageCount, FUNNEL_STAGES};
pub use roi::{analyze_roi, compute_roi, RoiRow};
pub use viz::{plot_funnel_chart, plot_roi_chart};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
