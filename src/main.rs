//! MetricsForge: business analytics CLI producing ROI and funnel charts
//!
//! This is the main entrypoint that orchestrates data loading, aggregation,
//! and chart rendering for the two independent analysis flows.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::error;
use metricsforge::{analyze_funnel, analyze_roi, viz, Args};

fn main() -> Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("--- Business Analytics Pipeline ---");

    let start_time = Instant::now();

    // The flows are independent: a failure in one only skips its own chart
    run_roi_flow(&args);
    run_funnel_flow(&args);

    let elapsed = start_time.elapsed();
    println!(
        "\nProcessing complete in {:.2}s. Check {} for the charts.",
        elapsed.as_secs_f64(),
        args.output_dir.display()
    );

    Ok(())
}

/// Run the revenue vs marketing spend analysis and render its chart
fn run_roi_flow(args: &Args) {
    if args.verbose {
        println!("\nStep 1: Revenue vs marketing spend");
        println!("  Subscriptions file: {}", args.subscriptions_path().display());
        println!("  Marketing file: {}", args.marketing_path().display());
    }

    let rows = match analyze_roi(&args.subscriptions_path(), &args.marketing_path()) {
        Ok(rows) => rows,
        Err(e) => {
            error!("ROI analysis failed: {e:#}");
            return;
        }
    };

    println!("✓ ROI table aggregated: {} countries", rows.len());
    if args.verbose {
        for row in &rows {
            println!(
                "  {}: revenue={:.2} spend={:.2} roi={:.2}",
                row.country, row.monthly_revenue, row.total_ads_spend, row.roi_ratio
            );
        }
    }

    if let Err(e) = viz::plot_roi_chart(&rows, &args.roi_chart_path()) {
        error!("failed to render ROI chart: {e:#}");
    }
}

/// Run the sales funnel analysis and render its chart
fn run_funnel_flow(args: &Args) {
    if args.verbose {
        println!("\nStep 2: Sales funnel distribution");
        println!("  Leads file: {}", args.leads_path().display());
    }

    let counts = match analyze_funnel(&args.leads_path()) {
        Ok(counts) => counts,
        Err(e) => {
            error!("funnel analysis failed: {e:#}");
            return;
        }
    };

    let total: u64 = counts.iter().map(|c| c.count).sum();
    println!("✓ Funnel counted: {} leads across {} stages", total, counts.len());
    if args.verbose {
        for count in &counts {
            println!("  {}: {}", count.stage, count.count);
        }
    }

    if let Err(e) = viz::plot_funnel_chart(&counts, &args.funnel_chart_path()) {
        error!("failed to render funnel chart: {e:#}");
    }
}
