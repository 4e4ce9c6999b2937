//! Revenue vs marketing spend (ROI) analysis

use std::path::Path;

use polars::prelude::*;

use crate::data::{self, MARKETING_COLUMNS, SUBSCRIPTION_COLUMNS};

/// One aggregated row of the ROI summary table
#[derive(Debug, Clone, PartialEq)]
pub struct RoiRow {
    /// Country the subscriptions and ad spend belong to
    pub country: String,
    /// Monthly revenue summed over active (non-churned) subscriptions
    pub monthly_revenue: f64,
    /// Total marketing spend for the country
    pub total_ads_spend: f64,
    /// Revenue divided by spend, rounded to 2 decimals
    pub roi_ratio: f64,
}

/// Load both input tables and compute the ROI summary
pub fn analyze_roi(
    subscriptions_path: &Path,
    marketing_path: &Path,
) -> crate::Result<Vec<RoiRow>> {
    let subscriptions = data::load_table(subscriptions_path, SUBSCRIPTION_COLUMNS)?;
    let marketing = data::load_table(marketing_path, MARKETING_COLUMNS)?;
    compute_roi(subscriptions, marketing)
}

/// Aggregate active-subscription revenue by country and join with ad spend
///
/// Countries missing from either table are dropped (inner join). Zero spend
/// is not guarded: the ratio comes out as an IEEE infinity. A non-numeric
/// value in either numeric column aborts with an error (strict cast).
pub fn compute_roi(subscriptions: DataFrame, marketing: DataFrame) -> crate::Result<Vec<RoiRow>> {
    // CSV exports disagree on boolean casing ("false" vs "False"), so the
    // churn filter compares in lowercase string space
    let revenue = subscriptions
        .lazy()
        .filter(
            col("churned")
                .cast(DataType::String)
                .str()
                .to_lowercase()
                .eq(lit("false")),
        )
        .group_by([col("country")])
        .agg([col("monthly_revenue").strict_cast(DataType::Float64).sum()]);

    let joined = revenue
        .join(
            marketing
                .lazy()
                .with_columns([col("total_ads_spend").strict_cast(DataType::Float64)]),
            [col("country")],
            [col("country")],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;

    let countries = joined.column("country")?.str()?;
    let revenues = joined.column("monthly_revenue")?.f64()?;
    let spends = joined.column("total_ads_spend")?.f64()?;

    let mut rows = Vec::with_capacity(joined.height());
    for ((country, revenue), spend) in countries.into_iter().zip(revenues).zip(spends) {
        // The strict casts above keep malformed values out, so a null here
        // means the aggregate table itself is broken
        let (Some(country), Some(revenue), Some(spend)) = (country, revenue, spend) else {
            anyhow::bail!("null value in aggregated ROI table");
        };
        rows.push(RoiRow {
            country: country.to_string(),
            monthly_revenue: revenue,
            total_ads_spend: spend,
            roi_ratio: round2(revenue / spend),
        });
    }

    // Join output order is not stable across runs; sort like the summary table
    rows.sort_by(|a, b| a.country.cmp(&b.country));

    Ok(rows)
}

/// Round to 2 decimal places (infinities pass through unchanged)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
