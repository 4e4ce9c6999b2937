//! Chart rendering functions using Plotters

use std::fs;
use std::path::Path;

use plotters::prelude::*;

use crate::funnel::StageCount;
use crate::roi::RoiRow;

/// Series colors for the ROI comparison chart
const REVENUE_COLOR: RGBColor = RGBColor(46, 204, 113);
const SPEND_COLOR: RGBColor = RGBColor(231, 76, 60);

/// Viridis-style palette for the funnel stages
const STAGE_COLORS: [RGBColor; 4] = [
    RGBColor(68, 1, 84),
    RGBColor(49, 104, 142),
    RGBColor(53, 183, 121),
    RGBColor(253, 231, 37),
];

/// Create the parent directory of a chart path if it does not exist
fn ensure_output_dir(output_path: &Path) -> crate::Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Render revenue vs ad spend as side-by-side bars per country
///
/// Overwrites any existing file at `output_path`. An empty table skips
/// rendering with a warning.
pub fn plot_roi_chart(rows: &[RoiRow], output_path: &Path) -> crate::Result<()> {
    if rows.is_empty() {
        log::warn!("ROI table is empty, skipping {}", output_path.display());
        return Ok(());
    }

    ensure_output_dir(output_path)?;

    let y_max = rows
        .iter()
        .flat_map(|row| [row.monthly_revenue, row.total_ads_spend])
        .fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = rows.len() as f64 - 0.5;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Revenue vs Marketing Spend", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|x| {
            // Ticks land on the integer country positions
            let idx = x.round();
            if (x - idx).abs() < 0.05 && idx >= 0.0 && (idx as usize) < rows.len() {
                rows[idx as usize].country.clone()
            } else {
                String::new()
            }
        })
        .y_desc("Amount in USD ($)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x - 0.35, 0.0), (x - 0.02, row.monthly_revenue)],
                REVENUE_COLOR.filled(),
            )
        }))?
        .label("Total Revenue")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], REVENUE_COLOR.filled()));

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.02, 0.0), (x + 0.35, row.total_ads_spend)],
                SPEND_COLOR.filled(),
            )
        }))?
        .label("Ad Spend")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SPEND_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("✓ Successfully saved: {}", output_path.display());

    Ok(())
}

/// Render the funnel as horizontal bars, first stage at the top
///
/// Each bar is annotated with its literal lead count. Overwrites any existing
/// file at `output_path`.
pub fn plot_funnel_chart(counts: &[StageCount], output_path: &Path) -> crate::Result<()> {
    if counts.is_empty() {
        log::warn!("funnel table is empty, skipping {}", output_path.display());
        return Ok(());
    }

    ensure_output_dir(output_path)?;

    let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
    let x_max = if max_count > 0.0 { max_count * 1.15 } else { 1.0 };
    let n_stages = counts.len() as i32;

    let root = BitMapBackend::new(output_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sales Funnel Distribution", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(220)
        .build_cartesian_2d(0f64..x_max, (0..n_stages).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Number of Leads")
        .axis_desc_style(("sans-serif", 15))
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(row) | SegmentValue::Exact(row) => stage_for_row(counts, *row),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    for (i, stage) in counts.iter().enumerate() {
        // Row 0 is the bottom of the chart, so the first stage gets the top row
        let row = n_stages - 1 - i as i32;
        let color = STAGE_COLORS[i % STAGE_COLORS.len()];

        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (stage.count as f64, SegmentValue::Exact(row + 1)),
            ],
            color.filled(),
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            stage.count.to_string(),
            (
                stage.count as f64 + x_max * 0.01,
                SegmentValue::CenterOf(row),
            ),
            ("sans-serif", 18).into_font().style(FontStyle::Bold),
        )))?;
    }

    root.present()?;
    println!("✓ Successfully saved: {}", output_path.display());

    Ok(())
}

/// Stage label for a chart row, accounting for the reversed draw order
fn stage_for_row(counts: &[StageCount], row: i32) -> String {
    let idx = counts.len() as i32 - 1 - row;
    if idx >= 0 && (idx as usize) < counts.len() {
        counts[idx as usize].stage.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funnel::FUNNEL_STAGES;
    use tempfile::tempdir;

    fn sample_roi_rows() -> Vec<RoiRow> {
        vec![
            RoiRow {
                country: "CA".to_string(),
                monthly_revenue: 50.0,
                total_ads_spend: 25.0,
                roi_ratio: 2.0,
            },
            RoiRow {
                country: "US".to_string(),
                monthly_revenue: 100.0,
                total_ads_spend: 50.0,
                roi_ratio: 2.0,
            },
        ]
    }

    fn sample_funnel_counts() -> Vec<StageCount> {
        FUNNEL_STAGES
            .iter()
            .enumerate()
            .map(|(i, &stage)| StageCount {
                stage,
                count: (FUNNEL_STAGES.len() - i) as u64 * 10,
            })
            .collect()
    }

    #[test]
    fn test_plot_roi_chart() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("marketing_roi.png");

        plot_roi_chart(&sample_roi_rows(), &output_path).unwrap();

        assert!(output_path.exists());
        assert!(output_path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_plot_roi_chart_creates_output_dir() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("images").join("marketing_roi.png");

        plot_roi_chart(&sample_roi_rows(), &output_path).unwrap();

        assert!(output_path.exists());
    }

    #[test]
    fn test_plot_roi_chart_skips_empty_table() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("marketing_roi.png");

        plot_roi_chart(&[], &output_path).unwrap();

        assert!(!output_path.exists());
    }

    #[test]
    fn test_plot_funnel_chart() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("sales_funnel.png");

        plot_funnel_chart(&sample_funnel_counts(), &output_path).unwrap();

        assert!(output_path.exists());
        assert!(output_path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_plot_funnel_chart_all_zero_counts() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("sales_funnel.png");

        let counts: Vec<StageCount> = FUNNEL_STAGES
            .iter()
            .map(|&stage| StageCount { stage, count: 0 })
            .collect();

        plot_funnel_chart(&counts, &output_path).unwrap();

        assert!(output_path.exists());
    }

    #[test]
    fn test_plot_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("marketing_roi.png");

        std::fs::write(&output_path, b"stale").unwrap();
        plot_roi_chart(&sample_roi_rows(), &output_path).unwrap();

        assert!(output_path.metadata().unwrap().len() > 5);
    }
}
