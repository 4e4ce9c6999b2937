//! CSV loading with required-column validation using Polars

use std::path::Path;

use polars::prelude::*;

/// Columns the subscriptions export must contain
pub const SUBSCRIPTION_COLUMNS: &[&str] = &["country", "churned", "monthly_revenue"];
/// Columns the marketing costs export must contain
pub const MARKETING_COLUMNS: &[&str] = &["country", "total_ads_spend"];
/// Columns the leads export must contain
pub const LEAD_COLUMNS: &[&str] = &["status"];

/// Load a delimited file with a header row and verify the required columns
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `required_columns` - Column names that must be present in the header
///
/// # Returns
/// * The loaded `DataFrame`, or a descriptive error naming the file and the
///   first missing column
pub fn load_table(path: &Path, required_columns: &[&str]) -> crate::Result<DataFrame> {
    if !path.is_file() {
        anyhow::bail!("input file not found: {}", path.display());
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .collect()?;

    for &column in required_columns {
        if !df.get_column_names().iter().any(|name| *name == column) {
            anyhow::bail!(
                "missing required column '{}' in {}",
                column,
                path.display()
            );
        }
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_table() {
        let file = create_test_csv(&[
            "country,churned,monthly_revenue",
            "US,false,100",
            "CA,true,50",
        ]);

        let df = load_table(file.path(), SUBSCRIPTION_COLUMNS).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let file = create_test_csv(&["country,monthly_revenue", "US,100"]);

        let err = load_table(file.path(), SUBSCRIPTION_COLUMNS).unwrap_err();
        assert!(err.to_string().contains("churned"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_table(Path::new("no_such_dir/leads.csv"), LEAD_COLUMNS).unwrap_err();
        assert!(err.to_string().contains("no_such_dir/leads.csv"));
    }
}
