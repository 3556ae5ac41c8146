use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

use crate::error::{DatasetError, DatasetResult};
use crate::parsing::csv_parser;
use crate::preprocessing::validator::{DatasetValidator, ValidationResult};
use crate::transformations::cleaning;
use crate::transformations::cleaning::TimePolicy;

/// Result of a preparation run
#[derive(Debug)]
pub struct PrepareResult {
    pub dataframe: DataFrame,
    pub validation: ValidationResult,
    pub total_rows: usize,
    pub cleaned_rows: usize,
    pub dropped_rows: usize,
}

/// Configuration for the preparation pipeline
#[derive(Debug)]
pub struct PrepareConfig {
    pub validate: bool,
    pub time_policy: TimePolicy,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            validate: true,
            time_policy: TimePolicy::Strict,
        }
    }
}

/// Main preparation pipeline.
///
/// Turns a raw incident table into the cleaned table: canonical column
/// names, typed dates, padded clock text with a derived hour, year/month
/// from the occurrence date, and no rows without coordinates. The stage
/// sequence is fixed; each stage is a pure function from
/// [`crate::transformations::cleaning`].
pub struct PreparePipeline {
    config: PrepareConfig,
}

impl PreparePipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PrepareConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Process a raw dataset file into a cleaned, validated DataFrame
    ///
    /// # Arguments
    /// * `dataset_path` - Path to the raw incident CSV
    ///
    /// # Returns
    /// PrepareResult with the cleaned DataFrame, validation report and row
    /// counts
    pub fn process(&self, dataset_path: &Path) -> DatasetResult<PrepareResult> {
        // Step 1: Load the raw table
        let df = self.load_dataset(dataset_path)?;
        self.process_dataframe(df)
    }

    /// Run the cleaning stages over an already-loaded table.
    ///
    /// This is the `prepare(rawTable) -> CleanedTable` contract. Running it
    /// on its own output is a no-op: names are already canonical, dates
    /// already typed, clocks already padded, and no further rows drop.
    pub fn process_dataframe(&self, df: DataFrame) -> DatasetResult<PrepareResult> {
        let total_rows = df.height();

        // Step 2: Canonical column names
        let df = cleaning::normalize_column_names(&df)?;

        // Step 3: Fail fast if the schema is incomplete
        cleaning::validate_schema(&df)?;

        // Step 4: Numeric coercion (LAT, LON, VICT_AGE)
        let df = cleaning::coerce_numeric_columns(&df)?;

        // Step 5: Calendar dates, unparseable cells become null
        let df = cleaning::parse_date_columns(&df)?;

        // Step 6: Padded clock text and hour of day
        let df = cleaning::derive_hour(&df, self.config.time_policy)?;

        // Step 7: Year and month from the occurrence date
        let df = cleaning::derive_year_month(&df)?;

        // Step 8: Drop rows without coordinates (the only row-dropping step)
        let df = cleaning::remove_missing_coordinates(&df)?;

        let cleaned_rows = df.height();
        let dropped_rows = total_rows - cleaned_rows;
        info!(
            "Prepared {} of {} rows ({} dropped for missing coordinates)",
            cleaned_rows, total_rows, dropped_rows
        );

        // Step 9: Quality report (if requested)
        let validation = if self.config.validate {
            let report = DatasetValidator::validate_dataframe(&df);
            for warning in &report.warnings {
                warn!("Data quality: {}", warning);
            }
            for error in &report.errors {
                warn!("Data quality: {}", error);
            }
            report
        } else {
            ValidationResult::new()
        };

        Ok(PrepareResult {
            dataframe: df,
            validation,
            total_rows,
            cleaned_rows,
            dropped_rows,
        })
    }

    /// Load the raw table from file
    fn load_dataset(&self, path: &Path) -> DatasetResult<DataFrame> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| DatasetError::UnsupportedFormat("file has no extension".to_string()))?;

        match extension.to_lowercase().as_str() {
            "csv" => Ok(csv_parser::parse_incident_csv(path)?),
            other => Err(DatasetError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Default for PreparePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to prepare a dataset file
pub fn prepare_dataset(dataset_path: &Path, validate: bool) -> DatasetResult<PrepareResult> {
    let config = PrepareConfig {
        validate,
        ..PrepareConfig::default()
    };

    let pipeline = PreparePipeline::with_config(config);
    pipeline.process(dataset_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema;

    fn raw_frame() -> DataFrame {
        df!(
            "Date Occ" => [
                Some("01/05/2021 12:00:00 AM"),
                Some("01/20/2021 12:00:00 AM"),
                Some("02/01/2021 12:00:00 AM"),
                None,
            ],
            "Date Rptd" => [
                Some("01/06/2021 12:00:00 AM"),
                Some("01/21/2021 12:00:00 AM"),
                Some("02/02/2021 12:00:00 AM"),
                Some("03/01/2021 12:00:00 AM"),
            ],
            "Time Occ" => [930i64, 5, 2215, 1200],
            "Lat" => [Some(34.05), Some(34.07), None, Some(34.11)],
            "Lon" => [Some(-118.25), Some(-118.3), Some(-118.38), Some(-118.44)],
            "Area Name" => ["Central", "Hollywood", "Central", "Harbor"],
            "Crm Cd Desc" => ["ROBBERY", "BURGLARY", "ROBBERY", "VANDALISM"],
            "Weapon Desc" => [Some("HAND GUN"), None, None, Some("KNIFE")],
            "Vict Age" => [Some(34i64), Some(27), None, Some(51)],
            "Vict Sex" => ["F", "M", "M", "X"],
            "Vict Descent" => ["H", "W", "B", "H"],
            "Status Desc" => ["Invest Cont", "Adult Arrest", "Invest Cont", "Invest Cont"],
        )
        .unwrap()
    }

    #[test]
    fn test_process_dataframe_basic() {
        let pipeline = PreparePipeline::new();
        let result = pipeline.process_dataframe(raw_frame()).unwrap();

        assert_eq!(result.total_rows, 4);
        assert_eq!(result.cleaned_rows, 3);
        assert_eq!(result.dropped_rows, 1);
        assert!(result.validation.is_valid);

        let df = &result.dataframe;
        assert_eq!(df.column(schema::LAT).unwrap().null_count(), 0);
        assert_eq!(df.column(schema::LON).unwrap().null_count(), 0);
        assert_eq!(df.column(schema::DATE_OCC).unwrap().dtype(), &DataType::Date);

        let hours = df.column(schema::HOUR).unwrap().i32().unwrap();
        assert_eq!(hours.get(0), Some(9));
        assert_eq!(hours.get(1), Some(0));
        assert_eq!(hours.get(2), Some(22));
    }

    #[test]
    fn test_process_dataframe_is_idempotent() {
        let pipeline = PreparePipeline::new();
        let first = pipeline.process_dataframe(raw_frame()).unwrap();
        let second = pipeline.process_dataframe(first.dataframe.clone()).unwrap();

        assert_eq!(second.dropped_rows, 0);
        assert_eq!(second.cleaned_rows, first.cleaned_rows);
        assert_eq!(
            first.dataframe.get_column_names(),
            second.dataframe.get_column_names()
        );
        assert!(first.dataframe.equals_missing(&second.dataframe));
    }

    #[test]
    fn test_process_dataframe_missing_column_fails_fast() {
        let df = df!(
            "Date Occ" => ["01/05/2021 12:00:00 AM"],
            "Time Occ" => [930i64],
            "Lat" => [34.05],
            "Lon" => [-118.25],
        )
        .unwrap();

        let pipeline = PreparePipeline::new();
        let err = pipeline.process_dataframe(df).unwrap_err();

        match err {
            DatasetError::MissingColumns(missing) => {
                assert!(missing.contains(&"AREA_NAME".to_string()));
                assert!(missing.contains(&"STATUS_DESC".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_policy_rejects_bad_clock() {
        let mut df = raw_frame();
        df.with_column(Column::new(
            "Time Occ".into(),
            ["0930", "lunchtime", "2215", "1200"],
        ))
        .unwrap();

        let pipeline = PreparePipeline::new();
        let err = pipeline.process_dataframe(df).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedTime { count: 1, .. }));
    }

    #[test]
    fn test_nullable_policy_nulls_bad_clock() {
        let mut df = raw_frame();
        df.with_column(Column::new(
            "Time Occ".into(),
            ["0930", "lunchtime", "2215", "1200"],
        ))
        .unwrap();

        let config = PrepareConfig {
            validate: true,
            time_policy: TimePolicy::Nullable,
        };
        let pipeline = PreparePipeline::with_config(config);
        let result = pipeline.process_dataframe(df).unwrap();

        assert!(result.validation.is_valid);
        assert_eq!(result.validation.stats.null_hours, 1);
        assert!(result
            .validation
            .warnings
            .iter()
            .any(|w| w.contains("no derivable hour")));
    }

    #[test]
    fn test_unsupported_extension() {
        let pipeline = PreparePipeline::new();
        let err = pipeline.process(Path::new("incidents.xlsx")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(_)));
    }
}
