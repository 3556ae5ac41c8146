//! Dataset validation with detailed error and warning reporting.
//!
//! This module checks a cleaned incident table (or a set of typed records)
//! for completeness and data quality: schema presence, hour-range
//! violations, coordinate gaps, and null counts worth surfacing. Errors
//! mean an invariant of the cleaned table is broken; warnings flag data
//! quality findings that do not stop processing.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::domain::CrimeIncident;
use crate::core::schema;

/// Validation outcome with categorized issues and statistics.
///
/// Errors make `is_valid` false, while warnings are informational and do
/// not fail validation.
///
/// # Fields
///
/// * `is_valid` - `false` if any errors were found, `true` otherwise
/// * `errors` - Broken invariants (e.g. missing columns, hour out of range)
/// * `warnings` - Data quality findings (e.g. unparseable dates)
/// * `stats` - Summary statistics about the validated table
///
/// # Examples
///
/// ```
/// use cii_rust::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Missing required column: LAT".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
///
/// # Fields
///
/// * `total_rows` - Rows in the validated table
/// * `null_dates_occurred` - Rows whose DATE_OCC is null
/// * `null_dates_reported` - Rows whose DATE_RPTD is null
/// * `null_hours` - Rows with no derivable hour (nullable time policy)
/// * `out_of_range_hours` - Hour values outside 0-23
/// * `missing_coordinates` - Rows lacking latitude or longitude
/// * `null_victim_ages` - Rows with no victim age
/// * `distinct_areas` - Distinct area names
/// * `distinct_crime_types` - Distinct crime descriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_rows: usize,
    pub null_dates_occurred: usize,
    pub null_dates_reported: usize,
    pub null_hours: usize,
    pub out_of_range_hours: usize,
    pub missing_coordinates: usize,
    pub null_victim_ages: usize,
    pub distinct_areas: usize,
    pub distinct_crime_types: usize,
}

impl ValidationResult {
    /// Creates a new validation result with valid status and empty
    /// error/warning lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use cii_rust::preprocessing::validator::ValidationResult;
    ///
    /// let result = ValidationResult::new();
    /// assert!(result.is_valid);
    /// assert!(result.errors.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a broken-invariant error and marks the result as invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use cii_rust::preprocessing::validator::ValidationResult;
    ///
    /// let mut result = ValidationResult::new();
    /// result.add_error("HOUR out of range".to_string());
    /// assert!(!result.is_valid);
    /// ```
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a data quality warning without invalidating the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use cii_rust::preprocessing::validator::ValidationResult;
    ///
    /// let mut result = ValidationResult::new();
    /// result.add_warning("3 rows have an unparseable DATE_OCC".to_string());
    /// assert!(result.is_valid);
    /// assert_eq!(result.warnings.len(), 1);
    /// ```
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ValidationStats {
    fn default() -> Self {
        Self {
            total_rows: 0,
            null_dates_occurred: 0,
            null_dates_reported: 0,
            null_hours: 0,
            out_of_range_hours: 0,
            missing_coordinates: 0,
            null_victim_ages: 0,
            distinct_areas: 0,
            distinct_crime_types: 0,
        }
    }
}

/// Validator for cleaned incident data.
///
/// `DatasetValidator` checks both Polars DataFrames and typed
/// [`CrimeIncident`] collections against the invariants the cleaning
/// pipeline guarantees: canonical columns present, hour within 0-23,
/// coordinates populated.
///
/// # Examples
///
/// ```no_run
/// use cii_rust::preprocessing::validator::DatasetValidator;
/// use polars::prelude::*;
///
/// # fn example(df: &DataFrame) {
/// let result = DatasetValidator::validate_dataframe(df);
/// if !result.is_valid {
///     eprintln!("Validation failed: {:?}", result.errors);
/// }
/// println!("Validated {} rows", result.stats.total_rows);
/// # }
/// ```
pub struct DatasetValidator;

impl DatasetValidator {
    /// Validates a cleaned incident DataFrame.
    ///
    /// Checks performed:
    /// - Presence of every canonical and derived column
    /// - HOUR values within 0-23
    /// - Non-null latitude/longitude
    /// - Null counts for dates, hours and victim age (warnings/stats only)
    /// - Distinct-value counts for the main categorical columns
    ///
    /// # Arguments
    ///
    /// * `df` - Cleaned DataFrame to validate
    ///
    /// # Returns
    ///
    /// `ValidationResult` with errors for broken invariants and warnings
    /// for data quality findings.
    pub fn validate_dataframe(df: &DataFrame) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.stats.total_rows = df.height();

        // Check expected columns first; everything else dereferences them
        let expected = schema::REQUIRED_COLUMNS
            .iter()
            .copied()
            .chain(schema::DERIVED_COLUMNS.iter().copied());
        for col_name in expected {
            if df.column(col_name).is_err() {
                result.add_error(format!("Missing required column: {}", col_name));
            }
        }

        if !result.is_valid {
            return result;
        }

        // Date nulls are tolerated, but worth surfacing
        if let Ok(date_col) = df.column(schema::DATE_OCC) {
            result.stats.null_dates_occurred = date_col.null_count();
            if result.stats.null_dates_occurred > 0 {
                result.add_warning(format!(
                    "{} rows have an unparseable DATE_OCC (year/month are null there)",
                    result.stats.null_dates_occurred
                ));
            }
        }
        if let Ok(date_col) = df.column(schema::DATE_RPTD) {
            result.stats.null_dates_reported = date_col.null_count();
            if result.stats.null_dates_reported > 0 {
                result.add_warning(format!(
                    "{} rows have an unparseable DATE_RPTD",
                    result.stats.null_dates_reported
                ));
            }
        }

        // Hour range invariant
        if let Ok(hour_col) = df.column(schema::HOUR) {
            result.stats.null_hours = hour_col.null_count();
            if result.stats.null_hours > 0 {
                result.add_warning(format!(
                    "{} rows have no derivable hour",
                    result.stats.null_hours
                ));
            }

            if let Ok(hour_series) = hour_col.i32() {
                for val in hour_series.into_iter().flatten() {
                    if !(0..=23).contains(&val) {
                        result.stats.out_of_range_hours += 1;
                        if result.stats.out_of_range_hours <= 5 {
                            result.add_error(format!("HOUR out of range: {}", val));
                        }
                    }
                }

                if result.stats.out_of_range_hours > 5 {
                    result.add_error(format!(
                        "Total out-of-range hours: {} (showing first 5)",
                        result.stats.out_of_range_hours
                    ));
                }
            }
        }

        // Coordinate invariant: the cleaned table never carries null LAT/LON
        if let (Ok(lat_col), Ok(lon_col)) =
            (df.column(schema::LAT), df.column(schema::LON))
        {
            let both_present = &lat_col.is_not_null() & &lon_col.is_not_null();
            let present: usize = both_present.sum().unwrap_or(0) as usize;
            result.stats.missing_coordinates = result.stats.total_rows - present;

            if result.stats.missing_coordinates > 0 {
                result.add_error(format!(
                    "{} rows are missing latitude or longitude",
                    result.stats.missing_coordinates
                ));
            }
        }

        if let Ok(age_col) = df.column(schema::VICT_AGE) {
            result.stats.null_victim_ages = age_col.null_count();
        }

        if let Ok(area_col) = df.column(schema::AREA_NAME) {
            result.stats.distinct_areas = area_col.n_unique().unwrap_or(0);
        }
        if let Ok(crime_col) = df.column(schema::CRM_CD_DESC) {
            result.stats.distinct_crime_types = crime_col.n_unique().unwrap_or(0);
        }

        result
    }

    /// Validates a collection of typed incident records.
    ///
    /// Covers the same invariants as [`validate_dataframe`] on the record
    /// level, for callers that work with [`CrimeIncident`] slices.
    ///
    /// [`validate_dataframe`]: DatasetValidator::validate_dataframe
    pub fn validate_incidents(incidents: &[CrimeIncident]) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_rows = incidents.len();

        for incident in incidents {
            Self::validate_incident(incident, &mut result);
        }

        if result.stats.out_of_range_hours > 5 {
            result.add_error(format!(
                "Total out-of-range hours: {} (showing first 5)",
                result.stats.out_of_range_hours
            ));
        }
        if result.stats.null_hours > 0 {
            result.add_warning(format!(
                "{} rows have no derivable hour",
                result.stats.null_hours
            ));
        }
        if result.stats.null_dates_occurred > 0 {
            result.add_warning(format!(
                "{} rows have an unparseable DATE_OCC (year/month are null there)",
                result.stats.null_dates_occurred
            ));
        }

        use std::collections::HashSet;
        let areas: HashSet<&str> = incidents
            .iter()
            .filter_map(|i| i.area_name.as_deref())
            .collect();
        let crime_types: HashSet<&str> = incidents
            .iter()
            .filter_map(|i| i.crime_description.as_deref())
            .collect();
        result.stats.distinct_areas = areas.len();
        result.stats.distinct_crime_types = crime_types.len();

        result
    }

    fn validate_incident(incident: &CrimeIncident, result: &mut ValidationResult) {
        if incident.date_occurred.is_none() {
            result.stats.null_dates_occurred += 1;
        }
        if incident.date_reported.is_none() {
            result.stats.null_dates_reported += 1;
        }
        if incident.victim_age.is_none() {
            result.stats.null_victim_ages += 1;
        }

        match incident.hour {
            None => result.stats.null_hours += 1,
            Some(hour) if hour > 23 => {
                result.stats.out_of_range_hours += 1;
                if result.stats.out_of_range_hours <= 5 {
                    result.add_error(format!("HOUR out of range: {}", hour));
                }
            }
            Some(_) => {}
        }

        if !incident.latitude.is_finite() || !incident.longitude.is_finite() {
            result.stats.missing_coordinates += 1;
            if result.stats.missing_coordinates <= 5 {
                result.add_error(format!(
                    "Non-finite coordinates: ({}, {})",
                    incident.latitude, incident.longitude
                ));
            }
        }
    }
}
