//! Data transformation and cleaning stages.
//!
//! This module provides the pure table transformations the preparation
//! pipeline is built from, plus record-level filtering helpers. Every stage
//! takes an immutable DataFrame and returns a new one, so each step can be
//! unit-tested on its own.
//!
//! # Modules
//!
//! - [`cleaning`]: Column normalization, schema validation, date/hour/year
//!   derivation, coordinate filtering
//! - [`filtering`]: Filter typed incident records by various criteria
//!
//! # Example
//!
//! ```no_run
//! use cii_rust::transformations::{normalize_column_names, remove_missing_coordinates};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> Result<(), PolarsError> {
//! // Canonical column names
//! let renamed = normalize_column_names(&df)?;
//!
//! // Drop rows without coordinates
//! let cleaned = remove_missing_coordinates(&renamed)?;
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{
    coerce_numeric_columns, derive_hour, derive_year_month, normalize_column_names,
    parse_date_columns, remove_missing_coordinates, validate_schema, TimePolicy,
};
pub use filtering::{filter_by_area, filter_by_hour_range, filter_by_year, filter_incidents};
