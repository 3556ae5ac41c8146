//! Parsers for raw incident data.
//!
//! This module reads the raw CSV export into a DataFrame and converts
//! cleaned tables into typed incident records.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse the raw incident CSV into a DataFrame
//! - [`records`]: Convert a cleaned DataFrame into [`CrimeIncident`] records
//!
//! # Example
//!
//! ```no_run
//! use cii_rust::parsing::csv_parser::parse_incident_csv;
//! use std::path::Path;
//!
//! let df = parse_incident_csv(Path::new("crime_data.csv"))
//!     .expect("Failed to parse CSV");
//! ```
//!
//! [`CrimeIncident`]: crate::core::domain::CrimeIncident

pub mod csv_parser;
pub mod records;

#[cfg(test)]
mod csv_parser_tests;

pub use records::dataframe_to_incidents;
