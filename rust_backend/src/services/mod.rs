//! Service layer for aggregate view computation.
//!
//! This module contains the pure functions that turn cleaned incident data
//! into the flat view DTOs consumed by the dashboard renderer. Services
//! never mutate their input; each takes typed records (or the cleaned
//! table) and returns a freshly computed view.

pub mod correlation;
pub mod crosstab;
pub mod distributions;
pub mod frequency;
pub mod summary;
pub mod temporal;

pub use correlation::compute_correlation_matrix;
pub use crosstab::{compute_status_crime_crosstab, DEFAULT_CRIME_TYPES};
pub use distributions::{compute_age_distribution, compute_stats};
pub use frequency::{
    status_shares, top_areas, top_crime_types, top_victim_descents, top_weapons,
    victim_sex_counts, DEFAULT_TOP_N,
};
pub use summary::compute_dataset_summary;
pub use temporal::{compute_hour_distribution, compute_monthly_counts, compute_seasonal_matrix};
