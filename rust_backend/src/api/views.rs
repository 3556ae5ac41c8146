//! Bundled dashboard views.
//!
//! The renderer crosses the boundary once: [`DashboardViews`] computes every
//! view over a cleaned table and serializes as a single JSON document.

use anyhow::Context;
use log::debug;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::api::types::{
    AgeDistribution, CorrelationMatrix, CrossTab, DatasetSummary, FrequencyEntry,
    HourDistribution, MonthlyCount, SeasonalMatrix, StatusShare,
};
use crate::core::domain::CrimeIncident;
use crate::parsing::dataframe_to_incidents;
use crate::services;

/// Every dashboard view computed over one cleaned dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViews {
    /// Shape and per-column profile of the cleaned table
    pub summary: DatasetSummary,
    /// Incident counts per calendar month, chronological
    pub monthly_counts: Vec<MonthlyCount>,
    /// Hour-of-day values and 24 bucket counts
    pub hour_distribution: HourDistribution,
    /// Year-by-month pivot, zero-filled
    pub seasonal_matrix: SeasonalMatrix,
    /// Ten most frequent reporting areas
    pub top_areas: Vec<FrequencyEntry>,
    /// Ten most frequent crime types
    pub top_crime_types: Vec<FrequencyEntry>,
    /// Ten most frequent weapon descriptions
    pub top_weapons: Vec<FrequencyEntry>,
    /// Ten most frequent victim descent codes
    pub top_victim_descents: Vec<FrequencyEntry>,
    /// Full victim-sex frequency table
    pub victim_sex_counts: Vec<FrequencyEntry>,
    /// Case-status counts with part-of-whole fractions
    pub status_shares: Vec<StatusShare>,
    /// Victim ages and their summary statistics
    pub age_distribution: AgeDistribution,
    /// Status cross-tab over the five most frequent crime types
    pub status_crime_crosstab: CrossTab,
    /// Pearson correlation matrix over the numeric columns
    pub correlation: CorrelationMatrix,
}

impl DashboardViews {
    /// Compute every view over a cleaned table.
    ///
    /// The table is converted to typed records once and all record-based
    /// views share that pass.
    pub fn from_dataframe(df: &DataFrame) -> anyhow::Result<Self> {
        let incidents =
            dataframe_to_incidents(df).context("Failed to convert cleaned table to records")?;
        Ok(Self::from_records(df, &incidents))
    }

    /// Compute every view from a cleaned table and its typed records.
    pub fn from_records(df: &DataFrame, incidents: &[CrimeIncident]) -> Self {
        debug!(
            "Computing dashboard views over {} records ({} columns)",
            incidents.len(),
            df.width()
        );
        DashboardViews {
            summary: services::compute_dataset_summary(df),
            monthly_counts: services::compute_monthly_counts(incidents),
            hour_distribution: services::compute_hour_distribution(incidents),
            seasonal_matrix: services::compute_seasonal_matrix(incidents),
            top_areas: services::top_areas(incidents, services::DEFAULT_TOP_N),
            top_crime_types: services::top_crime_types(incidents, services::DEFAULT_TOP_N),
            top_weapons: services::top_weapons(incidents, services::DEFAULT_TOP_N),
            top_victim_descents: services::top_victim_descents(incidents, services::DEFAULT_TOP_N),
            victim_sex_counts: services::victim_sex_counts(incidents),
            status_shares: services::status_shares(incidents),
            age_distribution: services::compute_age_distribution(incidents),
            status_crime_crosstab: services::compute_status_crime_crosstab(
                incidents,
                services::DEFAULT_CRIME_TYPES,
            ),
            correlation: services::compute_correlation_matrix(incidents),
        }
    }

    /// Serialize the whole bundle as one JSON document.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("Failed to serialize dashboard views")
    }
}
