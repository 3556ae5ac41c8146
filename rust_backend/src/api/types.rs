//! Renderer-facing Data Transfer Objects (DTOs).
//!
//! This module defines the flat view types handed across the dashboard
//! boundary. They are isolated from the internal Polars machinery so the
//! renderer never sees a `DataFrame`, only plain rows and counts.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: String labels, f64/usize numbers, `NaiveDate` dates
//! 2. **Flat Structures**: Avoid deep nesting, optimize for chart ergonomics
//! 3. **Serializable**: Every type derives `Serialize`/`Deserialize` so the
//!    boundary can be JSON
//! 4. **Documented**: Each field should be clear to dashboard authors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Temporal Views
// =========================================================

/// Incident count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar year the incidents occurred in
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// First day of the month, for plotting on a date axis
    pub month_start: NaiveDate,
    /// Number of incidents in this month
    pub count: usize,
}

/// Hour-of-day distribution over the cleaned dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourDistribution {
    /// Raw hour values in row order, one per incident with a derivable hour
    pub values: Vec<u32>,
    /// Counts per hour bucket, index = hour (0-23)
    pub counts: [usize; 24],
}

/// One year's row of the seasonal matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRow {
    /// Calendar year
    pub year: i32,
    /// Counts per month, index 0 = January through index 11 = December
    pub counts: [usize; 12],
}

/// Year-by-month incident pivot with missing cells zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalMatrix {
    /// Column labels (months 1-12)
    pub months: [u32; 12],
    /// One row per observed year, ascending
    pub rows: Vec<SeasonalRow>,
}

// =========================================================
// Frequency Views
// =========================================================

/// A categorical value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// The category label
    pub value: String,
    /// Number of incidents carrying this label
    pub count: usize,
}

/// Share of incidents per case status, for part-of-whole charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    /// Status description label
    pub status: String,
    /// Number of incidents with this status
    pub count: usize,
    /// Fraction of all status-bearing incidents (0.0-1.0)
    pub fraction: f64,
}

// =========================================================
// Distribution Views
// =========================================================

/// Summary statistics for a numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median value
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
    /// Sum of all observations
    pub sum: f64,
}

/// Victim-age sample plus its summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    /// Non-null ages in row order, ready for histogram binning
    pub values: Vec<f64>,
    /// Summary statistics over `values`
    pub stats: DistributionStats,
}

// =========================================================
// Cross-Tabulation Views
// =========================================================

/// One crime type's row of the status cross-tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTabRow {
    /// Crime type description
    pub crime_type: String,
    /// Counts aligned with the parent table's `statuses`, zero-filled
    pub counts: Vec<usize>,
}

/// Status-by-crime-type contingency table over the most frequent crime types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTab {
    /// Status column labels, sorted alphabetically
    pub statuses: Vec<String>,
    /// One row per crime type, ordered by overall frequency rank
    pub rows: Vec<CrossTabRow>,
}

// =========================================================
// Dataset Overview Views
// =========================================================

/// Per-column profile of the cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Polars dtype rendered as text (e.g. "str", "f64", "date")
    pub dtype: String,
    /// Number of null cells in this column
    pub null_count: usize,
}

/// Shape and per-column profile of the cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// One entry per column, in table order
    pub column_summaries: Vec<ColumnSummary>,
}

/// Pearson correlation matrix over the numeric columns.
///
/// Cells are `None` where fewer than two pairwise-complete observations
/// exist or where one of the columns has zero variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Column labels, shared by both axes
    pub columns: Vec<String>,
    /// Row-major coefficients, `values[i][j]` pairs `columns[i]` with `columns[j]`
    pub values: Vec<Vec<Option<f64>>>,
}
