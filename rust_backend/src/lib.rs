//! Crime Incident Insights - incident data preparation and dashboard views.
//!
//! Cleans a raw incident CSV into an analysis-ready table and computes the
//! flat aggregate views the dashboard renders.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;
pub mod transformations;

pub use api::DashboardViews;
pub use config::PrepareSettings;
pub use error::{DatasetError, DatasetResult};
pub use preprocessing::{prepare_dataset, PrepareConfig, PreparePipeline, PrepareResult};
pub use transformations::TimePolicy;
