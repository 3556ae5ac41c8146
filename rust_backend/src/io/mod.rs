//! High-level data loading utilities.
//!
//! This module provides loaders that combine parsing logic with format
//! detection, error context, and source checksumming, plus the writer for
//! the cleaned table.
//!
//! # Example
//!
//! ```no_run
//! use cii_rust::io::loaders::DatasetLoader;
//! use std::path::Path;
//!
//! let result = DatasetLoader::load_from_file(Path::new("crime_data.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} rows (sha256 {})", result.num_rows, result.checksum);
//! ```

pub mod loaders;


pub use loaders::{
    file_checksum, write_cleaned_csv, DatasetLoadResult, DatasetLoader, DatasetSourceType,
};
