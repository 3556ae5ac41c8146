use anyhow::{Context, Result};
use log::info;
use polars::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::parsing::csv_parser;

/// Represents the source format of incident data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSourceType {
    Csv,
}

/// Result of loading a raw incident table
#[derive(Debug)]
pub struct DatasetLoadResult {
    pub dataframe: DataFrame,
    pub source_type: DatasetSourceType,
    pub num_rows: usize,
    /// Hex-encoded SHA-256 of the source file, identifying exactly what
    /// a run processed
    pub checksum: String,
}

impl DatasetLoadResult {
    pub fn new(dataframe: DataFrame, source_type: DatasetSourceType, checksum: String) -> Self {
        let num_rows = dataframe.height();
        Self {
            dataframe,
            source_type,
            num_rows,
            checksum,
        }
    }
}

/// Unified interface for loading raw incident tables
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load incident data from a file (dispatches on extension)
    pub fn load_from_file(path: &Path) -> Result<DatasetLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load incident data from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<DatasetLoadResult> {
        let df = csv_parser::parse_incident_csv(csv_path).context("Failed to parse CSV file")?;
        let checksum = file_checksum(csv_path)?;
        info!(
            "Loaded {} rows from {} (sha256 {})",
            df.height(),
            csv_path.display(),
            checksum
        );

        Ok(DatasetLoadResult::new(df, DatasetSourceType::Csv, checksum))
    }
}

/// Hex-encoded SHA-256 of a file's bytes.
pub fn file_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read {} for checksum", path.display()))?;
    let digest = Sha256::digest(&bytes);

    Ok(hex::encode(digest))
}

/// Write a cleaned table as CSV with a header row and no index column.
///
/// Date columns serialize in ISO form so a rewritten file parses back to
/// the same table.
pub fn write_cleaned_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write cleaned CSV to {}", path.display()))?;
    info!("Wrote {} cleaned rows to {}", df.height(), path.display());

    Ok(())
}
