use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use cii_rust::config::PrepareSettings;
use cii_rust::io::loaders::{write_cleaned_csv, DatasetLoader};
use cii_rust::preprocessing::PreparePipeline;

fn prepare(input: &Path, output: &Path) -> Result<()> {
    println!("Reading incidents from: {}", input.display());
    let loaded = DatasetLoader::load_from_file(input)?;
    println!(
        "Loaded {} rows (sha256 {})",
        loaded.num_rows, loaded.checksum
    );

    let settings =
        PrepareSettings::from_default_location().context("Failed to load settings file")?;
    let config = settings.to_prepare_config()?;

    let result = PreparePipeline::with_config(config)
        .process_dataframe(loaded.dataframe)
        .context("Failed to prepare dataset")?;

    println!(
        "Cleaned {} of {} rows ({} dropped for missing coordinates)",
        result.cleaned_rows, result.total_rows, result.dropped_rows
    );

    for warning in &result.validation.warnings {
        println!("  warning: {}", warning);
    }
    for error in &result.validation.errors {
        eprintln!("  error: {}", error);
    }

    let mut cleaned = result.dataframe;
    write_cleaned_csv(&mut cleaned, output)?;
    println!("Wrote cleaned table to: {}", output.display());

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let input = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: prepare_dataset <input.csv> [output.csv]");
            std::process::exit(2);
        }
    };
    let output = args.get(2).map(PathBuf::from).unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset");
        input.with_file_name(format!("{}_cleaned.csv", stem))
    });

    println!("=== Incident Dataset Preparation ===");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!();

    match prepare(&input, &output) {
        Ok(()) => {
            println!();
            println!("✓ Preparation completed successfully!");
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Preparation failed: {}", e);
            Err(e)
        }
    }
}
