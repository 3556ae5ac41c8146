use polars::prelude::*;
use std::path::Path;

/// Parse a CSV file into a Polars DataFrame.
///
/// The file must carry a header row; column names and cell types are taken
/// as-is and canonicalized later by the cleaning stages.
pub fn parse_incident_csv(csv_path: &Path) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
}
