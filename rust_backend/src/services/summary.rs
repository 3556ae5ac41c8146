use polars::prelude::*;

use crate::api::{ColumnSummary, DatasetSummary};

/// Profile the cleaned table's shape and per-column null counts.
///
/// One entry per column in table order, with the Polars dtype rendered as
/// text so the renderer can show it verbatim.
pub fn compute_dataset_summary(df: &DataFrame) -> DatasetSummary {
    let column_summaries = df
        .get_columns()
        .iter()
        .map(|column| ColumnSummary {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            null_count: column.null_count(),
        })
        .collect();

    DatasetSummary {
        rows: df.height(),
        columns: df.width(),
        column_summaries,
    }
}
