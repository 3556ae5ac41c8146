use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

use crate::core::schema;
use crate::error::{DatasetError, DatasetResult};
use crate::time::{hour_from_clock, pad_clock, parse_calendar_date};

/// How TIME_OCC values that cannot be coerced to an hour are treated.
///
/// The raw export raises on non-numeric clock content, so `Strict` is the
/// default. `Nullable` writes a null hour instead and lets the quality
/// validator report the affected row count; hour-of-day views skip nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePolicy {
    /// Abort the run, reporting the offending row count and a sample value.
    Strict,
    /// Null the hour for offending rows and keep going.
    Nullable,
}

impl Default for TimePolicy {
    fn default() -> Self {
        TimePolicy::Strict
    }
}

/// Rename every column to canonical form (trim, upper-case, collapse
/// internal whitespace to underscores). Idempotent.
pub fn normalize_column_names(df: &DataFrame) -> PolarsResult<DataFrame> {
    let renamed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| schema::normalize_column_name(name.as_str()))
        .collect();

    let mut out = df.clone();
    out.set_column_names(renamed)?;
    Ok(out)
}

/// Check that every required column is present, failing with the full list
/// of missing names. Runs once, right after normalization, so later stages
/// can dereference columns without re-checking.
pub fn validate_schema(df: &DataFrame) -> DatasetResult<()> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let missing: Vec<String> = schema::REQUIRED_COLUMNS
        .iter()
        .filter(|required| !column_names.contains(&required.to_string()))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

/// Cast LAT, LON and VICT_AGE to Float64. Values that do not coerce become
/// null; coordinate nulls are dealt with by [`remove_missing_coordinates`].
pub fn coerce_numeric_columns(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut lazy_df = df.clone().lazy();

    for col_name in [schema::LAT, schema::LON, schema::VICT_AGE] {
        lazy_df = lazy_df.with_column(
            when(col(col_name).is_not_null())
                .then(col(col_name).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(col_name),
        );
    }

    lazy_df.collect()
}

/// Parse DATE_OCC and DATE_RPTD into calendar-date columns. Unparseable
/// cells become null; no row is dropped here. Columns already carrying the
/// date type pass through untouched.
pub fn parse_date_columns(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut out = df.clone();

    for name in [schema::DATE_OCC, schema::DATE_RPTD] {
        let column = out.column(name)?;
        if column.dtype() == &DataType::Date {
            continue;
        }

        let cells = text_cells(column)?;
        let parsed = DateChunked::from_naive_date_options(
            name.into(),
            cells
                .iter()
                .map(|cell| cell.as_deref().and_then(parse_calendar_date)),
        );
        out.with_column(parsed.into_series())?;
    }

    Ok(out)
}

/// Coerce TIME_OCC to 4-character zero-padded text and derive the HOUR
/// column from its first two characters.
///
/// The hour must land in 0-23; anything else (non-numeric content, a null
/// cell, an out-of-range prefix) is governed by the [`TimePolicy`].
pub fn derive_hour(df: &DataFrame, policy: TimePolicy) -> DatasetResult<DataFrame> {
    let column = df.column(schema::TIME_OCC)?;
    let cells = text_cells(column)?;

    let mut padded: Vec<Option<String>> = Vec::with_capacity(cells.len());
    let mut hours: Vec<Option<i32>> = Vec::with_capacity(cells.len());
    let mut malformed = 0usize;
    let mut first_offender: Option<(usize, String)> = None;

    for (row, cell) in cells.iter().enumerate() {
        match cell {
            Some(raw) => {
                let clock = pad_clock(raw);
                match hour_from_clock(&clock) {
                    Some(hour) => {
                        padded.push(Some(clock));
                        hours.push(Some(hour as i32));
                    }
                    None => {
                        malformed += 1;
                        if first_offender.is_none() {
                            first_offender = Some((row, raw.clone()));
                        }
                        padded.push(Some(clock));
                        hours.push(None);
                    }
                }
            }
            None => {
                malformed += 1;
                if first_offender.is_none() {
                    first_offender = Some((row, "<null>".to_string()));
                }
                padded.push(None);
                hours.push(None);
            }
        }
    }

    if policy == TimePolicy::Strict {
        if let Some((row, sample)) = first_offender {
            return Err(DatasetError::MalformedTime {
                count: malformed,
                row,
                sample,
            });
        }
    }

    let mut out = df.clone();
    out.with_column(Column::new(schema::TIME_OCC.into(), padded))?;
    out.with_column(Column::new(schema::HOUR.into(), hours))?;
    Ok(out)
}

/// Derive YEAR and MONTH from DATE_OCC. Rows with a null occurrence date
/// get null year and month; DATE_RPTD never feeds this step.
pub fn derive_year_month(df: &DataFrame) -> PolarsResult<DataFrame> {
    let column = df.column(schema::DATE_OCC)?;
    let dates = calendar_cells(column)?;

    let years: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.year())).collect();
    let months: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.month() as i32)).collect();

    let mut out = df.clone();
    out.with_column(Column::new(schema::YEAR.into(), years))?;
    out.with_column(Column::new(schema::MONTH.into(), months))?;
    Ok(out)
}

/// Remove rows with missing coordinates (LAT or LON). The only stage that
/// drops rows.
pub fn remove_missing_coordinates(df: &DataFrame) -> PolarsResult<DataFrame> {
    let lat_col = df.column(schema::LAT)?;
    let lon_col = df.column(schema::LON)?;

    let lat_not_null = lat_col.is_not_null();
    let lon_not_null = lon_col.is_not_null();

    let mask = &lat_not_null & &lon_not_null;
    df.filter(&mask)
}

/// Read a column as text cells. Non-string columns are stringified; whole
/// floats lose their trailing ".0" so clock values survive the trip.
pub(crate) fn text_cells(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    match column.dtype() {
        DataType::String => Ok(column
            .str()?
            .into_iter()
            .map(|cell| cell.map(str::to_string))
            .collect()),
        DataType::Null => Ok(vec![None; column.len()]),
        DataType::Float64 => Ok(column
            .f64()?
            .into_iter()
            .map(|cell| {
                cell.map(|value| {
                    if value.fract() == 0.0 && value.abs() < 1e15 {
                        format!("{}", value as i64)
                    } else {
                        value.to_string()
                    }
                })
            })
            .collect()),
        _ => {
            let cast = column.cast(&DataType::String)?;
            Ok(cast
                .str()?
                .into_iter()
                .map(|cell| cell.map(str::to_string))
                .collect())
        }
    }
}

/// Read a column as calendar dates, accepting either a date column or raw
/// text cells.
pub(crate) fn calendar_cells(column: &Column) -> PolarsResult<Vec<Option<NaiveDate>>> {
    match column.dtype() {
        DataType::Date => Ok(column.as_materialized_series().date()?.as_date_iter().collect()),
        _ => {
            let cells = text_cells(column)?;
            Ok(cells
                .iter()
                .map(|cell| cell.as_deref().and_then(parse_calendar_date))
                .collect())
        }
    }
}
