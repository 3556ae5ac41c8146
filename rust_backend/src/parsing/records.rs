use anyhow::{Context, Result};
use polars::prelude::*;

use crate::core::domain::CrimeIncident;
use crate::core::schema;
use crate::transformations::cleaning;

/// Convert a cleaned DataFrame into typed incident records.
///
/// Expects the table produced by the preparation pipeline: canonical column
/// names, derived HOUR/YEAR/MONTH columns, coordinates fully populated.
/// Latitude or longitude missing at any row is an error; every other field
/// maps nulls to `None`.
pub fn dataframe_to_incidents(df: &DataFrame) -> Result<Vec<CrimeIncident>> {
    let height = df.height();

    // Extract columns
    let dates_occurred = cleaning::calendar_cells(df.column(schema::DATE_OCC)?)?;
    let dates_reported = cleaning::calendar_cells(df.column(schema::DATE_RPTD)?)?;

    let hours = df.column(schema::HOUR)?.i32()?;
    let years = df.column(schema::YEAR)?.i32()?;
    let months = df.column(schema::MONTH)?.i32()?;

    let lats = df.column(schema::LAT)?.f64()?;
    let lons = df.column(schema::LON)?.f64()?;

    // Nullable content columns; a fully-null column may carry the null
    // dtype, which reads as all-None here
    let clocks = df.column(schema::TIME_OCC).ok().and_then(|c| c.str().ok());
    let areas = df.column(schema::AREA_NAME).ok().and_then(|c| c.str().ok());
    let crimes = df.column(schema::CRM_CD_DESC).ok().and_then(|c| c.str().ok());
    let weapons = df.column(schema::WEAPON_DESC).ok().and_then(|c| c.str().ok());
    let ages = df.column(schema::VICT_AGE).ok().and_then(|c| c.f64().ok());
    let sexes = df.column(schema::VICT_SEX).ok().and_then(|c| c.str().ok());
    let descents = df
        .column(schema::VICT_DESCENT)
        .ok()
        .and_then(|c| c.str().ok());
    let statuses = df
        .column(schema::STATUS_DESC)
        .ok()
        .and_then(|c| c.str().ok());

    let mut incidents = Vec::with_capacity(height);

    for i in 0..height {
        let latitude = lats
            .get(i)
            .with_context(|| format!("Missing LAT at row {}", i))?;
        let longitude = lons
            .get(i)
            .with_context(|| format!("Missing LON at row {}", i))?;

        let incident = CrimeIncident {
            date_occurred: dates_occurred[i],
            date_reported: dates_reported[i],
            time_occurred: clocks.and_then(|col| col.get(i)).map(|s| s.to_string()),
            hour: hours.get(i).map(|h| h as u32),
            year: years.get(i),
            month: months.get(i).map(|m| m as u32),
            area_name: areas.and_then(|col| col.get(i)).map(|s| s.to_string()),
            crime_description: crimes.and_then(|col| col.get(i)).map(|s| s.to_string()),
            weapon_description: weapons.and_then(|col| col.get(i)).map(|s| s.to_string()),
            victim_age: ages.and_then(|col| col.get(i)),
            victim_sex: sexes.and_then(|col| col.get(i)).map(|s| s.to_string()),
            victim_descent: descents.and_then(|col| col.get(i)).map(|s| s.to_string()),
            status_description: statuses.and_then(|col| col.get(i)).map(|s| s.to_string()),
            latitude,
            longitude,
        };

        incidents.push(incident);
    }

    Ok(incidents)
}
