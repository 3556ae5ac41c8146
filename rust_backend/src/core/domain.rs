//! Domain models for crime incident records.
//!
//! This module provides the core data structure representing one cleaned
//! incident row, used by the aggregate-view services and the record-level
//! filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reported crime after cleaning.
///
/// Instances are produced from the cleaned table, so the cleaning
/// invariants hold here: latitude and longitude are always present,
/// `hour` is within 0-23 when set, and `year`/`month` are set exactly
/// when `date_occurred` is.
///
/// # Fields
///
/// * `date_occurred` - Calendar date the incident happened (None if the raw cell was unparseable)
/// * `date_reported` - Calendar date the incident was reported
/// * `time_occurred` - Clock time as 4-character zero-padded text, e.g. "0930"
/// * `hour` - Hour of day 0-23, derived from the first two characters of `time_occurred`
/// * `year` - Calendar year of `date_occurred`
/// * `month` - Calendar month (1-12) of `date_occurred`
/// * `area_name` - Patrol area name
/// * `crime_description` - Crime code description
/// * `weapon_description` - Weapon description, absent for most incidents
/// * `victim_age` - Victim age in years
/// * `victim_sex` - Victim sex code (e.g. "M", "F", "X")
/// * `victim_descent` - Victim descent code
/// * `status_description` - Investigation status (e.g. "Invest Cont")
/// * `latitude` - Incident latitude, always present
/// * `longitude` - Incident longitude, always present
///
/// # Examples
///
/// ```
/// use cii_rust::core::domain::CrimeIncident;
/// use chrono::NaiveDate;
///
/// let incident = CrimeIncident {
///     date_occurred: NaiveDate::from_ymd_opt(2021, 3, 14),
///     date_reported: NaiveDate::from_ymd_opt(2021, 3, 15),
///     time_occurred: Some("0930".to_string()),
///     hour: Some(9),
///     year: Some(2021),
///     month: Some(3),
///     area_name: Some("Central".to_string()),
///     crime_description: Some("BURGLARY".to_string()),
///     weapon_description: None,
///     victim_age: Some(34.0),
///     victim_sex: Some("F".to_string()),
///     victim_descent: Some("H".to_string()),
///     status_description: Some("Invest Cont".to_string()),
///     latitude: 34.05,
///     longitude: -118.25,
/// };
///
/// assert_eq!(incident.month_key(), Some((2021, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeIncident {
    pub date_occurred: Option<NaiveDate>,
    pub date_reported: Option<NaiveDate>,
    pub time_occurred: Option<String>,
    pub hour: Option<u32>,
    pub year: Option<i32>,
    pub month: Option<u32>,

    pub area_name: Option<String>,
    pub crime_description: Option<String>,
    pub weapon_description: Option<String>,

    pub victim_age: Option<f64>,
    pub victim_sex: Option<String>,
    pub victim_descent: Option<String>,
    pub status_description: Option<String>,

    pub latitude: f64,
    pub longitude: f64,
}

impl CrimeIncident {
    /// Returns the `(year, month)` grouping key, or `None` when the
    /// occurrence date is unknown.
    ///
    /// Monthly and seasonal aggregates group by this key, so incidents
    /// without a parseable occurrence date fall out of those views.
    ///
    /// # Examples
    ///
    /// ```
    /// use cii_rust::core::domain::CrimeIncident;
    /// use chrono::NaiveDate;
    ///
    /// let mut incident = CrimeIncident {
    ///     date_occurred: NaiveDate::from_ymd_opt(2020, 11, 2),
    ///     date_reported: None,
    ///     time_occurred: None,
    ///     hour: None,
    ///     year: Some(2020),
    ///     month: Some(11),
    ///     area_name: None,
    ///     crime_description: None,
    ///     weapon_description: None,
    ///     victim_age: None,
    ///     victim_sex: None,
    ///     victim_descent: None,
    ///     status_description: None,
    ///     latitude: 34.0,
    ///     longitude: -118.3,
    /// };
    ///
    /// assert_eq!(incident.month_key(), Some((2020, 11)));
    ///
    /// incident.year = None;
    /// assert_eq!(incident.month_key(), None);
    /// ```
    pub fn month_key(&self) -> Option<(i32, u32)> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Some((year, month)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_incident() -> CrimeIncident {
        CrimeIncident {
            date_occurred: NaiveDate::from_ymd_opt(2021, 1, 5),
            date_reported: NaiveDate::from_ymd_opt(2021, 1, 6),
            time_occurred: Some("2215".to_string()),
            hour: Some(22),
            year: Some(2021),
            month: Some(1),
            area_name: Some("Hollywood".to_string()),
            crime_description: Some("ROBBERY".to_string()),
            weapon_description: Some("HAND GUN".to_string()),
            victim_age: Some(41.0),
            victim_sex: Some("M".to_string()),
            victim_descent: Some("W".to_string()),
            status_description: Some("Adult Arrest".to_string()),
            latitude: 34.1,
            longitude: -118.33,
        }
    }

    #[test]
    fn month_key_requires_both_parts() {
        let mut incident = base_incident();
        assert_eq!(incident.month_key(), Some((2021, 1)));

        incident.month = None;
        assert_eq!(incident.month_key(), None);

        incident.month = Some(1);
        incident.year = None;
        assert_eq!(incident.month_key(), None);
    }

    #[test]
    fn serializes_to_flat_json() {
        let incident = base_incident();
        let json = serde_json::to_value(&incident).unwrap();

        assert_eq!(json["hour"], 22);
        assert_eq!(json["latitude"], 34.1);
        assert_eq!(json["weapon_description"], "HAND GUN");
        assert!(json["date_occurred"].is_string());
    }
}
