use crate::core::domain::CrimeIncident;

/// Filter incidents by exact area name
pub fn filter_by_area(incidents: &[CrimeIncident], area: &str) -> Vec<CrimeIncident> {
    incidents
        .iter()
        .filter(|incident| {
            incident
                .area_name
                .as_deref()
                .map(|name| name == area)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Filter incidents by occurrence year
pub fn filter_by_year(incidents: &[CrimeIncident], year: i32) -> Vec<CrimeIncident> {
    incidents
        .iter()
        .filter(|incident| incident.year == Some(year))
        .cloned()
        .collect()
}

/// Filter incidents by inclusive hour-of-day range
pub fn filter_by_hour_range(
    incidents: &[CrimeIncident],
    min_hour: u32,
    max_hour: u32,
) -> Result<Vec<CrimeIncident>, String> {
    if min_hour > max_hour || max_hour > 23 {
        return Err(format!(
            "Invalid hour range: {}-{}. Hours must satisfy 0 <= min <= max <= 23",
            min_hour, max_hour
        ));
    }

    let filtered: Vec<CrimeIncident> = incidents
        .iter()
        .filter(|incident| {
            incident
                .hour
                .map(|hour| hour >= min_hour && hour <= max_hour)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    Ok(filtered)
}

/// Filter incidents by multiple conditions (all optional, combined with AND)
pub fn filter_incidents(
    incidents: &[CrimeIncident],
    area: Option<&str>,
    year: Option<i32>,
    hour_range: Option<(u32, u32)>,
    crime_types: Option<Vec<String>>,
) -> Result<Vec<CrimeIncident>, String> {
    let mut filtered = incidents.to_vec();

    if let Some(area) = area {
        filtered = filter_by_area(&filtered, area);
    }

    if let Some(year) = year {
        filtered = filter_by_year(&filtered, year);
    }

    if let Some((min_hour, max_hour)) = hour_range {
        filtered = filter_by_hour_range(&filtered, min_hour, max_hour)?;
    }

    if let Some(types) = crime_types {
        filtered.retain(|incident| {
            incident
                .crime_description
                .as_ref()
                .map(|description| types.contains(description))
                .unwrap_or(false)
        });
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident(area: &str, year: i32, hour: u32, crime: &str) -> CrimeIncident {
        CrimeIncident {
            date_occurred: NaiveDate::from_ymd_opt(year, 6, 15),
            date_reported: NaiveDate::from_ymd_opt(year, 6, 16),
            time_occurred: Some(format!("{:02}30", hour)),
            hour: Some(hour),
            year: Some(year),
            month: Some(6),
            area_name: Some(area.to_string()),
            crime_description: Some(crime.to_string()),
            weapon_description: None,
            victim_age: Some(30.0),
            victim_sex: Some("M".to_string()),
            victim_descent: Some("H".to_string()),
            status_description: Some("Invest Cont".to_string()),
            latitude: 34.05,
            longitude: -118.25,
        }
    }

    fn sample_incidents() -> Vec<CrimeIncident> {
        vec![
            incident("Central", 2020, 9, "ROBBERY"),
            incident("Hollywood", 2020, 14, "BURGLARY"),
            incident("Central", 2021, 22, "ROBBERY"),
            incident("Harbor", 2021, 2, "VANDALISM"),
        ]
    }

    #[test]
    fn test_filter_by_area() {
        let incidents = sample_incidents();
        let central = filter_by_area(&incidents, "Central");
        assert_eq!(central.len(), 2);
        assert!(central
            .iter()
            .all(|i| i.area_name.as_deref() == Some("Central")));
    }

    #[test]
    fn test_filter_by_year() {
        let incidents = sample_incidents();
        assert_eq!(filter_by_year(&incidents, 2020).len(), 2);
        assert_eq!(filter_by_year(&incidents, 2019).len(), 0);
    }

    #[test]
    fn test_filter_by_hour_range() {
        let incidents = sample_incidents();

        let evening = filter_by_hour_range(&incidents, 18, 23).unwrap();
        assert_eq!(evening.len(), 1);
        assert_eq!(evening[0].hour, Some(22));

        assert!(filter_by_hour_range(&incidents, 10, 24).is_err());
        assert!(filter_by_hour_range(&incidents, 12, 4).is_err());
    }

    #[test]
    fn test_filter_incidents_combines_conditions() {
        let incidents = sample_incidents();

        let filtered = filter_incidents(
            &incidents,
            Some("Central"),
            Some(2021),
            Some((20, 23)),
            Some(vec!["ROBBERY".to_string()]),
        )
        .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].year, Some(2021));

        let none = filter_incidents(&incidents, Some("Central"), Some(2021), Some((0, 5)), None)
            .unwrap();
        assert!(none.is_empty());
    }
}
