use std::collections::HashMap;

use crate::api::{FrequencyEntry, StatusShare};
use crate::core::domain::CrimeIncident;

/// Number of entries the ranked categorical views keep by default.
pub const DEFAULT_TOP_N: usize = 10;

/// Count occurrences of a categorical field, most frequent first.
///
/// Nulls are excluded. Ties are broken by first-encountered row order so
/// repeated runs over the same data rank identically.
fn column_counts<F>(incidents: &[CrimeIncident], get_value: F) -> Vec<FrequencyEntry>
where
    F: Fn(&CrimeIncident) -> Option<&str>,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (row, incident) in incidents.iter().enumerate() {
        if let Some(value) = get_value(incident) {
            let entry = counts.entry(value).or_insert((0, row));
            entry.0 += 1; // occurrence count
        }
    }

    let mut entries: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    entries.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });

    entries
        .into_iter()
        .map(|(value, (count, _))| FrequencyEntry {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// The `limit` most frequent reporting areas.
pub fn top_areas(incidents: &[CrimeIncident], limit: usize) -> Vec<FrequencyEntry> {
    let mut entries = column_counts(incidents, |i| i.area_name.as_deref());
    entries.truncate(limit);
    entries
}

/// The `limit` most frequent crime type descriptions.
pub fn top_crime_types(incidents: &[CrimeIncident], limit: usize) -> Vec<FrequencyEntry> {
    let mut entries = column_counts(incidents, |i| i.crime_description.as_deref());
    entries.truncate(limit);
    entries
}

/// The `limit` most frequent weapon descriptions.
pub fn top_weapons(incidents: &[CrimeIncident], limit: usize) -> Vec<FrequencyEntry> {
    let mut entries = column_counts(incidents, |i| i.weapon_description.as_deref());
    entries.truncate(limit);
    entries
}

/// The `limit` most frequent victim descent codes.
pub fn top_victim_descents(incidents: &[CrimeIncident], limit: usize) -> Vec<FrequencyEntry> {
    let mut entries = column_counts(incidents, |i| i.victim_descent.as_deref());
    entries.truncate(limit);
    entries
}

/// Full victim-sex frequency table, no truncation.
pub fn victim_sex_counts(incidents: &[CrimeIncident]) -> Vec<FrequencyEntry> {
    column_counts(incidents, |i| i.victim_sex.as_deref())
}

/// Case-status counts with each status's fraction of the status-bearing total.
pub fn status_shares(incidents: &[CrimeIncident]) -> Vec<StatusShare> {
    let entries = column_counts(incidents, |i| i.status_description.as_deref());
    let total: usize = entries.iter().map(|e| e.count).sum();

    entries
        .into_iter()
        .map(|entry| {
            let fraction = if total > 0 {
                entry.count as f64 / total as f64
            } else {
                0.0
            };
            StatusShare {
                status: entry.value,
                count: entry.count,
                fraction,
            }
        })
        .collect()
}
