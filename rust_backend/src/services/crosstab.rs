use std::collections::{BTreeSet, HashMap};

use crate::api::{CrossTab, CrossTabRow};
use crate::core::domain::CrimeIncident;
use crate::services::frequency::top_crime_types;

/// Number of crime types the status cross-tab keeps by default.
pub const DEFAULT_CRIME_TYPES: usize = 5;

/// Cross-tabulate case status against the `top_n` most frequent crime types.
///
/// Rows follow the crime types' frequency rank, status columns are sorted
/// alphabetically, and combinations never observed stay at zero. Incidents
/// outside the retained crime types, or with a null crime type or status,
/// contribute nothing.
pub fn compute_status_crime_crosstab(incidents: &[CrimeIncident], top_n: usize) -> CrossTab {
    let ranked = top_crime_types(incidents, top_n);
    let retained: HashMap<&str, usize> = ranked
        .iter()
        .enumerate()
        .map(|(rank, entry)| (entry.value.as_str(), rank))
        .collect();

    let mut observed_statuses: BTreeSet<&str> = BTreeSet::new();
    let mut cells: HashMap<(&str, &str), usize> = HashMap::new();

    for incident in incidents {
        let crime = match incident.crime_description.as_deref() {
            Some(c) if retained.contains_key(c) => c,
            _ => continue,
        };
        let status = match incident.status_description.as_deref() {
            Some(s) => s,
            None => continue,
        };

        observed_statuses.insert(status);
        *cells.entry((crime, status)).or_insert(0) += 1;
    }

    // BTreeSet iteration yields the alphabetical column order
    let statuses: Vec<String> = observed_statuses.into_iter().map(String::from).collect();

    let rows = ranked
        .iter()
        .map(|entry| {
            let counts = statuses
                .iter()
                .map(|status| {
                    cells
                        .get(&(entry.value.as_str(), status.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect();
            CrossTabRow {
                crime_type: entry.value.clone(),
                counts,
            }
        })
        .collect();

    CrossTab { statuses, rows }
}
