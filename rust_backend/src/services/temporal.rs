use std::collections::HashMap;

use crate::api::{HourDistribution, MonthlyCount, SeasonalMatrix, SeasonalRow};
use crate::core::domain::CrimeIncident;
use crate::time::month_start;

/// Count incidents per calendar month, ordered chronologically.
///
/// Groups on the `(year, month)` pair and synthesizes the first-of-month
/// date for each group so the renderer can plot on a date axis. Incidents
/// without a derivable year/month are excluded.
pub fn compute_monthly_counts(incidents: &[CrimeIncident]) -> Vec<MonthlyCount> {
    let mut groups: HashMap<(i32, u32), usize> = HashMap::new();

    for incident in incidents {
        if let Some(key) = incident.month_key() {
            *groups.entry(key).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<MonthlyCount> = groups
        .into_iter()
        .filter_map(|((year, month), count)| {
            month_start(year, month).map(|month_start| MonthlyCount {
                year,
                month,
                month_start,
                count,
            })
        })
        .collect();

    counts.sort_by_key(|c| c.month_start);

    counts
}

/// Pivot incident counts into a year-by-month matrix.
///
/// Rows cover every observed year in ascending order; all twelve month
/// columns are always present with unobserved cells left at zero.
pub fn compute_seasonal_matrix(incidents: &[CrimeIncident]) -> SeasonalMatrix {
    let mut per_year: HashMap<i32, [usize; 12]> = HashMap::new();

    for incident in incidents {
        if let Some((year, month)) = incident.month_key() {
            if (1..=12).contains(&month) {
                let row = per_year.entry(year).or_insert([0; 12]);
                row[(month - 1) as usize] += 1;
            }
        }
    }

    let mut rows: Vec<SeasonalRow> = per_year
        .into_iter()
        .map(|(year, counts)| SeasonalRow { year, counts })
        .collect();
    rows.sort_by_key(|r| r.year);

    SeasonalMatrix {
        months: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        rows,
    }
}

/// Collect hour-of-day values and bucket them into 24 counts.
///
/// Incidents without a derivable hour are skipped. Out-of-range hours never
/// survive preparation, so the buckets cover every remaining value.
pub fn compute_hour_distribution(incidents: &[CrimeIncident]) -> HourDistribution {
    let mut values = Vec::new();
    let mut counts = [0usize; 24];

    for incident in incidents {
        if let Some(hour) = incident.hour {
            if hour <= 23 {
                values.push(hour);
                counts[hour as usize] += 1;
            }
        }
    }

    HourDistribution { values, counts }
}
