use crate::api::{AgeDistribution, DistributionStats};
use crate::core::domain::CrimeIncident;

/// Summarize a numeric sample: count, mean, median, population standard
/// deviation, min, max and sum. An empty sample yields all zeros.
pub fn compute_stats(values: &[f64]) -> DistributionStats {
    let count = values.len();
    if count == 0 {
        return DistributionStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sum: 0.0,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let sum: f64 = sorted.iter().sum();
    let mean = sum / count as f64;
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let variance = sorted
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / count as f64;

    DistributionStats {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
        sum,
    }
}

/// Collect non-null victim ages with their summary statistics.
///
/// Non-finite values are dropped along with nulls so the renderer can bin
/// the sample directly.
pub fn compute_age_distribution(incidents: &[CrimeIncident]) -> AgeDistribution {
    let values: Vec<f64> = incidents
        .iter()
        .filter_map(|i| i.victim_age)
        .filter(|age| age.is_finite())
        .collect();

    let stats = compute_stats(&values);

    AgeDistribution { values, stats }
}
