use crate::api::CorrelationMatrix;
use crate::core::domain::CrimeIncident;
use crate::core::schema;

/// Compute Pearson correlation between two equal-length samples.
/// Returns `None` for fewer than two observations or zero variance on
/// either side.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 {
        return None;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Extract the numeric columns as nullable cell vectors, in the canonical
/// numeric-column order.
fn numeric_cells(incidents: &[CrimeIncident]) -> Vec<(&'static str, Vec<Option<f64>>)> {
    vec![
        (
            schema::LAT,
            incidents
                .iter()
                .map(|i| Some(i.latitude).filter(|v| v.is_finite()))
                .collect(),
        ),
        (
            schema::LON,
            incidents
                .iter()
                .map(|i| Some(i.longitude).filter(|v| v.is_finite()))
                .collect(),
        ),
        (
            schema::VICT_AGE,
            incidents
                .iter()
                .map(|i| i.victim_age.filter(|v| v.is_finite()))
                .collect(),
        ),
        (
            schema::HOUR,
            incidents.iter().map(|i| i.hour.map(f64::from)).collect(),
        ),
        (
            schema::YEAR,
            incidents.iter().map(|i| i.year.map(f64::from)).collect(),
        ),
        (
            schema::MONTH,
            incidents.iter().map(|i| i.month.map(f64::from)).collect(),
        ),
    ]
}

/// Pearson correlation matrix over the numeric columns.
///
/// Each cell pairs two columns over their pairwise-complete rows, so a
/// null in either column drops that row from that cell only. Cells with
/// fewer than two complete pairs or zero variance are `None`; the diagonal
/// is 1.0 for any column with at least one observation.
pub fn compute_correlation_matrix(incidents: &[CrimeIncident]) -> CorrelationMatrix {
    let cells = numeric_cells(incidents);

    let mut values = Vec::with_capacity(cells.len());
    for (i, (_, column_i)) in cells.iter().enumerate() {
        let mut row = Vec::with_capacity(cells.len());
        for (j, (_, column_j)) in cells.iter().enumerate() {
            let coefficient = if i == j {
                if column_i.iter().any(|c| c.is_some()) {
                    Some(1.0)
                } else {
                    None
                }
            } else {
                let mut x = Vec::new();
                let mut y = Vec::new();
                for (a, b) in column_i.iter().zip(column_j.iter()) {
                    if let (Some(a), Some(b)) = (a, b) {
                        x.push(*a);
                        y.push(*b);
                    }
                }
                pearson(&x, &y)
            };
            row.push(coefficient);
        }
        values.push(row);
    }

    CorrelationMatrix {
        columns: cells.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}
