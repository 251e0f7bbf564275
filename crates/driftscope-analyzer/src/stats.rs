use crate::model::{DriftSummary, Sample};

/// Population statistics over drift in file order. Empty input has no
/// defined median or first/last drift, so it yields `None`.
pub fn summarize(samples: &[Sample]) -> Option<DriftSummary> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first.drift_ms, last.drift_ms),
        _ => return None,
    };

    let drifts: Vec<f64> = samples.iter().map(|s| s.drift_ms).collect();
    let count = drifts.len();
    let mean = drifts.iter().sum::<f64>() / count as f64;
    let variance = drifts.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / count as f64;
    let min = drifts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = drifts.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(DriftSummary {
        samples: count,
        mean_ms: mean,
        median_ms: median(&drifts),
        min_ms: min,
        max_ms: max,
        stddev_ms: variance.sqrt(),
        first_ms: first,
        last_ms: last,
    })
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
