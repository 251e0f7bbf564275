/// One measurement parsed from a probe log line.
///
/// `drift_ms = (elapsed_ms - offset) - audio_ms` for the offset in effect
/// when the sample was parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub elapsed_ms: f64,
    pub audio_ms: f64,
    pub drift_ms: f64,
}

/// Descriptive statistics over `drift_ms` of an ordered sample run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftSummary {
    pub samples: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub stddev_ms: f64,
    pub first_ms: f64,
    pub last_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    pub lines_scanned: u64,
    pub lines_matched: u64,
    pub underrun_warnings: u64,
}
