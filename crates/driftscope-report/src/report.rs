use driftscope_analyzer::DriftSummary;

pub const NO_SAMPLES: &str = "No samples parsed.";

pub fn render_report(summary: Option<&DriftSummary>) -> String {
    let Some(summary) = summary else {
        return format!("{NO_SAMPLES}\n");
    };

    let mut out = String::new();
    out.push_str(&format!("Samples: {}\n", summary.samples));
    out.push_str(&format!(
        "Drift ms -> mean: {:.4}, median: {:.4}, min: {:.4}, max: {:.4}, stddev: {:.4}\n",
        summary.mean_ms, summary.median_ms, summary.min_ms, summary.max_ms, summary.stddev_ms
    ));
    out.push_str(&format!(
        "First sample drift: {:.4} ms, last sample drift: {:.4} ms\n",
        summary.first_ms, summary.last_ms
    ));
    out
}
