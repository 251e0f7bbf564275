use driftscope_analyzer::{parse_samples, summarize};
use driftscope_core::{AppError, AppResult};
use driftscope_report::render_report;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

pub fn analyze_command(logfile: &Path, base_offset_ms: Option<f64>) -> AppResult<()> {
    let file = File::open(logfile).map_err(|e| {
        AppError::validation(format!("failed to open {}: {e}", logfile.display()))
    })?;
    let outcome = parse_samples(BufReader::new(file), base_offset_ms)?;

    debug!(
        lines_scanned = outcome.stats.lines_scanned,
        lines_matched = outcome.stats.lines_matched,
        "log scan finished"
    );
    if let (None, Some(offset)) = (base_offset_ms, outcome.inferred_offset_ms) {
        debug!(offset_ms = offset, "inferred base offset from first sample");
    }
    if outcome.stats.underrun_warnings > 0 {
        info!(
            underrun_warnings = outcome.stats.underrun_warnings,
            "probe reported stream underruns"
        );
    }

    let summary = summarize(&outcome.samples);
    print!("{}", render_report(summary.as_ref()));
    Ok(())
}
