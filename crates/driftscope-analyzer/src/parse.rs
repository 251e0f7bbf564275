use crate::model::{Sample, ScanStats};
use driftscope_core::{AppError, AppResult};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

// Labels are case-sensitive; any text may sit between the two fields, but
// each label must precede its number. The numeric pattern only admits
// non-negative decimals, so a matched field always converts to f64.
static MEASUREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Elapsed real:\s*([0-9]+(?:\.[0-9]+)?)\s*ms.*?Audio timeline:\s*([0-9]+(?:\.[0-9]+)?)\s*ms",
    )
    .unwrap()
});

const UNDERRUN_MARKER: &str = "Stream underrun detected";

pub fn match_measurement(line: &str) -> Option<(f64, f64)> {
    let caps = MEASUREMENT_RE.captures(line)?;
    let elapsed = caps[1].parse().ok()?;
    let audio = caps[2].parse().ok()?;
    Some((elapsed, audio))
}

#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub samples: Vec<Sample>,
    pub inferred_offset_ms: Option<f64>,
    pub stats: ScanStats,
}

/// Scans the log once in file order. With `base_offset_ms` present (even
/// `0.0`) that value corrects every sample; otherwise the offset is inferred
/// from the first match and never recomputed.
pub fn parse_samples<R: BufRead>(
    reader: R,
    base_offset_ms: Option<f64>,
) -> AppResult<ParseOutcome> {
    let mut samples = Vec::new();
    let mut stats = ScanStats::default();
    let mut inferred: Option<f64> = None;

    for line in reader.lines() {
        let line =
            line.map_err(|e| AppError::validation(format!("failed to read log: {e}")))?;
        stats.lines_scanned += 1;
        if line.contains(UNDERRUN_MARKER) {
            stats.underrun_warnings += 1;
        }

        let Some((elapsed_ms, audio_ms)) = match_measurement(&line) else {
            continue;
        };
        stats.lines_matched += 1;

        let offset = match base_offset_ms {
            Some(value) => value,
            None => *inferred.get_or_insert(elapsed_ms - audio_ms),
        };
        samples.push(Sample {
            elapsed_ms,
            audio_ms,
            drift_ms: (elapsed_ms - offset) - audio_ms,
        });
    }

    Ok(ParseOutcome {
        samples,
        inferred_offset_ms: inferred,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str, offset: Option<f64>) -> ParseOutcome {
        parse_samples(Cursor::new(input.as_bytes()), offset).unwrap()
    }

    #[test]
    fn matches_probe_log_line() {
        let line = "[INFO 12:00:01] Captured 128 frames ( 512 bytes). \
                    Elapsed real: 100.25 ms Audio timeline: 95.00 ms";
        assert_eq!(match_measurement(line), Some((100.25, 95.0)));
    }

    #[test]
    fn tolerates_extra_text_between_fields() {
        let line = "Elapsed real: 10.5 ms (wall clock) Audio timeline: 9.5 ms";
        assert_eq!(match_measurement(line), Some((10.5, 9.5)));
    }

    #[test]
    fn requires_both_labels() {
        assert_eq!(match_measurement("Elapsed real: 10.5 ms"), None);
        assert_eq!(match_measurement("Audio timeline: 9.5 ms"), None);
        assert_eq!(match_measurement("elapsed real: 1 ms audio timeline: 1 ms"), None);
    }

    #[test]
    fn rejects_degenerate_numeric_tokens() {
        assert_eq!(
            match_measurement("Elapsed real: ..ms Audio timeline: 9.5 ms"),
            None
        );
    }

    #[test]
    fn skips_non_matching_lines() {
        let outcome = parse(
            "[INFO 12:00:00] Stream state changed connecting -> streaming\n\
             Elapsed real: 100.0 ms Audio timeline: 95.0 ms\n\
             [INFO 12:00:02] Total frames captured: 256\n",
            None,
        );
        assert_eq!(outcome.samples.len(), 1);
        assert_eq!(outcome.stats.lines_scanned, 3);
        assert_eq!(outcome.stats.lines_matched, 1);
    }

    #[test]
    fn infers_offset_from_first_match() {
        let outcome = parse(
            "Elapsed real: 100.0 ms Audio timeline: 95.0 ms\n\
             Elapsed real: 200.0 ms Audio timeline: 190.0 ms\n",
            None,
        );
        assert_eq!(outcome.inferred_offset_ms, Some(5.0));
        assert_eq!(outcome.samples[0].drift_ms, 0.0);
        assert_eq!(outcome.samples[1].drift_ms, 5.0);
    }

    #[test]
    fn explicit_zero_offset_is_not_inference() {
        let outcome = parse(
            "Elapsed real: 100.0 ms Audio timeline: 95.0 ms\n\
             Elapsed real: 200.0 ms Audio timeline: 190.0 ms\n",
            Some(0.0),
        );
        assert_eq!(outcome.inferred_offset_ms, None);
        assert_eq!(outcome.samples[0].drift_ms, 5.0);
        assert_eq!(outcome.samples[1].drift_ms, 10.0);
    }

    #[test]
    fn explicit_offset_applies_to_every_sample() {
        let outcome = parse(
            "Elapsed real: 100.0 ms Audio timeline: 95.0 ms\n\
             Elapsed real: 200.0 ms Audio timeline: 190.0 ms\n",
            Some(2.0),
        );
        assert_eq!(outcome.samples[0].drift_ms, 3.0);
        assert_eq!(outcome.samples[1].drift_ms, 8.0);
    }

    #[test]
    fn counts_underrun_warnings() {
        let outcome = parse(
            "[WARN 12:00:01] Stream underrun detected (no buffer)\n\
             Elapsed real: 100.0 ms Audio timeline: 95.0 ms\n\
             [WARN 12:00:02] Stream underrun detected (no buffer)\n",
            None,
        );
        assert_eq!(outcome.stats.underrun_warnings, 2);
        assert_eq!(outcome.samples.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_samples_and_no_offset() {
        let outcome = parse("", None);
        assert!(outcome.samples.is_empty());
        assert_eq!(outcome.inferred_offset_ms, None);
        assert_eq!(outcome.stats.lines_scanned, 0);
    }
}
