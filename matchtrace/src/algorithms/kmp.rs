//! Knuth-Morris-Pratt: LPS failure table, no text backtracking.
//!
//! The scan keeps two cursors, `i` into the text and `j` into the pattern.
//! On a mismatch with `j > 0` the pattern cursor falls back through the LPS
//! table while `i` stays put — the central KMP invariant — so total
//! character comparisons are bounded by 2n + m regardless of input shape.
//! Table construction emits its own `lps_*` frames, making the
//! preprocessing observable before scanning begins.

use super::window;
use crate::trace::{Recorder, TraceFrame};

/// Builds the longest-proper-prefix-which-is-also-suffix table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[0..=i]`
/// that is also a suffix of it.
pub(crate) fn compute_lps(pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    let mut length = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            recorder.record(|| TraceFrame::LpsStep {
                message: format!(
                    "lps[{i}] = {length}: '{}' extends the matched prefix",
                    pattern[i]
                ),
                current_i: i,
                length,
                lps: lps.clone(),
            });
            i += 1;
        } else if length != 0 {
            length = lps[length - 1];
            recorder.record(|| TraceFrame::LpsStep {
                message: format!("Mismatch at index {i}; falling back to prefix length {length}"),
                current_i: i,
                length,
                lps: lps.clone(),
            });
        } else {
            lps[i] = 0;
            recorder.record(|| TraceFrame::LpsStep {
                message: format!("lps[{i}] = 0: no prefix ends here"),
                current_i: i,
                length: 0,
                lps: lps.clone(),
            });
            i += 1;
        }
    }

    recorder.record(|| TraceFrame::LpsTable {
        message: "Built LPS table: longest proper prefix that is also a suffix, per index."
            .to_string(),
        lps: lps.clone(),
    });

    lps
}

pub(crate) fn search(text: &[char], pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    let lps = compute_lps(pattern, recorder);

    let mut i = 0;
    let mut j = 0;
    while i < n {
        let match_status = text[i] == pattern[j];
        recorder.record(|| TraceFrame::Comparison {
            message: format!(
                "Comparing text[{i}] ('{}') with pattern[{j}] ('{}')",
                text[i], pattern[j]
            ),
            text_index: i,
            pattern_index: j,
            match_status,
            current_window: window(text, i - j, m),
            matches_so_far: matches.clone(),
        });

        if match_status {
            i += 1;
            j += 1;
            if j == m {
                let at = i - m;
                matches.push(at);
                recorder.record(|| TraceFrame::Match {
                    message: format!("Match found at index {at}!"),
                    text_index: at,
                    current_window: window(text, at, m),
                    matches_so_far: matches.clone(),
                });
                let shift_to = lps[j - 1];
                recorder.record(|| TraceFrame::PatternShift {
                    message: format!(
                        "Continuing after match: pattern cursor falls back to {shift_to}"
                    ),
                    text_index: i,
                    pattern_index: j,
                    shift_to,
                    matches_so_far: matches.clone(),
                });
                j = shift_to;
            }
        } else if j != 0 {
            // Text cursor stays put; only the pattern cursor moves.
            let shift_to = lps[j - 1];
            recorder.record(|| TraceFrame::PatternShift {
                message: format!(
                    "Mismatch: pattern cursor falls back from {j} to {shift_to} via LPS"
                ),
                text_index: i,
                pattern_index: j,
                shift_to,
                matches_so_far: matches.clone(),
            });
            j = shift_to;
        } else {
            i += 1;
        }
    }

    matches
}
