//! Boyer-Moore with the bad-character rule.
//!
//! Comparison runs right to left within each window. On a mismatch against
//! text character `c` at pattern index `j`, the window advances by
//! `max(1, j - last_occurrence(c))`, skipping alignments that cannot match.
//! The `max(1, ..)` guard guarantees progress even when the rule suggests a
//! zero or negative shift.

use std::collections::BTreeMap;

use super::window;
use crate::trace::{Recorder, TraceFrame};

/// Maps each pattern character to its last index within the pattern.
///
/// The final character is excluded: a mismatch at the last position must
/// never shift against itself. Characters absent from the table shift by
/// the full pattern length (the `-1` sentinel in the shift formula).
pub(crate) fn build_bad_char_table(
    pattern: &[char],
    recorder: &mut Recorder,
) -> BTreeMap<char, usize> {
    let m = pattern.len();
    let mut table = BTreeMap::new();
    for (i, &c) in pattern.iter().enumerate().take(m - 1) {
        table.insert(c, i);
    }

    recorder.record(|| TraceFrame::BadCharTable {
        message: "Built bad character table: last occurrence of each pattern character \
                  (excluding the final one)."
            .to_string(),
        bad_char_table: table.clone(),
    });

    table
}

/// Per-character shift amounts derived from the bad-character table.
///
/// Exposed complete in `mismatch_shift` frames; hiding entries equal to the
/// pattern length is a rendering choice, not ours.
fn derive_shift_table(bad_char_table: &BTreeMap<char, usize>, m: usize) -> BTreeMap<char, usize> {
    bad_char_table
        .iter()
        .map(|(&c, &i)| (c, m - 1 - i))
        .collect()
}

pub(crate) fn search(text: &[char], pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    let bad_char_table = build_bad_char_table(pattern, recorder);
    let shift_table = derive_shift_table(&bad_char_table, m);

    let mut s = 0;
    while s <= n - m {
        recorder.record(|| TraceFrame::Alignment {
            message: format!("Aligning pattern at text index {s}"),
            text_index: s,
            current_window: window(text, s, m),
            matches_so_far: matches.clone(),
        });

        let mut j = m;
        while j > 0 {
            let pj = j - 1;
            let match_status = pattern[pj] == text[s + pj];
            recorder.record(|| TraceFrame::Comparison {
                message: format!(
                    "Comparing text[{}] ('{}') with pattern[{pj}] ('{}')",
                    s + pj,
                    text[s + pj],
                    pattern[pj]
                ),
                text_index: s + pj,
                pattern_index: pj,
                match_status,
                current_window: window(text, s, m),
                matches_so_far: matches.clone(),
            });

            if !match_status {
                let last = bad_char_table
                    .get(&text[s + pj])
                    .map(|&i| i as isize)
                    .unwrap_or(-1);
                let shift_amount = (pj as isize - last).max(1) as usize;

                recorder.record(|| TraceFrame::MismatchShift {
                    message: format!(
                        "Mismatch! Shifting pattern by {shift_amount} using bad character rule"
                    ),
                    text_index: s + pj,
                    pattern_index: pj,
                    shift_amount,
                    bad_char_table: bad_char_table.clone(),
                    shift_table: shift_table.clone(),
                    matches_so_far: matches.clone(),
                });

                s += shift_amount;
                break;
            }
            j -= 1;
        }

        if j == 0 {
            matches.push(s);
            recorder.record(|| TraceFrame::Match {
                message: format!("Match found at index {s}!"),
                text_index: s,
                current_window: window(text, s, m),
                matches_so_far: matches.clone(),
            });
            s += 1;
        }
    }

    matches
}
