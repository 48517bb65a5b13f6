//! Z-algorithm over the combined string `pattern + separator + text`.
//!
//! `Z[i]` is the length of the longest substring starting at `i` that
//! matches a prefix of the combined string. The `[l, r]` box tracks the
//! rightmost prefix-match seen so far, letting Z-values inside it be seeded
//! from earlier ones instead of re-compared. Any position in the text
//! portion with `Z == pattern length` is a match, translated back to text
//! coordinates by subtracting `pattern length + 1`.

use std::cmp::min;

use super::window;
use crate::trace::{Recorder, TraceFrame};

/// First character not occurring in either input. The candidate sequence
/// covers the whole scalar-value space, so the search always terminates on
/// finite input; the fallback is unreachable.
fn pick_separator(pattern: &[char], text: &[char]) -> char {
    (0u32..=0x10FFFF)
        .filter_map(char::from_u32)
        .find(|c| !pattern.contains(c) && !text.contains(c))
        .unwrap_or('\u{0}')
}

/// Computes the Z-array of `combined` with the `[l, r]` box optimization.
pub(crate) fn compute_z(
    combined: &[char],
    combined_string: &str,
    recorder: &mut Recorder,
) -> Vec<usize> {
    let len = combined.len();
    let mut z = vec![0; len];
    z[0] = len;
    let mut l = 0;
    let mut r = 0;

    for i in 1..len {
        if i < r {
            z[i] = min(r - i, z[i - l]);
        }
        while i + z[i] < len && combined[z[i]] == combined[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > r {
            l = i;
            r = i + z[i];
        }

        recorder.record(|| TraceFrame::ZStep {
            message: format!("Z[{i}] = {}; box [l, r] = [{l}, {r}]", z[i]),
            current_i: i,
            l,
            r,
            combined_string: combined_string.to_string(),
            z: z.clone(),
        });
    }

    recorder.record(|| TraceFrame::ZTable {
        message: "Z-array complete: prefix-match length at every combined index.".to_string(),
        combined_string: combined_string.to_string(),
        z: z.clone(),
    });

    z
}

pub(crate) fn search(text: &[char], pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    // An empty pattern matches at every position, including n. Defined
    // behavior, not an error.
    if m == 0 {
        return (0..=n).collect();
    }
    if n < m {
        return Vec::new();
    }

    let separator = pick_separator(pattern, text);
    let combined: Vec<char> = pattern
        .iter()
        .chain(std::iter::once(&separator))
        .chain(text.iter())
        .copied()
        .collect();
    let combined_string: String = combined.iter().collect();

    let z = compute_z(&combined, &combined_string, recorder);

    let mut matches = Vec::new();
    for k in m + 1..combined.len() {
        if z[k] == m {
            let at = k - m - 1;
            matches.push(at);
            recorder.record(|| TraceFrame::Match {
                message: format!(
                    "Z value {m} at combined index {k}: match found at text index {at}!"
                ),
                text_index: at,
                current_window: window(text, at, m),
                matches_so_far: matches.clone(),
            });
        }
    }

    matches
}
