//! Naive left-to-right scan: every alignment, every character.
//!
//! Worst case O(n·m) comparisons. This is the reference implementation the
//! other algorithms are validated against, so it stays as literal as
//! possible.

use super::window;
use crate::trace::{Recorder, TraceFrame};

pub(crate) fn search(text: &[char], pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    for i in 0..=n - m {
        recorder.record(|| TraceFrame::Alignment {
            message: format!("Aligning pattern at text index {i}"),
            text_index: i,
            current_window: window(text, i, m),
            matches_so_far: matches.clone(),
        });

        let mut j = 0;
        while j < m {
            let match_status = text[i + j] == pattern[j];
            recorder.record(|| TraceFrame::CharacterCheck {
                message: format!(
                    "Comparing text[{}] ('{}') with pattern[{}] ('{}')",
                    i + j,
                    text[i + j],
                    j,
                    pattern[j]
                ),
                text_index: i + j,
                pattern_index: j,
                match_status,
                current_window: window(text, i, m),
                matches_so_far: matches.clone(),
            });

            if !match_status {
                recorder.record(|| TraceFrame::Mismatch {
                    message: "Mismatch! Shifting pattern by 1.".to_string(),
                    text_index: i + j,
                    pattern_index: j,
                    current_window: window(text, i, m),
                    matches_so_far: matches.clone(),
                });
                break;
            }
            j += 1;
        }

        if j == m {
            matches.push(i);
            recorder.record(|| TraceFrame::Match {
                message: format!("Match found at index {i}!"),
                text_index: i,
                current_window: window(text, i, m),
                matches_so_far: matches.clone(),
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, pattern: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        search(&text, &pattern, &mut Recorder::disabled())
    }

    #[test]
    fn test_single_match() {
        assert_eq!(run("ABABDABACDABABCABAB", "ABABCABAB"), vec![10]);
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(run("aaaaa", "aa"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_match_and_degenerate_lengths() {
        assert!(run("abcdef", "xyz").is_empty());
        assert!(run("short", "much longer pattern").is_empty());
        assert!(run("abc", "").is_empty());
    }

    #[test]
    fn test_character_check_frames_carry_outcome() {
        let text: Vec<char> = "ab".chars().collect();
        let pattern: Vec<char> = "ac".chars().collect();
        let mut recorder = Recorder::enabled();
        search(&text, &pattern, &mut recorder);

        let checks: Vec<_> = recorder
            .frames()
            .iter()
            .filter_map(|f| match f {
                TraceFrame::CharacterCheck { match_status, .. } => Some(*match_status),
                _ => None,
            })
            .collect();
        // 'a' matches, 'b' vs 'c' does not; only one alignment fits.
        assert_eq!(checks, vec![true, false]);
    }
}
