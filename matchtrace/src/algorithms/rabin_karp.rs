//! Rabin-Karp rolling-hash scan.
//!
//! Window hashes are computed over a base-256 polynomial modulo 101. The
//! modulus is small enough that accidental collisions exist in practice;
//! that is intentional. A hash hit only ever triggers a full
//! character-by-character verification, and a hit that fails verification
//! is surfaced as a `false_positive` frame — the realistic behavior of
//! hash-based matching, observable rather than hidden.

use super::window;
use crate::trace::{Recorder, TraceFrame};

pub(crate) const BASE: u64 = 256;
pub(crate) const MODULUS: u64 = 101;

fn hash_char(c: char) -> u64 {
    c as u64 % MODULUS
}

pub(crate) fn search(text: &[char], pattern: &[char], recorder: &mut Recorder) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    // BASE^(m-1) mod MODULUS, the weight of the leading window character.
    let mut high_weight = 1u64;
    for _ in 0..m - 1 {
        high_weight = (high_weight * BASE) % MODULUS;
    }

    let mut pattern_hash = 0u64;
    let mut window_hash = 0u64;
    for k in 0..m {
        pattern_hash = (pattern_hash * BASE + hash_char(pattern[k])) % MODULUS;
        window_hash = (window_hash * BASE + hash_char(text[k])) % MODULUS;
    }

    for s in 0..=n - m {
        recorder.record(|| TraceFrame::RollingHash {
            message: format!(
                "Window at index {s}: hash {window_hash} vs pattern hash {pattern_hash}"
            ),
            text_index: s,
            window_hash,
            pattern_hash,
            current_window: window(text, s, m),
            matches_so_far: matches.clone(),
        });

        if window_hash == pattern_hash {
            if text[s..s + m] == pattern[..] {
                matches.push(s);
                recorder.record(|| TraceFrame::Match {
                    message: format!("Hash hit verified: match found at index {s}!"),
                    text_index: s,
                    current_window: window(text, s, m),
                    matches_so_far: matches.clone(),
                });
            } else {
                recorder.record(|| TraceFrame::FalsePositive {
                    message: format!(
                        "Hash collision at index {s}: equal hashes, unequal content"
                    ),
                    text_index: s,
                    window_hash,
                    current_window: window(text, s, m),
                    matches_so_far: matches.clone(),
                });
            }
        }

        // Roll: drop text[s], append text[s + m].
        if s + m < n {
            window_hash =
                (window_hash + MODULUS - hash_char(text[s]) * high_weight % MODULUS) % MODULUS;
            window_hash = (window_hash * BASE + hash_char(text[s + m])) % MODULUS;
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
    fn test_degenerate_lengths() {
        assert!(run("abc", "").is_empty());
        assert!(run("ab", "abc").is_empty());
    }

    #[test]
    fn test_rolled_hash_agrees_with_direct_hash() {
        let text: Vec<char> = "the quick brown fox".chars().collect();
        let pattern: Vec<char> = "own".chars().collect();
        let mut recorder = Recorder::enabled();
        search(&text, &pattern, &mut recorder);

        let m = pattern.len();
        for frame in recorder.frames() {
            if let TraceFrame::RollingHash {
                text_index,
                window_hash,
                ..
            } = frame
            {
                let mut direct = 0u64;
                for k in 0..m {
                    direct = (direct * BASE + hash_char(text[text_index + k])) % MODULUS;
                }
                assert_eq!(*window_hash, direct, "rolled hash diverged at {text_index}");
            }
        }
    }

    #[test]
    fn test_known_collision_is_a_false_positive_not_a_match() {
        // Under base 256 mod 101, "b," hashes identically to "ab":
        // (98*256 + 44) % 101 == (97*256 + 98) % 101 == 84.
        let text: Vec<char> = "xb,q".chars().collect();
        let pattern: Vec<char> = "ab".chars().collect();
        let mut recorder = Recorder::enabled();
        let matches = search(&text, &pattern, &mut recorder);

        assert!(matches.is_empty(), "collision must not produce a match");
        let false_positives: Vec<_> = recorder
            .frames()
            .iter()
            .filter_map(|f| match f {
                TraceFrame::FalsePositive { text_index, .. } => Some(*text_index),
                _ => None,
            })
            .collect();
        assert_eq!(false_positives, vec![1]);
    }
}
