//! The five matching algorithms and the closed dispatch enum over them.
//!
//! Every algorithm answers the same question — where does `pattern` occur in
//! `text` — but each gets there differently:
//!
//! 1. **Naive**: tries every alignment, comparing left to right. O(n·m)
//!    worst case. The reference implementation the others are checked
//!    against.
//! 2. **Knuth-Morris-Pratt**: precomputes the longest-proper-prefix-suffix
//!    (LPS) table so the text cursor never backtracks. O(n + m).
//! 3. **Boyer-Moore** (bad-character rule): compares right to left and uses
//!    the mismatching character's last occurrence in the pattern to skip
//!    alignments. Sublinear on typical inputs.
//! 4. **Rabin-Karp**: rolls a windowed hash across the text in O(1) per
//!    shift, verifying character-by-character only on hash hits. Hash
//!    collisions are surfaced as `false_positive` trace frames, not hidden.
//! 5. **Z-algorithm**: computes the Z-array of `pattern + separator + text`
//!    with the `[l, r]` box optimization; Z-values equal to the pattern
//!    length mark matches.
//!
//! All five report the identical ascending, duplicate-free position list for
//! the same input; the integration tests enforce this cross-algorithm
//! invariant. Positions are character indices (inputs are collected to
//! `Vec<char>` once per run), so multi-byte text behaves like the naive
//! mental model, not like byte offsets.
//!
//! Each implementation takes a [`Recorder`] and narrates itself through it;
//! with a disabled recorder the narration costs nothing and the match output
//! is guaranteed unchanged.

pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
pub mod z_algorithm;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MatchError;
use crate::trace::Recorder;

/// The closed set of matching algorithms.
///
/// Being an enum rather than a string key means dispatch is exhaustive at
/// compile time: adding a sixth algorithm forces every `match` over this
/// type to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Naive,
    Kmp,
    BoyerMoore,
    RabinKarp,
    ZAlgorithm,
}

impl Algorithm {
    /// All algorithms, in the order the comparison runner reports them.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
        Algorithm::ZAlgorithm,
    ];

    /// The identifier used in serialized output and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer_moore",
            Algorithm::RabinKarp => "rabin_karp",
            Algorithm::ZAlgorithm => "z_algorithm",
        }
    }

    /// Whether the algorithm defines a result for an empty pattern.
    ///
    /// Only the Z-algorithm does: an empty pattern matches at every
    /// position `0..=n`. The others treat an empty pattern as invalid
    /// input (or zero matches in a comparison batch).
    pub fn supports_empty_pattern(&self) -> bool {
        matches!(self, Algorithm::ZAlgorithm)
    }

    /// Runs the algorithm, appending trace frames to `recorder`.
    ///
    /// Returns the ascending, duplicate-free list of match start positions
    /// (character indices). A pattern longer than the text yields no
    /// matches; an empty pattern yields no matches except for the
    /// Z-algorithm (see [`Algorithm::supports_empty_pattern`]).
    pub fn run(&self, text: &str, pattern: &str, recorder: &mut Recorder) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        match self {
            Algorithm::Naive => naive::search(&text, &pattern, recorder),
            Algorithm::Kmp => kmp::search(&text, &pattern, recorder),
            Algorithm::BoyerMoore => boyer_moore::search(&text, &pattern, recorder),
            Algorithm::RabinKarp => rabin_karp::search(&text, &pattern, recorder),
            Algorithm::ZAlgorithm => z_algorithm::search(&text, &pattern, recorder),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "kmp" => Ok(Algorithm::Kmp),
            "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "rabin_karp" => Ok(Algorithm::RabinKarp),
            "z_algorithm" => Ok(Algorithm::ZAlgorithm),
            other => Err(MatchError::invalid_input(format!(
                "unknown algorithm '{other}' (expected one of: naive, kmp, boyer_moore, rabin_karp, z_algorithm)"
            ))),
        }
    }
}

/// The window of `text` starting at `start`, clamped to the text end.
pub(crate) fn window(text: &[char], start: usize, len: usize) -> String {
    text[start..(start + len).min(text.len())].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("naive".parse::<Algorithm>().unwrap(), Algorithm::Naive);
        assert_eq!(
            "boyer_moore".parse::<Algorithm>().unwrap(),
            Algorithm::BoyerMoore
        );
        assert_eq!(
            "z_algorithm".parse::<Algorithm>().unwrap(),
            Algorithm::ZAlgorithm
        );
        assert!("aho_corasick".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
        }
    }

    #[test]
    fn test_empty_pattern_support() {
        assert!(Algorithm::ZAlgorithm.supports_empty_pattern());
        assert!(!Algorithm::Naive.supports_empty_pattern());
        assert!(!Algorithm::RabinKarp.supports_empty_pattern());
    }

    #[test]
    fn test_window_clamps_at_text_end() {
        let text: Vec<char> = "abcde".chars().collect();
        assert_eq!(window(&text, 1, 3), "bcd");
        assert_eq!(window(&text, 3, 5), "de");
    }
}
