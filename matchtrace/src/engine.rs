//! The two top-level search operations: single-algorithm `search` (with
//! optional tracing) and the all-algorithms comparison runner.
//!
//! Timing uses a monotonic [`Instant`] wrapped strictly around the matching
//! loop. Traced runs are timed too, but the comparison runner always
//! disables tracing so its numbers stay comparable.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::algorithms::Algorithm;
use crate::errors::{MatchError, MatchResult};
use crate::results::SearchResult;
use crate::trace::Recorder;

fn validate(text: &str, pattern: &str, algorithm: Option<Algorithm>) -> MatchResult<()> {
    if text.is_empty() {
        return Err(MatchError::invalid_input("text must not be empty"));
    }
    if pattern.is_empty() {
        match algorithm {
            // A comparison batch tolerates an empty pattern: supporting
            // algorithms report their defined result, the rest zero matches.
            None => {}
            Some(a) if a.supports_empty_pattern() => {}
            Some(a) => {
                return Err(MatchError::invalid_input(format!(
                    "pattern must not be empty for algorithm '{a}'"
                )))
            }
        }
    }
    Ok(())
}

/// Runs one algorithm over (text, pattern), optionally capturing a trace.
///
/// Fails with [`MatchError::InvalidInput`] when `text` is empty, or when
/// `pattern` is empty and the algorithm does not define a result for it.
pub fn search(
    text: &str,
    pattern: &str,
    algorithm: Algorithm,
    trace: bool,
) -> MatchResult<SearchResult> {
    validate(text, pattern, Some(algorithm))?;
    info!(
        "Running {algorithm} over {} text characters (trace: {trace})",
        text.chars().count()
    );

    let mut recorder = if trace {
        Recorder::enabled()
    } else {
        Recorder::disabled()
    };

    let started = Instant::now();
    let matches = algorithm.run(text, pattern, &mut recorder);
    let elapsed = started.elapsed();

    debug!(
        "{algorithm} finished: {} matches in {elapsed:?}",
        matches.len()
    );

    Ok(SearchResult {
        algorithm,
        matches,
        elapsed,
        frames: trace.then(|| recorder.into_frames()),
    })
}

/// Runs all five algorithms over the same (text, pattern), tracing
/// disabled, each timed independently.
///
/// Invocations run on rayon's pool; each owns its inputs, recorder, and
/// clock, so parallelism cannot change the reported matches. Fails with
/// [`MatchError::InvalidInput`] only for empty text; a pattern longer than
/// the text is zero matches, not an error.
pub fn compare(text: &str, pattern: &str) -> MatchResult<BTreeMap<Algorithm, SearchResult>> {
    validate(text, pattern, None)?;
    info!(
        "Comparing all {} algorithms over {} text characters",
        Algorithm::ALL.len(),
        text.chars().count()
    );

    let results: BTreeMap<Algorithm, SearchResult> = Algorithm::ALL
        .par_iter()
        .map(|&algorithm| {
            let mut recorder = Recorder::disabled();
            let started = Instant::now();
            let matches = algorithm.run(text, pattern, &mut recorder);
            let elapsed = started.elapsed();
            (
                algorithm,
                SearchResult {
                    algorithm,
                    matches,
                    elapsed,
                    frames: None,
                },
            )
        })
        .collect();

    Ok(results)
}
