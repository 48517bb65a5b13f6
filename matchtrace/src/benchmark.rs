//! Benchmark harness: synthetic texts of increasing size, every algorithm,
//! aggregated mean timings.
//!
//! Text generation is driven by an explicit seed so benchmark runs (and the
//! tests over them) are reproducible. The pattern for each size is
//! extracted from the generated text at a random offset, which both derives
//! a pattern of the requested size and guarantees at least one planted
//! occurrence — an all-mismatch text would make the timings degenerate.
//! Trials run sequentially so one algorithm's trial is never timed while
//! siblings compete for cores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::algorithms::Algorithm;
use crate::errors::{MatchError, MatchResult};
use crate::results::BenchmarkResult;
use crate::trace::Recorder;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Parameters for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchParams {
    /// Text sizes to generate, in the order results should be reported
    pub text_sizes: Vec<usize>,
    /// Length of the pattern searched at every size
    pub pattern_size: usize,
    /// Trials per (algorithm, size); the mean is reported
    pub num_trials: usize,
    /// Seed for text generation
    pub seed: u64,
}

impl BenchParams {
    pub fn validate(&self) -> MatchResult<()> {
        if self.text_sizes.is_empty() {
            return Err(MatchError::invalid_configuration(
                "text sizes must not be empty",
            ));
        }
        if self.text_sizes.iter().any(|&s| s == 0) {
            return Err(MatchError::invalid_configuration(
                "text sizes must be positive",
            ));
        }
        if self.pattern_size == 0 {
            return Err(MatchError::invalid_configuration(
                "pattern size must be positive",
            ));
        }
        if self.num_trials == 0 {
            return Err(MatchError::invalid_configuration(
                "number of trials must be positive",
            ));
        }
        if let Some(&smallest) = self.text_sizes.iter().min() {
            if self.pattern_size > smallest {
                return Err(MatchError::invalid_configuration(format!(
                    "pattern size {} exceeds smallest text size {smallest}",
                    self.pattern_size
                )));
            }
        }
        Ok(())
    }
}

/// Generates `size` random lowercase characters from a seeded RNG.
pub fn generate_text(rng: &mut fastrand::Rng, size: usize) -> String {
    (0..size)
        .map(|_| ALPHABET[rng.usize(0..ALPHABET.len())] as char)
        .collect()
}

/// Runs every algorithm `num_trials` times per text size and aggregates
/// mean execution time per (algorithm, size).
pub fn benchmark(params: &BenchParams) -> MatchResult<BenchmarkResult> {
    params.validate()?;
    info!(
        "Benchmarking {} sizes x {} algorithms x {} trials (seed {})",
        params.text_sizes.len(),
        Algorithm::ALL.len(),
        params.num_trials,
        params.seed
    );

    let mut rng = fastrand::Rng::with_seed(params.seed);
    let mut mean_times: BTreeMap<Algorithm, Vec<Duration>> = Algorithm::ALL
        .iter()
        .map(|&a| (a, Vec::with_capacity(params.text_sizes.len())))
        .collect();

    for &size in &params.text_sizes {
        let text = generate_text(&mut rng, size);
        // Extracting the pattern from the text plants an occurrence by
        // construction.
        let offset = rng.usize(0..=size - params.pattern_size);
        let pattern: String = text
            .chars()
            .skip(offset)
            .take(params.pattern_size)
            .collect();

        for algorithm in Algorithm::ALL {
            let mut total = Duration::ZERO;
            for _ in 0..params.num_trials {
                let mut recorder = Recorder::disabled();
                let started = Instant::now();
                let matches = algorithm.run(&text, &pattern, &mut recorder);
                total += started.elapsed();
                debug_assert!(!matches.is_empty(), "planted occurrence must be found");
            }
            let mean = total / params.num_trials as u32;
            debug!("{algorithm} at size {size}: mean {mean:?}");
            mean_times
                .entry(algorithm)
                .or_default()
                .push(mean);
        }
    }

    Ok(BenchmarkResult {
        text_sizes: params.text_sizes.clone(),
        mean_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> BenchParams {
        BenchParams {
            text_sizes: vec![100, 500],
            pattern_size: 5,
            num_trials: 3,
            seed: 42,
        }
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let mut params = valid_params();
        params.text_sizes.clear();
        assert!(matches!(
            params.validate(),
            Err(MatchError::InvalidConfiguration(_))
        ));

        let mut params = valid_params();
        params.text_sizes = vec![100, 0];
        assert!(params.validate().is_err());

        let mut params = valid_params();
        params.pattern_size = 0;
        assert!(params.validate().is_err());

        let mut params = valid_params();
        params.num_trials = 0;
        assert!(params.validate().is_err());

        let mut params = valid_params();
        params.pattern_size = 101;
        assert!(params.validate().is_err());

        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_text_generation_is_seeded() {
        let mut a = fastrand::Rng::with_seed(7);
        let mut b = fastrand::Rng::with_seed(7);
        assert_eq!(generate_text(&mut a, 64), generate_text(&mut b, 64));

        let mut c = fastrand::Rng::with_seed(8);
        assert_ne!(generate_text(&mut a, 64), generate_text(&mut c, 64));
    }

    #[test]
    fn test_generated_text_is_lowercase_ascii() {
        let mut rng = fastrand::Rng::with_seed(1);
        let text = generate_text(&mut rng, 256);
        assert_eq!(text.chars().count(), 256);
        assert!(text.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_benchmark_shape_matches_request() {
        let params = valid_params();
        let result = benchmark(&params).unwrap();
        assert_eq!(result.text_sizes, params.text_sizes);
        assert_eq!(result.mean_times.len(), Algorithm::ALL.len());
        for times in result.mean_times.values() {
            assert_eq!(times.len(), params.text_sizes.len());
        }
    }
}
