//! Owned result types for single runs, comparison batches, and benchmarks.
//!
//! Results are plain data: the engine fills them in, the caller owns them,
//! and rendering/transport layers consume them without this crate knowing
//! how. Everything derives serde so a front end can ship results over the
//! wire losslessly (`Duration` keeps its full secs/nanos precision).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::algorithms::Algorithm;
use crate::trace::TraceFrame;

/// Outcome of running one algorithm over one (text, pattern) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Which algorithm produced this result
    pub algorithm: Algorithm,
    /// Ascending, duplicate-free match start positions (character indices)
    pub matches: Vec<usize>,
    /// Wall-clock duration of the matching loop, tracing excluded
    pub elapsed: Duration,
    /// Trace frames, present only when the run was traced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<TraceFrame>>,
}

impl SearchResult {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.as_ref().map_or(0, Vec::len)
    }
}

/// Mean execution times per algorithm across increasing text sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// The text sizes that were benchmarked, in request order
    pub text_sizes: Vec<usize>,
    /// Per algorithm, mean elapsed time per text size, aligned with
    /// `text_sizes`
    pub mean_times: BTreeMap<Algorithm, Vec<Duration>>,
}

impl BenchmarkResult {
    /// Mean time for one (algorithm, size) cell, if present.
    pub fn mean_for(&self, algorithm: Algorithm, size: usize) -> Option<Duration> {
        let idx = self.text_sizes.iter().position(|&s| s == size)?;
        self.mean_times.get(&algorithm)?.get(idx).copied()
    }
}
