pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod engine;
pub mod errors;
pub mod results;
pub mod trace;

pub use algorithms::Algorithm;
pub use benchmark::{benchmark, BenchParams};
pub use config::AppConfig;
pub use engine::{compare, search};
pub use errors::{MatchError, MatchResult};
pub use results::{BenchmarkResult, SearchResult};
pub use trace::{Recorder, TraceFrame};
