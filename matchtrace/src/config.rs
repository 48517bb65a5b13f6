//! Layered application configuration.
//!
//! Settings can come from, in order of precedence:
//! 1. a custom config file passed via `--config`,
//! 2. a local `.matchtrace.yaml` in the current directory,
//! 3. a global `<config-dir>/matchtrace/config.yaml`.
//!
//! CLI arguments merge over file values via [`AppConfig::merge_with_cli`].
//! The configuration only carries defaults for the benchmark harness plus
//! runtime knobs (log level, thread count); search and compare inputs are
//! always explicit arguments.

use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::benchmark::BenchParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Worker threads for the comparison runner
    /// Defaults to the number of CPU cores
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Default text sizes for `benchmark` when none are given
    #[serde(default = "default_text_sizes")]
    pub text_sizes: Vec<usize>,

    /// Default pattern size for `benchmark`
    #[serde(default = "default_pattern_size")]
    pub pattern_size: usize,

    /// Default trial count for `benchmark`
    #[serde(default = "default_num_trials")]
    pub num_trials: usize,

    /// Default seed for benchmark text generation
    #[serde(default)]
    pub seed: u64,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_text_sizes() -> Vec<usize> {
    vec![100, 500, 1000, 2000, 5000, 10000]
}

fn default_pattern_size() -> usize {
    5
}

fn default_num_trials() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            thread_count: default_thread_count(),
            text_sizes: default_text_sizes(),
            pattern_size: default_pattern_size(),
            num_trials: default_num_trials(),
            seed: 0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default locations.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, additionally reading `config_path` last so it
    /// wins over the default locations.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("matchtrace/config.yaml")),
            // Local config
            Some(PathBuf::from(".matchtrace.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI-provided values over this configuration. `None` means the
    /// flag was not given and the configured value stands.
    pub fn merge_with_cli(
        mut self,
        text_sizes: Option<Vec<usize>>,
        pattern_size: Option<usize>,
        num_trials: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(sizes) = text_sizes {
            self.text_sizes = sizes;
        }
        if let Some(size) = pattern_size {
            self.pattern_size = size;
        }
        if let Some(trials) = num_trials {
            self.num_trials = trials;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }

    /// The benchmark parameters this configuration describes.
    pub fn bench_params(&self) -> BenchParams {
        BenchParams {
            text_sizes: self.text_sizes.clone(),
            pattern_size: self.pattern_size,
            num_trials: self.num_trials,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            log_level: "debug"
            thread_count: 2
            text_sizes: [250, 750]
            pattern_size: 8
            num_trials: 4
            seed: 99
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = AppConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.thread_count, NonZeroUsize::new(2).unwrap());
        assert_eq!(config.text_sizes, vec![250, 750]);
        assert_eq!(config.pattern_size, 8);
        assert_eq!(config.num_trials, 4);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"log_level: \"info\"\n").unwrap();

        let config = AppConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.text_sizes, vec![100, 500, 1000, 2000, 5000, 10000]);
        assert_eq!(config.pattern_size, 5);
        assert_eq!(config.num_trials, 10);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_merge_with_cli() {
        let config = AppConfig::default();
        let merged = config.merge_with_cli(Some(vec![64, 128]), None, Some(20), Some(7));
        assert_eq!(merged.text_sizes, vec![64, 128]);
        assert_eq!(merged.pattern_size, default_pattern_size()); // untouched
        assert_eq!(merged.num_trials, 20);
        assert_eq!(merged.seed, 7);
    }

    #[test]
    fn test_bench_params_mirror_config() {
        let config = AppConfig::default();
        let params = config.bench_params();
        assert_eq!(params.text_sizes, config.text_sizes);
        assert_eq!(params.pattern_size, config.pattern_size);
        assert_eq!(params.num_trials, config.num_trials);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"thread_count: \"several\"\n").unwrap();

        assert!(AppConfig::load_from(Some(&config_path)).is_err());
    }
}
