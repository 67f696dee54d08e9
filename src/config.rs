//! Runtime configuration.
//!
//! Values are resolved in layers: built-in defaults, then `NUMSEQ_*`
//! environment variables, then command-line flags.

use clap::Parser;
use thiserror::Error;

use crate::core::{clamp_time_limit, parse_time_limit_input};
use crate::types::{GameMode, DEFAULT_TIME_LIMIT};

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_FRAME_MS: u64 = 50;
pub const MIN_FRAME_MS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown game mode `{0}` (expected timeLimit or completion)")]
    InvalidMode(String),
}

/// Number sequence - find 0 to 99 on a shuffled grid, in order
#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(name = "number-sequence")]
#[command(about = "Find the numbers 0-99 on a shuffled 10x10 grid in ascending order", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode: timeLimit or completion
    #[arg(long)]
    pub mode: Option<String>,

    /// Time limit in seconds (clamped to 10-600)
    #[arg(long, allow_negative_numbers = true)]
    pub time_limit: Option<f64>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<String>,

    /// Tracing filter directive (e.g. "debug" or "number_sequence_core=trace")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Frame interval in milliseconds
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Print the final result as JSON after exiting
    #[arg(long)]
    pub print_result: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: GameMode,
    pub time_limit_seconds: u16,
    pub log_path: Option<String>,
    pub log_filter: String,
    pub frame_ms: u64,
    pub print_result: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            time_limit_seconds: DEFAULT_TIME_LIMIT,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            frame_ms: DEFAULT_FRAME_MS,
            print_result: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `NUMSEQ_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mode = match lookup("NUMSEQ_MODE") {
            Some(s) => parse_mode(&s)?,
            None => defaults.mode,
        };

        let time_limit_seconds = lookup("NUMSEQ_TIME_LIMIT")
            .map(|s| parse_time_limit_input(&s, defaults.time_limit_seconds))
            .unwrap_or(defaults.time_limit_seconds);

        let log_path = lookup("NUMSEQ_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("NUMSEQ_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let frame_ms = lookup("NUMSEQ_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms)
            .max(MIN_FRAME_MS);

        Ok(Self {
            mode,
            time_limit_seconds,
            log_path,
            log_filter,
            frame_ms,
            print_result: false,
        })
    }

    /// Command-line flags override the current values.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(mode) = &cli.mode {
            self.mode = parse_mode(mode)?;
        }
        if let Some(seconds) = cli.time_limit {
            self.time_limit_seconds = clamp_time_limit(seconds);
        }
        if let Some(path) = &cli.log_file {
            let path = path.trim();
            self.log_path = if path.is_empty() {
                None
            } else {
                Some(path.to_string())
            };
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter = filter.clone();
        }
        if let Some(frame_ms) = cli.frame_ms {
            self.frame_ms = frame_ms.max(MIN_FRAME_MS);
        }
        self.print_result |= cli.print_result;
        Ok(self)
    }

    /// Full resolution: defaults, environment, then `cli`.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_env()?.with_cli(cli)
    }
}

fn parse_mode(s: &str) -> Result<GameMode, ConfigError> {
    GameMode::from_str(s.trim()).ok_or_else(|| ConfigError::InvalidMode(s.to_string()))
}
