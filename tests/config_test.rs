use clap::Parser;

use number_sequence::app::App;
use number_sequence::config::{AppConfig, Cli, ConfigError};
use number_sequence::types::{GameMode, GamePhase};

#[test]
fn cli_flags_parse() {
    let cli = Cli::parse_from([
        "number-sequence",
        "--mode",
        "completion",
        "--time-limit",
        "30.4",
        "--log-file",
        "/tmp/numseq.log",
        "--log-filter",
        "debug",
    ]);
    assert_eq!(cli.mode.as_deref(), Some("completion"));
    assert_eq!(cli.time_limit, Some(30.4));
    assert!(!cli.print_result);

    let config = AppConfig::default().with_cli(&cli).unwrap();
    assert_eq!(config.mode, GameMode::Completion);
    assert_eq!(config.time_limit_seconds, 30);
    assert_eq!(config.log_path.as_deref(), Some("/tmp/numseq.log"));
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn env_layer_is_overridden_by_cli() {
    let env = AppConfig::from_lookup(|key| match key {
        "NUMSEQ_MODE" => Some("completion".to_string()),
        "NUMSEQ_TIME_LIMIT" => Some("5".to_string()),
        "NUMSEQ_LOG_PATH" => Some("/tmp/env.log".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(env.time_limit_seconds, 10);

    let cli = Cli::parse_from(["number-sequence", "--mode", "timeLimit", "--log-file", ""]);
    let config = env.with_cli(&cli).unwrap();
    assert_eq!(config.mode, GameMode::TimeLimit);
    assert_eq!(config.time_limit_seconds, 10);
    assert_eq!(config.log_path, None);
}

#[test]
fn unknown_mode_from_cli_is_rejected() {
    let cli = Cli::parse_from(["number-sequence", "--mode", "zen"]);
    let err = AppConfig::default().with_cli(&cli).unwrap_err();
    assert_eq!(err, ConfigError::InvalidMode("zen".to_string()));
}

#[test]
fn resolved_config_seeds_idle_state() {
    let cli = Cli::parse_from(["number-sequence", "--mode", "completion", "--time-limit", "250"]);
    let config = AppConfig::default().with_cli(&cli).unwrap();
    let app = App::from_config(&config);
    assert_eq!(app.state().phase(), GamePhase::Idle);
    assert_eq!(app.state().mode(), GameMode::Completion);
    assert_eq!(app.state().time_limit_seconds(), 250);
}
