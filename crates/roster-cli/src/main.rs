//! Employee roster CLI.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use roster_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use roster_cli::commands::{Outcome, execute, open_roster};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::render::render_errors;
use roster_cli::settings::{DATA_DIR_ENV, load_settings, resolve_data_dir};
use roster_persistence::FileSlot;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::Rejected(errors)) => {
            for line in render_errors(&errors) {
                eprintln!("{line}");
            }
            1
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<Outcome> {
    let settings = load_settings();
    let data_dir = resolve_data_dir(
        cli.data_dir.as_deref(),
        std::env::var_os(DATA_DIR_ENV).map(Into::into),
        &settings,
    )?;
    tracing::debug!(dir = %data_dir.display(), "using data directory");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("create data directory {}", data_dir.display()))?;
    let mut store = open_roster(FileSlot::new(data_dir), &settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = execute(&mut store, &cli.command, &mut io::stdin().lock(), &mut out)?;
    out.flush()?;
    // A one-shot run has nothing left to show the toast on.
    store.settle();
    Ok(outcome)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config.log_data = cli.log_data;
    config
}
