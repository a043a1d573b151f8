//! Briefing Desk CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use brief_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod demo;
mod paths;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::AppContext;
use crate::paths::{resolve_data_dir, resolve_dataset};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let ctx = AppContext {
        data_dir: resolve_data_dir(cli.data_dir.clone()),
        dataset: resolve_dataset(cli.dataset.clone()),
    };

    let result = match &cli.command {
        Command::List(args) => commands::run_list(&ctx, args),
        Command::Show(args) => commands::run_show(&ctx, args),
        Command::Audiences => commands::run_audiences(&ctx),
        Command::Bookmark(args) => commands::run_bookmark(&ctx, args),
        Command::Progress(args) => commands::run_progress(&ctx, args),
        Command::Open(args) => commands::run_open(&ctx, args),
        Command::Annotate(args) => commands::run_annotate(&ctx, args),
        Command::Annotations(args) => commands::run_annotations(&ctx, args),
        Command::Export(args) => commands::run_export(&ctx, args),
        Command::Ask(args) => commands::run_ask(&ctx, args),
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
    config
}
