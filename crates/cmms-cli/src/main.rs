//! CMMS Console CLI.

use clap::{ColorChoice, Parser};
use cmms_cli::logging::{init_logging, LogConfig, LogFormat};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    load_dataset, run_calibrations, run_equipment, run_export, run_import, run_seed, run_summary,
    run_work_orders,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Equipment(args) => {
            let dataset = load_dataset(cli.data.as_deref())?;
            run_equipment(args, &dataset)
        }
        Command::WorkOrders(args) => {
            let dataset = load_dataset(cli.data.as_deref())?;
            run_work_orders(args, &dataset)
        }
        Command::Calibrations(args) => {
            let dataset = load_dataset(cli.data.as_deref())?;
            run_calibrations(args, &dataset)
        }
        Command::Summary => {
            let dataset = load_dataset(cli.data.as_deref())?;
            run_summary(&dataset)
        }
        Command::Export(args) => {
            let dataset = load_dataset(cli.data.as_deref())?;
            run_export(args, &dataset)
        }
        Command::Import(args) => run_import(args, cli.data.as_deref()),
        Command::Seed(args) => run_seed(args),
    }
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
