//! `factorio-progress` command-line application.
//!
//! Parses arguments, loads configuration, sets up logging and dispatches to the
//! subcommand handlers in [`commands`].

pub mod args;
pub mod clipboard;
pub mod commands;

use crate::args::{Cli, Command, GenerateArgs};
use crate::clipboard::SystemClipboardHandle;
use crate::commands::Streams;
use anyhow::Context;
use fprog::domain::config::{AppConfig, LogConfig};
use fprog::domain::constants::APP_NAME;
use fprog::kernel::clipboard::Clipboard;
use fprog::kernel::config::load_config;
use fprog_logger::{LevelFilter, Logger, parse_level, parse_rotation};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Runs the CLI against the process environment (config file, stdout, system clipboard).
///
/// # Errors
/// Returns the first error of configuration loading, logger setup or the command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config: AppConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;

    let level = log_level(cli.verbose, &config.log.level)?;
    let log_dir = cli.log_dir.as_deref().or(config.log.dir.as_deref());
    let _log = init_logging(level, log_dir, &config.log)?;
    debug!(?config, "Configuration loaded");

    let (stdout, stderr) = (io::stdout(), io::stderr());
    let (mut out, mut err) = (stdout.lock(), stderr.lock());
    let mut streams = Streams { out: &mut out, err: &mut err };
    let mut clipboard =
        SystemClipboardHandle::new(Duration::from_secs(config.clipboard.hold_secs));

    execute(cli.command, &config, &mut clipboard, &mut streams)
}

/// Dispatches a parsed subcommand; `generate` runs when none is given.
///
/// # Errors
/// Propagates the command's error.
pub fn execute(
    command: Option<Command>,
    config: &AppConfig,
    clipboard: &mut dyn Clipboard,
    streams: &mut Streams<'_>,
) -> anyhow::Result<()> {
    match command.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => commands::generate::run(&args, config, clipboard, streams),
        Command::Preview(args) => commands::preview::run(&args, config, streams),
        Command::Decode(args) => commands::decode::run(&args, clipboard, streams),
    }
}

/// `-v` and `-vv` win over the configured level.
fn log_level(verbose: u8, configured: &str) -> anyhow::Result<LevelFilter> {
    Ok(match verbose {
        0 => parse_level(configured).context("Invalid log.level")?,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    })
}

fn init_logging(
    level: LevelFilter,
    dir: Option<&Path>,
    log: &LogConfig,
) -> anyhow::Result<Logger> {
    let mut builder =
        Logger::builder().name(APP_NAME).level(level).ansi(io::stderr().is_terminal());
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter.as_str());
    }

    let logger = match dir {
        Some(dir) => {
            let rotation = parse_rotation(&log.rotation).context("Invalid log.rotation")?;
            let builder = builder.path(dir).rotation(rotation).max_files(log.max_files);
            if log.json {
                builder.json().init()
            } else {
                builder.init()
            }
        },
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{DecodeArgs, PreviewArgs};
    use clap::Parser;
    use fprog::kernel::clipboard::MemoryClipboard;

    #[test]
    fn verbosity_overrides_config_level() {
        assert_eq!(log_level(0, "info").unwrap(), LevelFilter::INFO);
        assert_eq!(log_level(1, "error").unwrap(), LevelFilter::DEBUG);
        assert_eq!(log_level(3, "error").unwrap(), LevelFilter::TRACE);
        assert!(log_level(0, "chatty").is_err());
    }

    #[test]
    fn log_file_settings_are_validated_before_init() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogConfig { rotation: "weekly".into(), ..LogConfig::default() };
        let err = init_logging(LevelFilter::WARN, Some(dir.path()), &log).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid log.rotation"), "{err:#}");

        let log = LogConfig { filter: Some("fprog=very-loud".into()), ..LogConfig::default() };
        let err = init_logging(LevelFilter::WARN, None, &log).unwrap_err();
        assert!(format!("{err:#}").contains("very-loud"), "{err:#}");
    }

    #[test]
    fn bare_invocation_generates() {
        let cli = Cli::parse_from(["factorio-progress", "-vv", "--log-dir", "logs"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_dir.as_deref(), Some(Path::new("logs")));

        let mut clipboard = MemoryClipboard::default();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        execute(
            cli.command,
            &AppConfig::default(),
            &mut clipboard,
            &mut Streams { out: &mut out, err: &mut err },
        )
        .unwrap();
        assert!(clipboard.text().is_some_and(|s| s.starts_with('0')));
    }

    #[test]
    fn subcommands_parse_their_flags() {
        let cli = Cli::parse_from([
            "factorio-progress",
            "generate",
            "--signal",
            "parameter-1",
            "-s",
            "iron-plate",
            "--charset",
            "border",
            "--no-copy",
            "-c",
            "bars.toml",
        ]);
        let Some(Command::Generate(args)) = cli.command else { panic!("expected generate") };
        assert_eq!(args.signals, vec!["parameter-1", "iron-plate"]);
        assert!(args.no_copy);
        assert_eq!(args.bar.charset, Some(fprog::domain::charset::Charset::Border));
        assert_eq!(cli.config.as_deref(), Some(Path::new("bars.toml")));

        let cli = Cli::parse_from(["factorio-progress", "preview", "-n", "9"]);
        let Some(Command::Preview(PreviewArgs { samples, .. })) = cli.command else {
            panic!("expected preview")
        };
        assert_eq!(samples, 9);

        let cli = Cli::parse_from(["factorio-progress", "decode", "0eN"]);
        let Some(Command::Decode(DecodeArgs { blueprint })) = cli.command else {
            panic!("expected decode")
        };
        assert_eq!(blueprint.as_deref(), Some("0eN"));
    }

    #[test]
    fn unknown_charset_is_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["factorio-progress", "generate", "--charset", "dots"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown charset 'dots'"));
    }
}
