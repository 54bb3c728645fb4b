use super::Streams;
use crate::args::GenerateArgs;
use anyhow::Context;
use colored::Colorize;
use fprog::domain::config::{AppConfig, BarSpec};
use fprog::features::progress::{ProgressBarConfig, generate_blueprint_string};
use fprog::kernel::clipboard::{Clipboard, Retention};
use fprog::resolve_bars;
use std::io::Write;
use tracing::{info, warn};

/// Bars to generate: `--signal` bars if any, otherwise the configured ones
/// (or the science-pack preset), with command-line overrides applied last.
///
/// # Errors
/// Fails on malformed colours.
pub fn bars(args: &GenerateArgs, config: &AppConfig) -> anyhow::Result<Vec<ProgressBarConfig>> {
    let mut bars = if args.signals.is_empty() {
        resolve_bars(config).context("Invalid bar in configuration")?
    } else {
        args.signals
            .iter()
            .enumerate()
            .map(|(index, signal)| {
                let spec = BarSpec { signal: signal.clone(), ..BarSpec::default() };
                ProgressBarConfig::from_spec(&spec, &config.defaults, index)
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    for bar in &mut bars {
        args.bar.apply(bar).context("Invalid --color")?;
    }
    Ok(bars)
}

/// Generates the blueprint string and hands it to the clipboard and/or stdout.
///
/// The string is printed when `--print` is given or when it could not be copied.
///
/// # Errors
/// Fails on invalid bars or when writing to the streams fails.
pub fn run(
    args: &GenerateArgs,
    config: &AppConfig,
    clipboard: &mut dyn Clipboard,
    streams: &mut Streams<'_>,
) -> anyhow::Result<()> {
    let bars = bars(args, config)?;
    let encoded = generate_blueprint_string(&bars).context("Failed to generate blueprint")?;

    let copied = if args.no_copy || !config.clipboard.enabled {
        false
    } else {
        copy(&encoded, bars.len(), clipboard, streams)?
    };

    if args.print || !copied {
        writeln!(streams.out, "{encoded}")?;
    }
    Ok(())
}

/// Copies `encoded`; returns whether it will still be on the clipboard after exit.
fn copy(
    encoded: &str,
    bars: usize,
    clipboard: &mut dyn Clipboard,
    streams: &mut Streams<'_>,
) -> anyhow::Result<bool> {
    let retention = clipboard.retention();
    if let Retention::Held(hold) = retention {
        writeln!(
            streams.err,
            "{} Serving the blueprint for up to {}s: paste it in game, then copy anything else or press Ctrl+C",
            "⧗".bold().cyan(),
            hold.as_secs()
        )?;
    }

    if let Err(err) = clipboard.set_text(encoded) {
        warn!(error = %err, "Clipboard unavailable, printing instead");
        writeln!(streams.err, "{} {err}", "⚠".bold().yellow())?;
        return Ok(false);
    }

    if retention == Retention::UntilExit {
        warn!("Clipboard contents end with the process, printing instead");
        writeln!(
            streams.err,
            "{} The clipboard is released on exit unless a clipboard manager runs; printing the blueprint",
            "⚠".bold().yellow()
        )?;
        return Ok(false);
    }

    info!(bars, "Blueprint copied to clipboard");
    writeln!(
        streams.err,
        "{} Copied blueprint with {} progress bars to the clipboard",
        "✓".bold().green(),
        bars.to_string().cyan()
    )?;
    Ok(true)
}
