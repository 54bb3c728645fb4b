use super::Streams;
use crate::args::PreviewArgs;
use anyhow::Context;
use fprog::domain::config::AppConfig;
use fprog::features::markup::{sample_evenly, write_rendered};
use fprog::features::progress::{ProgressBarConfig, generate_conditions};

/// Renders `--samples` evenly spaced states of one bar built from the defaults.
///
/// # Errors
/// Fails on invalid bar settings or when stdout is closed.
pub fn run(
    args: &PreviewArgs,
    config: &AppConfig,
    streams: &mut Streams<'_>,
) -> anyhow::Result<()> {
    let mut bar = ProgressBarConfig::from_defaults(&config.defaults);
    if let Some(prefix) = &args.prefix {
        bar.prefix.clone_from(prefix);
    }
    args.bar.apply(&mut bar).context("Invalid --color")?;

    let messages = generate_conditions(&bar).context("Failed to generate bar")?;
    for message in sample_evenly(&messages, args.samples) {
        write_rendered(&mut *streams.out, &message.text)?;
    }
    Ok(())
}
