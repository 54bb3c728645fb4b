use super::Streams;
use crate::args::DecodeArgs;
use anyhow::Context;
use fprog::features::blueprint::decode_value;
use fprog::kernel::clipboard::Clipboard;
use std::io::{self, Write};
use tracing::debug;

/// Pretty-prints the JSON behind a blueprint string.
///
/// The string comes from the argument, from stdin for `-`, or from the clipboard.
///
/// # Errors
/// Fails when no string is available or it is not a valid blueprint string.
pub fn run(
    args: &DecodeArgs,
    clipboard: &mut dyn Clipboard,
    streams: &mut Streams<'_>,
) -> anyhow::Result<()> {
    let raw = match args.blueprint.as_deref() {
        Some("-") => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
        Some(text) => text.to_owned(),
        None => {
            debug!("Reading blueprint string from the clipboard");
            clipboard
                .get_text()
                .context("No blueprint string given and none on the clipboard")?
        },
    };

    let value = decode_value(&raw).context("Not a blueprint string")?;
    writeln!(streams.out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
