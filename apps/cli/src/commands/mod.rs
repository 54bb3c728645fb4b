//! Subcommand handlers.

pub mod decode;
pub mod generate;
pub mod preview;

use crate::args::BarArgs;
use fprog::features::progress::{Color, ColorMap, ProgressBarConfig, ProgressError};
use std::io::Write;

/// Output streams of a command; stdout carries data, stderr carries status lines.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl std::fmt::Debug for Streams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}

impl BarArgs {
    /// Applies the command-line overrides to an already resolved bar.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidColor`] for a malformed `--color`.
    pub fn apply(&self, bar: &mut ProgressBarConfig) -> Result<(), ProgressError> {
        if let Some(length) = self.length {
            bar.length = length;
        }
        if let Some(step_size) = self.step_size {
            bar.step_size = step_size;
        }
        if let Some(charset) = self.charset {
            bar.charset = charset;
        }
        if let Some(hex) = &self.color {
            bar.color_map = Some(ColorMap::Constant(Color::from_hex(hex)?));
        }
        Ok(())
    }
}
