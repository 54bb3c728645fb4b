//! Ready-made bar sets.

use crate::color::{Color, ColorMap};
use crate::config::ProgressBarConfig;
use crate::error::{ProgressError, ProgressErrorExt};
use fprog_domain::config::Position;
use fprog_domain::constants::SCIENCE_PACKS;

/// Science packs (`(colour, signal)`) in the order their bars are stacked.
#[must_use]
pub const fn science_packs() -> &'static [(&'static str, &'static str)] {
    &SCIENCE_PACKS
}

/// One bar per science pack, two tiles apart, each in its pack's colour.
///
/// Every field other than position, signal and colour map is taken from `base`.
///
/// # Errors
/// Returns [`ProgressError::InvalidColor`] if a palette entry is malformed.
pub fn science_pack_bars(
    base: &ProgressBarConfig,
) -> Result<Vec<ProgressBarConfig>, ProgressError> {
    let mut bars = Vec::with_capacity(SCIENCE_PACKS.len());
    for (row, &(hex, signal)) in (0..).zip(science_packs()) {
        let color = Color::from_hex(hex).context(signal)?;
        bars.push(ProgressBarConfig {
            position: Position { x: 0, y: 2 * row },
            signal: signal.to_owned(),
            color_map: Some(ColorMap::Constant(color)),
            ..base.clone()
        });
    }
    Ok(bars)
}
