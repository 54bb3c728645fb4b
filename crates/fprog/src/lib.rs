//! Facade crate for `factorio-progress` features and shared modules.
//! Re-exports domain/kernel primitives and composes the feature crates into
//! ready-to-use bar sets.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `fprog` (the `clipboard` feature is on by default).
//! - Resolve the bars of an [`AppConfig`] with [`resolve_bars`] and hand them to
//!   [`features::progress::generate_blueprint_string`].

pub use fprog_domain as domain;
pub use fprog_kernel as kernel;

use fprog_domain::config::AppConfig;
use fprog_progress::{ProgressBarConfig, ProgressError, science_pack_bars};
use tracing::debug;

/// Feature registry for runtime introspection.
pub mod features {
    pub use fprog_blueprint as blueprint;
    pub use fprog_markup as markup;
    pub use fprog_progress as progress;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "blueprint",
        "progress",
        "markup",
        #[cfg(feature = "clipboard")]
        "clipboard",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Bars described by `config`: its explicit `bars`, or the science-pack preset
/// built from `defaults` when none are listed.
///
/// # Errors
/// Returns [`ProgressError::InvalidColor`] for malformed colours in the config.
pub fn resolve_bars(config: &AppConfig) -> Result<Vec<ProgressBarConfig>, ProgressError> {
    if config.bars.is_empty() {
        debug!("No bars configured, using the science-pack preset");
        return science_pack_bars(&ProgressBarConfig::from_defaults(&config.defaults));
    }

    config
        .bars
        .iter()
        .enumerate()
        .map(|(index, spec)| ProgressBarConfig::from_spec(spec, &config.defaults, index))
        .collect()
}
