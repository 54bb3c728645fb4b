//! # Progress bars
//!
//! Generates Factorio display-panel blueprints that render a text progress bar
//! for the value of a circuit signal. Every possible value gets its own panel
//! message whose text draws the bar with partial block characters, optionally
//! coloured through a [`ColorMap`].
//!
//! ```rust
//! use fprog_progress::{ProgressBarConfig, generate_blueprint_string, science_pack_bars};
//!
//! let bars = science_pack_bars(&ProgressBarConfig::default()).unwrap();
//! let encoded = generate_blueprint_string(&bars).unwrap();
//! assert!(encoded.starts_with('0'));
//! ```

pub mod color;
pub mod config;
mod error;
pub mod generate;
pub mod presets;

pub use crate::color::{Color, ColorMap, Gradient};
pub use crate::config::ProgressBarConfig;
pub use crate::error::{ProgressError, ProgressErrorExt};
pub use crate::generate::{
    generate_blueprint, generate_blueprint_string, generate_conditions, generate_entity,
};
pub use crate::presets::{science_pack_bars, science_packs};
pub use fprog_domain::charset::Charset;
