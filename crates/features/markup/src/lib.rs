//! # Markup preview
//!
//! Renders the rich-text markup used in display-panel messages (`[font=..]`,
//! `[color=#rrggbb]`) as ANSI truecolour text, and samples long message lists
//! for a quick look in the terminal.
//!
//! ```rust
//! use fprog_markup::render;
//!
//! let line = render("[font=default-bold][color=#ff0000]red[/color][/font]");
//! assert_eq!(line, "\x1b[38;2;255;0;0mred\x1b[0m");
//! ```

mod render;
mod sample;

pub use crate::render::{print, render, write_rendered};
pub use crate::sample::sample_evenly;
