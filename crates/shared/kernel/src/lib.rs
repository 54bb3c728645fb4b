//! Kernel utilities shared across crates.
//! Keep this crate lightweight: configuration loading and clipboard access.
//!
//! ## Config loading
//! ```rust,no_run
//! use fprog_kernel::config::load_config;
//! use fprog_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
//!
//! ## Clipboard
//! ```rust
//! use fprog_kernel::clipboard::{Clipboard, MemoryClipboard};
//!
//! let mut clipboard = MemoryClipboard::default();
//! clipboard.set_text("0eNq...").unwrap();
//! assert_eq!(clipboard.get_text().unwrap(), "0eNq...");
//! ```

pub mod clipboard;
pub mod config;

pub use fprog_domain as domain;
