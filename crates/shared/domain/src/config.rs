use crate::charset::Charset;
use crate::constants::{DEFAULT_CLIPBOARD_HOLD_SECS, DEFAULT_LOG_FILES, DEFAULT_SIGNAL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration of the `factorio-progress` tool.
///
/// Every section is optional; a missing file yields [`AppConfig::default`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: BarDefaults,
    /// Custom bars; when empty the science-pack preset is used.
    pub bars: Vec<BarSpec>,
    pub clipboard: ClipboardConfig,
    pub log: LogConfig,
}

/// Values applied to every bar that does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDefaults {
    pub length: u32,
    pub step_size: u32,
    pub charset: Charset,
    pub prefix: String,
}

/// One display panel of the generated blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSpec {
    pub signal: String,
    /// Constant bar colour (`#rrggbb`).
    pub color: Option<String>,
    /// Gradient stops (`#rrggbb`), low to high; ignored when `color` is set.
    pub gradient: Vec<String>,
    /// Snap gradient lookups to `1 / quantize` steps.
    pub quantize: Option<u32>,
    pub prefix: Option<String>,
    /// Tile position; bars without one are stacked two tiles apart.
    pub position: Option<Position>,
    pub length: Option<u32>,
    pub step_size: Option<u32>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub enabled: bool,
    /// Seconds to keep serving the clipboard after copying on Linux, where the
    /// selection lives only as long as its owner; `0` disables waiting.
    pub hold_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    /// Extra `tracing` directives, e.g. `fprog_progress=trace`.
    pub filter: Option<String>,
    /// Write file logs as JSON lines.
    pub json: bool,
    /// `minutely`, `hourly`, `daily` or `never`.
    pub rotation: String,
    pub max_files: usize,
}

// --- Default ---

impl Default for BarDefaults {
    fn default() -> Self {
        Self { length: 10, step_size: 1, charset: Charset::Blocks, prefix: String::new() }
    }
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            signal: DEFAULT_SIGNAL.to_owned(),
            color: None,
            gradient: Vec::new(),
            quantize: None,
            prefix: None,
            position: None,
            length: None,
            step_size: None,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { enabled: true, hold_secs: DEFAULT_CLIPBOARD_HOLD_SECS }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            dir: None,
            filter: None,
            json: false,
            rotation: "daily".to_owned(),
            max_files: DEFAULT_LOG_FILES,
        }
    }
}
