//! Shared string constants: application identity, game prototype names and the
//! science-pack palette.

/// Binary and logger name.
pub const APP_NAME: &str = "factorio-progress";
/// Prefix of environment variables overriding configuration (`FPROG__LOG__LEVEL`).
pub const ENV_PREFIX: &str = "FPROG";
/// Config file looked up in the working directory when none is given (any supported extension).
pub const DEFAULT_CONFIG_STEM: &str = "factorio-progress";
/// Rolling log files kept by default.
pub const DEFAULT_LOG_FILES: usize = 5;
/// Upper bound on how long a Linux copy keeps serving the clipboard.
pub const DEFAULT_CLIPBOARD_HOLD_SECS: u64 = 30;

/// Entity and icon prototype of the display panel.
pub const DISPLAY_PANEL: &str = "display-panel";
/// Signal used by a progress bar unless configured otherwise.
pub const DEFAULT_SIGNAL: &str = "parameter-0";
/// Signals containing this marker are blueprint parameters.
pub const PARAMETER_MARKER: &str = "parameter";
/// Font that renders the block characters at a fixed width.
pub const BAR_FONT: &str = "technology-slot-level-font";

/// Science packs and the colour of their bar, top to bottom.
pub const SCIENCE_PACKS: [(&str, &str); 12] = [
    ("#8e1dcc", "production-science-pack"),
    ("#e82195", "electromagnetic-science-pack"),
    ("#e94040", "automation-science-pack"),
    ("#ff9a25", "metallurgic-science-pack"),
    ("#f5e45b", "utility-science-pack"),
    ("#a2b90b", "agricultural-science-pack"),
    ("#55f261", "logistic-science-pack"),
    ("#3ec5e3", "chemical-science-pack"),
    ("#2c46c5", "cryogenic-science-pack"),
    ("#29274f", "promethium-science-pack"),
    ("#71788f", "military-science-pack"),
    ("#f9f9f9", "space-science-pack"),
];
