use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character set used to draw partial blocks of a progress bar.
///
/// The last character of a set is the "full" block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Eighth blocks `▏▎▍▌▋▊▉█`, eight divisions per cell.
    #[default]
    Blocks,
    /// Box-drawing border `╸━`, two divisions per cell.
    Border,
}

impl Charset {
    #[must_use]
    pub const fn chars(self) -> &'static [char] {
        match self {
            Self::Blocks => &['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'],
            Self::Border => &['╸', '━'],
        }
    }

    /// Number of sub-steps drawn inside one cell.
    #[must_use]
    pub const fn divisions(self) -> usize {
        self.chars().len()
    }

    #[must_use]
    pub const fn full(self) -> char {
        let chars = self.chars();
        chars[chars.len() - 1]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocks" | "block" => Ok(Self::Blocks),
            "border" => Ok(Self::Border),
            other => Err(format!("unknown charset '{other}' (expected 'blocks' or 'border')")),
        }
    }
}
