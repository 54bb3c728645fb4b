use crate::color::{Color, ColorMap};
use crate::error::{ProgressError, ProgressErrorExt};
use fprog_domain::charset::Charset;
use fprog_domain::config::{BarDefaults, BarSpec, Position};
use fprog_domain::constants::DEFAULT_SIGNAL;

/// Settings of a single display-panel progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarConfig {
    /// Tile position of the panel.
    pub position: Position,
    /// Circuit signal whose value drives the bar.
    pub signal: String,
    /// Rich text placed before the bar (e.g. `[item=iron-plate]`).
    pub prefix: String,
    pub color_map: Option<ColorMap>,
    /// Number of full blocks in the bar.
    pub length: u32,
    /// Sub-steps between two consecutive messages.
    pub step_size: u32,
    pub charset: Charset,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            signal: DEFAULT_SIGNAL.to_owned(),
            prefix: String::new(),
            color_map: None,
            length: 10,
            step_size: 1,
            charset: Charset::Blocks,
        }
    }
}

impl ProgressBarConfig {
    /// Bar at `position` driven by `signal`, everything else default.
    pub fn new(position: Position, signal: impl Into<String>) -> Self {
        Self { position, signal: signal.into(), ..Self::default() }
    }

    /// Bar using the shared `defaults` and no colour map.
    #[must_use]
    pub fn from_defaults(defaults: &BarDefaults) -> Self {
        Self {
            prefix: defaults.prefix.clone(),
            length: defaults.length,
            step_size: defaults.step_size,
            charset: defaults.charset,
            ..Self::default()
        }
    }

    /// Resolves a configured bar against the shared defaults.
    ///
    /// Bars without an explicit position are stacked two tiles apart by `index`.
    /// A constant `color` wins over `gradient` stops.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidColor`] for malformed colours.
    pub fn from_spec(
        spec: &BarSpec,
        defaults: &BarDefaults,
        index: usize,
    ) -> Result<Self, ProgressError> {
        let row = i32::try_from(index).map_err(|e| ProgressError::InvalidConfig {
            message: e.to_string().into(),
            context: Some("Too many bars".into()),
        })?;

        let color_map = match (&spec.color, spec.gradient.as_slice()) {
            (Some(hex), _) => Some(ColorMap::Constant(
                Color::from_hex(hex).context(format!("Bar '{}'", spec.signal))?,
            )),
            (None, []) => None,
            (None, stops) => Some(
                ColorMap::from_hex_stops(stops)
                    .context(format!("Bar '{}'", spec.signal))?
                    .quantized(spec.quantize.unwrap_or(0)),
            ),
        };

        Ok(Self {
            position: spec.position.unwrap_or(Position { x: 0, y: row.saturating_mul(2) }),
            signal: spec.signal.clone(),
            prefix: spec.prefix.clone().unwrap_or_else(|| defaults.prefix.clone()),
            color_map,
            length: spec.length.unwrap_or(defaults.length),
            step_size: spec.step_size.unwrap_or(defaults.step_size),
            charset: defaults.charset,
        })
    }

    /// Checks that the bar yields at least one full block and a positive step.
    ///
    /// # Errors
    /// Returns [`ProgressError::InvalidConfig`] when `length` or `step_size` is zero.
    pub fn validate(&self) -> Result<(), ProgressError> {
        let message = match (self.length, self.step_size) {
            (0, _) => "length must be at least 1",
            (_, 0) => "step_size must be at least 1",
            _ => return Ok(()),
        };
        Err(ProgressError::InvalidConfig {
            message: message.into(),
            context: Some(format!("Bar '{}'", self.signal).into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_game_conventions() {
        let cfg = ProgressBarConfig::default();
        assert_eq!(cfg.position, Position { x: 0, y: 0 });
        assert_eq!(cfg.signal, "parameter-0");
        assert_eq!(cfg.length, 10);
        assert_eq!(cfg.step_size, 1);
        assert_eq!(cfg.charset, Charset::Blocks);
        assert!(cfg.color_map.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_length_or_step_is_invalid() {
        let cfg = ProgressBarConfig { length: 0, ..ProgressBarConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid progress bar configuration (Bar 'parameter-0'): length must be at least 1"
        );

        let cfg = ProgressBarConfig { step_size: 0, ..ProgressBarConfig::default() };
        assert!(matches!(cfg.validate(), Err(ProgressError::InvalidConfig { .. })));
    }

    #[test]
    fn spec_resolution_prefers_constant_color_and_stacks_rows() {
        let defaults =
            BarDefaults { length: 6, prefix: "[item=iron-plate]".into(), ..Default::default() };
        let spec = BarSpec {
            signal: "automation-science-pack".into(),
            color: Some("#e94040".into()),
            gradient: vec!["#000000".into()],
            ..Default::default()
        };

        let cfg = ProgressBarConfig::from_spec(&spec, &defaults, 3).unwrap();
        assert_eq!(cfg.position, Position { x: 0, y: 6 });
        assert_eq!(cfg.length, 6);
        assert_eq!(cfg.prefix, "[item=iron-plate]");
        assert_eq!(cfg.color_map, Some(ColorMap::Constant(Color::rgb(0xe9, 0x40, 0x40))));
    }

    #[test]
    fn spec_with_gradient_and_explicit_position() {
        let spec = BarSpec {
            gradient: vec!["#ff0000".into(), "#0000ff".into()],
            quantize: Some(10),
            position: Some(Position { x: 4, y: -2 }),
            step_size: Some(2),
            ..Default::default()
        };

        let cfg = ProgressBarConfig::from_spec(&spec, &BarDefaults::default(), 0).unwrap();
        assert_eq!(cfg.position, Position { x: 4, y: -2 });
        assert_eq!(cfg.step_size, 2);
        let Some(ColorMap::Gradient(gradient)) = cfg.color_map else {
            panic!("expected gradient");
        };
        assert_eq!(gradient.stops().len(), 2);
        assert_eq!(gradient.quantize(), Some(10));
    }

    #[test]
    fn spec_with_bad_color_names_the_bar() {
        let spec = BarSpec { color: Some("red".into()), ..Default::default() };
        let err = ProgressBarConfig::from_spec(&spec, &BarDefaults::default(), 0).unwrap_err();
        assert!(err.to_string().contains("Bar 'parameter-0'"), "{err}");
    }
}
