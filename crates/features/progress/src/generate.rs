//! Builds display-panel messages that draw a progress bar for every signal value.
//!
//! A bar of `length` cells drawn with a charset of `divs` characters has
//! `length * divs` sub-steps. One message is generated per `step_size` sub-steps;
//! each message matches a single signal value, except the first (`<=`) and the
//! last (`>=`) which catch everything outside the range.

use crate::color::ColorMap;
use crate::config::ProgressBarConfig;
use crate::error::{ProgressError, ProgressErrorExt};
use fprog_blueprint::{
    Blueprint, Comparator, Condition, ControlBehavior, DIRECTION, Entity, Message, Parameter,
    Position, SignalId, encode_blueprint,
};
use fprog_domain::constants::{BAR_FONT, DISPLAY_PANEL, PARAMETER_MARKER};
use std::iter::repeat_n;
use tracing::{debug, info, instrument};

/// Generates the messages of one progress bar, ordered by signal value.
///
/// # Errors
/// Returns [`ProgressError::InvalidConfig`] for a zero `length` or `step_size`.
#[instrument(level = "debug", skip_all, fields(signal = %config.signal))]
pub fn generate_conditions(config: &ProgressBarConfig) -> Result<Vec<Message>, ProgressError> {
    config.validate()?;

    let chars = config.charset.chars();
    let full = config.charset.full();
    let divs = chars.len() as i64;
    let length = i64::from(config.length);
    let max = length * divs;
    let scale = (max - 1) as f64;

    debug!(
        charset = %config.charset,
        chars = %chars.iter().collect::<String>(),
        "Using character set"
    );

    let mut steps: Vec<i64> = (-1..max).step_by(config.step_size as usize).collect();
    if steps.last().is_some_and(|&last| last < max - 1) {
        steps.push(max - 1);
    }

    let mut messages = Vec::with_capacity(steps.len());
    for step in steps {
        let before = step.div_euclid(divs).max(0);
        let current = step.rem_euclid(divs) as usize;
        let mut after = length - before;

        let mut bar = String::new();
        if step != -1 {
            bar.extend(repeat_n(full, before as usize));
            bar.push(chars[current]);
            after -= 1;
        }
        if let Some(map) = &config.color_map
            && !bar.is_empty()
        {
            bar = colorize(map, step as f64 / scale, &bar);
        }

        let value = step + 1;
        let percent = format!("{:>5.1}%", value as f64 / max as f64 * 100.0);
        let label = percent.trim_start();
        let pad = percent.len() - label.len();

        let mut end: String = repeat_n(full, usize::try_from(after).unwrap_or(0)).collect();
        end.extend(repeat_n('0', pad));
        if let Some(map) = &config.color_map
            && !end.is_empty()
        {
            end = colorize(map, value as f64 / scale, &end);
        }

        messages.push(Message {
            condition: Condition {
                first_signal: SignalId::new(&config.signal),
                constant: value,
                comparator: Comparator::Equal,
            },
            icon: SignalId::new(&config.signal),
            text: format!("{}[font={BAR_FONT}]{bar}{end}[/font]  {label}", config.prefix),
        });
    }

    if let Some(first) = messages.first_mut() {
        first.condition.comparator = Comparator::LessOrEqual;
    }
    if let Some(last) = messages.last_mut() {
        last.condition.comparator = Comparator::GreaterOrEqual;
    }

    debug!(messages = messages.len(), "Progress bar conditions generated");
    Ok(messages)
}

fn colorize(map: &ColorMap, t: f64, text: &str) -> String {
    format!("[color={}]{text}[/color]", map.sample(t))
}

/// Builds the display-panel entity for one bar.
///
/// # Errors
/// See [`generate_conditions`].
pub fn generate_entity(
    config: &ProgressBarConfig,
    entity_number: u32,
) -> Result<Entity, ProgressError> {
    let parameters = generate_conditions(config)?;

    Ok(Entity {
        entity_number,
        name: DISPLAY_PANEL.to_owned(),
        position: Position {
            x: f64::from(config.position.x) + 0.5,
            y: f64::from(config.position.y) + 0.5,
        },
        direction: DIRECTION,
        control_behavior: ControlBehavior {
            parameters,
            text: String::new(),
            icon: SignalId::new(&config.signal),
        },
        always_show: true,
    })
}

/// Builds a blueprint with one display panel per bar, numbered from 1.
///
/// Signals that are blueprint parameters (`parameter-N`) are listed in the
/// blueprint's parameters so the game asks for them on placement.
///
/// # Errors
/// See [`generate_conditions`]; the failing bar is named in the error context.
pub fn generate_blueprint(configs: &[ProgressBarConfig]) -> Result<Blueprint, ProgressError> {
    let mut blueprint = Blueprint::new();

    for (number, config) in (1..).zip(configs) {
        let entity = generate_entity(config, number)
            .context(format!("Bar #{number} ({})", config.signal))?;
        blueprint.entities.push(entity);

        if config.signal.contains(PARAMETER_MARKER) {
            blueprint.parameters.push(Parameter::id(&config.signal));
        }
    }

    Ok(blueprint)
}

/// Builds the blueprint for `configs` and encodes it as an importable string.
///
/// # Errors
/// See [`generate_blueprint`]; encoding failures map to [`ProgressError::Blueprint`].
pub fn generate_blueprint_string(configs: &[ProgressBarConfig]) -> Result<String, ProgressError> {
    let blueprint = generate_blueprint(configs)?;
    let encoded = encode_blueprint(&blueprint).context("Encoding progress bars")?;
    info!(bars = configs.len(), bytes = encoded.len(), "Blueprint generated");
    Ok(encoded)
}
