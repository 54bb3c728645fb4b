//! Serde model of the blueprint JSON. Field names follow the game's export format.

use fprog_domain::constants::DISPLAY_PANEL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Map version stamped on generated blueprints (2.0.x).
pub const BLUEPRINT_VERSION: u64 = 562_949_954_273_281;
/// Entity direction used for display panels (south, 16-way encoding).
pub const DIRECTION: u8 = 8;

/// Top-level JSON document: `{ "blueprint": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintDocument {
    pub blueprint: Blueprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub icons: Vec<Icon>,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub wires: Vec<serde_json::Value>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub item: String,
    pub version: u64,
}

impl Blueprint {
    /// Blueprint with the display-panel icon and no entities yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            icons: vec![Icon { signal: SignalId::new(DISPLAY_PANEL), index: 1 }],
            entities: Vec::new(),
            wires: Vec::new(),
            parameters: Vec::new(),
            item: "blueprint".to_owned(),
            version: BLUEPRINT_VERSION,
        }
    }

    #[must_use]
    pub fn into_document(self) -> BlueprintDocument {
        BlueprintDocument { blueprint: self }
    }
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference to an item, fluid or virtual signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalId {
    pub name: String,
    /// Signal category (`virtual`, `fluid`, ...); items omit it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl SignalId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub signal: SignalId,
    pub index: u32,
}

/// Blueprint parameter (`{ "type": "id", "id": "parameter-0" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl Parameter {
    pub fn id(id: impl Into<String>) -> Self {
        Self { kind: "id".to_owned(), id: id.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "<=", alias = "≤")]
    LessOrEqual,
    #[serde(rename = ">=", alias = "≥")]
    GreaterOrEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "!=", alias = "≠")]
    NotEqual,
}

impl Comparator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub first_signal: SignalId,
    pub constant: i64,
    pub comparator: Comparator,
}

/// One display-panel message: shown while `condition` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub condition: Condition,
    pub icon: SignalId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBehavior {
    pub parameters: Vec<Message>,
    #[serde(default)]
    pub text: String,
    pub icon: SignalId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_number: u32,
    pub name: String,
    pub position: Position,
    pub direction: u8,
    pub control_behavior: ControlBehavior,
    #[serde(default)]
    pub always_show: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_blueprint_matches_game_layout() {
        let value = serde_json::to_value(Blueprint::new().into_document()).unwrap();
        assert_eq!(
            value,
            json!({ "blueprint": {
                "icons": [ { "signal": { "name": "display-panel" }, "index": 1 } ],
                "entities": [],
                "wires": [],
                "parameters": [],
                "item": "blueprint",
                "version": 562_949_954_273_281_u64,
            }})
        );
    }

    #[test]
    fn comparators_use_symbols() {
        assert_eq!(serde_json::to_string(&Comparator::LessOrEqual).unwrap(), "\"<=\"");
        assert_eq!(serde_json::from_str::<Comparator>("\"≥\"").unwrap(), Comparator::GreaterOrEqual);
        assert_eq!(serde_json::from_str::<Comparator>("\"≠\"").unwrap(), Comparator::NotEqual);
        assert_eq!(Comparator::Equal.to_string(), "=");
    }

    #[test]
    fn typed_signal_keeps_its_type() {
        let signal: SignalId =
            serde_json::from_value(json!({ "type": "virtual", "name": "signal-A" })).unwrap();
        assert_eq!(signal.kind.as_deref(), Some("virtual"));
        assert_eq!(
            serde_json::to_value(&signal).unwrap(),
            json!({ "name": "signal-A", "type": "virtual" })
        );

        let plain = serde_json::to_value(SignalId::new("parameter-0")).unwrap();
        assert_eq!(plain, json!({ "name": "parameter-0" }));
    }
}
