use fprog_blueprint::*;
use proptest::prelude::*;
use serde_json::json;

fn panel(number: u32, signal: &str) -> Entity {
    Entity {
        entity_number: number,
        name: "display-panel".into(),
        position: Position { x: 0.5, y: 2.5 },
        direction: DIRECTION,
        control_behavior: ControlBehavior {
            parameters: vec![Message {
                condition: Condition {
                    first_signal: SignalId::new(signal),
                    constant: 0,
                    comparator: Comparator::LessOrEqual,
                },
                icon: SignalId::new(signal),
                text: "[font=technology-slot-level-font]██[/font]  0.0%".into(),
            }],
            text: String::new(),
            icon: SignalId::new(signal),
        },
        always_show: true,
    }
}

#[test]
fn typed_blueprint_survives_the_codec() {
    let mut blueprint = Blueprint::new();
    blueprint.entities.push(panel(1, "parameter-0"));
    blueprint.parameters.push(Parameter::id("parameter-0"));

    let encoded = encode_blueprint(&blueprint).unwrap();
    assert_eq!(decode_blueprint(&encoded).unwrap(), blueprint);
}

#[test]
fn decoded_value_has_game_field_names() {
    let mut blueprint = Blueprint::new();
    blueprint.entities.push(panel(1, "automation-science-pack"));

    let value = decode_value(&encode_blueprint(&blueprint).unwrap()).unwrap();
    let entity = &value["blueprint"]["entities"][0];
    assert_eq!(entity["name"], "display-panel");
    assert_eq!(entity["position"], json!({ "x": 0.5, "y": 2.5 }));
    assert_eq!(entity["direction"], 8);
    assert_eq!(entity["always_show"], true);
    assert_eq!(entity["control_behavior"]["parameters"][0]["condition"]["comparator"], "<=");
    assert_eq!(value["blueprint"]["version"], 562_949_954_273_281_u64);
}

#[test]
fn foreign_blueprints_decode_as_values_only() {
    let book = json!({ "blueprint_book": { "blueprints": [], "item": "blueprint-book" } });
    let encoded = encode(&book.to_string()).unwrap();

    assert_eq!(decode_value(&encoded).unwrap(), book);
    let err = decode_blueprint(&encoded).unwrap_err();
    assert!(matches!(err, BlueprintError::Serialize { .. }));
}

proptest! {
    #[test]
    fn decode_inverts_encode(text in ".*") {
        let encoded = encode(&text).unwrap();
        prop_assert!(encoded.starts_with('0'));
        prop_assert_eq!(decode(&encoded).unwrap(), text);
    }
}
