use super::*;

#[test]
fn defaults_match_pointer_sensor_threshold() {
    let config = BoardConfig::default();
    assert_eq!(config.activation_distance, 3.0);
    assert_eq!(config.log_level, Level::Info);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = BoardConfig::from_json(r#"{"activation_distance": 8}"#).expect("parse");
    assert_eq!(config.activation_distance, 8.0);
    assert_eq!(config.log_level, Level::Info);
}

#[test]
fn log_level_is_read_by_name() {
    let config = BoardConfig::from_json(r#"{"log_level": "debug"}"#).expect("parse");
    assert_eq!(config.log_level, Level::Debug);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(BoardConfig::from_json("{}").expect("parse"), BoardConfig::default());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(BoardConfig::from_json("{activation_distance: }").is_err());
    assert!(BoardConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
}
