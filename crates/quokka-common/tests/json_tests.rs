//! Integration tests for the JSON encode/decode wrappers.

use quokka_common::{Rect, from_json, to_json};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Dimensions {
    height: f64,
    width: f64,
}

#[test]
fn test_rect_round_trip() {
    let rect = Rect::new(20.0, 10.0);
    let text = to_json(&rect).unwrap();
    let back: Rect = from_json(&text).unwrap();
    assert_eq!(back, rect);
}

#[test]
fn test_keys_follow_declaration_order() {
    let dims = Dimensions {
        height: 10.0,
        width: 20.0,
    };
    assert_eq!(to_json(&dims).unwrap(), r#"{"height":10.0,"width":20.0}"#);
}

#[test]
fn test_decode_matches_by_name_not_position() {
    // Key order in the text is irrelevant to reconstruction
    let reordered: Dimensions = from_json(r#"{"width":20.0,"height":10.0}"#).unwrap();
    assert_eq!(
        reordered,
        Dimensions {
            height: 10.0,
            width: 20.0,
        }
    );
}

#[test]
fn test_decode_rejects_malformed_text() {
    assert!(from_json::<Rect>("{\"width\": }").is_err());
}

#[test]
fn test_decode_rejects_shape_mismatch() {
    assert!(from_json::<Rect>(r#"{"width":"wide","height":1.0}"#).is_err());
}
