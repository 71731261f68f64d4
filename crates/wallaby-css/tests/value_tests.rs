//! Integration tests for CSS value-node serialization.

use wallaby_css::{
    BackgroundValue, Constant, CssValue, FlexValue, IdentValue, LengthValue, StringValue,
    TupleValue, keywords,
};

fn ident(name: &str) -> CssValue {
    CssValue::Ident(IdentValue::new(name))
}

/// Empty tuple: the serialization of "no layers parsed".
fn empty_layers() -> CssValue {
    CssValue::Tuple(TupleValue::new(vec![]))
}

#[test]
fn test_constant_serializes_to_key_only() {
    // The payload never leaks into the serialization.
    let numeric = Constant::new("bold", 700_u16);
    assert_eq!(numeric.css_text(), "bold");

    let textual = Constant::new("bold", "something else entirely");
    assert_eq!(textual.css_text(), "bold");
}

#[test]
fn test_constant_exposes_typed_payload() {
    let weight = Constant::new("bold", 700_u16);
    assert_eq!(weight.key(), "bold");
    assert_eq!(*weight.value(), 700);
}

#[test]
fn test_constant_equality_is_structural_on_key_and_payload() {
    let bold = Constant::new("bold", 700_u16);
    let same = Constant::new("bold", 700_u16);
    assert_eq!(bold, same);
    assert_ne!(bold, Constant::new("bold", 400_u16));
    assert_ne!(bold, Constant::new("bolder", 700_u16));
}

#[test]
fn test_erased_constant_serializes_identically() {
    let constant = Constant::new(keywords::NONE, 0_u8);
    let erased = constant.erase();
    assert_eq!(erased.css_text(), constant.css_text());
    assert!(matches!(erased, CssValue::Keyword(_)));
}

#[test]
fn test_background_layers_only() {
    let background = BackgroundValue::new(ident("flat"), None);
    assert_eq!(background.css_text(), "flat");
}

#[test]
fn test_background_layers_and_color() {
    let background = BackgroundValue::new(ident("flat"), Some(ident("red")));
    assert_eq!(background.css_text(), "flat red");
}

#[test]
fn test_background_empty_layers_has_no_leading_space() {
    // The separator is omitted, not collapsed: the color text stands alone.
    let background = BackgroundValue::new(empty_layers(), Some(ident("red")));
    assert_eq!(background.css_text(), "red");
}

#[test]
fn test_background_empty_layers_and_no_color() {
    let background = BackgroundValue::new(empty_layers(), None);
    assert_eq!(background.css_text(), "");
}

#[test]
fn test_tuple_joins_children_with_single_spaces() {
    let tuple = TupleValue::new(vec![
        ident("top"),
        CssValue::Length(LengthValue::Px(4.0)),
        CssValue::Flex(FlexValue(1.0)),
    ]);
    assert_eq!(tuple.css_text(), "top 4px 1fr");
}

#[test]
fn test_empty_tuple_serializes_to_empty_string() {
    let tuple = TupleValue::from(vec![]);
    assert!(tuple.is_empty());
    assert_eq!(tuple.css_text(), "");
}

#[test]
fn test_length_css_text() {
    assert_eq!(LengthValue::Px(16.0).css_text(), "16px");
    assert_eq!(LengthValue::Em(1.5).css_text(), "1.5em");
    assert_eq!(LengthValue::Rem(2.0).css_text(), "2rem");
    assert_eq!(LengthValue::Vw(50.0).css_text(), "50vw");
    assert_eq!(LengthValue::Vh(100.0).css_text(), "100vh");
}

#[test]
fn test_flex_css_text() {
    assert_eq!(FlexValue(1.0).css_text(), "1fr");
    assert_eq!(FlexValue(2.5).css_text(), "2.5fr");
}

#[test]
fn test_string_value_quotes_and_escapes() {
    assert_eq!(StringValue::new("a b").css_text(), "\"a b\"");
    assert_eq!(StringValue::new("say \"hi\"").css_text(), "\"say \\\"hi\\\"\"");
    assert_eq!(StringValue::new("back\\slash").css_text(), "\"back\\\\slash\"");
}

#[test]
fn test_length_serializes_to_json() {
    // Value types serialize for the style inspector; spot-check the shape.
    let json = serde_json::to_string(&LengthValue::Px(16.0)).expect("serializable");
    assert_eq!(json, "{\"Px\":16.0}");
}
