//! Integration tests for grid-template serialization and equality.
//!
//! [§ 7.4 Explicit Grid Shorthand](https://www.w3.org/TR/css-grid-2/#explicit-grid-shorthand)

use wallaby_css::{
    Constant, CssValue, FlexValue, GridTemplateValue, IdentValue, LengthValue, StringValue,
    TupleValue, keywords,
};

fn ident(name: &str) -> CssValue {
    CssValue::Ident(IdentValue::new(name))
}

fn fr(value: f64) -> CssValue {
    CssValue::Flex(FlexValue(value))
}

/// A single-track row: a one-element tuple holding the track size.
fn row(size: CssValue) -> CssValue {
    CssValue::Tuple(TupleValue::new(vec![size]))
}

fn tuple(items: Vec<CssValue>) -> CssValue {
    CssValue::Tuple(TupleValue::new(items))
}

/// The "unconstrained" sentinel: a payload-erased `none` constant.
fn unconstrained() -> CssValue {
    Constant::new(keywords::NONE, ()).erase()
}

#[test]
fn test_sentinel_rows_short_circuits_to_none() {
    // The sentinel overrides every other field, populated or not.
    let template = GridTemplateValue::new(
        Some(unconstrained()),
        Some(fr(1.0)),
        Some(tuple(vec![ident("a")])),
    );
    assert_eq!(template.css_text(), "none");
}

#[test]
fn test_sentinel_columns_short_circuits_to_none() {
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0))])),
        Some(unconstrained()),
        Some(tuple(vec![ident("a")])),
    );
    assert_eq!(template.css_text(), "none");
}

#[test]
fn test_sentinel_areas_short_circuits_to_none() {
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0))])),
        Some(fr(1.0)),
        Some(unconstrained()),
    );
    assert_eq!(template.css_text(), "none");
}

#[test]
fn test_merges_area_labels_into_rows() {
    // rows = [[1fr], [2fr]], areas = [a, b] => each row becomes [size, label].
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0)), row(fr(2.0))])),
        None,
        Some(tuple(vec![ident("a"), ident("b")])),
    );
    assert_eq!(template.css_text(), "1fr a 2fr b");
}

#[test]
fn test_merges_quoted_area_strings() {
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0)), row(fr(2.0))])),
        None,
        Some(tuple(vec![
            CssValue::Str(StringValue::new("a")),
            CssValue::Str(StringValue::new("b")),
        ])),
    );
    assert_eq!(template.css_text(), "1fr \"a\" 2fr \"b\"");
}

#[test]
fn test_columns_join_after_slash() {
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0))])),
        Some(tuple(vec![
            CssValue::Length(LengthValue::Px(100.0)),
            fr(1.0),
        ])),
        Some(tuple(vec![ident("a")])),
    );
    assert_eq!(template.css_text(), "1fr a / 100px 1fr");
}

#[test]
fn test_rows_without_matching_area_are_dropped() {
    // Three rows, one area: rows at index >= 1 vanish from the output
    // rather than faulting.
    let template = GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0)), row(fr(2.0)), row(fr(3.0))])),
        None,
        Some(tuple(vec![ident("a")])),
    );
    assert_eq!(template.css_text(), "1fr a");
}

#[test]
fn test_non_tuple_row_is_dropped() {
    // Row 0 is a bare track size, not a tuple; only row 1 survives.
    let template = GridTemplateValue::new(
        Some(tuple(vec![fr(1.0), row(fr(2.0))])),
        None,
        Some(tuple(vec![ident("a"), ident("b")])),
    );
    assert_eq!(template.css_text(), "2fr b");
}

#[test]
fn test_rows_pass_through_when_areas_absent() {
    let template = GridTemplateValue::new(Some(tuple(vec![fr(1.0), fr(2.0)])), None, None);
    assert_eq!(template.css_text(), "1fr 2fr");
}

#[test]
fn test_all_absent_serializes_to_empty_string() {
    let template = GridTemplateValue::new(None, None, None);
    assert_eq!(template.css_text(), "");
}

#[test]
fn test_columns_only_keeps_slash_separator() {
    // Empty rows text still concatenates with " / " when columns are set.
    let template = GridTemplateValue::new(None, Some(fr(1.0)), None);
    assert_eq!(template.css_text(), " / 1fr");
}

#[test]
fn test_structural_equality_is_reflexive_and_symmetric() {
    let a = GridTemplateValue::new(Some(tuple(vec![row(fr(1.0))])), Some(fr(1.0)), None);
    let b = GridTemplateValue::new(Some(tuple(vec![row(fr(1.0))])), Some(fr(1.0)), None);

    assert!(a.structurally_equals(&a));
    assert!(a.structurally_equals(&b));
    assert!(b.structurally_equals(&a));
}

#[test]
fn test_absent_fields_equal_absent_fields() {
    let a = GridTemplateValue::new(None, None, None);
    let b = GridTemplateValue::new(None, None, None);
    assert!(a.structurally_equals(&b));
}

#[test]
fn test_absent_field_never_equals_present_field() {
    let absent = GridTemplateValue::new(Some(fr(1.0)), None, None);
    let present = GridTemplateValue::new(Some(fr(1.0)), Some(fr(1.0)), None);

    assert!(!absent.structurally_equals(&present));
    assert!(!present.structurally_equals(&absent));
}

#[test]
fn test_whole_tree_structural_equality_dispatches_by_variant() {
    let template = CssValue::GridTemplate(Box::new(GridTemplateValue::new(
        Some(tuple(vec![row(fr(1.0))])),
        None,
        None,
    )));
    let same = template.clone();
    let different = ident("a");

    assert!(template.structurally_equals(&same));
    assert!(!template.structurally_equals(&different));
}
