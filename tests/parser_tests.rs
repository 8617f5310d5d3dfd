// tests/parser_tests.rs
use yamlnav::document::node::{NodeKind, YamlNode};
use yamlnav::document::parser::parse_document;
use yamlnav::document::render::render_document;
use yamlnav::navigator::Navigator;

// ============================================================================
// Bridge Round-Trip Tests
// ============================================================================

#[test]
fn test_parse_wraps_in_document_node() {
    let doc = parse_document("a: 1\n").unwrap();
    assert!(doc.is_document());
    assert_eq!(doc.as_value().kind(), NodeKind::Mapping);
}

#[test]
fn test_scalar_values_keep_their_text() {
    let doc = parse_document("int: 42\nfloat: 4.5\nbool: true\nnothing: null\ntext: hi\n")
        .unwrap();
    let values: Vec<(&str, &str)> = doc
        .as_value()
        .entries()
        .map(|(k, v)| (k.value(), v.value()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("int", "42"),
            ("float", "4.5"),
            ("bool", "true"),
            ("nothing", "null"),
            ("text", "hi"),
        ]
    );
}

#[test]
fn test_round_trip_preserves_structure() {
    let source = "name: demo\nitems:\n- 1\n- 2\nnested:\n  deep: true\n";
    let doc = parse_document(source).unwrap();
    let rendered = render_document(&doc).unwrap();
    assert_eq!(parse_document(&rendered).unwrap(), doc);
}

// ============================================================================
// End-To-End Flow Tests
// ============================================================================

#[test]
fn test_parse_update_render() {
    let mut doc = parse_document("a: 1\nb: 2\n").unwrap();
    let nav = Navigator::new();

    nav.update(&mut doc, &["a"], &YamlNode::scalar("10")).unwrap();

    let rendered = render_document(&doc).unwrap();
    assert_eq!(rendered, "a: 10\nb: 2");
}

#[test]
fn test_parse_delete_render() {
    let mut doc = parse_document("a: 1\nb: 2\n").unwrap();
    let nav = Navigator::new();

    nav.delete(&mut doc, &["a"]).unwrap();

    let rendered = render_document(&doc).unwrap();
    assert_eq!(rendered, "b: 2");
}

#[test]
fn test_render_single_matched_node() {
    let doc = parse_document("outer:\n  inner:\n    leaf: 5\n").unwrap();
    let nav = Navigator::new();

    let matched = nav.get(&doc, &["outer", "inner"]).unwrap();
    let node = matched.first().unwrap();
    assert_eq!(render_document(node).unwrap(), "leaf: 5");
}
