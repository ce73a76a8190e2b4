//! Dotted-path addressing: reads, writes, removal, and the degenerate
//! path shapes.

use yamlet_ast::{AccessError, Annotated, Element, Node, Scalar, TreeValue, Value, escape_key};

#[test]
fn test_write_then_read_scalar() {
    let mut doc = Node::new();
    doc.set("server.port", 8080);
    assert_eq!(doc.get_scalar("server.port").unwrap(), &Scalar::Int(8080));
    assert!(doc.has("server.port"));
    assert!(doc.has("server"));
}

#[test]
fn test_write_then_read_aggregate() {
    let mut doc = Node::new();
    let wanted: TreeValue = [("host", TreeValue::from("localhost")), ("port", 5432.into())]
        .into_iter()
        .collect();
    doc.set("db", wanted.clone());
    let node = doc.get("db").unwrap().as_node().unwrap();
    assert_eq!(node.to_data(), wanted);
}

#[test]
fn test_set_auto_creates_intermediate_nodes() {
    let mut doc = Node::new();
    doc.set("a.b.c", 1);
    assert!(doc.get("a").unwrap().is_node());
    assert!(doc.get("a.b").unwrap().is_node());
    assert_eq!(doc.get_scalar("a.b.c").unwrap(), &Scalar::Int(1));
}

#[test]
fn test_set_overwrites_non_node_intermediates() {
    let mut doc = Node::new();
    doc.set("a", 1);
    doc.set("a.b", 2);
    assert!(doc.get("a").unwrap().is_node());
    assert_eq!(doc.get_scalar("a.b").unwrap(), &Scalar::Int(2));
}

#[test]
fn test_reads_never_create_structure() {
    let mut doc = Node::new();
    doc.set("a", 1);
    let before = doc.to_data();

    assert!(doc.get("missing.deep.path").is_none());
    assert!(!doc.has("missing.deep.path"));
    assert!(doc.get("a.b").is_none());

    assert_eq!(doc.to_data(), before);
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_escape_symmetry() {
    let mut doc = Node::new();
    doc.set("a\\.b", 1);
    doc.set("a.b", 2);

    // One flat entry named "a.b" and one nested node "a" containing "b"
    assert_eq!(doc.get_scalar("a\\.b").unwrap(), &Scalar::Int(1));
    assert_eq!(doc.get_scalar("a.b").unwrap(), &Scalar::Int(2));
    assert_eq!(doc.len(), 2);
    assert_eq!(escape_key("a.b"), "a\\.b");
}

#[test]
fn test_aggregate_keys_are_escaped_on_assignment() {
    let mut doc = Node::new();
    let aggregate: TreeValue = [("dotted.key", 1)].into_iter().collect();
    doc.set("cfg", aggregate);

    // The dotted key stays one segment, reachable only in escaped form
    assert_eq!(doc.get_scalar("cfg.dotted\\.key").unwrap(), &Scalar::Int(1));
    assert!(doc.get("cfg.dotted.key").is_none());
}

#[test]
fn test_scalar_set_updates_value_in_place_keeping_comments() {
    let mut doc = Node::new();
    doc.append_value(1, Some("a"), vec!["keep me".into()]);
    doc.set("a", 2);

    let value = doc.get("a").unwrap().as_value().unwrap();
    assert_eq!(value.value(), &Scalar::Int(2));
    assert_eq!(value.comments().lines()[0].text(), "# keep me");
}

#[test]
fn test_set_value_updates_existing_in_place() {
    let mut doc = Node::new();
    doc.append_value("old", Some("a"), vec!["original".into()]);

    let mut incoming = Value::new("new");
    incoming.add_comment("discarded");
    doc.set_value("a", incoming);

    let value = doc.get("a").unwrap().as_value().unwrap();
    assert_eq!(value.value(), &Scalar::Str("new".to_string()));
    assert_eq!(value.comments().lines()[0].text(), "# original");
}

#[test]
fn test_set_value_inserts_as_given_when_absent() {
    let mut doc = Node::new();
    let mut incoming = Value::new(7);
    incoming.add_comment("carried");
    doc.set_value("fresh", incoming);

    let value = doc.get("fresh").unwrap().as_value().unwrap();
    assert_eq!(value.comments().lines()[0].text(), "# carried");
}

#[test]
fn test_remove_returns_the_element() {
    let mut doc = Node::new();
    doc.set("a.b", 1);
    let removed = doc.remove("a.b").unwrap();
    assert!(matches!(removed, Element::Value(_)));
    assert!(!doc.has("a.b"));
    assert!(doc.has("a"));
}

#[test]
fn test_remove_missing_path_is_a_no_op() {
    let mut doc = Node::new();
    doc.set("a", 1);
    assert!(doc.remove("a.b.c").is_none());
    assert!(doc.remove("zzz").is_none());
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_get_mut_allows_in_place_edits() {
    let mut doc = Node::new();
    doc.set("a.b", 1);
    doc.get_mut("a.b")
        .and_then(Element::as_value_mut)
        .unwrap()
        .set_value(9);
    assert_eq!(doc.get_scalar("a.b").unwrap(), &Scalar::Int(9));
}

#[test]
fn test_empty_path_is_inert() {
    let mut doc = Node::new();
    doc.set("a", 1);

    assert!(doc.get("").is_none());
    assert!(!doc.has(""));
    assert!(doc.remove("").is_none());
    doc.set("", 99);
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_trailing_separator_addresses_the_bare_key() {
    let mut doc = Node::new();
    doc.set("a.", 1);
    assert_eq!(doc.get_scalar("a").unwrap(), &Scalar::Int(1));
}

#[test]
fn test_leading_separator_creates_an_empty_named_segment() {
    let mut doc = Node::new();
    doc.set(".a", 1);
    // The intermediate node lives under the empty name, addressable as "."
    assert!(doc.get(".").unwrap().is_node());
    assert_eq!(doc.get_scalar(".a").unwrap(), &Scalar::Int(1));
    assert!(doc.get(".a").unwrap().is_value());
}

#[test]
fn test_doubled_separator_creates_an_empty_segment_in_the_middle() {
    let mut doc = Node::new();
    doc.set("a..b", 1);
    assert_eq!(doc.get_scalar("a..b").unwrap(), &Scalar::Int(1));
    assert!(doc.get("a.b").is_none());
}

#[test]
fn test_numeric_segments_address_positions() {
    let mut doc = Node::new();
    doc.set("items", vec!["x", "y"]);
    assert_eq!(
        doc.get_scalar("items.1").unwrap(),
        &Scalar::Str("y".to_string())
    );
    doc.set("items.1", "z");
    assert_eq!(
        doc.get("items").unwrap().as_node().unwrap().len(),
        2,
        "assignment reused the existing position"
    );
}

#[test]
fn test_typed_accessors_report_diagnostics() {
    let mut doc = Node::new();
    doc.set("a.b", 1);

    assert_eq!(
        doc.get_scalar("missing"),
        Err(AccessError::NotFound {
            path: "missing".to_string()
        })
    );
    assert_eq!(
        doc.get_scalar("a"),
        Err(AccessError::KindMismatch {
            path: "a".to_string(),
            expected: "value",
            found: "node",
        })
    );
    assert!(doc.get_node("a").is_ok());
    assert_eq!(
        doc.get_node("a.b"),
        Err(AccessError::KindMismatch {
            path: "a.b".to_string(),
            expected: "node",
            found: "value",
        })
    );
}

#[test]
fn test_last_write_wins_on_collisions() {
    let mut doc = Node::new();
    doc.set("a", 1);
    doc.set("a", vec![1, 2]);
    assert!(doc.get("a").unwrap().is_node());
    doc.set("a", "scalar again");
    assert!(doc.get("a").unwrap().is_value());
}
