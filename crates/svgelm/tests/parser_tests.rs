//! End-to-end parser scenarios over the fixture icons

use std::fs;
use std::path::PathBuf;

use svgelm::{parse_module, parse_svg, Attribute, ErrorKind, ModuleOptions, SvgElement};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")).join(name)
}

fn read_fixture(name: &str) -> String {
    let path = fixture(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"))
}

#[test]
fn parses_an_svg_file_into_a_module() {
    let output = parse_module(fixture("search.svg"), &ModuleOptions::new("SearchIcon"));

    assert!(output.success());
    let module = output.module().expect("module output");
    assert_eq!(module.module_name, "SearchIcon");
    assert!(module.view_body.contains("view: Html msg"));
    assert!(module
        .view_body
        .contains("viewWithAttributes: List (Html.Attribute msg) -> Html msg"));

    // Both definitions reference the path data verbatim.
    assert_eq!(module.view_body.matches("M19.85352,19.14648l").count(), 2);
}

#[test]
fn parses_svg_contents_into_a_model() {
    let svg = parse_svg(&read_fixture("search.svg")).expect("fixture should parse");

    assert_eq!(
        svg.attributes,
        vec![
            Attribute::new("width", "24"),
            Attribute::new("height", "24"),
            Attribute::new("viewBox", "0 0 24 24"),
        ]
    );

    assert_eq!(svg.children.len(), 1);
    let path = &svg.children[0];
    assert_eq!(path.element, "path");
    assert_eq!(path.attributes.len(), 1);
    assert_eq!(path.attributes[0].name, "d");
    assert!(path.attributes[0].value.starts_with("M19.85352,19.14648l"));
    assert!(path.children.is_empty());
}

#[test]
fn parses_sibling_children_in_order() {
    let svg = parse_svg(&read_fixture("clothing-button.svg")).expect("fixture should parse");

    assert_eq!(
        svg.children,
        vec![
            SvgElement {
                element: "path".to_string(),
                attributes: vec![
                    Attribute::new("fillRule", "nonzero"),
                    Attribute::new("d", "M22 23.414L23.414 22 36.87 35.456l-1.414 1.414z"),
                ],
                children: Vec::new(),
            },
            SvgElement {
                element: "path".to_string(),
                attributes: vec![
                    Attribute::new("fillRule", "nonzero"),
                    Attribute::new("d", "M36.87 23.414L35.456 22 22 35.456l1.414 1.414z"),
                ],
                children: Vec::new(),
            },
        ]
    );
}

#[test]
fn parses_nested_children() {
    let svg = parse_svg(&read_fixture("search-with-children.svg")).expect("fixture should parse");

    assert_eq!(svg.children.len(), 1);
    let outer = &svg.children[0];
    assert_eq!(outer.element, "path");
    assert_eq!(outer.attributes[0].name, "d");
    assert_eq!(
        outer.children,
        vec![SvgElement {
            element: "path".to_string(),
            attributes: vec![Attribute::new("d", "bar")],
            children: Vec::new(),
        }]
    );
}

#[test]
fn root_tag_never_appears_as_element() {
    let svg = parse_svg(r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="z"/></svg>"#)
        .expect("markup should parse");
    assert!(svg.children.iter().all(|child| child.element != "svg"));
}

#[test]
fn end_to_end_generated_body_references_path_data() {
    let output = parse_module(
        fixture("search-with-children.svg"),
        &ModuleOptions::new("Icon"),
    );

    let module = output.module().expect("module output");
    assert_eq!(module.module_name, "Icon");
    assert_eq!(module.view_body.matches("d \"bar\"").count(), 2);
}

#[test]
fn unterminated_markup_fails_with_malformed_markup() {
    let err = parse_svg("<svg><path></svg>").expect_err("markup should be rejected");
    assert!(matches!(
        err.kind(),
        ErrorKind::MismatchedClosingTag { .. }
    ));
}

#[test]
fn unterminated_markup_file_yields_failure_result() {
    let output = parse_module(
        fixture("invalid/unterminated-tag.svg"),
        &ModuleOptions::new("Broken"),
    );

    assert!(!output.success());
    let error = output.error().expect("failure message");
    assert!(error.contains("mismatched closing tag"));
}

#[test]
fn missing_file_yields_failure_result() {
    let output = parse_module(fixture("does-not-exist.svg"), &ModuleOptions::new("Gone"));

    assert!(!output.success());
    assert!(output.error().expect("failure message").contains("failed to read"));
}
