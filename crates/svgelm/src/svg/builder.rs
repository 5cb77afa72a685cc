//! Generic-tree to Svg-model conversion

use crate::markup::Node;
use crate::normalize::camel_case;
use crate::svg::model::{Attribute, Svg, SvgElement};

/// Build the domain model from a parsed markup tree. The root's tag name is
/// dropped; every attribute name, root and descendant alike, goes through
/// [`camel_case`]. Tag names keep their markup spelling.
pub fn build(root: &Node) -> Svg {
    Svg {
        attributes: build_attributes(root),
        children: root.children.iter().map(build_element).collect(),
    }
}

fn build_element(node: &Node) -> SvgElement {
    SvgElement {
        element: node.name.clone(),
        attributes: build_attributes(node),
        children: node.children.iter().map(build_element).collect(),
    }
}

fn build_attributes(node: &Node) -> Vec<Attribute> {
    node.attributes
        .iter()
        .map(|(name, value)| Attribute::new(camel_case(name), value.clone()))
        .collect()
}
