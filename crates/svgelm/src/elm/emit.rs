//! Rendering of an [`Svg`] model as Elm view source
//!
//! Two definitions are produced: `view`, which renders the icon as-is, and
//! `viewWithAttributes`, which appends caller-supplied attributes to the
//! root element's list. The exact layout is this module's contract alone;
//! consumers only rely on both definitions being present.

use crate::elm::module::ElmModule;
use crate::svg::model::{Attribute, Svg, SvgElement};

/// Render the two view definitions for a parsed document
pub fn view_body(svg: &Svg) -> String {
    let mut output = String::new();

    output.push_str("view: Html msg\nview =\n  svg ");
    output.push_str(&attribute_list(&svg.attributes));
    push_children_block(&svg.children, &mut output);

    output.push_str("\n\nviewWithAttributes: List (Html.Attribute msg) -> Html msg\n");
    output.push_str("viewWithAttributes attributes =\n  svg (");
    output.push_str(&attribute_list(&svg.attributes));
    output.push_str(" ++ attributes)");
    push_children_block(&svg.children, &mut output);

    output
}

/// Render a complete Elm module: header, imports, then the view body
pub fn render_module(svg: &Svg, module_name: &str) -> String {
    module_source(&ElmModule {
        module_name: module_name.to_string(),
        view_body: view_body(svg),
    })
}

/// Compose the full Elm source file for an already-generated module
pub fn module_source(module: &ElmModule) -> String {
    format!(
        "module {} exposing (view, viewWithAttributes)\n\n\
         import Html exposing (Html)\n\
         import Svg exposing (..)\n\
         import Svg.Attributes exposing (..)\n\n\
         {}\n",
        module.module_name, module.view_body
    )
}

fn push_children_block(children: &[SvgElement], output: &mut String) {
    if children.is_empty() {
        output.push_str(" []");
        return;
    }

    for (index, child) in children.iter().enumerate() {
        let sep = if index == 0 { "\n    [ " } else { "\n    , " };
        output.push_str(sep);
        push_element(child, output);
    }
    output.push_str("\n    ]");
}

fn push_element(element: &SvgElement, output: &mut String) {
    output.push_str("Svg.");
    output.push_str(&element.element);
    output.push(' ');
    output.push_str(&attribute_list(&element.attributes));

    if element.children.is_empty() {
        output.push_str(" []");
        return;
    }

    output.push_str(" [ ");
    for (index, child) in element.children.iter().enumerate() {
        if index > 0 {
            output.push_str(", ");
        }
        push_element(child, output);
    }
    output.push_str(" ]");
}

fn attribute_list(attributes: &[Attribute]) -> String {
    let items: Vec<String> = attributes
        .iter()
        .map(|attr| format!("{} \"{}\"", attr.name, escape_elm(&attr.value)))
        .collect();
    format!("[{}]", items.join(", "))
}

fn escape_elm(input: &str) -> String {
    input
        .chars()
        .flat_map(|ch| match ch {
            '\\' => "\\\\".chars().collect::<Vec<_>>(),
            '"' => "\\\"".chars().collect::<Vec<_>>(),
            '\n' => "\\n".chars().collect::<Vec<_>>(),
            '\r' => "\\r".chars().collect::<Vec<_>>(),
            '\t' => "\\t".chars().collect::<Vec<_>>(),
            _ => vec![ch],
        })
        .collect()
}
