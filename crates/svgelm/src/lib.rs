//! svgelm - SVG icon parser that renders Elm view source
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), svgelm::Error> {
//! let svg = svgelm::parse_svg(r#"<svg width="24"><path d="M1,1 L2,2z"/></svg>"#)?;
//! assert_eq!(svg.attributes[0].name, "width");
//! assert_eq!(svg.children[0].element, "path");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod lexer;
pub use lexer::Cursor;

pub mod markup;
pub use markup::{Node, Parser as MarkupParser};

pub mod normalize;

pub mod svg;
pub use svg::{Attribute, Svg, SvgElement};

pub mod elm;
pub use elm::{ElmModule, ModuleOptions, ParserResult};

use std::path::Path;

/// Parse SVG markup from a string into the domain model
pub fn parse_svg(s: &str) -> Result<Svg> {
    parse_svg_bytes(s.as_bytes())
}

/// Parse SVG markup from bytes into the domain model
pub fn parse_svg_bytes(bytes: &[u8]) -> Result<Svg> {
    let mut parser = markup::Parser::new(bytes);
    let root = parser.parse()?;
    Ok(svg::builder::build(&root))
}

/// Read an SVG file and generate the Elm view body for it.
///
/// This is the only layer with file-system access; both I/O and markup
/// failures are converted into [`ParserResult::Failure`] rather than
/// returned as errors.
pub fn parse_module(path: impl AsRef<Path>, options: &ModuleOptions) -> ParserResult {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            return ParserResult::Failure {
                error: format!("failed to read {}: {err}", path.display()),
            };
        }
    };

    match parse_svg(&contents) {
        Ok(svg) => ParserResult::Module(ElmModule {
            module_name: options.module_name.clone(),
            view_body: elm::view_body(&svg),
        }),
        Err(err) => ParserResult::Failure {
            error: err.to_string(),
        },
    }
}
