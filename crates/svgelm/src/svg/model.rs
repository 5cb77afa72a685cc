//! Domain model for parsed SVG documents
//!
//! All three types are plain immutable data with structural equality; a
//! parse builds a fresh tree owned by the caller.

/// A normalized name/value attribute pair
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A child element of the document: tag name, attributes in source order,
/// and nested elements in document order
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgElement {
    pub element: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<SvgElement>,
}

/// The document root. The `svg` tag itself is implicit; only its attributes
/// and children are retained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Svg {
    pub attributes: Vec<Attribute>,
    pub children: Vec<SvgElement>,
}
