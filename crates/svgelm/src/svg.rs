//! Svg domain model and its builder

pub mod builder;
pub mod model;

pub use model::{Attribute, Svg, SvgElement};
