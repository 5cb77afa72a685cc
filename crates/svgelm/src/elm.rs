//! Elm code emission over the Svg model

pub mod emit;
pub mod module;

pub use emit::{module_source, render_module, view_body};
pub use module::{ElmModule, ModuleOptions, ParserResult};
