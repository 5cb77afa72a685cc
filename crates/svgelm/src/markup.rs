//! Markup tokenizer and generic tree builder

pub mod node;
pub mod parser;

pub use node::Node;
pub use parser::Parser;
