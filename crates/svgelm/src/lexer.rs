//! Lexer module for byte-level input navigation

pub mod cursor;

pub use cursor::Cursor;
