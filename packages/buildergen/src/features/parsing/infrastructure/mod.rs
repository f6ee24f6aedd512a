//! Parsing infrastructure

pub mod tree_sitter;

pub use tree_sitter::CSharpParser;
