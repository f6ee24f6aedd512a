//! Tree-sitter backed parsing

mod parser;

pub use parser::CSharpParser;
