//! Parsing feature
//!
//! Responsible for lowering C# source text into a typed syntax tree.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxNode models
//! - `ports/` - Parser trait
//! - `application/` - ParseSourceUseCase
//! - `infrastructure/` - CSharpParser (tree-sitter)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{ParseIssue, ParsedTree, SyntaxKind, SyntaxNode};

pub use application::ParseSourceUseCase;
pub use ports::Parser;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::CSharpParser;
