//! Parser port (interface)
//!
//! Defines the contract for parsing source text.

use crate::features::parsing::domain::ParsedTree;
use crate::shared::models::Result;

/// Parser trait - abstraction over the parsing implementation
pub trait Parser: Send + Sync {
    /// Parse source text into a ParsedTree.
    ///
    /// Malformed input is not an error: implementations return whatever
    /// partial tree the underlying parser produced, with diagnostics
    /// attached. `Err` is reserved for failing to run the parser at all.
    fn parse(&self, source: &str) -> Result<ParsedTree>;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
