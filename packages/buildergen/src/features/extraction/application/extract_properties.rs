//! Extract properties use case
//!
//! Entry point for turning raw source text into an ordered property list.

use tracing::{debug, warn};

use crate::features::extraction::domain::PropertyDescriptor;
use crate::features::extraction::infrastructure::collect_properties;
use crate::features::parsing::ports::Parser;

/// Extract properties use case
///
/// Extraction never fails: a parser-level error degrades to an empty list,
/// a partial parse degrades to partial results. Callers always receive a
/// concrete list.
pub struct ExtractPropertiesUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ExtractPropertiesUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Extract the ordered property list from a source text.
    ///
    /// The result aggregates every class in the source; it does not say
    /// which class a property came from.
    pub fn execute(&self, source: &str) -> Vec<PropertyDescriptor> {
        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("extraction degraded to empty result: {}", e);
                return Vec::new();
            }
        };

        if tree.has_errors {
            debug!(
                issues = tree.issues.len(),
                "source parsed with errors, extracting from partial tree"
            );
        }

        collect_properties(&tree.root)
    }
}
