/*
 * buildergen - Builder-class generator for C# sources
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Span) and utilities (casing)
 * - features/    : Vertical slices (parsing → extraction → rendering)
 * - pipeline/    : Orchestration
 *
 * The core is a single-pass, side-effect-free transform: source text in,
 * generated builder class text out. File I/O lives only in the CLI binary.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parse → extract → render)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{BuildergenError, Result};
pub use features::extraction::{ExtractPropertiesUseCase, PropertyDescriptor};
pub use features::parsing::{
    CSharpParser, ParseSourceUseCase, ParsedTree, Parser, SyntaxKind, SyntaxNode,
};
pub use features::rendering::{BuilderSpec, RenderBuilderUseCase};
pub use pipeline::{generate_builder, BuilderGenerator};

/// Extract the ordered property list from a C# source text.
///
/// Aggregates the properties of every class in the source, in document
/// order; names are lower-cased, declared types kept verbatim. Never fails:
/// unparseable input degrades to an empty list.
pub fn extract_properties(source: &str) -> Vec<PropertyDescriptor> {
    ExtractPropertiesUseCase::new(CSharpParser::new()).execute(source)
}
