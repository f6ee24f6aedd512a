//! Rendering feature
//!
//! Turns a builder spec into the full source text of the builder class.
//!
//! ## Structure
//! - `domain/` - BuilderSpec model
//! - `application/` - RenderBuilderUseCase
//! - `infrastructure/` - text emission

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::RenderBuilderUseCase;
pub use domain::BuilderSpec;

#[doc(hidden)]
pub use infrastructure::render_builder_class;
