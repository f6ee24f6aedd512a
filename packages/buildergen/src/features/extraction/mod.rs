//! Extraction feature
//!
//! Recovers an ordered property list from a parsed source file.
//!
//! ## Structure
//! - `domain/` - PropertyDescriptor model
//! - `application/` - ExtractPropertiesUseCase
//! - `infrastructure/` - property collection over the syntax tree

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::ExtractPropertiesUseCase;
pub use domain::PropertyDescriptor;

#[doc(hidden)]
pub use infrastructure::collect_properties;
