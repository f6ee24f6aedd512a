//! Shared data models

mod span;

pub use span::Span;

// Error types live at the crate root; re-exported here for the modules that
// prefer a single import path.
pub use crate::errors::{BuildergenError, Result};
