//! Render builder use case

use crate::features::rendering::domain::BuilderSpec;
use crate::features::rendering::infrastructure::render_builder_class;

/// Render builder use case
///
/// Never fails: the "class not found" case is represented inside the
/// generated text, not through a return code.
#[derive(Debug, Default)]
pub struct RenderBuilderUseCase;

impl RenderBuilderUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Produce the builder class source text for `spec`
    pub fn execute(&self, spec: &BuilderSpec) -> String {
        render_builder_class(spec)
    }
}
