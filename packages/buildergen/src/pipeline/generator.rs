//! Builder generation pipeline
//!
//! One synchronous pass: parse the source, extract the property list, render
//! the builder class. Every input, however degenerate, maps to some valid
//! string output.

use tracing::debug;

use crate::features::extraction::application::ExtractPropertiesUseCase;
use crate::features::parsing::infrastructure::CSharpParser;
use crate::features::rendering::application::RenderBuilderUseCase;
use crate::features::rendering::domain::BuilderSpec;

/// Builder generation pipeline
pub struct BuilderGenerator {
    extract: ExtractPropertiesUseCase<CSharpParser>,
    render: RenderBuilderUseCase,
}

impl Default for BuilderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderGenerator {
    pub fn new() -> Self {
        Self {
            extract: ExtractPropertiesUseCase::new(CSharpParser::new()),
            render: RenderBuilderUseCase::new(),
        }
    }

    /// Generate the builder class text for `selected_class_name` from
    /// `source`.
    ///
    /// The extracted list aggregates the properties of every class in the
    /// source; `selected_class_name` only names the generated builder and
    /// the constructed type. An empty extraction result still renders a
    /// valid, empty-bodied builder class.
    pub fn generate(&self, source: &str, selected_class_name: &str) -> String {
        let properties = self.extract.execute(source);
        debug!(
            count = properties.len(),
            class = selected_class_name,
            "rendering builder"
        );

        let spec = BuilderSpec::with_properties(selected_class_name, properties);
        self.render.execute(&spec)
    }
}

/// Convenience entry point for one-shot callers
pub fn generate_builder(source: &str, selected_class_name: &str) -> String {
    BuilderGenerator::new().generate(source, selected_class_name)
}
