//! Builder spec model

use crate::features::extraction::domain::PropertyDescriptor;

/// Everything the renderer needs for one builder class.
///
/// `target_class_name` is taken from the user's selection as-is; it is not
/// validated as an identifier. `properties: None` is the "class not found"
/// sentinel and renders as an explanatory comment instead of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSpec {
    pub target_class_name: String,
    pub properties: Option<Vec<PropertyDescriptor>>,
}

impl BuilderSpec {
    /// Spec for a resolved class with a concrete (possibly empty) list
    pub fn with_properties(
        target_class_name: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            target_class_name: target_class_name.into(),
            properties: Some(properties),
        }
    }

    /// Spec for a class that could not be resolved
    pub fn not_found(target_class_name: impl Into<String>) -> Self {
        Self {
            target_class_name: target_class_name.into(),
            properties: None,
        }
    }

    /// Name of the generated builder class
    pub fn builder_class_name(&self) -> String {
        format!("{}Builder", self.target_class_name)
    }
}
