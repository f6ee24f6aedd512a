//! Property descriptor model

use serde::{Deserialize, Serialize};

/// One extracted property declaration.
///
/// `declared_type` is the literal declared type text as written in source,
/// never resolved against a type system. `name` is case-folded to lower-case
/// at construction time; the original casing is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub declared_type: String,
    pub name: String,
}

impl PropertyDescriptor {
    /// Create a descriptor, lower-casing the property name
    pub fn new(declared_type: impl Into<String>, name: &str) -> Self {
        Self {
            declared_type: declared_type.into(),
            name: name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_case_folded() {
        let prop = PropertyDescriptor::new("string", "FirstName");
        assert_eq!(prop.name, "firstname");
        assert_eq!(prop.declared_type, "string");
    }

    #[test]
    fn test_declared_type_is_verbatim() {
        let prop = PropertyDescriptor::new("Dictionary<string, int>", "Counts");
        assert_eq!(prop.declared_type, "Dictionary<string, int>");
    }
}
