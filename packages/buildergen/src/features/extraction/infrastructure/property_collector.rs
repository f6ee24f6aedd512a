//! Property collection over the typed syntax tree

use crate::features::extraction::domain::PropertyDescriptor;
use crate::features::parsing::domain::{SyntaxKind, SyntaxNode};

/// Collect property descriptors from a lowered syntax tree.
///
/// Walks every class declaration anywhere in the tree in document order
/// (nested classes included), and for each one every property declaration
/// that is its descendant, also in document order. The result is the
/// concatenation across all classes; it carries no record of which class a
/// property came from. A property inside a nested class is a descendant of
/// both the outer and the inner class declaration and is therefore recorded
/// once per enclosing class.
///
/// Pure function of the tree: no shared accumulator, no side effects.
pub fn collect_properties(root: &SyntaxNode) -> Vec<PropertyDescriptor> {
    root.find_descendants(&SyntaxKind::ClassDecl)
        .into_iter()
        .flat_map(|class_decl| class_decl.find_descendants(&SyntaxKind::PropertyDecl))
        .filter_map(descriptor_for)
        .collect()
}

/// Build a descriptor from a property declaration node.
///
/// Returns `None` when the declaration is too damaged to expose a type and a
/// name (partial parses).
fn descriptor_for(property_decl: &SyntaxNode) -> Option<PropertyDescriptor> {
    let declared_type = property_decl.child_by_field("type")?.text();
    let name = property_decl.child_by_field("name")?.text();
    if name.is_empty() {
        return None;
    }
    Some(PropertyDescriptor::new(declared_type, name))
}
