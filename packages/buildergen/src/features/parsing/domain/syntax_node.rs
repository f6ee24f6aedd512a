//! Typed syntax node representation
//!
//! Abstracts tree-sitter nodes behind a tagged-variant model so that domain
//! logic pattern-matches on node kinds instead of comparing grammar strings.

use crate::shared::models::Span;

/// Syntax node kind for the C# constructs the pipeline cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    // Containers
    CompilationUnit,
    NamespaceDecl,

    // Type declarations
    ClassDecl,
    InterfaceDecl,
    StructDecl,
    RecordDecl,
    EnumDecl,

    // Member declarations
    PropertyDecl,
    FieldDecl,
    MethodDecl,
    ConstructorDecl,

    // Leaves and member parts
    Identifier,
    TypeName,
    Modifier,
    AccessorList,
    ParameterList,
    BaseList,
    AttributeList,
    Comment,

    // Unknown/Other
    Other(String),
}

impl SyntaxKind {
    /// True for nodes that declare a named type
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDecl
                | SyntaxKind::InterfaceDecl
                | SyntaxKind::StructDecl
                | SyntaxKind::RecordDecl
                | SyntaxKind::EnumDecl
        )
    }

    /// True for nodes that declare a member of a type
    pub fn is_member_declaration(&self) -> bool {
        matches!(
            self,
            SyntaxKind::PropertyDecl
                | SyntaxKind::FieldDecl
                | SyntaxKind::MethodDecl
                | SyntaxKind::ConstructorDecl
        )
    }
}

/// Typed syntax node
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,

    /// Grammar field name that attached this node to its parent, if any
    /// (e.g. "name", "type"). Lets callers resolve the role of a child
    /// without guessing by kind.
    pub field: Option<String>,

    /// Original tree-sitter kind (for debugging)
    pub raw_kind: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            children: Vec::new(),
            field: None,
            raw_kind: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = Some(raw_kind.into());
        self
    }

    /// Find first direct child of given kind
    pub fn find_child(&self, kind: &SyntaxKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| &c.kind == kind)
    }

    /// Find all direct children of given kind
    pub fn find_children(&self, kind: &SyntaxKind) -> Vec<&SyntaxNode> {
        self.children.iter().filter(|c| &c.kind == kind).collect()
    }

    /// Find first direct child attached under the given grammar field
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|c| c.field.as_deref() == Some(field))
    }

    /// Find all descendants of given kind, in document (preorder) order.
    /// The node itself is not included.
    pub fn find_descendants(&self, kind: &SyntaxKind) -> Vec<&SyntaxNode> {
        let mut result = Vec::new();
        let mut stack: Vec<&SyntaxNode> = self.children.iter().rev().collect();
        while let Some(current) = stack.pop() {
            if &current.kind == kind {
                result.push(current);
            }
            for child in current.children.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Get text content
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
