//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. Everything above this
//! module sees only the typed `SyntaxNode` model.

use tree_sitter::{Parser as TSParser, Tree};

use crate::features::parsing::domain::{ParseIssue, ParsedTree, SyntaxKind, SyntaxNode};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{BuildergenError, Result, Span};

/// Tree-sitter based C# parser
pub struct CSharpParser;

impl Default for CSharpParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CSharpParser {
    pub fn new() -> Self {
        Self
    }

    /// Convert a tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let root = self.convert_node(&root_node, None, source);

        let mut issues = Vec::new();
        self.collect_issues(&root_node, &mut issues);

        ParsedTree::new(root, source.to_string(), self.language_name().to_string())
            .with_issues(issues)
    }

    /// Convert a tree-sitter node to SyntaxNode
    ///
    /// `field` is the grammar field name under which this node hangs off its
    /// parent, carried over so the extractor can tell a type child from a
    /// name child even when both are plain identifiers.
    fn convert_node(
        &self,
        node: &tree_sitter::Node,
        field: Option<&str>,
        source: &str,
    ) -> SyntaxNode {
        let kind = map_node_kind(node.kind());
        let span = node_to_span(node);

        // Verbatim source text is kept for leaves and for type nodes, whose
        // full textual form (generics, nullable markers, namespaces) must
        // survive lowering untouched.
        let keep_text = node.child_count() == 0 || matches!(kind, SyntaxKind::TypeName);

        let mut children = Vec::new();
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if child.is_extra() {
                    continue; // comments, etc.
                }
                let child_field = node.field_name_for_child(i as u32);
                children.push(self.convert_node(&child, child_field, source));
            }
        }

        let mut syntax_node = SyntaxNode::new(kind, span)
            .with_raw_kind(node.kind())
            .with_children(children);

        if keep_text {
            syntax_node =
                syntax_node.with_text(source.get(node.byte_range()).unwrap_or("").to_string());
        }
        if let Some(field) = field {
            syntax_node = syntax_node.with_field(field);
        }

        syntax_node
    }

    /// Collect parse diagnostics from error/missing nodes
    fn collect_issues(&self, node: &tree_sitter::Node, issues: &mut Vec<ParseIssue>) {
        if node.is_error() || node.is_missing() {
            issues.push(ParseIssue {
                message: format!("Parse error at {:?}", node.kind()),
                span: node_to_span(node),
            });
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.collect_issues(&child, issues);
            }
        }
    }
}

impl Parser for CSharpParser {
    fn parse(&self, source: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|e| BuildergenError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| BuildergenError::parse("Failed to parse source text"))?;

        Ok(self.convert_tree(&tree, source))
    }

    fn language_name(&self) -> &'static str {
        "csharp"
    }
}

/// Map tree-sitter node kind to our SyntaxKind
fn map_node_kind(ts_kind: &str) -> SyntaxKind {
    match ts_kind {
        // Containers
        "compilation_unit" => SyntaxKind::CompilationUnit,
        "namespace_declaration" | "file_scoped_namespace_declaration" => SyntaxKind::NamespaceDecl,

        // Type declarations
        "class_declaration" => SyntaxKind::ClassDecl,
        "interface_declaration" => SyntaxKind::InterfaceDecl,
        "struct_declaration" => SyntaxKind::StructDecl,
        "record_declaration" | "record_struct_declaration" => SyntaxKind::RecordDecl,
        "enum_declaration" => SyntaxKind::EnumDecl,

        // Member declarations
        "property_declaration" => SyntaxKind::PropertyDecl,
        "field_declaration" => SyntaxKind::FieldDecl,
        "method_declaration" => SyntaxKind::MethodDecl,
        "constructor_declaration" => SyntaxKind::ConstructorDecl,

        // Leaves and member parts
        "identifier" => SyntaxKind::Identifier,
        "predefined_type" | "generic_name" | "nullable_type" | "array_type" | "qualified_name"
        | "tuple_type" | "pointer_type" | "ref_type" => SyntaxKind::TypeName,
        "modifier" => SyntaxKind::Modifier,
        "accessor_list" => SyntaxKind::AccessorList,
        "parameter_list" => SyntaxKind::ParameterList,
        "base_list" => SyntaxKind::BaseList,
        "attribute_list" => SyntaxKind::AttributeList,
        "comment" => SyntaxKind::Comment,

        // Unknown
        other => SyntaxKind::Other(other.to_string()),
    }
}

/// Convert tree-sitter node position to Span (1-indexed lines)
fn node_to_span(node: &tree_sitter::Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}
