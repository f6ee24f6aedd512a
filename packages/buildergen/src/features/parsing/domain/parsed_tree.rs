//! Parsed tree representation

use super::syntax_node::SyntaxNode;
use crate::shared::models::Span;

/// Parsed syntax tree
#[derive(Debug, Clone)]
pub struct ParsedTree {
    /// Root node of the tree
    pub root: SyntaxNode,

    /// Source code
    pub source: String,

    /// Language
    pub language: String,

    /// Whether parsing had errors
    pub has_errors: bool,

    /// Parse diagnostics (if any). Informational only: a partially parsed
    /// tree is still traversed.
    pub issues: Vec<ParseIssue>,
}

/// Parse diagnostic
#[derive(Debug, Clone)]
pub struct ParseIssue {
    pub message: String,
    pub span: Span,
}

impl ParsedTree {
    pub fn new(root: SyntaxNode, source: String, language: String) -> Self {
        Self {
            root,
            source,
            language,
            has_errors: false,
            issues: Vec::new(),
        }
    }

    pub fn with_issues(mut self, issues: Vec<ParseIssue>) -> Self {
        self.has_errors = !issues.is_empty();
        self.issues = issues;
        self
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }

    /// Check if source is empty
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::SyntaxKind;

    #[test]
    fn test_parsed_tree_line_count() {
        let root = SyntaxNode::new(SyntaxKind::CompilationUnit, Span::zero());
        let tree = ParsedTree::new(
            root,
            "class A\n{\n}".to_string(),
            "csharp".to_string(),
        );
        assert_eq!(tree.line_count(), 3);
        assert!(!tree.is_empty());
        assert!(!tree.has_errors);
    }

    #[test]
    fn test_with_issues_flags_errors() {
        let root = SyntaxNode::new(SyntaxKind::CompilationUnit, Span::zero());
        let tree = ParsedTree::new(root, "class {".to_string(), "csharp".to_string())
            .with_issues(vec![ParseIssue {
                message: "missing identifier".to_string(),
                span: Span::zero(),
            }]);
        assert!(tree.has_errors);
        assert_eq!(tree.issues.len(), 1);
    }
}
