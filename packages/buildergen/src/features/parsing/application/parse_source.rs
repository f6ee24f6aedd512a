//! Parse source use case

use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::Parser;
use crate::shared::models::Result;

/// Parse source use case
pub struct ParseSourceUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseSourceUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str) -> Result<ParsedTree> {
        self.parser.parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::{SyntaxKind, SyntaxNode};
    use crate::shared::models::Span;

    // Mock parser for testing
    struct MockParser;

    impl Parser for MockParser {
        fn parse(&self, source: &str) -> Result<ParsedTree> {
            let root = SyntaxNode::new(SyntaxKind::CompilationUnit, Span::zero());
            Ok(ParsedTree::new(
                root,
                source.to_string(),
                "csharp".to_string(),
            ))
        }

        fn language_name(&self) -> &'static str {
            "csharp"
        }
    }

    #[test]
    fn test_parse_source_use_case() {
        let use_case = ParseSourceUseCase::new(MockParser);
        let result = use_case.execute("class A { }");
        assert!(result.is_ok());
    }
}
