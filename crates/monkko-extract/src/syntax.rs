//! Syntax tree source.
//!
//! TypeScript is parsed with tree-sitter. The grammar is a superset of the
//! CommonJS JavaScript that transpilers emit, so both the authored
//! `*.monkko.ts` form and its compiled form parse with the same grammar.

use std::fmt;
use tree_sitter::{Node, Parser, Tree};

/// Error produced while building a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("tree-sitter init: {0}")]
    Language(String),

    #[error("failed to parse TypeScript")]
    Failed,

    #[error("syntax error at {0}")]
    Syntax(Span),
}

/// Source location of a node, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Span {
    pub fn of(node: Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1,
            column: start.column + 1,
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parse TypeScript source into a syntax tree.
///
/// Trees containing error or missing nodes are rejected; the error points at
/// the first one in document order.
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&arborium_typescript::language().into())
        .map_err(|e| ParseError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseError::Failed)?;

    let root = tree.root_node();
    if root.has_error() {
        let span = first_error(root).map_or_else(|| Span::of(root), Span::of);
        return Err(ParseError::Syntax(span));
    }

    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

/// Source text covered by a node.
pub(crate) fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Named children, skipping comments.
pub(crate) fn significant_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}
