//! Parser adapter: source text to a tree-sitter syntax tree

use tree_sitter::{Node, Tree};

use crate::error::{BemError, Result};
use crate::lang::Lang;

/// A parsed source file.
///
/// Built once per analysis and dropped once the suggestion is produced.
pub struct ParsedSource<'src> {
    source: &'src str,
    tree: Tree,
    lang: Lang,
}

impl<'src> ParsedSource<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }
}

/// Parse `source` with the grammar selected by `lang`.
///
/// Any syntax error is fatal: a tree containing `ERROR` or `MISSING` nodes is
/// rejected instead of being analyzed.
pub fn parse(source: &str, lang: Lang) -> Result<ParsedSource<'_>> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| BemError::ParseFailure {
            message: format!("Failed to set language: {:?}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| BemError::ParseFailure {
            message: "Failed to parse file".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error(&root) {
            Some(node) => {
                let pos = node.start_position();
                let what = if node.is_missing() {
                    format!("missing `{}`", node.kind())
                } else {
                    "unexpected syntax".to_string()
                };
                format!("{} at {}:{} ({})", what, pos.row + 1, pos.column + 1, lang.name())
            }
            None => format!("invalid {} syntax", lang.name()),
        };
        return Err(BemError::ParseFailure { message });
    }

    tracing::debug!(
        lang = lang.name(),
        bytes = source.len(),
        "parsed source"
    );

    Ok(ParsedSource { source, tree, lang })
}

/// Find the first `ERROR` or `MISSING` node in document order
fn first_error<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(&child) {
            return Some(found);
        }
    }
    None
}
