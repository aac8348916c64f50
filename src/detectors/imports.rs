//! Stylesheet module import resolution
//!
//! Finds the first top-level `import x from "./X.module.css"` (or `.scss` /
//! `.sass`) and extracts its default or namespace binding. Named bindings
//! (`import { card } from ...`) never count.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::config::Config;
use crate::detectors::common::{get_node_text, string_literal_value};
use crate::error::{BemError, Result};
use crate::parser::ParsedSource;
use crate::schema::{ImportBinding, ImportCompletion};

static STYLESHEET_MODULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.module\.(css|scss|sass)$").unwrap());

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Words that cannot be used as a binding name
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check whether a module path names a stylesheet module
pub fn is_stylesheet_module(path: &str) -> bool {
    STYLESHEET_MODULE_RE.is_match(path)
}

/// Check whether `name` can be used as an import binding
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name) && !RESERVED_WORDS.contains(&name)
}

/// Resolve the stylesheet module binding of a file.
///
/// Only the first import statement with a stylesheet module path is
/// considered; if it has no default or namespace binding the result is
/// `None`, even when a later import would qualify.
pub fn resolve_stylesheet_import(parsed: &ParsedSource) -> Option<ImportBinding> {
    let root = parsed.root();
    let source = parsed.source();
    let mut cursor = root.walk();

    let import = root.children(&mut cursor).find(|child| {
        child.kind() == "import_statement"
            && import_source(child, source).is_some_and(is_stylesheet_module)
    })?;

    let module_path = import_source(&import, source)?.to_string();
    let local_name = first_object_binding(&import, source);
    tracing::debug!(module = %module_path, binding = ?local_name, "stylesheet import");

    Some(ImportBinding {
        local_name: local_name?,
        module_path,
    })
}

/// Module path of an import statement, without quotes
fn import_source<'s>(import: &Node, source: &'s str) -> Option<&'s str> {
    let node = import.child_by_field_name("source")?;
    string_literal_value(&node, source)
}

/// First default or namespace binding of an import, in declared order
fn first_object_binding(import: &Node, source: &str) -> Option<String> {
    let mut cursor = import.walk();
    let clause = import
        .children(&mut cursor)
        .find(|child| child.kind() == "import_clause")?;

    let mut clause_cursor = clause.walk();
    for specifier in clause.named_children(&mut clause_cursor) {
        match specifier.kind() {
            // import styles from "..."
            "identifier" => return Some(get_node_text(&specifier, source).to_string()),
            // import * as styles from "..."
            "namespace_import" => {
                let mut ns_cursor = specifier.walk();
                let name = specifier
                    .named_children(&mut ns_cursor)
                    .find(|n| n.kind() == "identifier")?;
                return Some(get_node_text(&name, source).to_string());
            }
            // import { card } from "..."
            _ => {}
        }
    }
    None
}

/// Byte offset where a new import statement belongs: the start of the line
/// after the last top-level import, or the top of the file.
pub fn import_insertion_offset(parsed: &ParsedSource) -> usize {
    let root = parsed.root();
    let source = parsed.source();
    let mut cursor = root.walk();
    let last_end = root
        .children(&mut cursor)
        .filter(|child| child.kind() == "import_statement")
        .map(|import| import.end_byte())
        .last();

    match last_end {
        Some(end) => match source[end..].find('\n') {
            Some(newline) => end + newline + 1,
            None => source.len(),
        },
        None => 0,
    }
}

/// Build the import statement for a user-supplied identifier.
///
/// The module path is `./<file_stem>` plus the configured stylesheet
/// extension.
///
/// # Arguments
/// * `identifier` - Binding name typed by the user, trimmed before use
/// * `file_stem` - Stem of the file being edited (`UserProfileCard`)
/// * `insert_offset` - Byte offset the statement will be inserted at
/// * `config` - Supplies the stylesheet extension and quote style
///
/// # Returns
/// The statement text, newline included, or `InvalidIdentifier` when the
/// name is not a usable JavaScript identifier.
pub fn synthesize_import(
    identifier: &str,
    file_stem: &str,
    insert_offset: usize,
    config: &Config,
) -> Result<ImportCompletion> {
    let identifier = identifier.trim();
    if !is_valid_identifier(identifier) {
        return Err(BemError::InvalidIdentifier {
            identifier: identifier.to_string(),
        });
    }

    let quote = config.quote_style.as_char();
    let import_statement_text = format!(
        "import {} from {}./{}{}{};\n",
        identifier,
        quote,
        file_stem,
        config.stylesheet_extension.suffix(),
        quote
    );

    Ok(ImportCompletion {
        import_statement_text,
        object_identifier: identifier.to_string(),
        insert_offset,
    })
}
