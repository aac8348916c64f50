//! Suggest command handler - the editor-facing end of the pipeline

use std::fs;

use tree_sitter::Node;

use crate::cli::{Cli, OffsetUnit, OutputFormat};
use crate::config::Config;
use crate::error::{BemError, Result};
use crate::lang::Lang;
use crate::parser::parse;
use crate::prompt;
use crate::schema::SuggestionReport;
use crate::snippet::{apply_edits, render, TextEdit};
use crate::suggest::{analyze, Analysis, AnalyzeRequest};
use crate::toon::{encode_json, encode_toon};
use crate::utils::{char_to_byte_offset, truncate_with_ellipsis, utf16_to_byte_offset};

/// Run the suggest command and return the text to print
pub fn run_suggest(cli: &Cli) -> Result<String> {
    // 1. Check file exists
    if !cli.file.exists() {
        return Err(BemError::FileNotFound {
            path: cli.file.display().to_string(),
        });
    }

    // 2. Detect language from the editor's language id or the extension
    let lang = match cli.language_id {
        Some(ref id) => Lang::from_language_id(id)?,
        None => Lang::from_path(&cli.file)?,
    };

    let config = Config::load(cli.config.as_deref())?;
    let source = fs::read_to_string(&cli.file)?;
    let offset = byte_offset(&source, cli.offset, cli.offset_unit);

    tracing::debug!(
        file = %cli.file.display(),
        lang = lang.name(),
        bytes = source.len(),
        offset,
        "read source"
    );

    if cli.print_ast {
        let parsed = parse(&source, lang)?;
        eprintln!("\n=== AST ===");
        print_ast(&parsed.root(), &source, 0);
        eprintln!("=== END AST ===\n");
    }

    // 3. Analyze
    let request = AnalyzeRequest {
        source: &source,
        lang,
        offset,
        file_path: &cli.file,
    };

    let (suggestion, block_source, element, import) = match analyze(&request, &config)? {
        Analysis::Ready(ready) => (ready.naming, ready.block_source, ready.element, None),
        Analysis::NeedsIdentifier(pending) => {
            let identifier = match cli.identifier {
                Some(ref id) => id.clone(),
                None if prompt::can_prompt() => prompt::ask_identifier("styles")?,
                None => return Err(BemError::IdentifierRequired),
            };
            let completion = pending.complete(&identifier, &config)?;
            (
                completion.naming,
                completion.block_source,
                pending.element,
                Some(completion.import),
            )
        }
    };

    // 4. Render
    let snippet = render(&suggestion, &config);

    if cli.write {
        let mut edits = Vec::new();
        if let Some(ref import) = import {
            edits.push(TextEdit {
                offset: import.insert_offset,
                text: import_edit_text(&source, import.insert_offset, &import.import_statement_text),
            });
        }
        let (plain, _) = snippet.to_plain_text();
        edits.push(TextEdit { offset, text: plain });
        fs::write(&cli.file, apply_edits(&source, &edits))?;
        tracing::info!(file = %cli.file.display(), edits = edits.len(), "applied edits");
    }

    let report = SuggestionReport {
        file: cli.file.display().to_string(),
        language: lang.name().to_string(),
        offset,
        suggestion,
        block_source,
        element,
        import,
        snippet: snippet.to_snippet_string(),
    };

    // 5. Return output in requested format
    Ok(match cli.format {
        OutputFormat::Toon => encode_toon(&report),
        OutputFormat::Json => encode_json(&report),
        OutputFormat::Snippet => report.snippet,
    })
}

/// Convert the CLI offset to bytes
fn byte_offset(source: &str, offset: usize, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Byte => offset,
        OffsetUnit::Char => char_to_byte_offset(source, offset),
        OffsetUnit::Utf16 => utf16_to_byte_offset(source, offset),
    }
}

/// An import inserted at the very end of a file that lacks a trailing
/// newline needs one in front of it
fn import_edit_text(source: &str, at: usize, statement: &str) -> String {
    if at > 0 && at == source.len() && !source.ends_with('\n') {
        format!("\n{}", statement)
    } else {
        statement.to_string()
    }
}

/// Print AST for debugging
fn print_ast(node: &Node, source: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    let text = node
        .utf8_text(source.as_bytes())
        .unwrap_or("<invalid utf8>");
    let preview = truncate_with_ellipsis(text, 50).replace('\n', "\\n");

    eprintln!(
        "{}{}{} [{}-{}] \"{}\"",
        indent,
        node.kind(),
        if node.is_named() { "" } else { " (anonymous)" },
        node.start_byte(),
        node.end_byte(),
        preview,
    );

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        print_ast(&child, source, depth + 1);
    }
}
