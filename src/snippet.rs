//! Snippet rendering and text edits
//!
//! A suggestion is rendered into one of two templates:
//!
//! - attribute only: `className={${1:styles}.${2:card}__${3:element}}`
//! - full element:   `<${1:div} className={${2:styles}.${3:card}__${4:element}}>\n\t$0\n</${1:div}>`
//!
//! Placeholders are numbered in tab order and `$0` marks the final cursor.

use serde::Serialize;

use crate::config::Config;
use crate::detectors::class_expr::ELEMENT_SEPARATOR;
use crate::schema::{InsertionMode, NamingSuggestion};
use crate::utils::floor_char_boundary;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Placeholder { index: u32, default: String },
    FinalCursor,
}

/// A rendered snippet with numbered, editable placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    parts: Vec<Part>,
}

impl Snippet {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn text(mut self, text: &str) -> Self {
        self.parts.push(Part::Text(text.to_string()));
        self
    }

    fn placeholder(mut self, index: u32, default: &str) -> Self {
        self.parts.push(Part::Placeholder {
            index,
            default: default.to_string(),
        });
        self
    }

    fn final_cursor(mut self) -> Self {
        self.parts.push(Part::FinalCursor);
        self
    }

    /// Snippet syntax understood by editors (`${1:default}`, `$0`)
    pub fn to_snippet_string(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(&escape_snippet_text(text, false)),
                Part::Placeholder { index, default } => out.push_str(&format!(
                    "${{{}:{}}}",
                    index,
                    escape_snippet_text(default, true)
                )),
                Part::FinalCursor => out.push_str("$0"),
            }
        }
        out
    }

    /// Plain text with every placeholder at its default, plus the byte
    /// offset of the final cursor within that text
    pub fn to_plain_text(&self) -> (String, Option<usize>) {
        let mut out = String::new();
        let mut cursor = None;
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Placeholder { default, .. } => out.push_str(default),
                Part::FinalCursor => cursor = Some(out.len()),
            }
        }
        (out, cursor)
    }
}

/// Escape `$` and `\` (and `}` inside a placeholder) so literal text
/// survives snippet parsing
fn escape_snippet_text(text: &str, in_placeholder: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '\\') || (in_placeholder && c == '}') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render a suggestion into the template for its insertion mode
pub fn render(suggestion: &NamingSuggestion, config: &Config) -> Snippet {
    let object = suggestion.object_identifier.as_str();
    let block = suggestion.block_name.as_str();
    let element = config.element_placeholder.as_str();

    match suggestion.insertion_mode {
        InsertionMode::AttributeOnly => Snippet::new()
            .text("className={")
            .placeholder(1, object)
            .text(".")
            .placeholder(2, block)
            .text(ELEMENT_SEPARATOR)
            .placeholder(3, element)
            .text("}"),
        InsertionMode::FullElement => {
            let tag = config.default_tag.as_str();
            Snippet::new()
                .text("<")
                .placeholder(1, tag)
                .text(" className={")
                .placeholder(2, object)
                .text(".")
                .placeholder(3, block)
                .text(ELEMENT_SEPARATOR)
                .placeholder(4, element)
                .text("}>\n\t")
                .final_cursor()
                .text("\n</")
                .placeholder(1, tag)
                .text(">")
        }
    }
}

/// Insertion of `text` at a byte offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub offset: usize,
    pub text: String,
}

/// Apply insertions to `source`.
///
/// Offsets refer to the original text; edits are applied back to front so
/// earlier offsets stay valid. Edits at the same offset keep their given
/// order.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut out = source.to_string();
    let mut pending_same_offset: Vec<&TextEdit> = Vec::new();
    for edit in ordered {
        if pending_same_offset
            .last()
            .is_some_and(|prev| prev.offset != edit.offset)
        {
            insert_group(&mut out, &pending_same_offset);
            pending_same_offset.clear();
        }
        pending_same_offset.push(edit);
    }
    insert_group(&mut out, &pending_same_offset);
    out
}

fn insert_group(out: &mut String, group: &[&TextEdit]) {
    let Some(first) = group.first() else {
        return;
    };
    let offset = floor_char_boundary(out, first.offset);
    // sort_by is stable, so the group is in caller order
    let text: String = group.iter().map(|e| e.text.as_str()).collect();
    out.insert_str(offset, &text);
}
