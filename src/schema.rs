//! Data types produced by the analysis pipeline

use serde::Serialize;

/// How a suggestion should be inserted at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionMode {
    /// Cursor is inside an opening tag: emit only the class attribute
    AttributeOnly,
    /// Cursor is elsewhere: emit a whole wrapping element
    FullElement,
}

impl InsertionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AttributeOnly => "attribute_only",
            Self::FullElement => "full_element",
        }
    }
}

/// A stylesheet module import binding, e.g. `import styles from "./Card.module.css"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportBinding {
    /// Local name introduced by the default or namespace specifier
    pub local_name: String,
    /// Module path as written, without quotes
    pub module_path: String,
}

/// Naming suggestion handed to the editor layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingSuggestion {
    pub object_identifier: String,
    pub block_name: String,
    pub insertion_mode: InsertionMode,
}

/// Import statement synthesized for a user-supplied identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportCompletion {
    pub import_statement_text: String,
    pub object_identifier: String,
    /// Byte offset the statement should be inserted at
    pub insert_offset: usize,
}

/// Where the block name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockSource {
    /// A `className` expression on the element or one of its ancestors
    Ancestor,
    /// The stem of the stylesheet module path
    ModuleStem,
    /// The stem of the file being edited
    FileStem,
}

impl BlockSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::ModuleStem => "module_stem",
            Self::FileStem => "file_stem",
        }
    }
}

/// Everything the CLI reports about one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionReport {
    pub file: String,
    pub language: String,
    pub offset: usize,
    #[serde(flatten)]
    pub suggestion: NamingSuggestion,
    pub block_source: BlockSource,
    /// Tag of the element under the cursor, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Import to insert when the stylesheet binding was supplied by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportCompletion>,
    /// Rendered editor snippet
    pub snippet: String,
}
