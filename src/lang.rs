//! Language detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{BemError, Result};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| BemError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            _ => Err(BemError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    /// Detect language from an editor language identifier
    /// (`typescriptreact`, `javascriptreact`, ...)
    pub fn from_language_id(id: &str) -> Result<Self> {
        match id {
            "typescript" => Ok(Self::TypeScript),
            "typescriptreact" => Ok(Self::Tsx),
            "javascript" => Ok(Self::JavaScript),
            "javascriptreact" => Ok(Self::Jsx),
            _ => Err(BemError::UnsupportedLanguage {
                extension: id.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
        }
    }

    /// Whether this is the statically-typed dialect
    pub fn is_typed(&self) -> bool {
        matches!(self, Self::TypeScript | Self::Tsx)
    }

    /// Get the tree-sitter Language for parsing.
    ///
    /// JSX is always enabled, so plain TypeScript is parsed with the TSX
    /// grammar. Class fields and decorators are part of both grammars.
    pub fn tree_sitter_language(&self) -> Language {
        if self.is_typed() {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_javascript::LANGUAGE.into()
        }
    }

    /// Get common file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::TypeScript => &["ts", "mts", "cts"],
            Self::Tsx => &["tsx"],
            Self::JavaScript => &["js", "mjs", "cjs"],
            Self::Jsx => &["jsx"],
        }
    }
}
