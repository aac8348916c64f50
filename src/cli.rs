//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Suggest BEM class names from CSS-module usage in JSX/TSX
#[derive(Parser, Debug)]
#[command(name = "bem-suggest")]
#[command(
    about = "Infers the BEM block for the JSX element under the cursor and renders a className snippet"
)]
#[command(version)]
pub struct Cli {
    /// Path to the file being edited
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor position in FILE
    #[arg(short, long)]
    pub offset: usize,

    /// Unit of --offset
    #[arg(long, default_value = "byte", value_enum)]
    pub offset_unit: OffsetUnit,

    /// Editor language id (e.g. typescriptreact), overrides the file extension
    #[arg(long)]
    pub language_id: Option<String>,

    /// Stylesheet identifier to import when the file has no CSS-module import
    #[arg(short, long)]
    pub identifier: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "toon", value_enum)]
    pub format: OutputFormat,

    /// Apply the import and the snippet (as plain text) to FILE
    #[arg(short, long)]
    pub write: bool,

    /// Path to a TOML config file
    #[arg(short, long, env = "BEM_SUGGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output including pipeline decisions
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the parsed AST (for debugging)
    #[arg(long)]
    pub print_ast: bool,
}

/// How the cursor offset is measured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OffsetUnit {
    /// UTF-8 bytes
    #[default]
    Byte,
    /// Unicode scalar values
    Char,
    /// UTF-16 code units (VS Code, LSP)
    Utf16,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TOON (Token-Oriented Object Notation) - default, token-efficient format
    #[default]
    Toon,
    /// JSON - standard JSON output
    Json,
    /// Only the editor snippet text
    Snippet,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
