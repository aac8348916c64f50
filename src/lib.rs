//! bem-suggest: BEM block inference for CSS-module classNames
//!
//! Given a JSX/TSX document and a cursor offset, this library works out which
//! stylesheet module object the file imports, which element the cursor is
//! in, and which BEM block the surrounding markup already uses, then
//! suggests a `className={styles.block__element}` snippet. It uses
//! tree-sitter for parsing; every call builds and drops its own tree.
//!
//! # Example
//!
//! ```ignore
//! use bem_suggest::{analyze, render, AnalyzeRequest, Analysis, Config, Lang};
//! use std::path::Path;
//!
//! let source = r#"
//! import styles from "./Card.module.css";
//! export const Card = () => <div className={styles.card}><h2></h2></div>;
//! "#;
//!
//! let request = AnalyzeRequest {
//!     source,
//!     lang: Lang::Tsx,
//!     offset: source.find("<h2>").unwrap() + 4,
//!     file_path: Path::new("Card.tsx"),
//! };
//! let config = Config::default();
//! if let Analysis::Ready(suggestion) = analyze(&request, &config)? {
//!     println!("{}", render(&suggestion.naming, &config).to_snippet_string());
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod detectors;
pub mod error;
pub mod lang;
pub mod naming;
pub mod parser;
pub mod prompt;
pub mod schema;
pub mod snippet;
pub mod suggest;
pub mod toon;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, OffsetUnit, OutputFormat};
pub use config::Config;
pub use error::{BemError, Result};
pub use lang::Lang;
pub use naming::to_camel_case;
pub use schema::{
    BlockSource, ImportBinding, ImportCompletion, InsertionMode, NamingSuggestion,
    SuggestionReport,
};
pub use snippet::{apply_edits, render, Snippet, TextEdit};
pub use suggest::{analyze, Analysis, AnalyzeRequest, Completion, PendingSuggestion, Suggestion};
pub use toon::{encode_json, encode_toon};
