//! Suggestion assembly
//!
//! Runs the whole pipeline for one `(source, offset)` snapshot: parse,
//! resolve the stylesheet import, locate the element under the cursor, infer
//! a block name and decide how the snippet is inserted. Nothing survives the
//! call except the returned values.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::detectors::blocks::{ancestor_block_references, infer_block_name};
use crate::detectors::class_expr::BlockReference;
use crate::detectors::imports::{
    import_insertion_offset, resolve_stylesheet_import, synthesize_import,
};
use crate::detectors::jsx::ElementIndex;
use crate::error::{BemError, Result};
use crate::lang::Lang;
use crate::naming::{file_stem, to_camel_case};
use crate::parser::parse;
use crate::schema::{BlockSource, ImportBinding, ImportCompletion, InsertionMode, NamingSuggestion};

/// One analysis request: a snapshot of the document and the cursor
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeRequest<'a> {
    pub source: &'a str,
    pub lang: Lang,
    /// Cursor position in bytes
    pub offset: usize,
    /// Path of the document, used for the file-stem fallback
    pub file_path: &'a Path,
}

/// Outcome of a successful analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    Ready(Suggestion),
    /// No stylesheet module is imported; an identifier must be supplied
    NeedsIdentifier(PendingSuggestion),
}

/// A suggestion along with how it was derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub naming: NamingSuggestion,
    pub block_source: BlockSource,
    pub binding: ImportBinding,
    /// Tag of the element under the cursor, if any
    pub element: Option<String>,
}

/// State carried over while waiting for the user to name the stylesheet
/// binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingSuggestion {
    pub insertion_mode: InsertionMode,
    pub file_stem: String,
    /// Where the synthesized import will be inserted
    pub import_offset: usize,
    pub element: Option<String>,
    /// References found along the cursor's ancestor chain, nearest first,
    /// for whichever identifier the user names
    pub block_references: Vec<BlockReference>,
}

/// A pending suggestion completed with a user-supplied identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub import: ImportCompletion,
    pub naming: NamingSuggestion,
    pub block_source: BlockSource,
}

impl PendingSuggestion {
    /// Finish the suggestion with the identifier the user typed.
    ///
    /// Markup may still use the identifier even though its import is gone
    /// (`className={styles.card__body}`), so the ancestor chain is searched
    /// first. Otherwise the block is the normalized file stem, which is also
    /// the stem of the synthesized `./<file stem>.module.<ext>` import.
    pub fn complete(&self, identifier: &str, config: &Config) -> Result<Completion> {
        let import = synthesize_import(identifier, &self.file_stem, self.import_offset, config)?;
        let ancestor = self
            .block_references
            .iter()
            .find(|reference| reference.object == import.object_identifier);

        let (block_name, block_source) = match ancestor {
            Some(reference) => (reference.block.clone(), BlockSource::Ancestor),
            None => (to_camel_case(&self.file_stem), BlockSource::FileStem),
        };
        let naming = NamingSuggestion {
            object_identifier: import.object_identifier.clone(),
            block_name,
            insertion_mode: self.insertion_mode,
        };
        tracing::debug!(
            identifier = %naming.object_identifier,
            block = %naming.block_name,
            source = block_source.as_str(),
            "completed suggestion"
        );
        Ok(Completion {
            import,
            naming,
            block_source,
        })
    }
}

/// Analyze a document snapshot and produce a naming suggestion.
///
/// Fails only when the source does not parse or the offset lies past its
/// end. A cursor outside all markup is not an error: the suggestion falls
/// back to a full element named after the stylesheet or the file.
pub fn analyze(request: &AnalyzeRequest, config: &Config) -> Result<Analysis> {
    let source = request.source;
    if request.offset > source.len() {
        return Err(BemError::OffsetOutOfRange {
            offset: request.offset,
            len: source.len(),
        });
    }

    let parsed = parse(source, request.lang)?;
    tracing::debug!(lang = parsed.lang().name(), bytes = source.len(), "parsed source");
    let binding = resolve_stylesheet_import(&parsed);
    let index = ElementIndex::build(&parsed);
    let located = index.locate(request.offset);

    let insertion_mode = match located {
        Some(id) if index.get(id).opening_tag_contains(request.offset) => {
            InsertionMode::AttributeOnly
        }
        _ => InsertionMode::FullElement,
    };
    let element = located.map(|id| index.get(id).tag_name(source).to_string());
    let current_stem = file_stem(request.file_path.to_str().unwrap_or_default()).to_string();

    tracing::debug!(
        offset = request.offset,
        element = ?element,
        mode = insertion_mode.as_str(),
        "located cursor"
    );

    let Some(binding) = binding else {
        let block_references = located
            .map(|id| ancestor_block_references(&index, id, source, &config.class_attributes))
            .unwrap_or_default();
        return Ok(Analysis::NeedsIdentifier(PendingSuggestion {
            insertion_mode,
            file_stem: current_stem,
            import_offset: import_insertion_offset(&parsed),
            element,
            block_references,
        }));
    };

    let ancestor_block = located.and_then(|id| {
        infer_block_name(
            &index,
            id,
            source,
            &[binding.local_name.as_str()],
            &config.class_attributes,
        )
    });

    let (block_name, block_source) = match ancestor_block {
        Some(block) => (block, BlockSource::Ancestor),
        None => {
            let module_block = to_camel_case(file_stem(&binding.module_path));
            if module_block.is_empty() {
                (to_camel_case(&current_stem), BlockSource::FileStem)
            } else {
                (module_block, BlockSource::ModuleStem)
            }
        }
    };

    tracing::debug!(block = %block_name, source = block_source.as_str(), "block name");

    Ok(Analysis::Ready(Suggestion {
        naming: NamingSuggestion {
            object_identifier: binding.local_name.clone(),
            block_name,
            insertion_mode,
        },
        block_source,
        binding,
        element,
    }))
}
