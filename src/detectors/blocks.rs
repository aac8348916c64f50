//! Block name inference from enclosing elements

use crate::detectors::class_expr::{block_references, find_block_reference, BlockReference};
use crate::detectors::jsx::{ElementId, ElementIndex};

/// Infer the block name for the element at `start` by scanning its own
/// className expression and then each enclosing element's, nearest first.
///
/// `objects` are the identifiers bound to stylesheet modules and
/// `class_attributes` the attribute names that carry class expressions.
pub fn infer_block_name(
    index: &ElementIndex,
    start: ElementId,
    source: &str,
    objects: &[&str],
    class_attributes: &[String],
) -> Option<String> {
    index.ancestors(start).find_map(|(_, element)| {
        let expr = element.class_expression(source, class_attributes)?;
        let block = find_block_reference(&expr, source, objects)?;
        tracing::debug!(
            tag = element.tag_name(source),
            block = %block,
            "block name from enclosing element"
        );
        Some(block)
    })
}

/// Every block reference along the ancestor chain of `start`, nearest
/// element first and in traversal order within each element.
///
/// Used when the stylesheet binding is not known yet: the first reference
/// whose object matches the identifier the user later supplies is the same
/// block [`infer_block_name`] would find for that identifier.
pub fn ancestor_block_references(
    index: &ElementIndex,
    start: ElementId,
    source: &str,
    class_attributes: &[String],
) -> Vec<BlockReference> {
    index
        .ancestors(start)
        .filter_map(|(_, element)| element.class_expression(source, class_attributes))
        .flat_map(|expr| block_references(&expr, source))
        .collect()
}
