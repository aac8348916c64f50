//! className expression scanning
//!
//! Looks for `styles.block` (or `styles["block__el"]`) inside a className
//! expression, following the combinators people wrap class references in:
//! `cx(...)`, template literals, ternaries, `&&`/`||`/`??`, arrays and object
//! literals. Function bodies are never entered.

use serde::Serialize;
use tree_sitter::Node;

use crate::detectors::common::{get_node_text, named_children_no_comments, string_literal_value};

/// Separator between the block and element parts of a class name
pub const ELEMENT_SEPARATOR: &str = "__";

/// The expression shapes the scanner understands
#[derive(Debug, Clone)]
enum ExprShape<'t> {
    /// `object.property`
    Member { object: Node<'t>, property: Node<'t> },
    /// `object[index]`
    Subscript { object: Node<'t>, index: Node<'t> },
    /// `callee(args...)`, including tagged templates
    Call { callee: Node<'t>, args: Vec<Node<'t>> },
    /// `` `a ${x} b` ``
    Template { substitutions: Vec<Node<'t>> },
    /// `test ? consequent : alternate`
    Conditional {
        test: Node<'t>,
        consequent: Node<'t>,
        alternate: Node<'t>,
    },
    /// `left && right`, `left || right`, `left ?? right`
    Logical { left: Node<'t>, right: Node<'t> },
    Array { elements: Vec<Node<'t>> },
    /// Property values of an object literal
    Object { values: Vec<Node<'t>> },
    Parenthesized { inner: Node<'t> },
    Other,
}

impl<'t> ExprShape<'t> {
    fn classify(node: &Node<'t>, source: &str) -> Self {
        match node.kind() {
            "member_expression" => match (
                node.child_by_field_name("object"),
                node.child_by_field_name("property"),
            ) {
                (Some(object), Some(property)) => Self::Member { object, property },
                _ => Self::Other,
            },
            "subscript_expression" => match (
                node.child_by_field_name("object"),
                node.child_by_field_name("index"),
            ) {
                (Some(object), Some(index)) => Self::Subscript { object, index },
                _ => Self::Other,
            },
            "call_expression" => {
                let Some(callee) = node.child_by_field_name("function") else {
                    return Self::Other;
                };
                let args = match node.child_by_field_name("arguments") {
                    // tagged template: cx`...`
                    Some(args) if args.kind() == "template_string" => vec![args],
                    Some(args) => named_children_no_comments(&args),
                    None => Vec::new(),
                };
                Self::Call { callee, args }
            }
            "template_string" => Self::Template {
                substitutions: named_children_no_comments(node)
                    .into_iter()
                    .filter(|child| child.kind() == "template_substitution")
                    .filter_map(|sub| named_children_no_comments(&sub).into_iter().next())
                    .collect(),
            },
            "ternary_expression" => match (
                node.child_by_field_name("condition"),
                node.child_by_field_name("consequence"),
                node.child_by_field_name("alternative"),
            ) {
                (Some(test), Some(consequent), Some(alternate)) => Self::Conditional {
                    test,
                    consequent,
                    alternate,
                },
                _ => Self::Other,
            },
            "binary_expression" => {
                let operator = node
                    .child_by_field_name("operator")
                    .map(|op| get_node_text(&op, source));
                match (
                    operator,
                    node.child_by_field_name("left"),
                    node.child_by_field_name("right"),
                ) {
                    (Some("&&" | "||" | "??"), Some(left), Some(right)) => {
                        Self::Logical { left, right }
                    }
                    _ => Self::Other,
                }
            }
            "array" => Self::Array {
                elements: named_children_no_comments(node),
            },
            "object" => Self::Object {
                values: named_children_no_comments(node)
                    .into_iter()
                    .filter(|child| child.kind() == "pair")
                    .filter_map(|pair| pair.child_by_field_name("value"))
                    .collect(),
            },
            "parenthesized_expression" => match named_children_no_comments(node).into_iter().next() {
                Some(inner) => Self::Parenthesized { inner },
                None => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// A `object.block` (or `object["block__el"]`) reference inside a class
/// expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReference {
    /// Identifier on the object side, e.g. `styles`
    pub object: String,
    /// Block segment of the class name, never empty
    pub block: String,
}

/// Every block reference in `expr`, in traversal order: member chains
/// object side first, combinators left to right, conditionals consequent
/// first.
///
/// Any identifier counts as an object here; callers filter by the
/// identifiers they know to be stylesheet bindings.
pub fn block_references(expr: &Node, source: &str) -> Vec<BlockReference> {
    let mut found = Vec::new();
    collect(expr, source, &mut found);
    found
}

/// Find the block name referenced through one of `objects` in `expr`.
///
/// # Arguments
/// * `expr` - The expression inside a `className={...}` container
/// * `source` - Source text the expression was parsed from
/// * `objects` - Identifiers bound to stylesheet modules
///
/// # Returns
/// The block segment of the first matching reference in traversal order
/// (see [`block_references`]), or `None` when nothing matches.
pub fn find_block_reference(expr: &Node, source: &str, objects: &[&str]) -> Option<String> {
    block_references(expr, source)
        .into_iter()
        .find(|reference| objects.contains(&reference.object.as_str()))
        .map(|reference| reference.block)
}

fn collect(expr: &Node, source: &str, found: &mut Vec<BlockReference>) {
    let shape = ExprShape::classify(expr, source);
    tracing::trace!(kind = expr.kind(), "scanning class expression");

    match shape {
        ExprShape::Member { object, property } => {
            if object.kind() == "identifier" {
                push_reference(found, &object, get_node_text(&property, source), source);
            } else {
                collect(&object, source, found);
                collect(&property, source, found);
            }
        }
        ExprShape::Subscript { object, index } => {
            match string_literal_value(&index, source) {
                Some(name) if object.kind() == "identifier" => {
                    push_reference(found, &object, name, source)
                }
                _ => {
                    collect(&object, source, found);
                    collect(&index, source, found);
                }
            }
        }
        ExprShape::Call { callee, args } => {
            collect_all(&args, source, found);
            collect(&callee, source, found);
        }
        ExprShape::Template { substitutions } => collect_all(&substitutions, source, found),
        ExprShape::Conditional {
            test,
            consequent,
            alternate,
        } => collect_all(&[consequent, alternate, test], source, found),
        ExprShape::Logical { left, right } => collect_all(&[left, right], source, found),
        ExprShape::Array { elements } => collect_all(&elements, source, found),
        ExprShape::Object { values } => collect_all(&values, source, found),
        ExprShape::Parenthesized { inner } => collect(&inner, source, found),
        ExprShape::Other => {}
    }
}

fn collect_all(nodes: &[Node], source: &str, found: &mut Vec<BlockReference>) {
    for node in nodes {
        collect(node, source, found);
    }
}

/// `styles.__icon` names no block; it is skipped so the stem fallbacks apply
fn push_reference(found: &mut Vec<BlockReference>, object: &Node, class_name: &str, source: &str) {
    let block = block_segment(class_name);
    if block.is_empty() {
        tracing::trace!(class_name, "class name without a block segment");
        return;
    }
    found.push(BlockReference {
        object: get_node_text(object, source).to_string(),
        block,
    });
}

/// Block part of a class name: everything before the first `__`
pub fn block_segment(class_name: &str) -> String {
    class_name
        .split(ELEMENT_SEPARATOR)
        .next()
        .unwrap_or(class_name)
        .to_string()
}
