//! JSX element index and cursor location
//!
//! One preorder pass over the tree records every markup element together with
//! the index of its enclosing element. The table is read-only afterwards and
//! serves both the cursor search (innermost element containing an offset) and
//! the upward walk through ancestors.

use tree_sitter::Node;

use crate::detectors::common::{get_node_text, named_children_no_comments, visit_preorder};
use crate::parser::ParsedSource;

/// Index of an element in an [`ElementIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A JSX element (`<a>...</a>` or `<a />`)
#[derive(Debug, Clone, Copy)]
pub struct MarkupElement<'t> {
    node: Node<'t>,
    /// `jsx_opening_element`, or the element itself when self-closing
    opening: Node<'t>,
    parent: Option<ElementId>,
}

impl<'t> MarkupElement<'t> {
    pub fn start_byte(&self) -> usize {
        self.node.start_byte()
    }

    pub fn end_byte(&self) -> usize {
        self.node.end_byte()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Inclusive containment over the whole element
    pub fn contains(&self, offset: usize) -> bool {
        self.start_byte() <= offset && offset <= self.end_byte()
    }

    /// Inclusive containment over the opening tag only
    pub fn opening_tag_contains(&self, offset: usize) -> bool {
        self.opening.start_byte() <= offset && offset <= self.opening.end_byte()
    }

    /// Tag name as written (`div`, `Card.Header`)
    pub fn tag_name<'s>(&self, source: &'s str) -> &'s str {
        self.opening
            .child_by_field_name("name")
            .map(|n| get_node_text(&n, source))
            .unwrap_or("")
    }

    /// Attributes of the opening tag in source order
    pub fn attributes(&self) -> Vec<JsxAttribute<'t>> {
        named_children_no_comments(&self.opening)
            .into_iter()
            .filter(|attr| attr.kind() == "jsx_attribute")
            .filter_map(JsxAttribute::from_node)
            .collect()
    }

    /// The dynamic expression bound to the first attribute named in
    /// `names`, e.g. `styles.card` in `className={styles.card}`.
    ///
    /// Plain string values (`className="card"`) yield `None`.
    pub fn class_expression(&self, source: &str, names: &[String]) -> Option<Node<'t>> {
        self.attributes()
            .into_iter()
            .find(|attr| names.iter().any(|n| n == attr.name(source)))?
            .expression()
    }
}

/// `name` or `name={value}` inside an opening tag
#[derive(Debug, Clone, Copy)]
pub struct JsxAttribute<'t> {
    name: Node<'t>,
    value: Option<Node<'t>>,
}

impl<'t> JsxAttribute<'t> {
    fn from_node(node: Node<'t>) -> Option<Self> {
        let children = named_children_no_comments(&node);
        let name = *children.first()?;
        let value = children.get(1).copied();
        Some(Self { name, value })
    }

    pub fn name<'s>(&self, source: &'s str) -> &'s str {
        get_node_text(&self.name, source)
    }

    /// The expression inside a `{...}` value container
    pub fn expression(&self) -> Option<Node<'t>> {
        let value = self.value?;
        if value.kind() != "jsx_expression" {
            return None;
        }
        named_children_no_comments(&value).into_iter().next()
    }
}

/// Every markup element of a tree with its enclosing-element link
pub struct ElementIndex<'t> {
    elements: Vec<MarkupElement<'t>>,
}

impl<'t> ElementIndex<'t> {
    /// Build the index with one full traversal of the tree
    pub fn build(parsed: &'t ParsedSource) -> Self {
        let mut elements: Vec<MarkupElement<'t>> = Vec::new();

        visit_preorder(parsed.root(), None, |node, enclosing: Option<ElementId>| {
            let opening = match node.kind() {
                "jsx_element" => node
                    .child_by_field_name("open_tag")
                    .or_else(|| node.child(0))
                    .unwrap_or(*node),
                "jsx_self_closing_element" => *node,
                _ => return enclosing,
            };
            // `<>...</>` parses as an element without a name
            if opening.child_by_field_name("name").is_none() {
                return enclosing;
            }
            let id = ElementId(elements.len());
            elements.push(MarkupElement {
                node: *node,
                opening,
                parent: enclosing,
            });
            Some(id)
        });

        tracing::debug!(elements = elements.len(), "indexed markup elements");
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> &MarkupElement<'t> {
        &self.elements[id.0]
    }

    /// Innermost element containing `offset`.
    ///
    /// Elements are stored in preorder and a child's span lies within its
    /// parent's, so the last containing element is the most deeply nested.
    pub fn locate(&self, offset: usize) -> Option<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.contains(offset))
            .map(|(i, _)| ElementId(i))
            .last()
    }

    /// The element itself followed by each enclosing element, nearest first
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_, 't> {
        Ancestors {
            index: self,
            next: Some(id),
        }
    }
}

/// Iterator over an element and its enclosing elements
pub struct Ancestors<'a, 't> {
    index: &'a ElementIndex<'t>,
    next: Option<ElementId>,
}

impl<'a, 't> Iterator for Ancestors<'a, 't> {
    type Item = (ElementId, &'a MarkupElement<'t>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let element = self.index.get(id);
        self.next = element.parent;
        Some((id, element))
    }
}
