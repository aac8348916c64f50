//! Shared tree-sitter helpers for the detectors

use tree_sitter::Node;

/// Get the source text covered by a node
pub fn get_node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Get the value of a string literal node, without its quotes.
///
/// Returns `None` for anything that is not a plain `string` node.
pub fn string_literal_value<'s>(node: &Node, source: &'s str) -> Option<&'s str> {
    if node.kind() != "string" {
        return None;
    }
    let text = get_node_text(node, source);
    let inner = text
        .strip_prefix(['"', '\''])
        .and_then(|t| t.strip_suffix(['"', '\'']))
        .unwrap_or(text);
    Some(inner)
}

/// Named children of a node, skipping comments
pub fn named_children_no_comments<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Visit every node in depth-first preorder.
///
/// `f` receives each node together with the value its parent returned, so a
/// visitor can thread context (such as the enclosing element) downward.
/// Iterative, so deeply nested markup cannot overflow the stack.
pub fn visit_preorder<'t, C, F>(root: Node<'t>, initial: C, mut f: F)
where
    C: Copy,
    F: FnMut(&Node<'t>, C) -> C,
{
    let mut stack = vec![(root, initial)];
    while let Some((node, ctx)) = stack.pop() {
        let child_ctx = f(&node, ctx);
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push((child, child_ctx));
        }
    }
}
