use crate::node::ComponentNode;

/// Visitor pattern for traversing the component tree immutably
///
/// Traversal is depth-first, pre-order, in child order. Override
/// `visit_node` to act on each node; call `walk_node` to keep descending.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &ComponentNode, depth: usize) {
        walk_node(self, node, depth);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &ComponentNode, depth: usize) {
    for child in node.children() {
        visitor.visit_node(child, depth + 1);
    }
}

/// Find a node by id (first match in depth-first pre-order)
pub fn find_node<'a>(node: &'a ComponentNode, id: &str) -> Option<&'a ComponentNode> {
    if node.id == id {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_node(child, id))
}

/// Mutable variant of [`find_node`]
pub fn find_node_mut<'a>(node: &'a mut ComponentNode, id: &str) -> Option<&'a mut ComponentNode> {
    if node.id == id {
        return Some(node);
    }
    node.children
        .as_mut()?
        .iter_mut()
        .find_map(|child| find_node_mut(child, id))
}

/// Find the parent of the node with the given id
pub fn find_parent<'a>(node: &'a ComponentNode, id: &str) -> Option<&'a ComponentNode> {
    for child in node.children() {
        if child.id == id {
            return Some(node);
        }
        if let Some(parent) = find_parent(child, id) {
            return Some(parent);
        }
    }
    None
}

/// Detach the first descendant with the given id and return it.
///
/// The node passed in is never removed itself.
pub fn remove_node(node: &mut ComponentNode, id: &str) -> Option<ComponentNode> {
    let children = node.children.as_mut()?;
    for index in 0..children.len() {
        if children[index].id == id {
            return Some(children.remove(index));
        }
        if let Some(removed) = remove_node(&mut children[index], id) {
            return Some(removed);
        }
    }
    None
}

/// Collects every id in the tree in traversal order
#[derive(Debug, Default)]
pub struct IdCollector {
    pub ids: Vec<String>,
}

impl Visitor for IdCollector {
    fn visit_node(&mut self, node: &ComponentNode, depth: usize) {
        self.ids.push(node.id.clone());
        walk_node(self, node, depth);
    }
}

impl IdCollector {
    pub fn collect(root: &ComponentNode) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_node(root, 0);
        collector.ids
    }
}
