//! Arena-backed binary tree with the fixed demo shape and its traversals

use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::TraversalKind;

/// Values of the demo tree: root, left child, right child.
pub const DEMO_ROOT: i64 = 50;
pub const DEMO_LEFT: i64 = 30;
pub const DEMO_RIGHT: i64 = 70;

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Tree node in the arena-based binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode {
    pub value: i64,
    /// Index of the left child in the arena
    pub left: Option<Index>,
    /// Index of the right child in the arena
    pub right: Option<Index>,
}

impl BinaryNode {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for BinaryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Arena-based binary tree.
///
/// Every child index is held by exactly one parent, so the structure is a
/// strict tree. Construction is private: the only public shapes are the
/// empty tree and [`BinaryTree::demo`].
#[derive(Debug, Clone)]
pub struct BinaryTree {
    arena: Arena<BinaryNode>,
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// The fixed three-node demo tree: 50 with children 30 (left) and 70 (right).
    #[instrument(level = "debug")]
    pub fn demo() -> Self {
        let mut tree = Self::new();
        let root = tree.insert_root(DEMO_ROOT);
        tree.insert_child(root, Side::Left, DEMO_LEFT);
        tree.insert_child(root, Side::Right, DEMO_RIGHT);
        tree
    }

    fn insert_root(&mut self, value: i64) -> Index {
        self.arena.clear();
        let idx = self.arena.insert(BinaryNode::leaf(value));
        self.root = Some(idx);
        idx
    }

    /// Attach a new leaf under `parent`. An occupied slot is left alone.
    fn insert_child(&mut self, parent: Index, side: Side, value: i64) -> Option<Index> {
        let occupied = match (self.arena.get(parent)?, side) {
            (node, Side::Left) => node.left.is_some(),
            (node, Side::Right) => node.right.is_some(),
        };
        if occupied {
            return None;
        }
        let idx = self.arena.insert(BinaryNode::leaf(value));
        if let Some(node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => node.left = Some(idx),
                Side::Right => node.right = Some(idx),
            }
        }
        Some(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&BinaryNode> {
        self.arena.get(idx)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Drop every node. Indices handed out earlier become stale.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Values in the order given by `kind`. An empty tree yields nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&self, kind: TraversalKind) -> Vec<i64> {
        let mut result = Vec::with_capacity(self.arena.len());
        match kind {
            TraversalKind::Inorder => self.inorder(self.root, &mut result),
            TraversalKind::Preorder => self.preorder(self.root, &mut result),
            TraversalKind::Postorder => self.postorder(self.root, &mut result),
        }
        result
    }

    fn inorder(&self, idx: Option<Index>, result: &mut Vec<i64>) {
        if let Some(node) = idx.and_then(|i| self.get_node(i)) {
            self.inorder(node.left, result);
            result.push(node.value);
            self.inorder(node.right, result);
        }
    }

    fn preorder(&self, idx: Option<Index>, result: &mut Vec<i64>) {
        if let Some(node) = idx.and_then(|i| self.get_node(i)) {
            result.push(node.value);
            self.preorder(node.left, result);
            self.preorder(node.right, result);
        }
    }

    fn postorder(&self, idx: Option<Index>, result: &mut Vec<i64>) {
        if let Some(node) = idx.and_then(|i| self.get_node(i)) {
            self.postorder(node.left, result);
            self.postorder(node.right, result);
            result.push(node.value);
        }
    }

    /// Iterative preorder walk with an explicit stack.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, idx: Option<Index>) -> usize {
        match idx.and_then(|i| self.get_node(i)) {
            Some(node) => {
                1 + self
                    .calculate_depth(node.left)
                    .max(self.calculate_depth(node.right))
            }
            None => 0,
        }
    }

    /// Values of nodes without children, left to right.
    pub fn leaf_values(&self) -> Vec<i64> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value)
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a BinaryNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Right first so the left subtree is visited first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        50
    //       /  \
    //     30    70
    //    /  \     \
    //  20    40    80
    fn larger_tree() -> BinaryTree {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(50);
        let left = tree.insert_child(root, Side::Left, 30).unwrap();
        let right = tree.insert_child(root, Side::Right, 70).unwrap();
        tree.insert_child(left, Side::Left, 20).unwrap();
        tree.insert_child(left, Side::Right, 40).unwrap();
        tree.insert_child(right, Side::Right, 80).unwrap();
        tree
    }

    #[test]
    fn test_demo_shape() {
        let tree = BinaryTree::demo();
        let root = tree.get_node(tree.root().unwrap()).unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(tree.get_node(root.left.unwrap()).unwrap().value, 30);
        assert_eq!(tree.get_node(root.right.unwrap()).unwrap().value, 70);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_traversals_on_larger_shape() {
        let tree = larger_tree();
        assert_eq!(
            tree.traverse(TraversalKind::Inorder),
            vec![20, 30, 40, 50, 70, 80]
        );
        assert_eq!(
            tree.traverse(TraversalKind::Preorder),
            vec![50, 30, 20, 40, 70, 80]
        );
        assert_eq!(
            tree.traverse(TraversalKind::Postorder),
            vec![20, 40, 30, 80, 70, 50]
        );
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_values(), vec![20, 40, 80]);
    }

    #[test]
    fn test_iterator_matches_recursive_preorder() {
        let tree = larger_tree();
        let iterated: Vec<i64> = tree.iter().map(|(_, node)| node.value).collect();
        assert_eq!(iterated, tree.traverse(TraversalKind::Preorder));
    }

    #[test]
    fn test_occupied_slot_is_not_overwritten() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(1);
        assert!(tree.insert_child(root, Side::Left, 2).is_some());
        assert!(tree.insert_child(root, Side::Left, 3).is_none());
        assert_eq!(tree.traverse(TraversalKind::Preorder), vec![1, 2]);
    }

    #[test]
    fn test_clear_empties_tree() {
        let mut tree = BinaryTree::demo();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        for kind in TraversalKind::ALL {
            assert!(tree.traverse(kind).is_empty());
        }
    }
}
