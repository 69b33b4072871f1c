/*
Rendering of the arena tree as a `termtree::Tree`.

A missing child is drawn as a `-` placeholder when its sibling exists,
so the left/right position of every child stays visible.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::BinaryTree;

pub const EMPTY_TREE_LABEL: &str = "Tree is empty.";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new(EMPTY_TREE_LABEL.to_string()),
        }
    }
}

fn build_tree(tree: &BinaryTree, node_idx: Index) -> Tree<String> {
    let Some(node) = tree.get_node(node_idx) else {
        return Tree::new("?".to_string());
    };
    let mut subtree = Tree::new(node.value.to_string());
    if node.is_leaf() {
        return subtree;
    }
    for child in [node.left, node.right] {
        match child {
            Some(child_idx) => subtree.push(build_tree(tree, child_idx)),
            None => subtree.push(Tree::new("-".to_string())),
        };
    }
    subtree
}
