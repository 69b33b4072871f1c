//! Binary tree traversal demo service

use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{Report, Status};
use crate::config::TreeSettings;
use crate::domain::{BinaryTree, DomainError, TraversalKind};
use crate::tree_traits::TreeNodeConvert;

pub const TREE_READY_MESSAGE: &str = "Click a button to traverse the tree.";
pub const TREE_CLEARED_MESSAGE: &str = "Output cleared.";

/// Holds the demo tree and renders traversals on demand.
///
/// Starts uninitialized; call [`BinaryTreeDemo::reset`] to build the tree.
#[derive(Debug, Clone)]
pub struct BinaryTreeDemo {
    tree: BinaryTree,
    separator: String,
    output: Status,
}

impl Default for BinaryTreeDemo {
    fn default() -> Self {
        Self::new(TreeSettings::default().separator)
    }
}

impl BinaryTreeDemo {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            tree: BinaryTree::new(),
            separator: separator.into(),
            output: Status::default(),
        }
    }

    pub fn from_settings(settings: &TreeSettings) -> Self {
        Self::new(settings.separator.clone())
    }

    /// Rebuild the fixed three-node tree.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> Report<()> {
        self.tree = BinaryTree::demo();
        self.record(Report::new(Ok(()), |_| Status::neutral(TREE_READY_MESSAGE)))
    }

    /// Drop the tree; later traversals report an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) -> Report<()> {
        self.tree.clear();
        self.record(Report::new(Ok(()), |_| Status::neutral(TREE_CLEARED_MESSAGE)))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&mut self, kind: TraversalKind) -> Report<Vec<i64>> {
        let outcome = if self.tree.is_empty() {
            Err(DomainError::EmptyTree)
        } else {
            Ok(self.tree.traverse(kind))
        };
        let separator = &self.separator;
        let report = Report::new(outcome, |values| {
            Status::success(format!(
                "{} Traversal: {}",
                kind.label(),
                values.iter().join(separator)
            ))
        });
        self.record(report)
    }

    /// Output of the most recent operation.
    pub fn output(&self) -> &Status {
        &self.output
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    pub fn to_tree_string(&self) -> Tree<String> {
        self.tree.to_tree_string()
    }

    /// Tree shape followed by its depth and leaf values.
    pub fn describe(&self) -> String {
        let shape = self.to_tree_string().to_string();
        let shape = shape.trim_end();
        if self.tree.is_empty() {
            return shape.to_string();
        }
        format!(
            "{}\ndepth: {}, leaves: {}",
            shape,
            self.tree.depth(),
            self.tree.leaf_values().iter().join(", ")
        )
    }

    fn record<T>(&mut self, report: Report<T>) -> Report<T> {
        debug!("tree: {:?}", report.status);
        self.output = report.status.clone();
        report
    }
}
