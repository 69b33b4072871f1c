//! Depth-first traversal orders

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// The three classical depth-first orderings of a binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// left, node, right
    Inorder,
    /// node, left, right
    Preorder,
    /// left, right, node
    Postorder,
}

impl TraversalKind {
    pub const ALL: [TraversalKind; 3] = [
        TraversalKind::Inorder,
        TraversalKind::Preorder,
        TraversalKind::Postorder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::Inorder => "inorder",
            TraversalKind::Preorder => "preorder",
            TraversalKind::Postorder => "postorder",
        }
    }

    /// Upper-case label used as the prefix of rendered traversal output.
    pub fn label(&self) -> &'static str {
        match self {
            TraversalKind::Inorder => "INORDER",
            TraversalKind::Preorder => "PREORDER",
            TraversalKind::Postorder => "POSTORDER",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        TraversalKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| DomainError::UnsupportedTraversalKind(token.to_string()))
    }
}
