//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rule violations of the simulated structures.
///
/// Every variant is recoverable: the operation that produced it left the
/// structure untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a value to push.")]
    EmptyInput,

    #[error("Stack Overflow! Max size reached ({capacity}).")]
    StackOverflow { capacity: usize },

    #[error("Stack Underflow! Stack is already empty.")]
    StackUnderflow,

    #[error("Stack is empty. Cannot Peek.")]
    EmptyStack,

    #[error("Tree is empty.")]
    EmptyTree,

    #[error("unsupported traversal kind: {0}")]
    UnsupportedTraversalKind(String),
}

impl DomainError {
    /// Soft failures are reported as plain messages rather than errors.
    pub fn is_soft(&self) -> bool {
        matches!(self, DomainError::EmptyTree)
    }
}
