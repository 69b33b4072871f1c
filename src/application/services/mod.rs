//! Application services
//!
//! Concrete simulator implementations that turn domain results into
//! user-facing statuses. Each owns its state; nothing is shared.

mod stack;
mod tree;

pub use stack::{StackSimulator, EMPTY_STACK_DISPLAY};
pub use tree::{BinaryTreeDemo, TREE_CLEARED_MESSAGE, TREE_READY_MESSAGE};
