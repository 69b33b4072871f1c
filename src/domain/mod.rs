//! Domain layer: simulated data structures and page bookkeeping
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod cards;
pub mod error;
pub mod nav;
pub mod stack;
pub mod traversal;
pub mod tree;

pub use cards::{CardState, RevealCards};
pub use error::DomainError;
pub use nav::{current_page, NavBar, NavLink};
pub use stack::{BoundedStack, DEFAULT_CAPACITY};
pub use traversal::TraversalKind;
pub use tree::{BinaryNode, BinaryTree, Side};
