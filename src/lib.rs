//! dsdemo: an educational data-structure playground
//!
//! - [`application::services::StackSimulator`]: bounded LIFO stack of string tokens
//! - [`application::services::BinaryTreeDemo`]: fixed three-node tree with
//!   inorder, preorder and postorder traversals
//! - [`application::Session`]: owns both plus navigation and reveal-card state
//!
//! Layers follow the usual split: `domain` (pure data structures),
//! `application` (statuses, commands, session), `cli` (terminal front end).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
