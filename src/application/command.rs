//! User commands parsed from text
//!
//! One command per line: a verb followed by an optional argument. The verb
//! and its argument may be separated by whitespace or a colon, so both
//! `push 7` and `push:7` work.

use std::str::FromStr;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::TraversalKind;

pub const HELP: &str = "\
Commands:
  push <value>    push a token onto the stack
  pop             remove the top token
  peek            show the top token
  reset           empty the stack
  show            print the stack, top first
  tree <kind>     traverse the demo tree (inorder, preorder, postorder)
  tree reset      rebuild the demo tree
  tree clear      drop the demo tree
  tree show       print the tree shape, depth and leaves
  nav <page>      open a page and highlight it in the navigation bar
  card <id>       reveal or hide a content card
  help            show this text
  quit            leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Traverse(TraversalKind),
    Reset,
    Clear,
    Show,
}

impl FromStr for TreeAction {
    type Err = ApplicationError;

    fn from_str(s: &str) -> ApplicationResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(TreeAction::Reset),
            "clear" => Ok(TreeAction::Clear),
            "show" => Ok(TreeAction::Show),
            other => Ok(TreeAction::Traverse(other.parse()?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw token; trimming is left to the stack.
    Push(String),
    Pop,
    Peek,
    Reset,
    Show,
    Tree(TreeAction),
    Nav(String),
    Card(String),
    Help,
    Quit,
}

impl Command {
    /// Whether the command only touches the stack simulator.
    pub fn is_stack_op(&self) -> bool {
        matches!(
            self,
            Command::Push(_) | Command::Pop | Command::Peek | Command::Reset | Command::Show
        )
    }
}

impl FromStr for Command {
    type Err = ApplicationError;

    fn from_str(s: &str) -> ApplicationResult<Self> {
        let line = s.trim();
        let (verb, rest) = line
            .split_once(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or((line, ""));
        let invalid = || ApplicationError::InvalidCommand(line.to_string());
        let no_args = |cmd: Command| {
            if rest.trim().is_empty() {
                Ok(cmd)
            } else {
                Err(invalid())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "push" => Ok(Command::Push(rest.to_string())),
            "pop" => no_args(Command::Pop),
            "peek" => no_args(Command::Peek),
            "reset" => no_args(Command::Reset),
            "show" => no_args(Command::Show),
            "tree" => Ok(Command::Tree(rest.parse()?)),
            "nav" => Ok(Command::Nav(rest.trim().to_string())),
            "card" => match rest.trim() {
                "" => Err(invalid()),
                id => Ok(Command::Card(id.to_string())),
            },
            "help" | "?" => no_args(Command::Help),
            "quit" | "exit" => no_args(Command::Quit),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_push_keeps_raw_argument() {
        assert_eq!(
            "push   spaced ".parse::<Command>().unwrap(),
            Command::Push("  spaced".into())
        );
        assert_eq!("push:7".parse::<Command>().unwrap(), Command::Push("7".into()));
        assert_eq!("push".parse::<Command>().unwrap(), Command::Push("".into()));
    }

    #[test]
    fn test_tree_actions() {
        assert_eq!(
            "tree inorder".parse::<Command>().unwrap(),
            Command::Tree(TreeAction::Traverse(TraversalKind::Inorder))
        );
        assert_eq!(
            "TREE Clear".parse::<Command>().unwrap(),
            Command::Tree(TreeAction::Clear)
        );
    }

    #[test]
    fn test_unknown_traversal_is_domain_error() {
        let err = "tree levelorder".parse::<Command>().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedTraversalKind(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_verbs_and_stray_arguments() {
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(ApplicationError::InvalidCommand(_))
        ));
        assert!(matches!(
            "pop now".parse::<Command>(),
            Err(ApplicationError::InvalidCommand(_))
        ));
        assert!(matches!(
            "card".parse::<Command>(),
            Err(ApplicationError::InvalidCommand(_))
        ));
    }
}
