//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Interactive data-structure playground: bounded stack and binary tree traversals
#[derive(Parser, Debug)]
#[command(name = "dsdemo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .dsdemo.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    /// Without a subcommand an interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run stack operations against a fresh simulator
    Stack {
        /// Operations in order: push:<value>, pop, peek, reset, show
        #[arg(required = true)]
        ops: Vec<String>,
    },

    /// Traverse or print the demo tree
    Tree {
        /// inorder, preorder, postorder or show
        action: String,
    },

    /// Interactive session reading commands from stdin
    Repl,

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show config file locations
    Path,
}
