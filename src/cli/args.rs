//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Maritime spares catalog navigator: hierarchical filtering, expansion state, and tree display
#[derive(Parser, Debug)]
#[command(name = "partscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Catalog snapshot file (overrides config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the hierarchy, print surviving paths
    Search {
        /// Free-text query (case-insensitive substring)
        query: String,
    },

    /// Render the hierarchy as a tree
    Tree {
        /// Optional filter query
        query: Option<String>,

        /// Expand every node
        #[arg(long, conflicts_with = "expand")]
        expand_all: bool,

        /// Toggle expansion of a node id (repeatable)
        #[arg(long, value_name = "ID")]
        expand: Vec<String>,
    },

    /// List brands with model and part counts
    Brands,

    /// List parts flat, optionally filtered
    Parts {
        /// Optional filter query
        query: Option<String>,
    },

    /// Show per-level catalog counts
    Stats,

    /// Check the snapshot's id-uniqueness contract
    Validate,

    /// Manage settings
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
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
