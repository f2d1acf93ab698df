//! CLI Argument Parsing
//!
//! Global flags (--json, --identifier, --sort, --config, --ascii, --verbose)
//! are accepted before or after the subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treemenu::domain::value_objects::{NodeProperty, SortMode};

/// Build, inspect and toggle lineage-addressed tree menus
#[derive(Parser, Debug)]
#[command(name = "treemenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of an outline
    #[arg(long, global = true)]
    pub json: bool,

    /// Data field identifying nodes (empty string for sibling indices)
    #[arg(long, global = true)]
    pub identifier: Option<String>,

    /// Sibling ordering: none or label
    #[arg(long, global = true)]
    pub sort: Option<SortMode>,

    /// Configuration file (defaults to ./treemenu.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use ASCII glyphs instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print its outline
    Show {
        /// Tree data file (.json, .yaml, .yml); `-` or omitted reads stdin
        file: Option<PathBuf>,
    },

    /// Toggle a property at one or more lineages, in order
    Toggle {
        /// Tree data file (.json, .yaml, .yml); `-` or omitted reads stdin
        file: Option<PathBuf>,

        /// Property to toggle: checked, selected or collapsed
        #[arg(short, long)]
        property: NodeProperty,

        /// Lineage to toggle, `/`-separated (e.g. 0/1 or docs/intro);
        /// quote a segment ("7") to match a text id that reads as a number
        #[arg(short = 'l', long = "lineage", required = true)]
        lineages: Vec<String>,
    },

    /// Print every node's lineage and label
    Lineages {
        /// Tree data file (.json, .yaml, .yml); `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
}
