//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

/// Read, query, merge, and convert figtree configuration files
#[derive(Parser, Debug)]
#[command(name = "figtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more detail)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Reject sections left open at end of input
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a configuration with its baseline defaults merged in
    Print {
        /// Configuration file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Sort items: key/values first, then sections, alphabetically
        #[arg(short, long)]
        sort: bool,
    },

    /// Convert a configuration to another output syntax
    Convert {
        /// Configuration file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Output syntax
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Figtree)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Sort items before converting
        #[arg(short, long)]
        sort: bool,
    },

    /// Print the value of a single key path
    Get {
        /// Configuration file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Simple key or slash-separated key path
        key_path: String,
    },

    /// Print every item matching a key path, in order
    Query {
        /// Configuration file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Simple key or slash-separated key path
        key_path: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output syntaxes understood by `convert`.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Native figtree syntax
    Figtree,
    /// Figtree syntax annotated with parsing provenance
    Internal,
    Json,
    Yaml,
}
