//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotegen")]
#[command(about = "Terminal quote generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote book
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show a random quote
    Show {
        /// Category to pick from (default: the selected category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a new quote
    Add {
        /// Quote text
        text: String,

        /// Quote category
        category: String,
    },

    /// List quotes
    List {
        /// Only list this category (default: the selected category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories
    Categories,

    /// Show or change the selected category ('all' clears the filter)
    Filter {
        /// Category to select
        category: Option<String>,
    },

    /// Import quotes from a JSON file
    Import {
        /// File containing a JSON array of quotes
        file: PathBuf,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Output path, or '-' for stdout (default: quotes_export.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch quotes from the configured server endpoints
    Sync {
        /// Keep syncing periodically until interrupted
        #[arg(short, long)]
        watch: bool,

        /// Seconds between syncs in watch mode
        #[arg(short, long, requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Discard stored quotes and restore the default quotes
    Reset,
}
