//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_category_list, format_quote, format_quote_list, format_sync_outcome, NO_QUOTES_MESSAGE,
};
