//! quotegen - Terminal quote generator
//!
//! Keeps a list of quotes with categories in a local quote book, shows
//! random quotes with an optional persisted category filter, imports and
//! exports JSON, and merges quotes pulled from remote endpoints.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuoteError;
