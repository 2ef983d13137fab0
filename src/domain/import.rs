//! Parsing and validation of imported quote documents

use crate::domain::Quote;
use crate::error::ImportError;
use serde_json::Value;

/// Parse raw file contents into a JSON value
pub fn parse_document(contents: &str) -> Result<Value, ImportError> {
    serde_json::from_str(contents).map_err(|e| ImportError::ParseFailure(e.to_string()))
}

/// Convert an imported JSON value into quotes.
///
/// The top-level value must be an array. Every element must be an object
/// with non-blank string `text` and `category` fields; extra fields are
/// ignored. The whole batch is rejected on the first bad element.
pub fn quotes_from_value(value: Value) -> Result<Vec<Quote>, ImportError> {
    let Value::Array(items) = value else {
        return Err(ImportError::InvalidFormat);
    };

    let mut quotes = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let quote: Quote = serde_json::from_value(item).map_err(|e| ImportError::InvalidEntry {
            index,
            reason: e.to_string(),
        })?;
        quote.validate().map_err(|e| ImportError::InvalidEntry {
            index,
            reason: e.to_string(),
        })?;
        quotes.push(quote);
    }

    Ok(quotes)
}
