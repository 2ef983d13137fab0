//! Quote value type and the default seed list

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A single quote with the category it is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from user input, trimming both fields.
    /// Fails when either field is empty after trimming.
    pub fn new(text: &str, category: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        Ok(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Check the non-empty invariant on an already constructed quote
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// Quotes written to storage the first time a quote book is opened
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "Believe you can and you're halfway there.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            category: "Work".to_string(),
        },
    ]
}
