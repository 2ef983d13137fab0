//! Category filters and category derivation

use crate::domain::Quote;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Sentinel stored for the unfiltered selection
pub const ALL_CATEGORIES: &str = "all";

/// Which quotes are visible: everything, or a single category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact match on `Quote::category`. May name a category that no
    /// longer exists, in which case the filtered view is empty.
    Category(String),
}

impl CategoryFilter {
    /// Whether a quote passes this filter
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => quote.category == *category,
        }
    }

    /// Value persisted for this filter
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every category present in the list, duplicates collapsed
pub fn distinct_categories(quotes: &[Quote]) -> BTreeSet<String> {
    quotes.iter().map(|q| q.category.clone()).collect()
}

/// Quotes that pass the filter, in list order
pub fn filtered_view<'a>(quotes: &'a [Quote], filter: &CategoryFilter) -> Vec<&'a Quote> {
    quotes.iter().filter(|q| filter.matches(q)).collect()
}
