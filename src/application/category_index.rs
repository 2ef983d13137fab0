//! Derived category set and the persisted category selection

use crate::domain::{distinct_categories, CategoryFilter, Quote};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, SELECTED_CATEGORY_KEY};
use std::collections::BTreeSet;
use tracing::debug;

/// Categories present in the quote list plus the user's chosen filter
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: BTreeSet<String>,
    selected: CategoryFilter,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the category set from scratch
    pub fn refresh(&mut self, quotes: &[Quote]) {
        self.categories = distinct_categories(quotes);
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn get_selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// True when the selection names a category with no quotes left
    pub fn is_stale(&self) -> bool {
        match &self.selected {
            CategoryFilter::All => false,
            CategoryFilter::Category(category) => !self.categories.contains(category),
        }
    }

    /// Load the persisted selection, defaulting to all categories
    pub fn restore<S: KeyValueStore>(&mut self, storage: &S) -> Result<()> {
        self.selected = match storage.get(SELECTED_CATEGORY_KEY)? {
            Some(raw) => raw.parse::<CategoryFilter>().unwrap_or_default(),
            None => CategoryFilter::All,
        };
        Ok(())
    }

    /// Persist a new selection. Categories not currently present are accepted.
    pub fn set_selected<S: KeyValueStore>(
        &mut self,
        storage: &mut S,
        filter: CategoryFilter,
    ) -> Result<()> {
        storage.set(SELECTED_CATEGORY_KEY, filter.as_str())?;
        debug!(selected = %filter, "persisted category selection");
        self.selected = filter;
        Ok(())
    }
}
