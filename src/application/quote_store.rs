//! Quote store: the in-memory quote list and its durable mirror
//!
//! Every mutation appends to the list, writes the whole list back to
//! storage, and then recomputes the category index, in that order. A failed
//! write rolls the in-memory list back so memory and storage never diverge.

use crate::application::CategoryIndex;
use crate::domain::import::{parse_document, quotes_from_value};
use crate::domain::{filtered_view, seed_quotes, CategoryFilter, Quote};
use crate::error::{QuoteError, Result};
use crate::infrastructure::{KeyValueStore, QUOTES_KEY, SELECTED_CATEGORY_KEY};
use rand::seq::SliceRandom;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Owned quote collection backed by a key-value store
#[derive(Debug)]
pub struct QuoteStore<S: KeyValueStore> {
    storage: S,
    quotes: Vec<Quote>,
    index: CategoryIndex,
}

impl<S: KeyValueStore> QuoteStore<S> {
    /// Load quotes from storage, seeding the defaults when nothing is stored.
    ///
    /// A stored value that does not decode to a list of valid quotes is
    /// reported as `StorageCorrupt`; use [`QuoteStore::reset`] to recover.
    pub fn load(storage: S) -> Result<Self> {
        let stored = storage.get(QUOTES_KEY)?;

        let mut store = QuoteStore {
            storage,
            quotes: Vec::new(),
            index: CategoryIndex::new(),
        };

        match stored {
            Some(raw) => {
                store.quotes = decode_quotes(&raw)?;
                store.index.refresh(&store.quotes);
                debug!(count = store.quotes.len(), "loaded quotes from storage");
            }
            None => {
                store.quotes = seed_quotes();
                store.save()?;
                info!("no stored quotes found, seeded defaults");
            }
        }

        store.index.restore(&store.storage)?;
        Ok(store)
    }

    /// Discard whatever is stored and write the seed quotes and an unfiltered selection
    pub fn reset(storage: S) -> Result<Self> {
        let mut store = QuoteStore {
            storage,
            quotes: seed_quotes(),
            index: CategoryIndex::new(),
        };
        store.save()?;
        store.storage.remove(SELECTED_CATEGORY_KEY)?;
        info!("quote storage reset to defaults");
        Ok(store)
    }

    /// Write the full list to storage, then recompute categories
    pub fn save(&mut self) -> Result<()> {
        let serialized = serde_json::to_string(&self.quotes)?;
        self.storage.set(QUOTES_KEY, &serialized)?;
        self.index.refresh(&self.quotes);
        Ok(())
    }

    /// Add a single quote typed by the user
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;
        self.append(vec![quote.clone()])?;
        Ok(quote)
    }

    /// Append an imported JSON value. The value must be an array of quotes;
    /// on any error the list is left unchanged.
    pub fn import_many(&mut self, raw: Value) -> Result<usize> {
        let quotes = quotes_from_value(raw)?;
        self.append(quotes)
    }

    /// Parse and import the contents of an exported document
    pub fn import_json(&mut self, contents: &str) -> Result<usize> {
        let value = parse_document(contents)?;
        self.import_many(value)
    }

    /// Append quotes pulled from remote sources. No de-duplication.
    pub fn merge_remote(&mut self, items: Vec<Quote>) -> Result<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        self.append(items)
    }

    /// Pretty-printed JSON document of the whole list
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    fn append(&mut self, batch: Vec<Quote>) -> Result<usize> {
        let previous_len = self.quotes.len();
        let added = batch.len();
        self.quotes.extend(batch);

        if let Err(e) = self.save() {
            self.quotes.truncate(previous_len);
            self.index.refresh(&self.quotes);
            return Err(e);
        }

        debug!(added, total = self.quotes.len(), "appended quotes");
        Ok(added)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        self.index.categories()
    }

    pub fn selected(&self) -> &CategoryFilter {
        self.index.get_selected()
    }

    /// Persist a new category selection
    pub fn set_selected(&mut self, filter: CategoryFilter) -> Result<()> {
        self.index.set_selected(&mut self.storage, filter)
    }

    /// Quotes visible under the given filter, in list order
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        filtered_view(&self.quotes, filter)
    }

    /// Uniformly random quote from the filtered view
    pub fn random_quote(&self, filter: &CategoryFilter) -> Option<&Quote> {
        let view = self.filtered(filter);
        view.choose(&mut rand::thread_rng()).copied()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn decode_quotes(raw: &str) -> Result<Vec<Quote>> {
    let corrupt = |message: String| QuoteError::StorageCorrupt {
        key: QUOTES_KEY.to_string(),
        message,
    };

    let quotes: Vec<Quote> = serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;
    for (index, quote) in quotes.iter().enumerate() {
        quote
            .validate()
            .map_err(|e| corrupt(format!("entry {}: {}", index, e)))?;
    }
    Ok(quotes)
}
