//! Remote sync use case
//!
//! A cycle fetches every source concurrently, waits for all of them to
//! settle, and merges the combined batch into the quote store in one step.
//! A failing source is logged and contributes nothing. Only one cycle runs at
//! a time per service; a cycle requested while another is in flight is skipped.

use crate::application::QuoteStore;
use crate::domain::{remote, Quote};
use crate::error::{FetchError, Result};
use crate::infrastructure::{Config, HttpQuoteSource, KeyValueStore, QuoteSource};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Result of a completed sync cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Quotes merged into the store
    pub merged: usize,
    /// Endpoints that failed this cycle
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed(SyncReport),
    /// Another cycle was already running
    Skipped,
}

/// Service for pulling quotes from remote sources
pub struct SyncService {
    sources: Vec<Arc<dyn QuoteSource>>,
    category: String,
    in_flight: Mutex<()>,
}

impl SyncService {
    pub fn new(sources: Vec<Arc<dyn QuoteSource>>, category: impl Into<String>) -> Self {
        SyncService {
            sources,
            category: category.into(),
            in_flight: Mutex::new(()),
        }
    }

    /// HTTP sources for every configured endpoint
    pub fn from_config(config: &Config) -> Result<Self> {
        let sources = HttpQuoteSource::from_endpoints(&config.endpoints)?
            .into_iter()
            .map(|source| Arc::new(source) as Arc<dyn QuoteSource>)
            .collect();
        Ok(Self::new(sources, config.sync_category.clone()))
    }

    pub fn sources(&self) -> &[Arc<dyn QuoteSource>] {
        &self.sources
    }

    /// Fetch every source concurrently. Quotes from the sources that
    /// succeeded are returned in source order alongside the failures.
    pub async fn fetch_all(&self) -> (Vec<Quote>, Vec<FetchError>) {
        let results = join_all(self.sources.iter().map(|source| source.fetch())).await;

        let mut quotes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(records) => quotes.extend(remote::relabel(records, &self.category)),
                Err(e) => {
                    warn!(endpoint = e.endpoint(), "sync source failed: {}", e);
                    failures.push(e);
                }
            }
        }

        (quotes, failures)
    }

    /// Run one fetch-and-merge cycle against the store
    pub async fn sync_once<S: KeyValueStore>(
        &self,
        store: &mut QuoteStore<S>,
    ) -> Result<SyncOutcome> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            warn!("sync already in progress, skipping this cycle");
            return Ok(SyncOutcome::Skipped);
        };

        let (quotes, failures) = self.fetch_all().await;
        let merged = store.merge_remote(quotes)?;

        let report = SyncReport {
            merged,
            failed: failures.iter().map(|e| e.endpoint().to_string()).collect(),
        };
        info!(
            merged = report.merged,
            failed = report.failed.len(),
            total = store.quotes().len(),
            "sync cycle finished"
        );
        Ok(SyncOutcome::Completed(report))
    }

    /// Run sync cycles every `interval` until `cancel` fires.
    ///
    /// The first cycle starts immediately. Cycles never overlap: a tick
    /// missed while a cycle is running is dropped. A cycle that fails to
    /// persist is logged and the loop keeps going. `on_cycle` runs after
    /// each finished cycle. Returns the number of cycles run.
    pub async fn run_periodic<S, F>(
        &self,
        store: &mut QuoteStore<S>,
        interval: Duration,
        cancel: CancellationToken,
        mut on_cycle: F,
    ) -> usize
    where
        S: KeyValueStore,
        F: FnMut(&SyncOutcome, &QuoteStore<S>),
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycles = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    cycles += 1;
                    match self.sync_once(store).await {
                        Ok(outcome) => on_cycle(&outcome, &*store),
                        Err(e) => error!("sync cycle {} failed: {}", cycles, e),
                    }
                }
            }
        }

        info!(cycles, "periodic sync stopped");
        cycles
    }
}
