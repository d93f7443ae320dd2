use crate::config::SearchSettings;
use crate::domain::{Course, CourseCatalog, SLOT_COUNT};
use crate::error::{CompareError, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug)]
struct SearchOutcome {
    slot: usize,
    generation: u64,
    results: Vec<Course>,
}

/// Course suggestions for the three comparison slots.
///
/// Each slot has its own debounce timer. Every keystroke bumps the slot's
/// generation and cancels the pending search; an outcome is applied only if
/// its generation is still the current one.
pub struct DebouncedSearch<C> {
    catalog: Arc<C>,
    settings: SearchSettings,
    generations: [u64; SLOT_COUNT],
    pending: [Option<JoinHandle<()>>; SLOT_COUNT],
    options: [Vec<Course>; SLOT_COUNT],
    tx: mpsc::UnboundedSender<SearchOutcome>,
    rx: mpsc::UnboundedReceiver<SearchOutcome>,
    closed: bool,
}

impl<C> DebouncedSearch<C>
where
    C: CourseCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, settings: SearchSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            settings,
            generations: [0; SLOT_COUNT],
            pending: Default::default(),
            options: Default::default(),
            tx,
            rx,
            closed: false,
        }
    }

    /// Records a keystroke in `slot`. Queries shorter than the configured
    /// minimum clear the slot's suggestions without reaching the backend.
    pub fn input(&mut self, slot: usize, query: &str) -> Result<()> {
        if slot >= SLOT_COUNT {
            return Err(CompareError::InvalidInput(format!(
                "slot {slot} out of range (0..{SLOT_COUNT})"
            )));
        }
        if self.closed {
            warn!("Ignoring input for slot {} after shutdown", slot);
            return Ok(());
        }

        self.generations[slot] += 1;
        let generation = self.generations[slot];
        if let Some(handle) = self.pending[slot].take() {
            handle.abort();
        }

        let query = query.trim().to_string();
        if query.chars().count() < self.settings.min_query_len.max(1) {
            self.options[slot].clear();
            return Ok(());
        }

        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        let settings = self.settings;

        self.pending[slot] = Some(tokio::spawn(async move {
            sleep(settings.debounce).await;

            debug!("Searching courses for slot {}: {:?}", slot, query);
            let mut results = match catalog.list_courses(Some(&query)).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("Course search for {:?} failed: {}", query, e);
                    Vec::new()
                }
            };
            results.truncate(settings.max_suggestions);

            let _ = tx.send(SearchOutcome {
                slot,
                generation,
                results,
            });
        }));

        Ok(())
    }

    /// Waits for the next search to land and returns the slot it updated.
    /// Returns `None` once nothing is pending or the search has been shut down.
    pub async fn next_update(&mut self) -> Option<usize> {
        loop {
            if self.closed || self.pending.iter().all(Option::is_none) {
                return None;
            }

            let outcome = self.rx.recv().await?;
            if outcome.generation != self.generations[outcome.slot] {
                debug!(
                    "Discarding stale results for slot {} (generation {} < {})",
                    outcome.slot, outcome.generation, self.generations[outcome.slot]
                );
                continue;
            }

            self.pending[outcome.slot] = None;
            self.options[outcome.slot] = outcome.results;
            return Some(outcome.slot);
        }
    }

    pub fn options(&self, slot: usize) -> &[Course] {
        self.options.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Cancels every pending search. Nothing is applied afterwards.
    pub fn shutdown(&mut self) {
        self.closed = true;
        for handle in self.pending.iter_mut().filter_map(Option::take) {
            handle.abort();
        }
    }
}

impl<C> Drop for DebouncedSearch<C> {
    fn drop(&mut self) {
        for handle in self.pending.iter_mut().filter_map(Option::take) {
            handle.abort();
        }
    }
}
