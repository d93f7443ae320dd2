use crate::domain::storage::Storage;
use crate::domain::{
    reduce_all, Comparison, ComparisonSlots, CourseCatalog, HistoryEntry, RecentComparisons,
    SlotAction, SLOT_COUNT,
};
use crate::error::{CompareError, Result};
use crate::services::comparison::compare_slots;
use crate::services::eligibility::{check_course, Eligibility};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

pub struct ComparisonService<C> {
    catalog: Arc<C>,
    store: Arc<dyn Storage>,
    history_limit: usize,
}

impl<C> ComparisonService<C>
where
    C: CourseCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, store: Arc<dyn Storage + 'static>, history_limit: usize) -> Self {
        Self {
            catalog,
            store,
            history_limit,
        }
    }

    pub async fn compare(&self, ids: &[String]) -> Result<Comparison> {
        let slots = self.load_slots(ids).await?;
        let comparison = compare_slots(&slots);

        if comparison.rows.len() < 2 {
            warn!(
                "Only {} of {} courses could be compared",
                comparison.rows.len(),
                ids.len()
            );
        }
        info!(
            "Compared {} courses, best value: {:?}",
            comparison.rows.len(),
            comparison.best.as_ref().map(|best| &best.id)
        );

        Ok(comparison)
    }

    /// Fetches every course and its university links concurrently and folds
    /// the results into slot state. A course that cannot be fetched leaves its
    /// slot empty; failed link lookups count as no offering universities.
    pub async fn load_slots(&self, ids: &[String]) -> Result<ComparisonSlots> {
        if ids.is_empty() || ids.len() > SLOT_COUNT {
            return Err(CompareError::InvalidInput(format!(
                "expected 1 to {SLOT_COUNT} course ids, got {}",
                ids.len()
            )));
        }

        let mut tasks = JoinSet::new();
        for (slot, id) in ids.iter().cloned().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            tasks.spawn(async move {
                let course = catalog.get_course(&id).await;
                let links = match course {
                    Ok(_) => Some(catalog.list_course_universities(&id).await),
                    Err(_) => None,
                };
                (slot, id, course, links)
            });
        }

        let mut fetched = Vec::with_capacity(ids.len());
        while let Some(joined) = tasks.join_next().await {
            fetched.push(joined.map_err(|e| CompareError::Other(e.to_string()))?);
        }
        fetched.sort_by_key(|(slot, ..)| *slot);

        let mut actions = Vec::new();
        for (slot, id, course, links) in fetched {
            let course = match course {
                Ok(course) => course,
                Err(e) => {
                    warn!("Could not fetch course {}: {}", id, e);
                    continue;
                }
            };
            let course_id = course.id.clone();
            actions.push(SlotAction::Select { slot, course });

            match links {
                Some(Ok(links)) => actions.push(SlotAction::LinksLoaded {
                    slot,
                    course_id,
                    links,
                }),
                Some(Err(e)) => {
                    warn!("Could not fetch universities for course {}: {}", id, e);
                    actions.push(SlotAction::LinksFailed { slot, course_id });
                }
                None => {}
            }
        }

        Ok(reduce_all(&ComparisonSlots::default(), actions))
    }

    pub fn history(&self) -> Result<RecentComparisons> {
        let entries = self.store.load_history()?.unwrap_or_default();
        Ok(RecentComparisons::from_entries(entries, self.history_limit))
    }

    pub fn save(&self, comparison: &Comparison) -> Result<HistoryEntry> {
        let ids = comparison.ids();
        if ids.is_empty() {
            return Err(CompareError::InvalidInput(
                "nothing to save, the comparison is empty".to_string(),
            ));
        }

        let mut history = self.history()?;
        let entry = history.push(ids);
        self.store.save_history(&history.to_entries())?;

        info!("Saved comparison ({} in history)", history.len());
        Ok(entry)
    }

    /// Re-runs a saved comparison, `index` counting from the most recent.
    pub async fn compare_again(&self, index: usize) -> Result<Comparison> {
        let history = self.history()?;
        let entry = history.get(index).ok_or_else(|| {
            CompareError::InvalidInput(format!(
                "no saved comparison at {index} ({} saved)",
                history.len()
            ))
        })?;

        self.compare(&entry.ids).await
    }

    pub async fn check_eligibility(&self, course_id: &str, points: f64) -> Result<Eligibility> {
        let course = self.catalog.get_course(course_id).await?;
        check_course(&course, points)
    }
}
