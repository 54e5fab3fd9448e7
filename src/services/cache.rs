use crate::models::Event;
use crate::services::store::{Store, StoreError};
use std::sync::Arc;
use std::time::Duration;

const CANDIDATE_EVENTS_KEY: &str = "candidate-events";

/// Candidate event source with a last-known fallback
///
/// Every call reads the store. A successful read refreshes the cached copy;
/// a failed read serves that copy while it is younger than the TTL.
pub struct EventCache {
    store: Arc<dyn Store>,
    last_known: Option<moka::future::Cache<&'static str, Arc<Vec<Event>>>>,
}

impl EventCache {
    /// Create a cache; `fallback = false` disables the last-known copy entirely
    pub fn new(store: Arc<dyn Store>, ttl: Duration, fallback: bool) -> Self {
        let last_known = fallback.then(|| {
            moka::future::Cache::builder()
                .max_capacity(1)
                .time_to_live(ttl)
                .build()
        });

        Self { store, last_known }
    }

    /// Current candidate events
    pub async fn candidate_events(&self) -> Result<Arc<Vec<Event>>, StoreError> {
        match self.store.list_candidate_events().await {
            Ok(events) => {
                let events = Arc::new(events);
                if let Some(cache) = &self.last_known {
                    cache.insert(CANDIDATE_EVENTS_KEY, events.clone()).await;
                }
                Ok(events)
            }
            Err(e) => {
                let cached = match &self.last_known {
                    Some(cache) => cache.get(CANDIDATE_EVENTS_KEY).await,
                    None => None,
                };

                match cached {
                    Some(events) => {
                        tracing::warn!(
                            "Candidate event query failed ({}), serving {} last-known events",
                            e,
                            events.len()
                        );
                        Ok(events)
                    }
                    None => Err(e),
                }
            }
        }
    }
}
