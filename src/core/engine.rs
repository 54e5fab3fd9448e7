use crate::core::Matcher;
use crate::models::{Event, MatchResult, Volunteer};
use crate::services::notifier::Notifier;
use std::sync::Arc;
use std::time::Duration;

/// Message sent to a volunteer about their best match
pub fn match_message(event_name: &str) -> String {
    format!("You've been matched to {}!", event_name)
}

/// Matching engine: ranking plus the top-match notification
///
/// The notification is awaited under `notify_timeout` and its outcome never
/// changes the returned ranking.
#[derive(Clone)]
pub struct MatchEngine {
    matcher: Matcher,
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,
}

impl MatchEngine {
    pub fn new(matcher: Matcher, notifier: Arc<dyn Notifier>, notify_timeout: Duration) -> Self {
        Self {
            matcher,
            notifier,
            notify_timeout,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Rank `events` for `volunteer` and notify them of the top match, if any
    pub async fn rank(&self, volunteer: &Volunteer, events: Vec<Event>) -> Vec<MatchResult> {
        let ranked = self.matcher.rank(volunteer, events);

        if let Some(top) = ranked.first() {
            self.announce(volunteer.id, &top.event.name).await;
        }

        ranked
    }

    async fn announce(&self, volunteer_id: i64, event_name: &str) {
        let message = match_message(event_name);

        match tokio::time::timeout(self.notify_timeout, self.notifier.notify(volunteer_id, &message)).await {
            Ok(Ok(())) => {
                tracing::debug!("Notified volunteer {}: {}", volunteer_id, message);
            }
            Ok(Err(e)) => {
                tracing::warn!("Failed to notify volunteer {} of top match: {}", volunteer_id, e);
            }
            Err(_) => {
                tracing::warn!(
                    "Notification for volunteer {} timed out after {:?}",
                    volunteer_id,
                    self.notify_timeout
                );
            }
        }
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("matcher", &self.matcher)
            .field("notify_timeout", &self.notify_timeout)
            .finish_non_exhaustive()
    }
}
