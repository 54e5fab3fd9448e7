use crate::core::MatchEngine;
use crate::error::ServiceError;
use crate::models::{CandidateVolunteer, EnrollmentOutcome, Event, HistoryEntry, MatchResult, Volunteer};
use crate::services::cache::EventCache;
use crate::services::store::Store;
use chrono::Utc;
use std::sync::Arc;

/// Wires the match engine to its data-access collaborators
pub struct MatchService {
    store: Arc<dyn Store>,
    events: EventCache,
    engine: MatchEngine,
}

impl MatchService {
    pub fn new(store: Arc<dyn Store>, events: EventCache, engine: MatchEngine) -> Self {
        Self { store, events, engine }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    async fn volunteer(&self, volunteer_id: i64) -> Result<Volunteer, ServiceError> {
        self.store
            .get_volunteer(volunteer_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Volunteer {} not found", volunteer_id)))
    }

    async fn event(&self, event_id: i64) -> Result<Event, ServiceError> {
        self.store
            .get_event(event_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Event {} not found", event_id)))
    }

    /// Ranked candidate events for a volunteer
    ///
    /// Lookup failures surface; notification failures do not.
    pub async fn matches_for_volunteer(&self, volunteer_id: i64) -> Result<Vec<MatchResult>, ServiceError> {
        let volunteer = self.volunteer(volunteer_id).await?;
        let events = self.events.candidate_events().await?;
        let total_candidates = events.len();

        let ranked = self.engine.rank(&volunteer, events.as_ref().clone()).await;

        tracing::info!(
            "Ranked {} of {} candidate events for volunteer {}",
            ranked.len(),
            total_candidates,
            volunteer_id
        );

        Ok(ranked)
    }

    /// Volunteers sharing skills with an event
    pub async fn candidates_for_event(&self, event_id: i64) -> Result<Vec<CandidateVolunteer>, ServiceError> {
        let event = self.event(event_id).await?;
        let volunteers = self.store.list_volunteers().await?;

        Ok(self.engine.matcher().rank_candidates(&event, &volunteers))
    }

    /// Enroll a volunteer in an event; repeated calls are no-ops
    pub async fn enroll(&self, volunteer_id: i64, event_id: i64) -> Result<EnrollmentOutcome, ServiceError> {
        self.volunteer(volunteer_id).await?;
        self.event(event_id).await?;

        let outcome = if self.store.create_enrollment(volunteer_id, event_id).await? {
            tracing::info!("Enrolled volunteer {} in event {}", volunteer_id, event_id);
            EnrollmentOutcome::Created
        } else {
            tracing::debug!("Volunteer {} already enrolled in event {}", volunteer_id, event_id);
            EnrollmentOutcome::AlreadyEnrolled
        };

        Ok(outcome)
    }

    /// Events the volunteer is enrolled in and has not attended yet
    pub async fn enrolled_events(&self, volunteer_id: i64) -> Result<Vec<Event>, ServiceError> {
        self.volunteer(volunteer_id).await?;
        Ok(self.store.list_enrolled_events(volunteer_id).await?)
    }

    /// Full volunteer history, every status included
    pub async fn history(&self, volunteer_id: i64) -> Result<Vec<HistoryEntry>, ServiceError> {
        self.volunteer(volunteer_id).await?;
        Ok(self.store.list_history(volunteer_id).await?)
    }

    /// Upcoming events the volunteer can still sign up for
    pub async fn browse_events(&self, volunteer_id: i64) -> Result<Vec<Event>, ServiceError> {
        self.volunteer(volunteer_id).await?;
        Ok(self.store.list_browse_events(volunteer_id).await?)
    }

    /// Earliest enrolled event that has not started yet
    pub async fn next_event(&self, volunteer_id: i64) -> Result<Option<Event>, ServiceError> {
        let now = Utc::now();
        let enrolled = self.enrolled_events(volunteer_id).await?;

        Ok(enrolled
            .into_iter()
            .find(|e| e.start_time.is_some_and(|start| start > now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Matcher;
    use crate::models::Availability;
    use crate::services::memory::MemoryStore;
    use crate::models::{EnrollmentRecord, EnrollmentStatus};
    use crate::services::notifier::StoreNotifier;
    use chrono::Duration;

    async fn create_service() -> (Arc<MemoryStore>, MatchService) {
        let store = Arc::new(MemoryStore::new());
        let start = Utc::now() + Duration::days(7);

        store
            .add_volunteer(Volunteer {
                id: 1,
                full_name: "Ana".to_string(),
                location: "Houston".to_string(),
                skills: vec!["first-aid".to_string(), "driving".to_string()],
                preferences: vec!["tag-A".to_string()],
                availability: Availability {
                    start: Some(start - Duration::days(1)),
                    end: Some(start + Duration::days(30)),
                },
            })
            .await;
        store
            .add_event(Event {
                id: 10,
                name: "Food Drive".to_string(),
                description: None,
                location: "Houston".to_string(),
                urgency: None,
                required_skills: vec!["first-aid".to_string()],
                start_time: Some(start),
                end_time: Some(start + Duration::hours(3)),
                preference_tag: Some("tag-A".to_string()),
            })
            .await;

        let engine = MatchEngine::new(
            Matcher::default(),
            Arc::new(StoreNotifier::new(store.clone())),
            std::time::Duration::from_secs(1),
        );
        let events = EventCache::new(store.clone(), std::time::Duration::from_secs(60), true);
        let service = MatchService::new(store.clone(), events, engine);

        (store, service)
    }

    #[tokio::test]
    async fn test_matches_notify_volunteer() {
        let (store, service) = create_service().await;

        let matches = service.matches_for_volunteer(1).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_score, 4);

        let notifications = store.list_notifications(1).await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, "You've been matched to Food Drive!");
    }

    #[tokio::test]
    async fn test_unknown_volunteer() {
        let (_, service) = create_service().await;

        let err = service.matches_for_volunteer(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_enroll_twice() {
        let (store, service) = create_service().await;

        assert_eq!(service.enroll(1, 10).await.unwrap(), EnrollmentOutcome::Created);
        assert_eq!(service.enroll(1, 10).await.unwrap(), EnrollmentOutcome::AlreadyEnrolled);
        assert_eq!(store.active_enrollment_count(1, 10).await, 1);

        let enrolled = service.enrolled_events(1).await.unwrap();
        assert_eq!(enrolled.len(), 1);
    }

    #[tokio::test]
    async fn test_enroll_unknown_event() {
        let (_, service) = create_service().await;

        let err = service.enroll(1, 404).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_candidates_for_event() {
        let (_, service) = create_service().await;

        let candidates = service.candidates_for_event(10).await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].skills, vec!["first-aid"]);
    }

    #[tokio::test]
    async fn test_dashboard_views() {
        let (store, service) = create_service().await;
        let soon = Utc::now() + Duration::days(2);
        for (id, start) in [(11, soon), (12, soon + Duration::days(1)), (13, soon - Duration::days(5))] {
            store
                .add_event(Event {
                    id,
                    name: format!("Event {}", id),
                    description: None,
                    location: "Houston".to_string(),
                    urgency: None,
                    required_skills: vec![],
                    start_time: Some(start),
                    end_time: Some(start + Duration::hours(1)),
                    preference_tag: None,
                })
                .await;
        }

        assert!(service.next_event(1).await.unwrap().is_none());

        store
            .add_enrollment(EnrollmentRecord {
                volunteer_id: 1,
                event_id: 11,
                status: EnrollmentStatus::Cancelled,
                created_at: Utc::now(),
            })
            .await;
        service.enroll(1, 10).await.unwrap();
        service.enroll(1, 12).await.unwrap();
        service.enroll(1, 13).await.unwrap();

        // Event 13 started days ago; 12 is the earliest still ahead
        let next = service.next_event(1).await.unwrap().unwrap();
        assert_eq!(next.id, 12);

        let history = service.history(1).await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].status, EnrollmentStatus::Cancelled);

        let browse: Vec<i64> = service.browse_events(1).await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(browse, vec![11]);

        assert!(matches!(service.history(99).await.unwrap_err(), ServiceError::NotFound(_)));
    }
}
