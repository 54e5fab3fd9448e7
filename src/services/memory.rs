use crate::models::{EnrollmentRecord, EnrollmentStatus, Event, HistoryEntry, Notification, Volunteer};
use crate::services::store::{Store, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

/// Initial contents of an in-memory store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::SeedError(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| StoreError::SeedError(format!("{}: {}", path.display(), e)))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    volunteers: Vec<Volunteer>,
    events: Vec<Event>,
    enrollments: Vec<EnrollmentRecord>,
    notifications: Vec<Notification>,
}

/// In-memory store used when no database is configured
///
/// All state sits behind one lock, so the enrollment check-and-insert is a
/// single atomic write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                volunteers: seed.volunteers,
                events: seed.events,
                enrollments: seed.enrollments,
                notifications: Vec::new(),
            }),
        }
    }

    pub async fn add_volunteer(&self, volunteer: Volunteer) {
        let mut state = self.state.write().await;
        state.volunteers.retain(|v| v.id != volunteer.id);
        state.volunteers.push(volunteer);
    }

    pub async fn add_event(&self, event: Event) {
        let mut state = self.state.write().await;
        state.events.retain(|e| e.id != event.id);
        state.events.push(event);
    }

    pub async fn add_enrollment(&self, record: EnrollmentRecord) {
        self.state.write().await.enrollments.push(record);
    }

    /// Count active records for a pair
    pub async fn active_enrollment_count(&self, volunteer_id: i64, event_id: i64) -> usize {
        self.state
            .read()
            .await
            .enrollments
            .iter()
            .filter(|r| r.volunteer_id == volunteer_id && r.event_id == event_id && r.status.is_active())
            .count()
    }
}

fn by_start_time(events: &mut [Event]) {
    // None sorts first in Option's ordering, matching NULLS FIRST
    events.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
}

fn newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.id.cmp(&a.id));
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_volunteer(&self, volunteer_id: i64) -> Result<Option<Volunteer>, StoreError> {
        let state = self.state.read().await;
        Ok(state.volunteers.iter().find(|v| v.id == volunteer_id).cloned())
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, StoreError> {
        let mut volunteers = self.state.read().await.volunteers.clone();
        volunteers.sort_by_key(|v| v.id);
        Ok(volunteers)
    }

    async fn get_event(&self, event_id: i64) -> Result<Option<Event>, StoreError> {
        let state = self.state.read().await;
        Ok(state.events.iter().find(|e| e.id == event_id).cloned())
    }

    async fn list_candidate_events(&self) -> Result<Vec<Event>, StoreError> {
        let now = Utc::now();
        let mut events: Vec<Event> = self
            .state
            .read()
            .await
            .events
            .iter()
            .filter(|e| e.start_time.is_some_and(|start| start >= now))
            .cloned()
            .collect();

        by_start_time(&mut events);
        Ok(events)
    }

    async fn has_active_enrollment(&self, volunteer_id: i64, event_id: i64) -> Result<bool, StoreError> {
        Ok(self.active_enrollment_count(volunteer_id, event_id).await > 0)
    }

    async fn create_enrollment(&self, volunteer_id: i64, event_id: i64) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;

        let exists = state
            .enrollments
            .iter()
            .any(|r| r.volunteer_id == volunteer_id && r.event_id == event_id && r.status.is_active());

        if exists {
            return Ok(false);
        }

        state.enrollments.push(EnrollmentRecord {
            volunteer_id,
            event_id,
            status: EnrollmentStatus::Upcoming,
            created_at: Utc::now(),
        });

        Ok(true)
    }

    async fn list_enrolled_events(&self, volunteer_id: i64) -> Result<Vec<Event>, StoreError> {
        let state = self.state.read().await;

        let mut events: Vec<Event> = state
            .events
            .iter()
            .filter(|e| {
                state.enrollments.iter().any(|r| {
                    r.volunteer_id == volunteer_id
                        && r.event_id == e.id
                        && r.status == EnrollmentStatus::Upcoming
                })
            })
            .cloned()
            .collect();

        by_start_time(&mut events);
        Ok(events)
    }

    async fn list_history(&self, volunteer_id: i64) -> Result<Vec<HistoryEntry>, StoreError> {
        let state = self.state.read().await;

        // Position in the record list stands in for the history id
        let history = state
            .enrollments
            .iter()
            .enumerate()
            .filter(|(_, r)| r.volunteer_id == volunteer_id)
            .filter_map(|(position, r)| {
                let event = state.events.iter().find(|e| e.id == r.event_id)?;
                Some(HistoryEntry {
                    history_id: position as i64 + 1,
                    event: event.clone(),
                    status: r.status,
                })
            })
            .collect();

        Ok(history)
    }

    async fn list_browse_events(&self, volunteer_id: i64) -> Result<Vec<Event>, StoreError> {
        let now = Utc::now();
        let state = self.state.read().await;

        let mut events: Vec<Event> = state
            .events
            .iter()
            .filter(|e| e.start_time.is_some_and(|start| start >= now))
            .filter(|e| {
                !state.enrollments.iter().any(|r| {
                    r.volunteer_id == volunteer_id && r.event_id == e.id && r.status.is_active()
                })
            })
            .cloned()
            .collect();

        by_start_time(&mut events);
        Ok(events)
    }

    async fn insert_notification(&self, user_id: i64, message: &str) -> Result<Notification, StoreError> {
        let mut state = self.state.write().await;

        let id = state.notifications.last().map_or(1, |n| n.id + 1);
        let notification = Notification {
            id,
            user_id,
            message: message.to_string(),
            read: false,
            created_at: Utc::now(),
        };
        state.notifications.push(notification.clone());

        Ok(notification)
    }

    async fn list_notifications(&self, user_id: i64) -> Result<Vec<Notification>, StoreError> {
        let mut notifications: Vec<Notification> = self
            .state
            .read()
            .await
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();

        newest_first(&mut notifications);
        Ok(notifications)
    }

    async fn list_all_notifications(&self) -> Result<Vec<Notification>, StoreError> {
        let mut notifications = self.state.read().await.notifications.clone();
        newest_first(&mut notifications);
        Ok(notifications)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
