use crate::models::{Event, HistoryEntry, Notification, Volunteer};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with a data store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Data-access contract shared by the PostgreSQL and in-memory adapters
#[async_trait]
pub trait Store: Send + Sync {
    /// Look up a volunteer by id
    async fn get_volunteer(&self, volunteer_id: i64) -> Result<Option<Volunteer>, StoreError>;

    /// All volunteers, ordered by id
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, StoreError>;

    /// Look up an event by id
    async fn get_event(&self, event_id: i64) -> Result<Option<Event>, StoreError>;

    /// Upcoming events (start >= now), ordered by start time then id
    async fn list_candidate_events(&self) -> Result<Vec<Event>, StoreError>;

    /// Whether an Upcoming or Attended record exists for the pair
    async fn has_active_enrollment(&self, volunteer_id: i64, event_id: i64) -> Result<bool, StoreError>;

    /// Insert an Upcoming record unless an active one exists
    ///
    /// Single conditional write. Returns `true` when a record was created.
    async fn create_enrollment(&self, volunteer_id: i64, event_id: i64) -> Result<bool, StoreError>;

    /// Events the volunteer holds an Upcoming record for, ordered by start time
    async fn list_enrolled_events(&self, volunteer_id: i64) -> Result<Vec<Event>, StoreError>;

    /// Every history record for the volunteer with its event, in insertion order
    async fn list_history(&self, volunteer_id: i64) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Upcoming events without an Upcoming or Attended record for the volunteer
    ///
    /// Cancelled and Missed records do not hide an event.
    async fn list_browse_events(&self, volunteer_id: i64) -> Result<Vec<Event>, StoreError>;

    /// Store an unread notification
    async fn insert_notification(&self, user_id: i64, message: &str) -> Result<Notification, StoreError>;

    /// Notifications for a user, newest first
    async fn list_notifications(&self, user_id: i64) -> Result<Vec<Notification>, StoreError>;

    /// All notifications, newest first
    async fn list_all_notifications(&self) -> Result<Vec<Notification>, StoreError>;

    /// Health check for the backing store
    async fn health_check(&self) -> Result<bool, StoreError>;
}
