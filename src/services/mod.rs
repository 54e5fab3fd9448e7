// Service exports
pub mod cache;
pub mod matching;
pub mod memory;
pub mod notifier;
pub mod postgres;
pub mod store;

pub use cache::EventCache;
pub use matching::MatchService;
pub use memory::{MemoryStore, SeedData};
pub use notifier::{Notifier, NotifyError, StoreNotifier, WebhookNotifier};
pub use postgres::PostgresStore;
pub use store::{Store, StoreError};
