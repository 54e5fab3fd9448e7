//! Volunteer Match - volunteer-to-event matching service
//!
//! Scores upcoming events for a volunteer (location, availability, shared
//! skills, preference tag), keeps those above the threshold, ranks them and
//! notifies the volunteer of the best one. Enrollment is idempotent.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{MatchEngine, Matcher};
pub use error::ServiceError;
pub use models::{Event, MatchResult, Volunteer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert_eq!(matcher.threshold(), core::DEFAULT_SCORE_THRESHOLD);
    }
}
