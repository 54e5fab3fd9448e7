// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, CandidateVolunteer, EnrollmentOutcome, EnrollmentRecord, EnrollmentStatus, Event,
    HistoryEntry, MatchResult, Notification, Volunteer,
};
pub use requests::CreateNotificationRequest;
pub use responses::{EnrollResponse, ErrorResponse, HealthResponse, NotificationsResponse};
