use crate::core::filters::deserialize_tags;
use crate::core::time::deserialize_lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Volunteer availability window (both bounds inclusive)
///
/// Either bound may be missing; `start > end` is not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub end: Option<DateTime<Utc>>,
}

/// Volunteer profile as seen by the matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: i64,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
}

/// Event a volunteer can be matched against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event_id")]
    pub id: i64,
    #[serde(rename = "event_name")]
    pub name: String,
    #[serde(rename = "event_description", default)]
    pub description: Option<String>,
    #[serde(rename = "event_location", default)]
    pub location: String,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "preferenceTag", default)]
    pub preference_tag: Option<String>,
}

/// Event annotated with its match score for one volunteer
///
/// Request-scoped, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Volunteer proposed for an event, ranked by skill overlap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateVolunteer {
    pub volunteer_id: i64,
    pub full_name: String,
    pub overlap: u32,
    pub skills: Vec<String>,
}

/// Lifecycle status of an enrollment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Upcoming,
    Attended,
    Cancelled,
    Missed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Upcoming => "Upcoming",
            EnrollmentStatus::Attended => "Attended",
            EnrollmentStatus::Cancelled => "Cancelled",
            EnrollmentStatus::Missed => "Missed",
        }
    }

    /// Upcoming and attended records block a new enrollment for the same pair
    pub fn is_active(&self) -> bool {
        matches!(self, EnrollmentStatus::Upcoming | EnrollmentStatus::Attended)
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(EnrollmentStatus::Upcoming),
            "Attended" => Ok(EnrollmentStatus::Attended),
            "Cancelled" => Ok(EnrollmentStatus::Cancelled),
            "Missed" => Ok(EnrollmentStatus::Missed),
            other => Err(format!("unknown enrollment status: {}", other)),
        }
    }
}

/// Stored enrollment (volunteer history) record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub volunteer_id: i64,
    pub event_id: i64,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

/// One volunteer history row joined with its event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub history_id: i64,
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "event_status")]
    pub status: EnrollmentStatus,
}

/// Result of an enrollment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Created,
    AlreadyEnrolled,
}

/// Stored notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_lenient_parsing() {
        let json = r#"{
            "id": 7,
            "location": "Houston",
            "skills": "first-aid, driving,",
            "preferences": ["tag-A", " "],
            "availability": {"start": "2024-01-01", "end": "not a date"}
        }"#;

        let volunteer: Volunteer = serde_json::from_str(json).unwrap();
        assert_eq!(volunteer.skills, vec!["first-aid", "driving"]);
        assert_eq!(volunteer.preferences, vec!["tag-A"]);
        assert!(volunteer.availability.start.is_some());
        assert!(volunteer.availability.end.is_none());
        assert_eq!(volunteer.full_name, "");
    }

    #[test]
    fn test_match_result_serialization() {
        let result = MatchResult {
            event: Event {
                id: 3,
                name: "Food Drive".to_string(),
                description: None,
                location: "Houston".to_string(),
                urgency: Some("High".to_string()),
                required_skills: vec!["driving".to_string()],
                start_time: None,
                end_time: None,
                preference_tag: None,
            },
            match_score: 3,
            matched_skills: vec!["driving".to_string()],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["event_id"], 3);
        assert_eq!(value["event_name"], "Food Drive");
        assert_eq!(value["matchScore"], 3);
        assert_eq!(value["matchedSkills"][0], "driving");
    }

    #[test]
    fn test_enrollment_status_round_trip() {
        for status in [
            EnrollmentStatus::Upcoming,
            EnrollmentStatus::Attended,
            EnrollmentStatus::Cancelled,
            EnrollmentStatus::Missed,
        ] {
            assert_eq!(status.as_str().parse::<EnrollmentStatus>(), Ok(status));
        }
        assert!("Pending".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(EnrollmentStatus::Upcoming.is_active());
        assert!(EnrollmentStatus::Attended.is_active());
        assert!(!EnrollmentStatus::Cancelled.is_active());
        assert!(!EnrollmentStatus::Missed.is_active());
    }
}
