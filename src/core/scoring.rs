use crate::core::time::window_contains;
use crate::models::{Event, Volunteer};
use std::collections::HashSet;

/// Per-signal breakdown of a match score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub location: u32,
    pub availability: u32,
    pub preference: u32,
    pub matched_skills: Vec<String>,
}

impl ScoreBreakdown {
    pub fn skill_score(&self) -> u32 {
        self.matched_skills.len() as u32
    }

    /// Additive score:
    /// score = location + availability + |matched skills| + preference
    pub fn total(&self) -> u32 {
        self.location + self.availability + self.skill_score() + self.preference
    }
}

/// Volunteer data indexed once per ranking call
///
/// Skills and preferences are trimmed here as well, so hand-built volunteers
/// score the same as deserialized ones.
#[derive(Debug)]
pub struct VolunteerIndex<'a> {
    volunteer: &'a Volunteer,
    skills: HashSet<&'a str>,
    preferences: HashSet<&'a str>,
}

impl<'a> VolunteerIndex<'a> {
    pub fn new(volunteer: &'a Volunteer) -> Self {
        Self {
            volunteer,
            skills: trimmed_set(&volunteer.skills),
            preferences: trimmed_set(&volunteer.preferences),
        }
    }

    pub fn volunteer(&self) -> &'a Volunteer {
        self.volunteer
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill.trim())
    }
}

fn trimmed_set(tags: &[String]) -> HashSet<&str> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Score one event for an indexed volunteer
pub fn score_event(index: &VolunteerIndex<'_>, event: &Event) -> ScoreBreakdown {
    let volunteer = index.volunteer;

    // Exact, case-sensitive comparison
    let location = u32::from(volunteer.location == event.location);

    let availability = u32::from(window_contains(
        volunteer.availability.start,
        volunteer.availability.end,
        event.start_time,
        event.end_time,
    ));

    // The event tag is compared as stored; only the volunteer side is trimmed
    let preference = u32::from(
        event
            .preference_tag
            .as_deref()
            .is_some_and(|tag| index.preferences.contains(tag)),
    );

    ScoreBreakdown {
        location,
        availability,
        preference,
        matched_skills: matched_skills(index, &event.required_skills),
    }
}

/// Intersection of required skills with the volunteer's skills, in required order
pub fn matched_skills(index: &VolunteerIndex<'_>, required: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    required
        .iter()
        .map(|skill| skill.trim())
        .filter(|skill| !skill.is_empty() && index.skills.contains(skill) && seen.insert(*skill))
        .map(str::to_string)
        .collect()
}
