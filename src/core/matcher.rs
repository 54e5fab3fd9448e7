use crate::core::{
    filters::{passes_threshold, DEFAULT_SCORE_THRESHOLD},
    scoring::{matched_skills, score_event, VolunteerIndex},
};
use crate::models::{CandidateVolunteer, Event, MatchResult, Volunteer};

/// Ranks candidate events for a volunteer
///
/// # Pipeline Stages
/// 1. Score every event independently
/// 2. Keep scores strictly above the threshold
/// 3. Stable sort, descending by score
///
/// Equal scores keep their input order; there is no secondary key.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: u32,
}

impl Matcher {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Score, filter and order `events` for `volunteer`
    ///
    /// Pure: performs no I/O and never fails.
    pub fn rank(&self, volunteer: &Volunteer, events: Vec<Event>) -> Vec<MatchResult> {
        let index = VolunteerIndex::new(volunteer);

        let mut ranked: Vec<MatchResult> = events
            .into_iter()
            .filter_map(|event| {
                let breakdown = score_event(&index, &event);
                let match_score = breakdown.total();

                if passes_threshold(match_score, self.threshold) {
                    Some(MatchResult {
                        event,
                        match_score,
                        matched_skills: breakdown.matched_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        ranked
    }

    /// Rank volunteers for an event by skill overlap
    ///
    /// Only volunteers sharing at least one required skill are returned,
    /// ordered by overlap (descending) then full name (ascending).
    pub fn rank_candidates(&self, event: &Event, volunteers: &[Volunteer]) -> Vec<CandidateVolunteer> {
        let mut candidates: Vec<CandidateVolunteer> = volunteers
            .iter()
            .filter_map(|volunteer| {
                let index = VolunteerIndex::new(volunteer);
                let skills = matched_skills(&index, &event.required_skills);

                if skills.is_empty() {
                    return None;
                }

                Some(CandidateVolunteer {
                    volunteer_id: volunteer.id,
                    full_name: volunteer.full_name.clone(),
                    overlap: skills.len() as u32,
                    skills,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.overlap
                .cmp(&a.overlap)
                .then_with(|| a.full_name.cmp(&b.full_name))
        });

        candidates
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_THRESHOLD)
    }
}
