// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod time;

pub use engine::{match_message, MatchEngine};
pub use filters::{normalize_tags, passes_threshold, split_tags, DEFAULT_SCORE_THRESHOLD};
pub use matcher::Matcher;
pub use scoring::{score_event, ScoreBreakdown, VolunteerIndex};
pub use time::{parse_instant, window_contains};
