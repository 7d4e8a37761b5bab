//! Match scoring
//!
//! Deterministic, additive heuristic scoring a posting against a profile.
//! Every term is a case-insensitive substring test:
//!
//! | Term | Points |
//! |------|--------|
//! | posting title contains a preferred role (per role) | 20 |
//! | any requirement contains a skill (per skill) | 5 |
//! | description contains a skill (per skill) | 3 |
//! | location contains any preferred location | 15 |
//! | remote preference and location contains "remote" | 15 |
//!
//! The sum is capped at [`MAX_SCORE`].

use crate::posting::JobPosting;
use crate::profile::{Profile, RemotePreference};

/// Points per preferred role found in the title
pub const ROLE_POINTS: u32 = 20;

/// Points per skill found in any requirement line
pub const REQUIREMENT_SKILL_POINTS: u32 = 5;

/// Points per skill found in the description
pub const DESCRIPTION_SKILL_POINTS: u32 = 3;

/// Points when the location matches any preferred location
pub const LOCATION_POINTS: u32 = 15;

/// Points when a remote-only candidate sees a remote location
pub const REMOTE_POINTS: u32 = 15;

/// Upper bound of the score
pub const MAX_SCORE: u8 = 100;

/// Compute the match score of `posting` for `profile`, in `0..=100`
///
/// Pure: identical inputs always yield identical output.
pub fn match_score(posting: &JobPosting, profile: &Profile) -> u8 {
    let title = posting.title.to_lowercase();
    let description = posting.description.to_lowercase();
    let location = posting.location.to_lowercase();
    let requirements: Vec<String> = posting.requirements.iter().map(|r| r.to_lowercase()).collect();
    let prefs = &profile.job_preferences;

    let mut score: u32 = 0;

    for role in &prefs.roles {
        if title.contains(&role.to_lowercase()) {
            score += ROLE_POINTS;
        }
    }

    for skill in profile.skills() {
        let skill = skill.to_lowercase();
        if requirements.iter().any(|req| req.contains(&skill)) {
            score += REQUIREMENT_SKILL_POINTS;
        }
        if description.contains(&skill) {
            score += DESCRIPTION_SKILL_POINTS;
        }
    }

    if prefs
        .locations
        .iter()
        .any(|loc| location.contains(&loc.to_lowercase()))
    {
        score += LOCATION_POINTS;
    }

    if prefs.remote_preference == RemotePreference::Remote && location.contains("remote") {
        score += REMOTE_POINTS;
    }

    score.min(u32::from(MAX_SCORE)) as u8
}

/// Sort postings by score, highest first
///
/// Stable: postings with equal scores keep their relative order.
pub fn sort_by_score(postings: &mut [JobPosting]) {
    postings.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

/// Score every posting against `profile` and sort highest first (stable)
pub fn rank(mut postings: Vec<JobPosting>, profile: &Profile) -> Vec<JobPosting> {
    for posting in &mut postings {
        posting.match_score = match_score(posting, profile);
    }
    sort_by_score(&mut postings);
    postings
}
