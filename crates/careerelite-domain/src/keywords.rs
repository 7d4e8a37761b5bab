//! Search keyword extraction

use crate::profile::Profile;
use std::collections::HashSet;

/// Only the leading skills feed the search, to keep queries focused
pub const MAX_KEYWORD_SKILLS: usize = 10;

/// Derive search keywords from a profile
///
/// Preferred roles, then the first [`MAX_KEYWORD_SKILLS`] skills, then every
/// experience title. Blank entries are dropped and exact duplicates removed,
/// keeping the first occurrence. Order is preserved, not alphabetized.
///
/// # Examples
///
/// ```
/// use careerelite_domain::{extract_keywords, Profile};
///
/// let mut profile = Profile::new("Ada", "ada@example.com").with_skills(["ESG", "Excel"]).unwrap();
/// profile.job_preferences.roles = vec!["ESG".to_string(), " ".to_string()];
///
/// assert_eq!(extract_keywords(&profile), vec!["ESG", "Excel"]);
/// ```
pub fn extract_keywords(profile: &Profile) -> Vec<String> {
    let candidates = profile
        .job_preferences
        .roles
        .iter()
        .chain(profile.skills().iter().take(MAX_KEYWORD_SKILLS))
        .chain(profile.experience.iter().map(|exp| &exp.title));

    let mut seen = HashSet::new();
    candidates
        .map(String::as_str)
        .filter(|keyword| !keyword.trim().is_empty())
        .filter(|keyword| seen.insert(*keyword))
        .map(str::to_string)
        .collect()
}
