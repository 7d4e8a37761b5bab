//! Profile module - the candidate the assistant searches on behalf of

use crate::error::ProfileError;
use crate::period::YearMonth;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the candidate is willing to work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
    /// Fully remote only
    Remote,
    /// Mix of remote and office
    Hybrid,
    /// Office only
    Onsite,
    /// No preference
    #[default]
    Any,
}

impl RemotePreference {
    /// Lowercase name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            RemotePreference::Remote => "remote",
            RemotePreference::Hybrid => "hybrid",
            RemotePreference::Onsite => "onsite",
            RemotePreference::Any => "any",
        }
    }
}

impl FromStr for RemotePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(RemotePreference::Remote),
            "hybrid" => Ok(RemotePreference::Hybrid),
            "onsite" => Ok(RemotePreference::Onsite),
            "any" => Ok(RemotePreference::Any),
            _ => Err(format!("Invalid remote preference: {}", s)),
        }
    }
}

impl fmt::Display for RemotePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of job the candidate is looking for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobPreferences {
    /// Desired role titles, matched against posting titles
    #[serde(default)]
    pub roles: Vec<String>,

    /// Desired locations, matched against posting locations
    #[serde(default)]
    pub locations: Vec<String>,

    /// Remote-work mode
    #[serde(default)]
    pub remote_preference: RemotePreference,

    /// Minimum acceptable salary
    #[serde(default)]
    pub min_salary: u32,
}

/// A past or current position
///
/// The period is private so that `start <= end` always holds. Periods are
/// whole months, so a position may start and end in the same month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExperienceDocument")]
pub struct Experience {
    /// Job title
    pub title: String,
    /// Employer name
    pub company: String,
    /// Where the work took place
    pub location: String,
    start: YearMonth,
    end: Option<YearMonth>,
    /// Free text summary
    pub description: String,
    /// Skills exercised in this position
    pub skills: Vec<String>,
}

impl Experience {
    /// Create a position; `end = None` means ongoing
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::EndBeforeStart`] if `end` precedes `start`.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        start: YearMonth,
        end: Option<YearMonth>,
    ) -> Result<Self, ProfileError> {
        check_period(start, end)?;
        Ok(Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            start,
            end,
            description: String::new(),
            skills: Vec::new(),
        })
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach the skill subset used in this position
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// First month in the position
    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// Last month in the position, `None` if ongoing
    pub fn end(&self) -> Option<YearMonth> {
        self.end
    }

    /// Whether the position is still held
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Replace the period, keeping the ordering invariant
    pub fn set_period(&mut self, start: YearMonth, end: Option<YearMonth>) -> Result<(), ProfileError> {
        check_period(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

fn check_period(start: YearMonth, end: Option<YearMonth>) -> Result<(), ProfileError> {
    match end {
        Some(end) if end < start => Err(ProfileError::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Ok(()),
    }
}

#[derive(Deserialize)]
struct ExperienceDocument {
    title: String,
    company: String,
    #[serde(default)]
    location: String,
    start: YearMonth,
    #[serde(default)]
    end: Option<YearMonth>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    skills: Vec<String>,
}

impl TryFrom<ExperienceDocument> for Experience {
    type Error = ProfileError;

    fn try_from(doc: ExperienceDocument) -> Result<Self, Self::Error> {
        Ok(Experience::new(doc.title, doc.company, doc.location, doc.start, doc.end)?
            .with_description(doc.description)
            .with_skills(doc.skills))
    }
}

/// A degree or qualification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Degree name
    pub degree: String,
    /// Awarding institution
    pub institution: String,
    /// Institution location
    #[serde(default)]
    pub location: String,
    /// Month of graduation
    pub graduation: YearMonth,
    /// Free text summary
    #[serde(default)]
    pub description: String,
}

/// The candidate
///
/// Loaded once per session and changed only through explicit edits. The skill
/// list never holds duplicates (exact, case-sensitive match); use
/// [`Profile::add_skill`] to extend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileDocument")]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    skills: Vec<String>,
    /// Work history
    pub experience: Vec<Experience>,
    /// Degrees
    pub education: Vec<Education>,
    /// Search preferences
    pub job_preferences: JobPreferences,
    /// Reference to the base resume
    pub resume_url: String,
    /// External profile link
    pub linkedin_profile: String,
}

impl Profile {
    /// Create an empty profile
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            job_preferences: JobPreferences::default(),
            resume_url: String::new(),
            linkedin_profile: String::new(),
        }
    }

    /// Skills in insertion order
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Whether the exact skill is present
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Append a skill
    ///
    /// # Errors
    ///
    /// Rejects blank skills and exact duplicates. `"excel"` and `"Excel"` are
    /// distinct skills.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> Result<(), ProfileError> {
        let skill = skill.into();
        if skill.trim().is_empty() {
            return Err(ProfileError::BlankSkill);
        }
        if self.has_skill(&skill) {
            return Err(ProfileError::DuplicateSkill(skill));
        }
        self.skills.push(skill);
        Ok(())
    }

    /// Remove a skill, returning whether it was present
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }

    /// Builder form of [`Profile::add_skill`] for several skills
    pub fn with_skills<I, S>(mut self, skills: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            self.add_skill(skill)?;
        }
        Ok(self)
    }
}

#[derive(Deserialize)]
struct ProfileDocument {
    name: String,
    email: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experience: Vec<Experience>,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    job_preferences: JobPreferences,
    #[serde(default)]
    resume_url: String,
    #[serde(default)]
    linkedin_profile: String,
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = ProfileError;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        let mut profile = Profile::new(doc.name, doc.email).with_skills(doc.skills)?;
        profile.experience = doc.experience;
        profile.education = doc.education;
        profile.job_preferences = doc.job_preferences;
        profile.resume_url = doc.resume_url;
        profile.linkedin_profile = doc.linkedin_profile;
        Ok(profile)
    }
}
