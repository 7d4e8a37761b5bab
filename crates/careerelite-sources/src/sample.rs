//! Built-in sample profile, used when no profile file is configured

use careerelite_domain::{Education, Experience, JobPreferences, Profile, ProfileError, RemotePreference};

/// A complete candidate profile for demos and tests
///
/// # Errors
///
/// Only if the built-in data itself violates a profile invariant.
///
/// # Examples
///
/// ```
/// let profile = careerelite_sources::sample_profile().unwrap();
/// assert_eq!(profile.skills().len(), 16);
/// assert!(profile.experience[0].is_ongoing());
/// ```
pub fn sample_profile() -> Result<Profile, ProfileError> {
    let mut profile = Profile::new("Vishnu Madhusudhan", "vishnu.madhusudhan@example.com").with_skills([
        "Project Coordination",
        "Stakeholder Engagement",
        "ESG",
        "Compliance",
        "Student Success",
        "Banking Operations",
        "Engineering",
        "Process Design",
        "Client Support",
        "Data Analysis",
        "Risk Tracking",
        "Jira",
        "Power BI",
        "Excel",
        "Qualtrics",
        "Microsoft Projects",
    ])?;

    profile.experience = vec![
        Experience::new(
            "Project Coordinator",
            "Global Sustainability Initiative",
            "Remote, India",
            "2023-01".parse()?,
            None,
        )?
        .with_description(
            "Coordinated ESG compliance projects, tracked risks, and engaged with stakeholders \
             using Jira and Power BI for reporting.",
        )
        .with_skills(["Project Coordination", "ESG", "Risk Tracking", "Jira", "Power BI"]),
        Experience::new(
            "Operations Analyst",
            "National Banking Corporation",
            "Mumbai, India",
            "2021-06".parse()?,
            Some("2022-12".parse()?),
        )?
        .with_description(
            "Supported banking operations and client success initiatives. Analyzed operational \
             data to improve processes and customer satisfaction.",
        )
        .with_skills(["Banking Operations", "Client Support", "Data Analysis", "Excel"]),
        Experience::new(
            "Process Design Engineer",
            "Engineering Solutions Ltd",
            "Kerala, India",
            "2019-03".parse()?,
            Some("2021-05".parse()?),
        )?
        .with_description(
            "Designed chemical engineering processes and supported client projects. Implemented \
             process improvements and documentation.",
        )
        .with_skills(["Engineering", "Process Design", "Client Support"]),
    ];

    profile.education = vec![
        Education {
            degree: "MSc Engineering Management".to_string(),
            institution: "University of Greenwich".to_string(),
            location: "London, UK".to_string(),
            graduation: "2018-12".parse()?,
            description: "Focus on project management and engineering business principles.".to_string(),
        },
        Education {
            degree: "BEng Chemical Engineering".to_string(),
            institution: "Mahatma Gandhi University".to_string(),
            location: "Kerala, India".to_string(),
            graduation: "2016-05".parse()?,
            description: "Specialized in process engineering and design fundamentals.".to_string(),
        },
    ];

    profile.job_preferences = JobPreferences {
        roles: [
            "Project Manager",
            "ESG Consultant",
            "Operations Analyst",
            "Process Engineer",
            "Sustainability Specialist",
        ]
        .map(String::from)
        .to_vec(),
        locations: ["India", "Remote", "Dubai", "UK", "Singapore"].map(String::from).to_vec(),
        remote_preference: RemotePreference::Remote,
        min_salary: 75_000,
    };
    profile.resume_url = "https://example.com/vishnu-resume.pdf".to_string();
    profile.linkedin_profile = "https://linkedin.com/in/vishnu-madhusudhan".to_string();

    Ok(profile)
}
