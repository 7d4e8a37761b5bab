//! Listing views over a set of postings: filtering, ordering and dashboard totals

use crate::posting::{ApplicationStatus, JobPosting, PostingSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Ordering of a posting listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Match score, highest first (stable)
    #[default]
    Relevance,
    /// Posting date, newest first
    Date,
    /// Company name, A-Z
    Company,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "date" => Ok(SortOrder::Date),
            "company" => Ok(SortOrder::Company),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Criteria for narrowing a posting listing
///
/// Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingFilter {
    /// Case-insensitive term searched in title, company and description
    pub search: Option<String>,
    /// Keep only these categories
    pub categories: Vec<String>,
    /// Keep only these sources
    pub sources: Vec<PostingSource>,
    /// Result ordering
    pub sort: SortOrder,
}

impl PostingFilter {
    /// Whether a posting passes every criterion
    pub fn matches(&self, posting: &JobPosting) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                posting.title.to_lowercase().contains(&term)
                    || posting.company.to_lowercase().contains(&term)
                    || posting.description.to_lowercase().contains(&term)
            }
        };
        let matches_category =
            self.categories.is_empty() || self.categories.iter().any(|c| c == &posting.category);
        let matches_source = self.sources.is_empty() || self.sources.contains(&posting.source());

        matches_search && matches_category && matches_source
    }

    /// Filter and order a listing
    pub fn apply<'a, I>(&self, postings: I) -> Vec<JobPosting>
    where
        I: IntoIterator<Item = &'a JobPosting>,
    {
        let mut selected: Vec<JobPosting> = postings
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Relevance => selected.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
            SortOrder::Date => selected.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
            SortOrder::Company => selected.sort_by(|a, b| a.company.cmp(&b.company)),
        }
        selected
    }
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Every tracked posting
    pub total_jobs: usize,
    /// Postings still in `New`
    pub new_jobs: usize,
    /// Postings with an application in any stage
    pub applied_jobs: usize,
    /// Postings at interview stage
    pub interviews: usize,
    /// Postings with an offer, accepted or not
    pub offers: usize,
    /// Posting count per source
    pub jobs_by_source: BTreeMap<PostingSource, usize>,
    /// Posting count per category
    pub jobs_by_category: BTreeMap<String, usize>,
}

impl DashboardStats {
    /// Tally a set of postings
    pub fn from_postings<'a, I>(postings: I) -> Self
    where
        I: IntoIterator<Item = &'a JobPosting>,
    {
        let mut stats = DashboardStats::default();
        for source in PostingSource::ALL {
            stats.jobs_by_source.insert(source, 0);
        }

        for posting in postings {
            stats.total_jobs += 1;
            match posting.status {
                ApplicationStatus::New => stats.new_jobs += 1,
                ApplicationStatus::Interview => stats.interviews += 1,
                ApplicationStatus::Offer | ApplicationStatus::Accepted => stats.offers += 1,
                _ => {}
            }
            if posting.status.is_application() {
                stats.applied_jobs += 1;
            }
            *stats.jobs_by_source.entry(posting.source()).or_insert(0) += 1;
            *stats
                .jobs_by_category
                .entry(posting.category.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::PostingId;
    use chrono::{TimeZone, Utc};

    fn posting(source: PostingSource, key: &str, company: &str, day: u32, score: u8) -> JobPosting {
        let mut p = JobPosting::new(
            PostingId::new(source, key),
            format!("Role {}", key),
            company,
            "Dubai, UAE",
            Utc.with_ymd_and_hms(2024, 4, day, 9, 0, 0).unwrap(),
        )
        .with_category(if source == PostingSource::LinkedIn { "Operations" } else { "Engineering" })
        .with_description("Supports banking operations");
        p.match_score = score;
        p
    }

    fn sample() -> Vec<JobPosting> {
        vec![
            posting(PostingSource::LinkedIn, "1", "Zeta Bank", 10, 40),
            posting(PostingSource::Naukrigulf, "2", "Alpha Eng", 12, 70),
            posting(PostingSource::LinkedIn, "3", "Mid Corp", 11, 40),
        ]
    }

    fn keys(postings: &[JobPosting]) -> Vec<String> {
        postings.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_by_relevance() {
        let listing = PostingFilter::default().apply(&sample());
        assert_eq!(keys(&listing), vec!["ng-2", "li-1", "li-3"]);
    }

    #[test]
    fn test_sort_by_date_and_company() {
        let by_date = PostingFilter { sort: SortOrder::Date, ..Default::default() }.apply(&sample());
        assert_eq!(keys(&by_date), vec!["ng-2", "li-3", "li-1"]);

        let by_company = PostingFilter { sort: SortOrder::Company, ..Default::default() }.apply(&sample());
        assert_eq!(keys(&by_company), vec!["ng-2", "li-3", "li-1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let filter = PostingFilter { search: Some("ZETA".to_string()), ..Default::default() };
        assert_eq!(keys(&filter.apply(&sample())), vec!["li-1"]);

        let filter = PostingFilter { search: Some("banking".to_string()), ..Default::default() };
        assert_eq!(filter.apply(&sample()).len(), 3);

        let filter = PostingFilter { search: Some("  ".to_string()), ..Default::default() };
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_category_and_source_filters() {
        let filter = PostingFilter {
            categories: vec!["Engineering".to_string()],
            ..Default::default()
        };
        assert_eq!(keys(&filter.apply(&sample())), vec!["ng-2"]);

        let filter = PostingFilter {
            sources: vec![PostingSource::LinkedIn],
            ..Default::default()
        };
        assert_eq!(keys(&filter.apply(&sample())), vec!["li-1", "li-3"]);
    }

    #[test]
    fn test_dashboard_stats() {
        let mut postings = sample();
        postings[0].status = ApplicationStatus::Interview;
        postings[1].status = ApplicationStatus::Accepted;

        let stats = DashboardStats::from_postings(&postings);
        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.new_jobs, 1);
        assert_eq!(stats.applied_jobs, 2);
        assert_eq!(stats.interviews, 1);
        assert_eq!(stats.offers, 1);
        assert_eq!(stats.jobs_by_source[&PostingSource::LinkedIn], 2);
        assert_eq!(stats.jobs_by_source[&PostingSource::Naukrigulf], 1);
        assert_eq!(stats.jobs_by_category["Operations"], 2);
    }

    #[test]
    fn test_dashboard_stats_empty_lists_every_source() {
        let stats = DashboardStats::from_postings(&[]);
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.jobs_by_source.len(), 2);
    }
}
