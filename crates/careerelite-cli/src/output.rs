//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use careerelite_domain::{Contact, DashboardStats, JobPosting};
use careerelite_engine::{ApplicationReceipt, ScrapeReport, SchedulerStatus};
use chrono::{DateTime, Utc};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a posting listing.
    pub fn format_postings(&self, postings: &[JobPosting]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(postings)?),
            OutputFormat::Table => Ok(self.postings_table(postings)),
            OutputFormat::Quiet => Ok(postings
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the result of one scrape, showing at most `limit` postings.
    pub fn format_report(&self, report: &ScrapeReport, limit: Option<usize>) -> Result<String> {
        let shown = &report.postings[..limit.unwrap_or(usize::MAX).min(report.postings.len())];
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(report)?;
                value["postings"] = serde_json::to_value(shown)?;
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => self.format_postings(shown),
            OutputFormat::Table => {
                let mut lines = Vec::new();
                for failure in &report.failures {
                    lines.push(self.warning(failure));
                }
                lines.push(self.postings_table(shown));
                lines.push(self.run_summary(report));
                Ok(lines.join("\n"))
            }
        }
    }

    /// One line describing a completed scrape.
    pub fn run_summary(&self, report: &ScrapeReport) -> String {
        if report.skipped {
            return self.warning("Scrape skipped: another scrape is in progress");
        }
        let msg = format!(
            "{} postings scraped ({} new, {} already tracked)",
            report.postings.len(),
            report.added,
            report.duplicates
        );
        if report.failures.is_empty() {
            self.success(&msg)
        } else {
            self.warning(&format!("{}, {} source(s) failed", msg, report.failures.len()))
        }
    }

    /// Format search keywords.
    pub fn format_keywords(&self, keywords: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(keywords)?),
            OutputFormat::Quiet => Ok(keywords.join("\n")),
            OutputFormat::Table => {
                if keywords.is_empty() {
                    return Ok(self.colorize("No keywords: add roles or skills to the profile.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["#", "Keyword"]);
                for (i, keyword) in keywords.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), keyword.clone()]);
                }
                Ok(Self::render(builder))
            }
        }
    }

    /// Format the contacts found for a posting.
    pub fn format_contacts(&self, contacts: &[Contact]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(contacts)?),
            OutputFormat::Quiet => Ok(contacts
                .iter()
                .map(|c| c.profile_url.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if contacts.is_empty() {
                    return Ok(self.colorize("No contacts found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Name", "Position", "Company", "Profile"]);
                for contact in contacts {
                    builder.push_record([
                        contact.name.as_str(),
                        contact.position.as_str(),
                        contact.company.as_str(),
                        contact.profile_url.as_str(),
                    ]);
                }
                Ok(Self::render(builder))
            }
        }
    }

    /// Format a successful application.
    pub fn format_receipt(&self, posting: &JobPosting, receipt: &ApplicationReceipt) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
            OutputFormat::Quiet => Ok(receipt.folder.clone()),
            OutputFormat::Table => {
                let mut lines = vec![
                    self.success(&format!("Applied to {} at {}", posting.title, posting.company)),
                    format!("  Resume:       {}", receipt.resume_id),
                ];
                if let Some(letter) = &receipt.cover_letter_id {
                    lines.push(format!("  Cover letter: {}", letter));
                }
                lines.push(format!("  Folder:       {}", receipt.folder));
                lines.push(format!("  Applied at:   {}", timestamp(receipt.applied_at)));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format dashboard statistics.
    pub fn format_stats(&self, stats: &DashboardStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(stats.total_jobs.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                for (label, count) in [
                    ("Total jobs", stats.total_jobs),
                    ("New", stats.new_jobs),
                    ("Applied", stats.applied_jobs),
                    ("Interviews", stats.interviews),
                    ("Offers", stats.offers),
                ] {
                    builder.push_record([label.to_string(), count.to_string()]);
                }
                for (source, count) in &stats.jobs_by_source {
                    builder.push_record([format!("Source: {}", source), count.to_string()]);
                }
                for (category, count) in &stats.jobs_by_category {
                    builder.push_record([format!("Category: {}", category), count.to_string()]);
                }
                Ok(Self::render(builder))
            }
        }
    }

    /// Format scheduler freshness.
    pub fn format_status(&self, status: &SchedulerStatus) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(status)?),
            OutputFormat::Quiet => Ok(String::new()),
            OutputFormat::Table => {
                let state = if status.is_running { "running" } else { "stopped" };
                let last = status.last_run.map(timestamp).unwrap_or_else(|| "never".to_string());
                let next = status.next_run.map(timestamp).unwrap_or_else(|| "-".to_string());
                Ok(self.info(&format!("Scheduler {} | last run: {} | next run: {}", state, last, next)))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn postings_table(&self, postings: &[JobPosting]) -> String {
        if postings.is_empty() {
            return self.colorize("No postings found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Score", "ID", "Title", "Company", "Location", "Category", "Status", "Posted"]);
        for posting in postings {
            builder.push_record([
                posting.match_score.to_string(),
                posting.id.to_string(),
                posting.title.clone(),
                posting.company.clone(),
                posting.location.clone(),
                posting.category.clone(),
                posting.status.to_string(),
                posting.posted_at.format("%Y-%m-%d").to_string(),
            ]);
        }
        Self::render(builder)
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerelite_domain::{ApplicationStatus, DocumentId, PostingId, PostingSource};
    use careerelite_engine::Trigger;
    use chrono::TimeZone;

    fn posting(key: &str, score: u8) -> JobPosting {
        let mut posting = JobPosting::new(
            PostingId::new(PostingSource::LinkedIn, key),
            "Process Engineer",
            "Gulf Manufacturing Co",
            "Dubai, UAE",
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
        .with_category("Operations");
        posting.match_score = score;
        posting
    }

    fn report() -> ScrapeReport {
        ScrapeReport {
            trigger: Trigger::Manual,
            started_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            postings: vec![posting("1", 66), posting("2", 53), posting("3", 31)],
            added: 3,
            duplicates: 0,
            failures: vec!["Naukrigulf unavailable: timeout".to_string()],
            skipped: false,
        }
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_postings(&[posting("1", 66)]).unwrap();
        assert!(output.contains("Score"));
        assert!(output.contains("li-1"));
        assert!(output.contains("2024-03-01"));
        assert!(output.contains(ApplicationStatus::New.as_str()));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_postings(&[posting("1", 66), posting("2", 10)]).unwrap();
        assert_eq!(output, "li-1\nli-2");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_postings(&[posting("1", 66)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "li-1");
        assert_eq!(value[0]["match_score"], 66);
    }

    #[test]
    fn test_empty_postings() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_postings(&[]).unwrap();
        assert!(output.contains("No postings found"));
    }

    #[test]
    fn test_report_limit_and_failures() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report(), Some(2)).unwrap();
        assert!(output.contains("⚠ Naukrigulf unavailable: timeout"));
        assert!(output.contains("li-2"));
        assert!(!output.contains("li-3"));
        assert!(output.contains("3 postings scraped (3 new, 0 already tracked), 1 source(s) failed"));

        let json = Formatter::new(OutputFormat::Json, false).format_report(&report(), Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["postings"].as_array().unwrap().len(), 1);
        assert_eq!(value["added"], 3);
        assert_eq!(value["trigger"], "manual");
    }

    #[test]
    fn test_receipt() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let posting = posting("1", 66);
        let receipt = ApplicationReceipt {
            posting: posting.id.clone(),
            resume_id: DocumentId::new("cv-1-li-1"),
            cover_letter_id: None,
            folder: posting.document_folder(),
            applied_at: Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap(),
        };

        let output = formatter.format_receipt(&posting, &receipt).unwrap();
        assert!(output.starts_with("✓ Applied to Process Engineer at Gulf Manufacturing Co"));
        assert!(output.contains("cv-1-li-1"));
        assert!(!output.contains("Cover letter"));
        assert!(output.contains("2024-03-02 10:30 UTC"));

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_receipt(&posting, &receipt).unwrap();
        assert_eq!(quiet, "/Jobs/Operations – Gulf Manufacturing Co – li-1/");
    }

    #[test]
    fn test_stats_table_lists_sources() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let stats = DashboardStats::from_postings(&[posting("1", 66)]);
        let output = formatter.format_stats(&stats).unwrap();
        assert!(output.contains("Source: LinkedIn"));
        assert!(output.contains("Source: Naukrigulf"));
        assert!(output.contains("Category: Operations"));
    }

    #[test]
    fn test_status_line() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let status = SchedulerStatus {
            is_running: true,
            last_run: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            next_run: Some(Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap()),
        };
        assert_eq!(
            formatter.format_status(&status).unwrap(),
            "ℹ Scheduler running | last run: 2024-03-01 09:00 UTC | next run: 2024-03-01 15:00 UTC"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
