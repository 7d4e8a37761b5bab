//! Integration tests: sample profile against the fixture boards

use careerelite_domain::traits::{ContactFinder, DocumentGenerator, JobSource};
use careerelite_domain::{extract_keywords, rank, JobPosting};
use careerelite_sources::{
    sample_profile, FixedCount, FixtureSource, SimulatedContactFinder, SimulatedDocumentGenerator,
    SourceConfig,
};

async fn fetch_all() -> Vec<JobPosting> {
    let profile = sample_profile().unwrap();
    let keywords = extract_keywords(&profile);

    let mut postings = Vec::new();
    for source in FixtureSource::all(&SourceConfig::instant()) {
        postings.extend(source.fetch(&keywords).await.unwrap());
    }
    postings
}

#[tokio::test]
async fn test_sample_profile_keywords() {
    let keywords = extract_keywords(&sample_profile().unwrap());

    // 5 roles + 10 skills + 3 titles, with "Operations Analyst" already a role
    assert_eq!(keywords.len(), 17);
    assert_eq!(keywords[0], "Project Manager");
    assert_eq!(keywords[5], "Project Coordination");
    assert_eq!(keywords[14], "Data Analysis");
    assert_eq!(&keywords[15..], &["Project Coordinator", "Process Design Engineer"]);
}

#[tokio::test]
async fn test_fixture_ranking_for_sample_profile() {
    let ranked = rank(fetch_all().await, &sample_profile().unwrap());

    let order: Vec<(String, u8)> = ranked
        .iter()
        .map(|p| (p.id.to_string(), p.match_score))
        .collect();
    assert_eq!(
        order,
        vec![
            ("li-1".to_string(), 66),
            ("ng-2".to_string(), 58),
            ("li-2".to_string(), 53),
            ("ng-1".to_string(), 31),
        ]
    );
}

#[tokio::test]
async fn test_apply_collaborators_share_folder() {
    let profile = sample_profile().unwrap();
    let postings = fetch_all().await;
    let top = &postings[0];

    let generator = SimulatedDocumentGenerator::new(&SourceConfig::instant());
    let resume = generator.generate_resume(&profile, top).await.unwrap();
    let letter = generator.generate_cover_letter(&profile, top).await.unwrap();

    assert!(resume.as_str().starts_with("cv-"));
    assert!(letter.as_str().ends_with("-li-1"));
    assert_eq!(
        generator.folders(),
        vec!["/Jobs/ESG/Climate – Global Sustainability Corp – li-1/"]
    );

    let finder = SimulatedContactFinder::new(&SourceConfig::instant(), FixedCount(4));
    let contacts = finder.find_contacts(top, 5).await.unwrap();
    assert_eq!(contacts.len(), 4);
    assert!(contacts.iter().all(|c| c.company == "Global Sustainability Corp"));
}
