// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trackrs::config::roster::Roster;
use trackrs::domain::services::matcher::SkillMatcher;
use trackrs::domain::services::scrape_service::SkillScraper;
use trackrs::engines::dashboard_engine::DashboardEngine;
use trackrs::infrastructure::cache::snapshot_cache::{SnapshotCache, SystemClock};

use crate::helpers::{dashboard_settings, skill_table};

fn roster() -> Roster {
    serde_yaml::from_str(
        r#"
members:
  - name: Jane Doe
    contact:
      email: jane@example.org
  - name: John Roe
    enabled: false
skills:
  - name: First Aid
    critical: true
    form_url: https://forms.example.org/first-aid
  - name: Fire Safety
    form_url: https://forms.example.org/fire-safety
  - name: Confined Spaces
    enabled: false
    form_url: https://forms.example.org/confined-spaces
"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_full_scrape_and_classify_pass() {
    let page = skill_table(&[
        // Tracked member, expired marker -> emitted
        ("Jane Doe", "First Aid", "Expired"),
        // Tracked member, long past date -> emitted
        ("Jane Doe", "Fire Safety", "01/01/2020"),
        // Tracked member, disabled skill definition -> dropped
        ("Jane Doe", "Confined Spaces", "Expired"),
        // Tracked member, untracked skill -> dropped
        ("Jane Doe", "Juggling", "Expired"),
        // Tracked member, far-future date -> dropped
        ("Jane Doe", "First Aid", "01/01/2099"),
        // Disabled member -> dropped
        ("John Roe", "First Aid", "Expired"),
        // Unknown person -> dropped
        ("Stranger", "First Aid", "Expired"),
    ]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let settings = dashboard_settings(&format!("{}/overview", server.uri()), 10);
    let tz = settings.timezone().unwrap();
    let threshold_days = settings.threshold_days;

    let scraper = SkillScraper::new(
        Arc::new(DashboardEngine),
        SnapshotCache::new(Arc::new(SystemClock)),
        settings,
    );
    let roster = roster();

    let records = scraper.scrape(None).await.unwrap();
    assert_eq!(records.len(), 7);

    let expiring = SkillMatcher::classify(
        &roster.members,
        &roster.skills,
        &records,
        threshold_days,
        tz,
    );

    assert_eq!(expiring.len(), 2);

    assert_eq!(expiring[0].member, "Jane Doe");
    assert_eq!(expiring[0].skill, "First Aid");
    assert_eq!(expiring[0].due_date, "Expired");
    assert!(expiring[0].critical);
    assert_eq!(expiring[0].url, "https://forms.example.org/first-aid");

    assert_eq!(expiring[1].skill, "Fire Safety");
    assert_eq!(expiring[1].due_date, "01/01/2020");
    assert!(!expiring[1].critical);
}
