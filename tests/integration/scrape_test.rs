// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trackrs::domain::services::scrape_service::SkillScraper;
use trackrs::engines::dashboard_engine::DashboardEngine;
use trackrs::infrastructure::cache::snapshot_cache::SnapshotCache;

use crate::helpers::{dashboard_settings, login_page, skill_table, FakeClock};

fn scraper(url: &str, ttl_minutes: u64, clock: Arc<FakeClock>) -> SkillScraper {
    SkillScraper::new(
        Arc::new(DashboardEngine),
        SnapshotCache::new(clock),
        dashboard_settings(url, ttl_minutes),
    )
}

#[tokio::test]
async fn test_second_scrape_within_ttl_hits_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/overview"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(skill_table(&[("A", "X", "01/01/2020")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let clock = Arc::new(FakeClock::new());
    let scraper = scraper(&format!("{}/overview", server.uri()), 10, clock.clone());

    let first = scraper.scrape(None).await.unwrap();
    clock.advance_minutes(9);
    let second = scraper.scrape(None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    // expect(1) on the mock asserts no second upstream call happened
}

#[tokio::test]
async fn test_scrape_after_ttl_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/overview"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(skill_table(&[("A", "X", "01/01/2020")])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = Arc::new(FakeClock::new());
    let scraper = scraper(&format!("{}/overview", server.uri()), 10, clock.clone());

    scraper.scrape(None).await.unwrap();
    clock.advance_minutes(11);
    scraper.scrape(None).await.unwrap();
}

#[tokio::test]
async fn test_zero_ttl_disables_caching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/overview"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(skill_table(&[("A", "X", "01/01/2020")])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = Arc::new(FakeClock::new());
    let scraper = scraper(&format!("{}/overview", server.uri()), 0, clock);

    scraper.scrape(None).await.unwrap();
    scraper.scrape(None).await.unwrap();
}

#[tokio::test]
async fn test_empty_page_preserves_last_known_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(skill_table(&[("A", "X", "01/01/2020")])),
        )
        .mount(&server)
        .await;

    let clock = Arc::new(FakeClock::new());
    let scraper = scraper(&server.uri(), 0, clock);

    let first = scraper.scrape(None).await.unwrap();
    assert_eq!(first.len(), 1);

    // The dashboard now serves a table-less login page
    server.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_page()))
        .mount(&server)
        .await;

    let second = scraper.scrape(None).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(scraper.last_known_good().await, Some(first));
}

#[tokio::test]
async fn test_network_error_propagates_and_preserves_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(skill_table(&[("A", "X", "01/01/2020")])),
        )
        .mount(&server)
        .await;

    let clock = Arc::new(FakeClock::new());
    let scraper = scraper(&server.uri(), 0, clock);

    let first = scraper.scrape(None).await.unwrap();

    server.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = scraper.scrape(None).await;
    assert!(result.is_err());
    assert_eq!(scraper.last_known_good().await, Some(first));
}
