use std::time::Duration;

use nytcampfin_lib::{CampfinError, Config, Options};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/svc/elections/us/v3/finances";

fn config_for(mock_server: &MockServer) -> Config {
    Config::new("test-key").with_base_uri(&format!("{}{}", mock_server.uri(), PREFIX))
}

#[tokio::test]
async fn repeated_listing_hits_network_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/2012/president/totals.json", PREFIX)))
        .and(query_param("api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"results":[{"name":"Obama, Barack"},{"name":"Romney, Mitt"}]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = config_for(&mock_server)
        .with_cache_ttl(Duration::from_secs(60))
        .client()
        .unwrap();

    let first = client.president().candidates(Options::default()).await.unwrap();
    let second = client.president().candidates(Options::default()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn other_offsets_are_fetched_separately() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/2012/committees/new.json", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = config_for(&mock_server).client().unwrap();
    let committees = client.committees();

    committees.latest(Options::default()).await.unwrap();
    committees
        .latest(Options::default().with_offset(20))
        .await
        .unwrap();
}

#[tokio::test]
async fn not_found_is_never_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/2012/committees/C00000000.json", PREFIX)))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"errors":["No committee found"]}"#),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = config_for(&mock_server).client().unwrap();

    for _ in 0..2 {
        let err: CampfinError = client
            .committees()
            .get("C00000000", Options::default())
            .await
            .unwrap_err()
            .into();
        assert!(err.is_not_found());
    }
}

#[tokio::test]
async fn zero_ttl_disables_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/2012/filings.json", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = config_for(&mock_server)
        .with_cache_ttl(Duration::ZERO)
        .client()
        .unwrap();

    client.filings().today(Options::default()).await.unwrap();
    client.filings().today(Options::default()).await.unwrap();
}

#[tokio::test]
async fn debug_urls_annotate_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/2012/candidates/P80003338.json", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[{"id":"P80003338"}]}"#))
        .mount(&mock_server)
        .await;

    let client = config_for(&mock_server)
        .with_debug_urls(true)
        .client()
        .unwrap();

    let candidate = client
        .candidates()
        .get("P80003338", Options::default())
        .await
        .unwrap();

    let url = candidate["_url"].as_str().unwrap();
    assert!(url.ends_with("/2012/candidates/P80003338.json?offset=0"));
    assert!(!url.contains("test-key"));
}
