use mktdash_util::build_client;
use mktdash_warehouse::schema::market::equity::{self, INDEX_FUNDS};
use mktdash_warehouse::schema::market::repo::{self, OperationKind};
use mktdash_warehouse::schema::market::rates;
use mktdash_warehouse::table::PLACEHOLDER_COLUMN;
use mktdash_warehouse::{Endpoints, MarketSnapshot, Table};
use pretty_assertions::assert_eq;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REF_RATES: &str = r#"{"refRates": [
    {"effectiveDate": "2024-05-01", "type": "SOFRAI", "index": 1.1234},
    {"effectiveDate": "2024-05-01", "type": "EFFR", "percentRate": 5.33},
    {"effectiveDate": "2024-05-01", "type": "SOFR", "percentRate": 5.31}
]}"#;

fn repo_results(repo_rate: f64, reverse_rate: f64) -> String {
    format!(
        r#"{{"repo": {{"operations": [
            {{"operationDate": "2024-05-01", "operationType": "Repo", "maturityDate": "2024-05-02",
              "details": [{{"securityType": "Treasury", "minimumBidRate": {repo_rate}}}]}},
            {{"operationDate": "2024-05-01", "operationType": "Reverse Repo", "maturityDate": "2024-05-02",
              "details": [{{"securityType": "Treasury", "percentOfferingRate": {reverse_rate}}}]}}
        ]}}}}"#
    )
}

fn chart(open: f64, close: f64) -> String {
    format!(
        r#"{{"chart": {{"result": [{{
            "timestamp": [1714570200],
            "indicators": {{"quote": [{{"open": [{open}], "close": [{close}], "volume": [1000]}}]}}
        }}], "error": null}}}}"#
    )
}

fn http(timeout: Duration) -> reqwest::Client {
    build_client("mktdash-test", timeout).unwrap()
}

async fn mount(server: &MockServer, at: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn reference_rates_skip_the_leading_entry() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rates/all/latest.json",
        ResponseTemplate::new(200).set_body_string(REF_RATES),
    )
    .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = rates::fetch(&http(Duration::from_secs(5)), &endpoints).await;

    let types: Vec<String> = table
        .rows()
        .unwrap()
        .iter()
        .map(|r| r.rate_type.clone())
        .collect();
    assert_eq!(types, vec!["EFFR", "SOFR"]);
}

#[tokio::test]
async fn reference_rate_outage_is_a_placeholder() {
    let server = MockServer::start().await;
    mount(&server, "/api/rates/all/latest.json", ResponseTemplate::new(500)).await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = rates::fetch(&http(Duration::from_secs(5)), &endpoints).await;

    assert_eq!(table, Table::placeholder(rates::UNAVAILABLE));
}

#[tokio::test]
async fn slow_reference_rates_time_out_into_a_placeholder() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rates/all/latest.json",
        ResponseTemplate::new(200)
            .set_body_string(REF_RATES)
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = rates::fetch(&http(Duration::from_millis(200)), &endpoints).await;

    assert!(table.is_placeholder());
}

#[tokio::test]
async fn repo_falls_back_to_the_latest_window() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rp/all/all/results/lastTwoWeeks.json",
        ResponseTemplate::new(500),
    )
    .await;
    mount(
        &server,
        "/api/rp/all/all/results/latest.json",
        ResponseTemplate::new(200).set_body_string(repo_results(5.5, 5.3)),
    )
    .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = repo::fetch(&http(Duration::from_secs(5)), &endpoints).await;

    let rows = table.rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, OperationKind::Repo);
    assert_eq!(rows[0].rate, 5.5);
    assert_eq!(rows[1].kind, OperationKind::ReverseRepo);
    assert_eq!(rows[1].rate, 5.3);
}

#[tokio::test]
async fn repo_prefers_the_two_week_window() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rp/all/all/results/lastTwoWeeks.json",
        ResponseTemplate::new(200).set_body_string(repo_results(5.33, 5.08)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/rp/all/all/results/latest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(repo_results(9.0, 9.0)))
        .expect(0)
        .mount(&server)
        .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = repo::fetch(&http(Duration::from_secs(5)), &endpoints).await;

    let rates: Vec<f64> = table.rows().unwrap().iter().map(|r| r.rate).collect();
    assert_eq!(rates, vec![5.33, 5.08]);
}

#[tokio::test]
async fn repo_without_any_source_is_a_placeholder() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rp/all/all/results/lastTwoWeeks.json",
        ResponseTemplate::new(503),
    )
    .await;
    mount(
        &server,
        "/api/rp/all/all/results/latest.json",
        ResponseTemplate::new(200).set_body_string(r#"{"repo": {"operations": []}}"#),
    )
    .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = repo::fetch(&http(Duration::from_secs(5)), &endpoints).await;

    assert_eq!(table, Table::placeholder(repo::UNAVAILABLE));
}

#[tokio::test]
async fn one_failed_ticker_replaces_every_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/IVV"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart(500.0, 505.0)))
        .mount(&server)
        .await;
    mount(&server, "/v8/finance/chart/QQQ", ResponseTemplate::new(404)).await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/DIA"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart(380.0, 382.0)))
        .expect(0)
        .mount(&server)
        .await;

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let table = equity::fetch(&http(Duration::from_secs(5)), &endpoints, INDEX_FUNDS).await;

    assert_eq!(table, Table::placeholder(equity::UNAVAILABLE));
    let frame = table.frame("Equity Indices");
    assert_eq!(frame.columns, vec![PLACEHOLDER_COLUMN]);
    assert_eq!(frame.rows, vec![vec![equity::UNAVAILABLE]]);
}

#[tokio::test]
async fn snapshot_keeps_healthy_tables_next_to_placeholders() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/rates/all/latest.json",
        ResponseTemplate::new(200).set_body_string(REF_RATES),
    )
    .await;
    mount(
        &server,
        "/api/rp/all/all/results/lastTwoWeeks.json",
        ResponseTemplate::new(500),
    )
    .await;
    mount(
        &server,
        "/api/rp/all/all/results/latest.json",
        ResponseTemplate::new(500),
    )
    .await;
    for fund in INDEX_FUNDS {
        mount(
            &server,
            &format!("/v8/finance/chart/{}", fund.ticker),
            ResponseTemplate::new(200).set_body_string(chart(100.0, 101.0)),
        )
        .await;
    }

    let endpoints = Endpoints::all_at(&server.uri(), "test-key");
    let snapshot = MarketSnapshot::build(&http(Duration::from_secs(5)), &endpoints).await;

    assert_eq!(snapshot.rates.rows().unwrap().len(), 2);
    assert!(snapshot.repo.is_placeholder());
    let indices: Vec<String> = snapshot
        .equity
        .rows()
        .unwrap()
        .iter()
        .map(|bar| bar.index.clone())
        .collect();
    assert_eq!(indices, vec!["S&P 500 (ETF)", "NASDAQ 100 (ETF)", "DJIA (ETF)"]);

    let union = snapshot.union();
    // 2 rates, 1 placeholder, 3 equity bars
    assert_eq!(union.rows.len(), 6);
    assert!(union.columns.iter().any(|c| c == PLACEHOLDER_COLUMN));
    assert!(union.columns.iter().any(|c| c == "Ticker"));
}
