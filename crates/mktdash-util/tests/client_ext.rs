use mktdash_util::{build_client, ClientExt, FetchError};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    value: String,
}

fn client(timeout: Duration) -> reqwest::Client {
    build_client("mktdash-test", timeout).unwrap()
}

#[tokio::test]
async fn deserializes_a_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value":"1.5"}"#))
        .mount(&server)
        .await;

    let data: Payload = client(Duration::from_secs(5))
        .fetch_json(&format!("{}/data.json", server.uri()), "test data")
        .await
        .unwrap();

    assert_eq!(
        data,
        Payload {
            value: "1.5".to_string()
        }
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client(Duration::from_secs(5))
        .fetch_json::<Payload>(&format!("{}/data.json", server.uri()), "test data")
        .await;

    match result {
        Err(FetchError::Status { target, status }) => {
            assert_eq!(target, "test data");
            assert_eq!(status.as_u16(), 503);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"other":1}"#))
        .mount(&server)
        .await;

    let result = client(Duration::from_secs(5))
        .fetch_json::<Payload>(&format!("{}/data.json", server.uri()), "test data")
        .await;

    assert!(matches!(result, Err(FetchError::Decode { .. })));
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"value":"1.5"}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client(Duration::from_millis(200))
        .fetch_json::<Payload>(&format!("{}/data.json", server.uri()), "test data")
        .await;

    match result {
        Err(FetchError::Transport { target, source }) => {
            assert_eq!(target, "test data");
            assert!(source.is_timeout(), "expected a timeout, got {source:?}");
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}
