use std::time::Duration;

use gallery_core::Record;
use gallery_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher, RECORDS_PATH};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
    {"author": "a", "category": "owl", "path": "owls/1.jpg"},
    {"author": "b", "category": "hawk", "path": "hawks/1.jpg"},
    {"author": "a", "category": "owl", "path": "owls/1.jpg"}
]"#;

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    }
}

async fn serve(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{RECORDS_PATH}")))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetcher_returns_records_in_server_order() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw(BODY, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let records = fetcher.fetch_all().await.expect("fetch ok");

    assert_eq!(
        records,
        vec![
            Record::new("a", "owl", "owls/1.jpg"),
            Record::new("b", "hawk", "hawks/1.jpg"),
            Record::new("a", "owl", "owls/1.jpg"),
        ]
    );
}

#[tokio::test]
async fn fetcher_accepts_empty_list() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw("[]", "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    assert!(fetcher.fetch_all().await.expect("fetch ok").is_empty());
}

#[tokio::test]
async fn fetcher_reuses_one_client_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{RECORDS_PATH}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let first = fetcher.fetch_all().await.expect("first fetch");
    let second = fetcher.fetch_all().await.expect("second fetch");

    assert_eq!(first, second);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(404)).await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.message, "404 Not Found");
    assert_eq!(err.to_string(), err.message);
}

#[tokio::test]
async fn fetcher_fails_on_invalid_json() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw("[{\"author\": ", "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_wrong_shape() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw(
            r#"{"author": "a", "category": "owl", "path": "p"}"#,
            "application/json",
        ),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_unsupported_content_type() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw(BODY, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_raw(BODY, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(BODY.len() as u64)
        }
    );
}

#[tokio::test]
async fn fetcher_reports_unreachable_host_as_network_failure() {
    // Port 1 is reserved and nothing listens on it locally.
    let settings = FetchSettings {
        base_url: "http://127.0.0.1:1/".to_string(),
        connect_timeout: Duration::from_secs(2),
        ..FetchSettings::default()
    };

    let fetcher = ReqwestFetcher::new(settings).expect("client");
    let err = fetcher.fetch_all().await.unwrap_err();

    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
    assert!(!err.message.is_empty());
}
