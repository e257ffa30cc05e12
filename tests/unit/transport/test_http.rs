use assert_json_diff::assert_json_eq;
use etna_client::config::{Config, Credentials, RestApiConfig};
use etna_client::error::AppError;
use etna_client::model::retry::RetryConfig;
use etna_client::session::interface::EtnaSession;
use etna_client::transport::http_client::{
    EtnaHttpClient, EtnaHttpClientImpl, execute_with_retry,
};
use reqwest::Method;
use serde_json::{Value, json};

fn config_for(url: &str) -> Config {
    Config {
        credentials: Credentials {
            login: "test_u".to_string(),
            password: "password".to_string(),
        },
        rest_api: RestApiConfig {
            auth_base_url: url.to_string(),
            prep_base_url: url.to_string(),
            modules_base_url: url.to_string(),
            gsa_base_url: url.to_string(),
            tickets_base_url: url.to_string(),
            intra_base_url: url.to_string(),
            timeout: 5,
        },
        retry: RetryConfig::with_max_retries_and_delay(2, 1),
        use_session: true,
    }
}

fn session() -> EtnaSession {
    EtnaSession::from_pairs("test_u", [("jwt", "abcdef")])
}

/// A URL that refuses connections: bind an ephemeral port, then release it.
fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/ping")
}

#[tokio::test]
async fn test_request_decodes_json_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/identity")
        .with_status(200)
        .with_body(r#"{"login": "test_u", "id": 42}"#)
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    let payload = transport
        .request(
            Method::GET,
            &format!("{}/identity", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap();

    assert_json_eq!(payload, json!({"login": "test_u", "id": 42}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_attaches_session_cookie() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/identity")
        .match_header("cookie", "jwt=abcdef")
        .with_body("{}")
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    transport
        .request(
            Method::GET,
            &format!("{}/identity", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_status_is_not_retried_and_carries_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/identity")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    let err = transport
        .request(
            Method::GET,
            &format!("{}/identity", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap_err();

    match err {
        AppError::BadStatus { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    // exactly one call went out: an unexpected status never consumes retries
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retry_succeeds_after_transient_failures() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .with_body("pong")
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let dead = dead_url();
    let live = format!("{}/ping", server.url());
    let retry = RetryConfig::with_max_retries_and_delay(5, 1);

    let mut calls = 0u32;
    let response = execute_with_retry(&retry, || {
        calls += 1;
        let url = if calls <= 3 { dead.clone() } else { live.clone() };
        let request = client.get(url);
        async move { request.send().await }
    })
    .await
    .expect("should succeed once the transport recovers");

    assert_eq!(calls, 4);
    assert_eq!(response.status().as_u16(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retry_bound_is_terminal() {
    let client = reqwest::Client::new();
    let dead = dead_url();
    let retry = RetryConfig::with_max_retries_and_delay(2, 1);

    let mut calls = 0u32;
    let err = execute_with_retry(&retry, || {
        calls += 1;
        let request = client.get(dead.clone());
        async move { request.send().await }
    })
    .await
    .unwrap_err();

    // 1 initial attempt + 2 retries
    assert_eq!(calls, 3);
    match err {
        AppError::MaxRetriesExceeded(attempts) => assert_eq!(attempts, 3),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_request_raw_returns_undecoded_bytes() {
    let body: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users/test_u/photo")
        .with_header("content-type", "image/jpeg")
        .with_body(body)
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    let response = transport
        .request_raw(
            Method::GET,
            &format!("{}/api/users/test_u/photo", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body, body.to_vec());
    assert_eq!(
        response.headers.get("content-type").unwrap(),
        "image/jpeg"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_last_response_tracks_most_recent_call() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/identity")
        .with_body("{}")
        .create_async()
        .await;
    server
        .mock("GET", "/promo")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    assert!(transport.last_response().is_none());

    transport
        .request(
            Method::GET,
            &format!("{}/identity", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap();

    let last = transport.last_response().unwrap();
    assert_eq!(last.status.as_u16(), 200);
    assert!(last.url.ends_with("/identity"));

    // overwritten on every call, including failed ones
    let _ = transport
        .request(
            Method::GET,
            &format!("{}/promo", server.url()),
            &session(),
            None,
            None,
        )
        .await;

    let last = transport.last_response().unwrap();
    assert_eq!(last.status.as_u16(), 404);
    assert!(last.url.ends_with("/promo"));
}

#[tokio::test]
async fn test_empty_body_decodes_as_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("OPTIONS", "/api/tickets")
        .with_status(204)
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    let payload = transport
        .request(
            Method::OPTIONS,
            &format!("{}/api/tickets", server.url()),
            &session(),
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(payload, Value::Null);
}

#[tokio::test]
async fn test_query_parameters_are_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/students/test_u/events")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("start".to_string(), "2026-01-05".to_string()),
            mockito::Matcher::UrlEncoded("end".to_string(), "2026-01-12".to_string()),
        ]))
        .with_body("[]")
        .create_async()
        .await;

    let transport = EtnaHttpClientImpl::new(&config_for(&server.url())).unwrap();
    let query = vec![
        ("start".to_string(), "2026-01-05".to_string()),
        ("end".to_string(), "2026-01-12".to_string()),
    ];
    transport
        .request(
            Method::GET,
            &format!("{}/students/test_u/events", server.url()),
            &session(),
            None,
            Some(&query),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}
