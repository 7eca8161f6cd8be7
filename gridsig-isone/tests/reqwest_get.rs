use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use gridsig_core::{Fetcher, GridError, SystemClock};
use gridsig_isone::{HttpFetcher, HttpGet, ReqwestGet, emissions_url};
use httpmock::prelude::*;

#[tokio::test]
async fn reqwest_adapter_returns_status_and_body() {
    let server = MockServer::start_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("dummy data");
        })
        .await;
    let broken = server
        .mock_async(|when, then| {
            when.method(GET).path("/broken");
            then.status(500).body("This is an error message");
        })
        .await;

    let http = ReqwestGet::new(Duration::from_secs(5)).unwrap();

    let resp = http.get(&server.url("/ok")).await.unwrap().expect("response");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"dummy data");

    let resp = http.get(&server.url("/broken")).await.unwrap().expect("response");
    assert_eq!(resp.status, 500);
    assert!(!resp.is_success());

    ok.assert_async().await;
    broken.assert_async().await;
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let http = ReqwestGet::new(Duration::from_secs(5)).unwrap();
    // Port 9 (discard) on loopback is not expected to be listening.
    let err = http.get("http://127.0.0.1:9/").await.unwrap_err();
    assert!(matches!(err, GridError::Transport { .. }), "{err:?}");
}

#[tokio::test]
async fn emissions_query_reaches_the_server() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ws/wsclient")
                .query_param("_nstmp_requestType", "emissions")
                .query_param("_nstmp_twodays", "false")
                .query_param("_nstmp_startDate", "12/23/2024");
            then.status(200).body("[{}]");
        })
        .await;

    let endpoint = server.url("/ws/wsclient");
    let fixed = DateTime::from_timestamp_micros(1_734_985_560_123_456).unwrap();
    let mut fetcher = HttpFetcher::new(
        move |_| emissions_url(&endpoint, fixed),
        Arc::new(SystemClock),
        Arc::new(ReqwestGet::new(Duration::from_secs(5)).unwrap()),
        Duration::from_secs(600),
    );

    assert_eq!(fetcher.raw_data().await.unwrap(), b"[{}]");
    // Within the TTL the second call is served from cache.
    assert_eq!(fetcher.raw_data().await.unwrap(), b"[{}]");
    mock.assert_hits_async(1).await;
}
