use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::TimeDelta;
use gridsig_core::{Clock, Fetcher, GridError};
use gridsig_isone::{HttpFetcher, HttpGet, HttpResponse};
use gridsig_mock::ManualClock;

const DEC_23_2024_US: i64 = 1_734_985_560_123_456;
const TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Copy, Debug)]
enum Mode {
    Ok,
    OkAlt,
    Err500,
    ErrFetch,
    ErrNil,
}

struct Harness {
    fetcher: HttpFetcher,
    clock: ManualClock,
    mode: Arc<Mutex<Mode>>,
    gets: Arc<AtomicUsize>,
}

impl Harness {
    fn new() -> Self {
        let clock = ManualClock::from_micros(DEC_23_2024_US);
        let mode = Arc::new(Mutex::new(Mode::Ok));
        let gets = Arc::new(AtomicUsize::new(0));

        let (m, g) = (mode.clone(), gets.clone());
        let http = <dyn HttpGet>::from_fn(move |url| {
            g.fetch_add(1, Ordering::SeqCst);
            match *m.lock().unwrap() {
                Mode::Ok => Ok(Some(HttpResponse::ok("dummy data"))),
                Mode::OkAlt => Ok(Some(HttpResponse::ok("dummy data too"))),
                Mode::Err500 => Ok(Some(HttpResponse {
                    status: 500,
                    body: b"This is an error message".to_vec(),
                })),
                Mode::ErrFetch => Err(GridError::transport(url, "fake error fetching")),
                Mode::ErrNil => Ok(None),
            }
        });
        let fetcher = HttpFetcher::new(
            |_| "http://test.invalid/ws".to_string(),
            Arc::new(clock.clone()),
            http,
            TTL,
        );
        Self {
            fetcher,
            clock,
            mode,
            gets,
        }
    }

    fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn fresh_cache_masks_the_network() {
    let mut h = Harness::new();
    assert_eq!(h.fetcher.raw_data().await.unwrap(), b"dummy data");
    assert_eq!(h.gets(), 1);

    // A failing endpoint is never consulted while the cache is fresh.
    h.set_mode(Mode::Err500);
    assert_eq!(h.fetcher.raw_data().await.unwrap(), b"dummy data");
    h.clock.advance(TimeDelta::minutes(5));
    assert_eq!(h.fetcher.raw_data().await.unwrap(), b"dummy data");
    assert_eq!(h.gets(), 1);
}

#[tokio::test]
async fn expiry_is_fetch_time_plus_ttl() {
    let mut h = Harness::new();
    h.fetcher.raw_data().await.unwrap();
    assert_eq!(h.fetcher.expiry(), h.clock.now() + TimeDelta::minutes(5));
}

#[tokio::test]
async fn failures_after_expiry_are_reported_not_masked() {
    let mut h = Harness::new();
    h.fetcher.raw_data().await.unwrap();

    h.set_mode(Mode::Err500);
    h.clock.advance(TimeDelta::minutes(6));
    let err = h.fetcher.raw_data().await.unwrap_err();
    assert!(matches!(err, GridError::Status { status: 500, .. }), "{err:?}");

    h.set_mode(Mode::ErrFetch);
    h.clock.advance(TimeDelta::minutes(6));
    let err = h.fetcher.raw_data().await.unwrap_err();
    assert!(matches!(err, GridError::Transport { .. }), "{err:?}");

    h.set_mode(Mode::ErrNil);
    h.clock.advance(TimeDelta::minutes(6));
    let err = h.fetcher.raw_data().await.unwrap_err();
    assert!(matches!(err, GridError::EmptyResponse { .. }), "{err:?}");

    // Stale bytes are still held, only not served.
    assert_eq!(h.fetcher.cached(), Some(&b"dummy data"[..]));
    assert_eq!(h.gets(), 4);
}

#[tokio::test]
async fn failed_fetch_is_retried_on_the_next_call() {
    let mut h = Harness::new();
    h.set_mode(Mode::ErrFetch);
    assert!(h.fetcher.raw_data().await.is_err());
    assert!(h.fetcher.cached().is_none());

    h.set_mode(Mode::Ok);
    assert_eq!(h.fetcher.raw_data().await.unwrap(), b"dummy data");
    assert_eq!(h.gets(), 2);
}

#[tokio::test]
async fn flush_forces_a_refetch() {
    let mut h = Harness::new();
    h.fetcher.raw_data().await.unwrap();

    h.set_mode(Mode::OkAlt);
    h.fetcher.flush_cache();
    assert_eq!(h.fetcher.cached(), Some(&b"dummy data"[..]));
    assert_eq!(h.fetcher.raw_data().await.unwrap(), b"dummy data too");
    assert_eq!(h.gets(), 2);
}

#[tokio::test]
async fn url_is_computed_from_the_clock() {
    let clock = ManualClock::from_micros(DEC_23_2024_US);
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let s = seen.clone();
    let http = <dyn HttpGet>::from_fn(move |url| {
        s.lock().unwrap().push(url.to_string());
        Ok(Some(HttpResponse::ok("[]")))
    });
    let mut f = HttpFetcher::new(
        |now| format!("http://h/?t={}", now.timestamp_millis()),
        Arc::new(clock.clone()),
        http,
        Duration::from_secs(60),
    );

    f.raw_data().await.unwrap();
    clock.advance(TimeDelta::seconds(61));
    f.raw_data().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            "http://h/?t=1734985560123".to_string(),
            "http://h/?t=1734985621123".to_string(),
        ]
    );
}
