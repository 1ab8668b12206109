use std::sync::{Arc, Mutex};
use std::time::Duration;

use enrich_async::dispatch::{self, DispatchOptions};
use enrich_async::error::EnrichError;
use enrich_async::transport::{CacheDirective, CredentialsMode, Duplex, Transport, TransportOptions};
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serial_test::serial;
use tokio_util::sync::CancellationToken;

fn target_url() -> Url {
    Url::parse("https://api.enrich.so/v1/find-email").unwrap()
}

fn ok_response() -> reqwest::Response {
    reqwest::Response::from(
        http::Response::builder()
            .status(200)
            .body(r#"{"ok":true}"#)
            .unwrap(),
    )
}

/// Records the options bundle of every exchange and answers 200.
#[derive(Clone, Default)]
struct RecordingStub {
    seen: Arc<Mutex<Vec<TransportOptions>>>,
}

impl Transport for RecordingStub {
    async fn perform(
        &self,
        _url: Url,
        options: TransportOptions,
    ) -> Result<reqwest::Response, EnrichError> {
        self.seen.lock().unwrap().push(options);
        Ok(ok_response())
    }
}

/// Never resolves on its own; cooperates with the cancellation signal.
struct HangingStub;

impl Transport for HangingStub {
    async fn perform(
        &self,
        _url: Url,
        options: TransportOptions,
    ) -> Result<reqwest::Response, EnrichError> {
        if let Some(signal) = options.signal {
            signal.cancelled_owned().await;
            return Err(EnrichError::Cancelled);
        }
        std::future::pending::<()>().await;
        unreachable!("pending future resolved")
    }
}

#[tokio::test]
async fn no_signals_means_uncancellable_passthrough() {
    let stub = RecordingStub::default();

    let response = dispatch::dispatch(
        &stub,
        target_url(),
        Method::GET,
        HeaderMap::new(),
        None,
        DispatchOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"ok":true}"#);

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].signal.is_none(), "no combined signal expected");
    assert!(seen[0].cache.is_none(), "no cache directive expected");
    assert_eq!(seen[0].credentials, CredentialsMode::Omit);
}

#[tokio::test]
async fn timeout_aborts_hanging_transport() {
    let started = tokio::time::Instant::now();

    let err = dispatch::dispatch(
        &HangingStub,
        target_url(),
        Method::POST,
        HeaderMap::new(),
        None,
        DispatchOptions::timeout(Duration::from_millis(50)),
    )
    .await
    .unwrap_err();

    match err {
        EnrichError::Timeout { after } => assert_eq!(after, Duration::from_millis(50)),
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "abort should land near the timeout, not at natural completion"
    );
}

#[tokio::test]
async fn prefired_external_signal_aborts_immediately() {
    let external = CancellationToken::new();
    external.cancel();

    let err = dispatch::dispatch(
        &HangingStub,
        target_url(),
        Method::POST,
        HeaderMap::new(),
        None,
        DispatchOptions {
            timeout: Some(Duration::from_secs(3600)),
            signal: Some(external),
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap_err();

    // Cancelled, not Timeout: the timer never fired.
    assert!(matches!(err, EnrichError::Cancelled), "got {err:?}");
}

#[tokio::test]
async fn external_cancellation_mid_flight() {
    let external = CancellationToken::new();
    let trigger = external.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = dispatch::dispatch(
        &HangingStub,
        target_url(),
        Method::POST,
        HeaderMap::new(),
        None,
        DispatchOptions {
            signal: Some(external),
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EnrichError::Cancelled), "got {err:?}");
}

#[tokio::test]
async fn fast_settlement_leaves_no_timeout_side_effects() {
    let stub = RecordingStub::default();
    let external = CancellationToken::new();

    dispatch::dispatch(
        &stub,
        target_url(),
        Method::GET,
        HeaderMap::new(),
        None,
        DispatchOptions {
            timeout: Some(Duration::from_millis(30)),
            signal: Some(external.clone()),
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap();

    // Wait past the timeout; the disarmed timer must not fire into the
    // caller's token.
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!external.is_cancelled());
}

#[tokio::test]
async fn credentials_and_duplex_pass_through() {
    let stub = RecordingStub::default();

    dispatch::dispatch(
        &stub,
        target_url(),
        Method::POST,
        HeaderMap::new(),
        None,
        DispatchOptions {
            with_credentials: true,
            duplex: Some(Duplex::Half),
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap();

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen[0].credentials, CredentialsMode::Include);
    assert_eq!(seen[0].duplex, Some(Duplex::Half));
}

#[tokio::test]
#[serial(cache_probe)]
async fn capability_flag_is_idempotent_and_resettable() {
    dispatch::reset_cache_bypass_probe();
    let first = dispatch::cache_bypass_supported();
    let second = dispatch::cache_bypass_supported();
    assert_eq!(first, second);

    dispatch::reset_cache_bypass_probe();
    assert_eq!(dispatch::cache_bypass_supported(), first);
}

#[tokio::test]
#[serial(cache_probe)]
async fn cache_directive_merged_when_requested_and_supported() {
    dispatch::reset_cache_bypass_probe();
    let stub = RecordingStub::default();

    dispatch::dispatch(
        &stub,
        target_url(),
        Method::GET,
        HeaderMap::new(),
        None,
        DispatchOptions {
            disable_cache: true,
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap();

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen[0].cache, Some(CacheDirective::NoStore));
}

#[tokio::test]
#[serial(cache_probe)]
async fn cache_directive_silently_dropped_when_unsupported() {
    dispatch::set_cache_bypass_supported(false);
    let stub = RecordingStub::default();

    let response = dispatch::dispatch(
        &stub,
        target_url(),
        Method::GET,
        HeaderMap::new(),
        None,
        DispatchOptions {
            disable_cache: true,
            ..DispatchOptions::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(response.status(), 200);

    {
        let seen = stub.seen.lock().unwrap();
        assert!(
            seen[0].cache.is_none(),
            "unsupported directive must be ignored, not fail the call"
        );
    }

    dispatch::reset_cache_bypass_probe();
}
