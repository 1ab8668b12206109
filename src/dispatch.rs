//! The cancellable request dispatcher.
//!
//! Every resource method funnels through [`dispatch`]: it composes timeout
//! cancellation, external cancellation, credentials mode, duplex mode, and
//! cache-bypass behavior into exactly one exchange on the injected
//! [`Transport`]. It performs no retries, no status interpretation, and no
//! body parsing; transport failures propagate verbatim.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use tokio_util::sync::CancellationToken;

use crate::error::EnrichError;
use crate::signals;
use crate::transport::{CacheDirective, CredentialsMode, Duplex, Transport, TransportOptions};

const CAP_UNKNOWN: u8 = 0;
const CAP_SUPPORTED: u8 = 1;
const CAP_UNSUPPORTED: u8 = 2;

/// Whether the runtime accepts the `no-store` cache directive, resolved once
/// per process. Unknown until the first dispatch that asks for cache bypass.
static CACHE_BYPASS: AtomicU8 = AtomicU8::new(CAP_UNKNOWN);

/// Returns whether the runtime supports the cache-bypass directive.
///
/// The probe runs at most once per process (racing callers may redundantly
/// re-probe; the probe is pure, so that is harmless). Once resolved, the
/// answer is cached until [`reset_cache_bypass_probe`] is called.
#[must_use]
pub fn cache_bypass_supported() -> bool {
    match CACHE_BYPASS.load(Ordering::Relaxed) {
        CAP_SUPPORTED => true,
        CAP_UNSUPPORTED => false,
        _ => {
            let supported = probe_cache_directive();
            let resolved = if supported {
                CAP_SUPPORTED
            } else {
                CAP_UNSUPPORTED
            };
            CACHE_BYPASS.store(resolved, Ordering::Relaxed);
            supported
        }
    }
}

/// Resets the cached cache-bypass capability, forcing the next resolution to
/// re-probe. Exposed for testing only.
#[doc(hidden)]
pub fn reset_cache_bypass_probe() {
    CACHE_BYPASS.store(CAP_UNKNOWN, Ordering::Relaxed);
}

/// Overrides the cached capability, simulating a runtime where the probe
/// resolved differently. Exposed for testing only; pair with
/// [`reset_cache_bypass_probe`].
#[doc(hidden)]
pub fn set_cache_bypass_supported(supported: bool) {
    let resolved = if supported { CAP_SUPPORTED } else { CAP_UNSUPPORTED };
    CACHE_BYPASS.store(resolved, Ordering::Relaxed);
}

/// Probes whether a request carrying the `no-store` directive can be
/// constructed without error.
fn probe_cache_directive() -> bool {
    let Ok(url) = Url::parse("http://localhost/") else {
        return false;
    };
    let mut probe = reqwest::Request::new(Method::GET, url);
    match HeaderValue::from_str(CacheDirective::NoStore.header_value()) {
        Ok(value) => {
            probe.headers_mut().insert(CACHE_CONTROL, value);
            true
        }
        Err(_) => false,
    }
}

/// Per-call knobs for [`dispatch`]. Everything is optional; the default is a
/// plain uncancellable exchange with transport-default credentials.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Abort the call if no response arrives within this duration of call
    /// start
    pub timeout: Option<Duration>,
    /// Externally-owned cancellation source
    pub signal: Option<CancellationToken>,
    /// Send ambient credentials (cookies) with the request
    pub with_credentials: bool,
    /// Advisory duplex mode, passed through to the transport verbatim
    pub duplex: Option<Duplex>,
    /// Request that the transport bypass any caching layer; silently ignored
    /// when the runtime does not support the directive
    pub disable_cache: bool,
}

impl DispatchOptions {
    /// Options with only a timeout set.
    #[must_use]
    pub fn timeout(after: Duration) -> Self {
        Self {
            timeout: Some(after),
            ..Self::default()
        }
    }
}

/// Issues exactly one HTTP exchange through `transport`, aborting it if the
/// timeout elapses or the external signal fires first.
///
/// The two cancellation sources race; whichever transitions first aborts the
/// call. A timeout surfaces as [`EnrichError::Timeout`], external
/// cancellation as [`EnrichError::Cancelled`], and transport failures
/// propagate unchanged. The pending timer is released on every exit path.
///
/// # Errors
///
/// Returns whatever the transport fails with, or `Timeout`/`Cancelled` when
/// a cancellation source fires before natural completion.
pub async fn dispatch<T: Transport>(
    transport: &T,
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<Bytes>,
    opts: DispatchOptions,
) -> Result<reqwest::Response, EnrichError> {
    let (combined, timer) = signals::combine(opts.timeout, opts.signal.as_ref());

    let cache =
        (opts.disable_cache && cache_bypass_supported()).then_some(CacheDirective::NoStore);

    let options = TransportOptions {
        method,
        headers,
        body,
        signal: combined,
        credentials: if opts.with_credentials {
            CredentialsMode::Include
        } else {
            CredentialsMode::Omit
        },
        duplex: opts.duplex,
        cache,
    };

    tracing::debug!(
        %url,
        method = %options.method,
        timeout = ?opts.timeout,
        cache = ?options.cache,
        "dispatching request"
    );

    let result = transport.perform(url, options).await;

    // Release the pending sleep before reporting the outcome; the guard's
    // Drop covers the panic path.
    if let Some(timer) = &timer {
        timer.disarm();
    }

    match result {
        Err(EnrichError::Cancelled) => match timer {
            Some(t) if t.fired() => Err(EnrichError::Timeout { after: t.after() }),
            _ => Err(EnrichError::Cancelled),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_accepts_no_store() {
        assert!(probe_cache_directive());
    }

    #[test]
    fn default_options_are_inert() {
        let opts = DispatchOptions::default();
        assert!(opts.timeout.is_none());
        assert!(opts.signal.is_none());
        assert!(!opts.with_credentials);
        assert!(!opts.disable_cache);
    }

    #[test]
    fn timeout_shorthand() {
        let opts = DispatchOptions::timeout(Duration::from_millis(250));
        assert_eq!(opts.timeout, Some(Duration::from_millis(250)));
        assert!(opts.signal.is_none());
    }
}
