use bytes::Bytes;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use tokio_util::sync::CancellationToken;

use crate::error::EnrichError;

/// Credentials mode for an outbound exchange.
///
/// `Include` asks the transport to send ambient credentials (cookies) with
/// the request; `Omit` leaves credential behavior at the transport default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    /// Transport default: no ambient credentials
    #[default]
    Omit,
    /// Send ambient credentials (cookie jar) with the request
    Include,
}

/// Duplex mode for streaming-body requests.
///
/// Advisory pass-through: the dispatcher never interprets it, and a transport
/// is free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplex {
    /// Half-duplex: the request body is sent in full before the response
    Half,
}

/// Cache directive requesting that the transport bypass any caching layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirective {
    /// `no-store`: do not serve from or populate a cache
    NoStore,
}

impl CacheDirective {
    /// Returns the directive as a `Cache-Control` header value.
    #[must_use]
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::NoStore => "no-store",
        }
    }
}

/// The options bundle for a single HTTP exchange.
#[derive(Debug, Default)]
pub struct TransportOptions {
    /// HTTP method
    pub method: Method,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Bytes>,
    /// Combined cancellation signal; absent means the exchange is
    /// uncancellable except by transport-level failure
    pub signal: Option<CancellationToken>,
    /// Credentials mode
    pub credentials: CredentialsMode,
    /// Advisory duplex mode
    pub duplex: Option<Duplex>,
    /// Cache-bypass directive, already capability-checked by the dispatcher
    pub cache: Option<CacheDirective>,
}

/// The injected transport boundary: one method, one HTTP exchange.
///
/// Cancellation is cooperative: the transport races its I/O against
/// `options.signal` and reports [`EnrichError::Cancelled`] if the signal
/// fires first. Substituting a deterministic double here is how the test
/// suite exercises the dispatcher without a network.
pub trait Transport: Send + Sync {
    /// Performs a single HTTP exchange.
    fn perform(
        &self,
        url: Url,
        options: TransportOptions,
    ) -> impl Future<Output = Result<reqwest::Response, EnrichError>> + Send;
}

/// reqwest-backed transport.
///
/// Holds two clients so [`CredentialsMode::Include`] can be honored
/// per-exchange: one plain, one with a cookie jar. [`Duplex`] is advisory
/// and ignored; reqwest manages body streaming itself.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    http_with_cookies: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with default reqwest clients.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let builder = || reqwest::Client::builder().connect_timeout(std::time::Duration::from_secs(5));
        Self {
            http: builder().build().expect("reqwest client"),
            http_with_cookies: builder()
                .cookie_store(true)
                .build()
                .expect("reqwest client"),
        }
    }

    /// Creates a transport from caller-built clients.
    ///
    /// `http_with_cookies` serves exchanges with [`CredentialsMode::Include`]
    /// and should be built with a cookie store.
    #[must_use]
    pub const fn with_clients(http: reqwest::Client, http_with_cookies: reqwest::Client) -> Self {
        Self {
            http,
            http_with_cookies,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn perform(
        &self,
        url: Url,
        options: TransportOptions,
    ) -> Result<reqwest::Response, EnrichError> {
        let client = match options.credentials {
            CredentialsMode::Include => &self.http_with_cookies,
            CredentialsMode::Omit => &self.http,
        };

        let mut request = reqwest::Request::new(options.method, url);
        *request.headers_mut() = options.headers;
        if let Some(cache) = options.cache {
            request
                .headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static(cache.header_value()));
        }
        if let Some(body) = options.body {
            *request.body_mut() = Some(reqwest::Body::from(body));
        }

        let exchange = client.execute(request);
        match options.signal {
            Some(signal) => tokio::select! {
                () = signal.cancelled_owned() => Err(EnrichError::Cancelled),
                result = exchange => Ok(result?),
            },
            None => Ok(exchange.await?),
        }
    }
}
