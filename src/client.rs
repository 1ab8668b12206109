use backon::{ExponentialBuilder, Retryable};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::dispatch::{self, DispatchOptions};
use crate::error::EnrichError;
use crate::retry;
use crate::transport::{HttpTransport, Transport};

/// Enrich API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration, and a [`Transport`] that performs
/// the actual network exchange. Every call funnels through
/// [`dispatch`](crate::dispatch::dispatch); transient failures are retried
/// here, above the dispatcher, which itself never retries.
#[derive(Debug, Clone)]
pub struct Client<C: Config, T: Transport = HttpTransport> {
    transport: T,
    config: C,
    backoff: ExponentialBuilder,
    defaults: DispatchOptions,
}

impl Client<crate::config::EnrichConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `ENRICH_API_KEY` for API key authentication
    /// - `ENRICH_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::EnrichConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            transport: HttpTransport::new(),
            config,
            backoff: retry::default_backoff_builder(),
            defaults: DispatchOptions::default(),
        }
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Replaces the transport with a custom one
    ///
    /// Useful for substituting a deterministic double in tests or a
    /// differently-configured reqwest client.
    #[must_use]
    pub fn with_transport<U: Transport>(self, transport: U) -> Client<C, U> {
        Client {
            transport,
            config: self.config,
            backoff: self.backoff,
            defaults: self.defaults,
        }
    }

    /// Replaces the backoff configuration for retry logic
    #[must_use]
    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Sets dispatch options applied to every call that does not override
    /// them (e.g. a client-wide timeout).
    #[must_use]
    pub fn with_dispatch_defaults(mut self, defaults: DispatchOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, EnrichError> {
        self.request(Method::GET, path, None, DispatchOptions::default())
            .await
    }

    pub(crate) async fn get_with<O: DeserializeOwned>(
        &self,
        path: &str,
        opts: DispatchOptions,
    ) -> Result<O, EnrichError> {
        self.request(Method::GET, path, None, opts).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: &I) -> Result<O, EnrichError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        self.post_with(path, body, DispatchOptions::default()).await
    }

    pub(crate) async fn post_with<I, O>(
        &self,
        path: &str,
        body: &I,
        opts: DispatchOptions,
    ) -> Result<O, EnrichError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let payload =
            serde_json::to_vec(body).map_err(|e| EnrichError::Serde(e.to_string()))?;
        self.request(Method::POST, path, Some(Bytes::from(payload)), opts)
            .await
    }

    /// Per-call options override the client-wide defaults field by field.
    fn effective(&self, opts: DispatchOptions) -> DispatchOptions {
        DispatchOptions {
            timeout: opts.timeout.or(self.defaults.timeout),
            signal: opts.signal.or_else(|| self.defaults.signal.clone()),
            with_credentials: opts.with_credentials || self.defaults.with_credentials,
            duplex: opts.duplex.or(self.defaults.duplex),
            disable_cache: opts.disable_cache || self.defaults.disable_cache,
        }
    }

    async fn request<O: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        opts: DispatchOptions,
    ) -> Result<O, EnrichError> {
        // Validate auth before any request
        self.config.validate_auth()?;

        let mut url = Url::parse(&self.config.url(path))
            .map_err(|e| EnrichError::Config(format!("invalid request URL: {e}")))?;
        let config_query = self.config.query();
        if !config_query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in config_query {
                pairs.append_pair(k, v);
            }
        }

        let mut headers = self.config.headers()?;
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let opts = self.effective(opts);

        let bytes = (|| async {
            let response = dispatch::dispatch(
                &self.transport,
                url.clone(),
                method.clone(),
                headers.clone(),
                body.clone(),
                opts.clone(),
            )
            .await?;

            let status = response.status();
            let payload = response.bytes().await.map_err(EnrichError::Reqwest)?;

            if status.is_success() {
                return Ok(payload);
            }

            Err(crate::error::deserialize_api_error(status, &payload))
        })
        .retry(self.backoff)
        .when(EnrichError::is_retryable)
        .await?;

        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }
}
