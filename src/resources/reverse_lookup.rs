use crate::{
    client::Client,
    config::Config,
    dispatch::DispatchOptions,
    error::EnrichError,
    transport::Transport,
    types::people::{ReverseLookupRequest, ReverseLookupResponse},
};

/// API resource for the `/reverse-lookup` endpoint
pub struct ReverseLookup<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> ReverseLookup<'c, C, T> {
    /// Creates a new `ReverseLookup` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Resolves an email address into a person profile
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn lookup(
        &self,
        req: &ReverseLookupRequest,
    ) -> Result<ReverseLookupResponse, EnrichError> {
        self.client.post("/reverse-lookup", req).await
    }

    /// Like [`lookup`](Self::lookup) with per-call dispatch options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn lookup_with(
        &self,
        req: &ReverseLookupRequest,
        opts: DispatchOptions,
    ) -> Result<ReverseLookupResponse, EnrichError> {
        self.client.post_with("/reverse-lookup", req, opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the reverse email lookup resource
    #[must_use]
    pub const fn reverse_lookup(&self) -> ReverseLookup<'_, C, T> {
        ReverseLookup::new(self)
    }
}
