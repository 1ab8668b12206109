use crate::{
    client::Client,
    config::Config,
    dispatch::DispatchOptions,
    error::EnrichError,
    transport::Transport,
    types::email::{FindEmailRequest, FindEmailResponse},
};

/// API resource for the `/find-email` endpoint
pub struct EmailFinder<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> EmailFinder<'c, C, T> {
    /// Creates a new `EmailFinder` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Finds a work email from a name and company domain
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn find_email(
        &self,
        req: &FindEmailRequest,
    ) -> Result<FindEmailResponse, EnrichError> {
        self.client.post("/find-email", req).await
    }

    /// Like [`find_email`](Self::find_email) with per-call dispatch options
    /// (timeout, cancellation token).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn find_email_with(
        &self,
        req: &FindEmailRequest,
        opts: DispatchOptions,
    ) -> Result<FindEmailResponse, EnrichError> {
        self.client.post_with("/find-email", req, opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the email finder resource
    #[must_use]
    pub const fn email_finder(&self) -> EmailFinder<'_, C, T> {
        EmailFinder::new(self)
    }
}
