use crate::{
    client::Client,
    config::Config,
    dispatch::DispatchOptions,
    error::EnrichError,
    transport::Transport,
    types::phone::{FindPhoneRequest, FindPhoneResponse},
};

/// API resource for the `/find-phone` endpoint
pub struct PhoneFinder<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> PhoneFinder<'c, C, T> {
    /// Creates a new `PhoneFinder` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Finds a phone number from a LinkedIn profile URL
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn find_phone(
        &self,
        req: &FindPhoneRequest,
    ) -> Result<FindPhoneResponse, EnrichError> {
        self.client.post("/find-phone", req).await
    }

    /// Like [`find_phone`](Self::find_phone) with per-call dispatch options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn find_phone_with(
        &self,
        req: &FindPhoneRequest,
        opts: DispatchOptions,
    ) -> Result<FindPhoneResponse, EnrichError> {
        self.client.post_with("/find-phone", req, opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the phone finder resource
    #[must_use]
    pub const fn phone_finder(&self) -> PhoneFinder<'_, C, T> {
        PhoneFinder::new(self)
    }
}
