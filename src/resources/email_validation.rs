use crate::{
    client::Client,
    config::Config,
    dispatch::DispatchOptions,
    error::EnrichError,
    transport::Transport,
    types::email::{ValidateEmailRequest, ValidateEmailResponse},
};

/// API resource for the `/verify-email` endpoint
pub struct EmailValidation<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> EmailValidation<'c, C, T> {
    /// Creates a new `EmailValidation` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Validates deliverability of an email address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn validate_email(
        &self,
        req: &ValidateEmailRequest,
    ) -> Result<ValidateEmailResponse, EnrichError> {
        self.client.post("/verify-email", req).await
    }

    /// Like [`validate_email`](Self::validate_email) with per-call dispatch
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn validate_email_with(
        &self,
        req: &ValidateEmailRequest,
        opts: DispatchOptions,
    ) -> Result<ValidateEmailResponse, EnrichError> {
        self.client.post_with("/verify-email", req, opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the email validation resource
    #[must_use]
    pub const fn email_validation(&self) -> EmailValidation<'_, C, T> {
        EmailValidation::new(self)
    }
}
