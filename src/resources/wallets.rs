use crate::{
    client::Client, config::Config, dispatch::DispatchOptions, error::EnrichError,
    transport::Transport, types::wallet::WalletBalanceResponse,
};

/// API resource for the `/wallet/balance` endpoint
pub struct Wallets<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> Wallets<'c, C, T> {
    /// Creates a new `Wallets` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Returns the remaining credit balance
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn balance(&self) -> Result<WalletBalanceResponse, EnrichError> {
        self.client.get("/wallet/balance").await
    }

    /// Like [`balance`](Self::balance) with per-call dispatch options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn balance_with(
        &self,
        opts: DispatchOptions,
    ) -> Result<WalletBalanceResponse, EnrichError> {
        self.client.get_with("/wallet/balance", opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the wallet resource
    #[must_use]
    pub const fn wallets(&self) -> Wallets<'_, C, T> {
        Wallets::new(self)
    }
}
