use serde::{Deserialize, Serialize};

/// Response from the wallet balance endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    /// Remaining credit balance
    pub balance: u64,
    /// Credits consumed in the current billing period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<u64>,
}
