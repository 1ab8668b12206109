use serde::{Deserialize, Serialize};

/// Request for the email finder endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindEmailRequest {
    /// First name of the person
    pub first_name: String,
    /// Last name of the person
    pub last_name: String,
    /// Company domain to search against
    pub domain: String,
}

/// Response from the email finder endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindEmailResponse {
    /// The email found, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Confidence score in `[0, 100]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f32>,
    /// Domain the search ran against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Deliverability verdict for a validated email
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    /// Mailbox exists and accepts mail
    Valid,
    /// Mailbox does not exist
    Invalid,
    /// Catch-all or otherwise unverifiable mailbox
    Risky,
    /// Verification could not complete
    Unknown,
}

/// Request for the email validation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailRequest {
    /// Email address to validate
    pub email: String,
}

/// Response from the email validation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailResponse {
    /// The email that was validated
    pub email: String,
    /// Deliverability verdict
    pub status: EmailStatus,
    /// Whether MX records were found for the domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_found: Option<bool>,
    /// Whether the mailbox answered an SMTP probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_check: Option<bool>,
    /// Whether the address belongs to a free provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    /// Whether the address is a disposable inbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposable: Option<bool>,
    /// Whether the address is a role account (info@, sales@, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<bool>,
}
