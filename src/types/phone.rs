use serde::{Deserialize, Serialize};

/// Request for the phone finder endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindPhoneRequest {
    /// LinkedIn profile URL of the person
    pub linkedin_url: String,
}

/// Response from the phone finder endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindPhoneResponse {
    /// The phone number found, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// ISO country code of the number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Whether the number passed carrier validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}
