use serde::{Deserialize, Serialize};

/// A geographic location attached to a person or company record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A person record as returned by lookup and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Full display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Work email, when unlocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// LinkedIn profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// Location, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A company record as returned by lookup endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Industry label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Headcount bracket, e.g. "51-200"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}
