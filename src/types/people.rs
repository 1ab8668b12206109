use serde::{Deserialize, Serialize};

use super::common::{Company, Person};

/// Request for the reverse email lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReverseLookupRequest {
    /// Email address to resolve into a person profile
    pub email: String,
}

/// Response from the reverse email lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReverseLookupResponse {
    /// The person behind the email, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// The person's current company, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Request for the people search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindEmployeesRequest {
    /// Company domain to search
    pub domain: String,
    /// Maximum number of results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Response from the people search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindEmployeesResponse {
    /// Matching people, up to the requested limit
    pub results: Vec<Person>,
    /// Total matches across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Whether more pages are available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}
