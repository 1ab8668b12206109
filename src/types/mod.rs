//! Request and response shapes for the Enrich API surface.

/// Shared shapes (people, companies, locations)
pub mod common;
/// Email finder and validation shapes
pub mod email;
/// People search and reverse lookup shapes
pub mod people;
/// Phone finder shapes
pub mod phone;
/// Wallet shapes
pub mod wallet;

pub use common::{Company, Location, Person};
pub use email::{
    EmailStatus, FindEmailRequest, FindEmailResponse, ValidateEmailRequest, ValidateEmailResponse,
};
pub use people::{
    FindEmployeesRequest, FindEmployeesResponse, ReverseLookupRequest, ReverseLookupResponse,
};
pub use phone::{FindPhoneRequest, FindPhoneResponse};
pub use wallet::WalletBalanceResponse;
