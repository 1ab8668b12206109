//! API resource implementations for the Enrich client

/// Email finder resource
pub mod email_finder;
/// Email validation resource
pub mod email_validation;
/// People search resource
pub mod people_search;
/// Phone finder resource
pub mod phone_finder;
/// Reverse email lookup resource
pub mod reverse_lookup;
/// Wallet resource
pub mod wallets;

pub use email_finder::EmailFinder;
pub use email_validation::EmailValidation;
pub use people_search::PeopleSearch;
pub use phone_finder::PhoneFinder;
pub use reverse_lookup::ReverseLookup;
pub use wallets::Wallets;
