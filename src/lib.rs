#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `enrich-async`
//!
//! Async Rust client for the Enrich REST API (email/phone finding,
//! validation, people search, wallet balance).
//!
//! Every call funnels through a single cancellable request dispatcher
//! ([`dispatch::dispatch`]) that composes timeout cancellation, external
//! cancellation, credentials mode, and cache-bypass behavior into exactly
//! one exchange on an injected [`Transport`]. Transient failures are retried
//! above the dispatcher; the dispatcher itself never retries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use enrich_async::{Client, types::email::FindEmailRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(); // reads ENRICH_API_KEY
//!
//! let found = client
//!     .email_finder()
//!     .find_email(&FindEmailRequest {
//!         first_name: "Emily".into(),
//!         last_name: "Zhang".into(),
//!         domain: "figma.com".into(),
//!     })
//!     .await?;
//! println!("{:?}", found.email);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Per-call timeouts and caller-owned cancellation tokens race,
//! first-fires-wins; a timeout surfaces as [`EnrichError::Timeout`] and a
//! fired token as [`EnrichError::Cancelled`], so callers can tell them
//! apart when shaping retry policy.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// The cancellable request dispatcher every call funnels through
pub mod dispatch;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Retry logic utilities
pub mod retry;
/// Cancellation-signal composition (timers, combined tokens)
pub mod signals;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// The injected transport boundary
pub mod transport;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::EnrichConfig;
pub use crate::dispatch::DispatchOptions;
pub use crate::error::{ApiErrorObject, EnrichError};
pub use crate::transport::{HttpTransport, Transport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, DispatchOptions, EnrichConfig, EnrichError};
}
