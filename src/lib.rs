/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 11/7/26
******************************************************************************/

//! # etna-client
//!
//! Client library for the ETNA school APIs: authentication, user profiles,
//! activities, grades, projects, events, tickets and conversations.
//!
//! The crate is a thin authenticated wrapper: it exchanges a login/password
//! for session cookies (or accepts pre-obtained cookies), resolves each
//! logical operation against a static endpoint catalog, attaches the
//! credential, and classifies the response. Transport-level failures are
//! retried with exponential backoff up to a configured bound; an unexpected
//! HTTP status is surfaced immediately. Payloads are passed through as
//! opaque JSON.
//!
//! # Example
//! ```ignore
//! use etna_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     // Reads ETNA_USER / ETNA_PASS from the environment or a .env file
//!     let client = EtnaClient::new(Config::new()).await?;
//!     let activities = client.get_current_activities(None).await?;
//!     println!("{activities}");
//!     Ok(())
//! }
//! ```

/// Main API client with one method per logical operation
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Crate-wide constants and defaults
pub mod constants;
/// Static catalog of endpoint descriptors
pub mod endpoint;
/// Error types
pub mod error;
/// Request and retry models
pub mod model;
/// Convenient re-exports of the commonly used surface
pub mod prelude;
/// Session state and authentication
pub mod session;
/// HTTP transport with bounded retry
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Library version, from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
