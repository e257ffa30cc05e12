/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 13/7/26
******************************************************************************/

//! # ETNA Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits of the crate.
//!
//! ## Usage
//!
//! ```rust
//! use etna_client::prelude::*;
//!
//! let config = Config::new();
//! // let client = EtnaClient::new(config).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ETNA API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the ETNA APIs
pub use crate::session::auth::EtnaAuth;

/// Authentication trait and session state
pub use crate::session::interface::{Authenticator, EtnaSession};

// ============================================================================
// CLIENT
// ============================================================================

/// Main API client
pub use crate::client::EtnaClient;

// ============================================================================
// OPERATION CATALOG
// ============================================================================

/// Static endpoint catalog
pub use crate::endpoint::{EndpointDescriptor, Host, Operation};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client trait and implementation
pub use crate::transport::http_client::{
    EtnaHttpClient, EtnaHttpClientImpl, LastResponse, RawResponse, execute_with_retry,
};

// ============================================================================
// MODELS
// ============================================================================

/// Retry configuration
pub use crate::model::retry::RetryConfig;

/// Request bodies for the mutating operations
pub use crate::model::requests::{DeclarationContent, LogDeclaration, TicketRequest};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment parsing helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::NaiveDate;

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
