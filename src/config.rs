/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 11/7/26
******************************************************************************/
use crate::constants::{
    DEFAULT_AUTH_BASE_URL, DEFAULT_GSA_BASE_URL, DEFAULT_INTRA_BASE_URL, DEFAULT_MODULES_BASE_URL,
    DEFAULT_PREP_BASE_URL, DEFAULT_TICKETS_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::endpoint::Host;
use crate::model::retry::RetryConfig;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the ETNA APIs
pub struct Credentials {
    /// Login identifier of the student account
    pub login: String,
    /// Password of the student account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Base URLs and timeout for the REST APIs
///
/// The ETNA intranet is split across several upstream services; each
/// endpoint descriptor names the service it lives on and the matching base
/// URL is picked here.
pub struct RestApiConfig {
    /// Base URL for the authentication API
    pub auth_base_url: String,
    /// Base URL for the intranet preparation API
    pub prep_base_url: String,
    /// Base URL for the modules API
    pub modules_base_url: String,
    /// Base URL for the GSA API
    pub gsa_base_url: String,
    /// Base URL for the tickets API
    pub tickets_base_url: String,
    /// Base URL for the intranet API
    pub intra_base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl RestApiConfig {
    /// Returns the base URL for the given upstream service
    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Auth => &self.auth_base_url,
            Host::Prep => &self.prep_base_url,
            Host::Modules => &self.modules_base_url,
            Host::Gsa => &self.gsa_base_url,
            Host::Tickets => &self.tickets_base_url,
            Host::Intra => &self.intra_base_url,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the ETNA API client
///
/// Immutable once constructed and passed to the client; there are no
/// module-level mutable defaults.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry configuration for transport-level failures
    pub retry: RetryConfig,
    /// Whether to keep idle connections pooled between sequential calls
    ///
    /// `false` closes connections after each call (one-shot style). This
    /// only affects transport pooling, never request semantics.
    pub use_session: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Loads a `.env` file when present, then reads `ETNA_USER` and
    /// `ETNA_PASS` plus the optional base-URL, timeout and retry overrides.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login = get_env_or_default("ETNA_USER", String::new());
        let password = get_env_or_default("ETNA_PASS", String::new());

        if login.is_empty() {
            error!("ETNA_USER not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("ETNA_PASS not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { login, password },
            rest_api: RestApiConfig {
                auth_base_url: get_env_or_default(
                    "ETNA_AUTH_BASE_URL",
                    String::from(DEFAULT_AUTH_BASE_URL),
                ),
                prep_base_url: get_env_or_default(
                    "ETNA_PREP_BASE_URL",
                    String::from(DEFAULT_PREP_BASE_URL),
                ),
                modules_base_url: get_env_or_default(
                    "ETNA_MODULES_BASE_URL",
                    String::from(DEFAULT_MODULES_BASE_URL),
                ),
                gsa_base_url: get_env_or_default(
                    "ETNA_GSA_BASE_URL",
                    String::from(DEFAULT_GSA_BASE_URL),
                ),
                tickets_base_url: get_env_or_default(
                    "ETNA_TICKETS_BASE_URL",
                    String::from(DEFAULT_TICKETS_BASE_URL),
                ),
                intra_base_url: get_env_or_default(
                    "ETNA_INTRA_BASE_URL",
                    String::from(DEFAULT_INTRA_BASE_URL),
                ),
                timeout: get_env_or_default("ETNA_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            retry: RetryConfig::default(),
            use_session: get_env_or_default("ETNA_USE_SESSION", false),
        }
    }

    /// Whether both a login and a password are available
    pub fn has_credentials(&self) -> bool {
        !self.credentials.login.trim().is_empty() && !self.credentials.password.trim().is_empty()
    }
}
