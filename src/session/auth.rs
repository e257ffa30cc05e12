// Authentication module for the ETNA APIs

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::endpoint::Operation;
use crate::error::AppError;
use crate::session::interface::{Authenticator, EtnaSession};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Authentication handler for the ETNA APIs
///
/// Posts the configured login/password to the auth endpoint and collects the
/// session cookies set on the response. Authentication failures are not
/// retried here; the retry policy is confined to the request dispatcher.
pub struct EtnaAuth<'a> {
    pub(crate) cfg: &'a Config,
    http: Client,
}

impl<'a> EtnaAuth<'a> {
    /// Creates a new authentication handler
    ///
    /// # Arguments
    /// * `cfg` - Reference to the configuration
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            http: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(cfg.rest_api.timeout))
                .build()
                .expect("reqwest client"),
        }
    }
}

#[async_trait]
impl Authenticator for EtnaAuth<'_> {
    async fn login(&self) -> Result<EtnaSession, AppError> {
        let login = self.cfg.credentials.login.trim();
        let password = self.cfg.credentials.password.trim();

        if login.is_empty() || password.is_empty() {
            error!("missing login or password, can not authenticate");
            return Err(AppError::MissingCredentials);
        }

        let url = Operation::Login
            .descriptor()
            .resolve(&self.cfg.rest_api, &[])?;

        debug!("Login request to URL: {}", url);
        debug!("Using login: {}", login);

        let form = [("login", login), ("password", password)];
        let resp = self.http.post(&url).form(&form).send().await?;

        debug!("Login response status: {}", resp.status());

        // The service identifies the session purely through cookies; whatever
        // pairs are present on the response form the credential, whichever
        // status came back with them.
        let cookies = extract_cookies(resp.headers());
        if cookies.is_empty() {
            warn!("no session cookie set on login response");
        }

        Ok(EtnaSession::new(login, cookies))
    }
}

/// Collects cookie name/value pairs from `Set-Cookie` response headers
///
/// Attributes (`Path`, `HttpOnly`, ...) are discarded; only the leading
/// pair of each header is part of the credential.
fn extract_cookies(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    for value in headers.get_all(header::SET_COOKIE) {
        let Ok(raw) = value.to_str() else {
            warn!("skipping non-ascii set-cookie header");
            continue;
        };
        let pair = raw.split(';').next().unwrap_or(raw);
        if let Some((name, value)) = pair.split_once('=') {
            cookies.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
    cookies
}
