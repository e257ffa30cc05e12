// Session state for the ETNA APIs

use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Authenticated session state for the ETNA APIs
///
/// Holds the identifying principal (login) and the opaque credential: the
/// session cookies obtained at login time. The session is an immutable
/// snapshot: it is never mutated after creation and there is no refresh
/// logic. Every request issued by a client carries exactly one session's
/// credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtnaSession {
    /// Login identifier of the authenticated student
    pub login: String,
    cookies: BTreeMap<String, String>,
}

impl EtnaSession {
    /// Creates a session from a login and a cookie map
    pub fn new(login: impl Into<String>, cookies: BTreeMap<String, String>) -> Self {
        Self {
            login: login.into(),
            cookies,
        }
    }

    /// Creates a session from a login and cookie name/value pairs
    pub fn from_pairs<I, K, V>(login: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let cookies = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self::new(login, cookies)
    }

    /// Renders the credential as a `Cookie` header value
    ///
    /// Cookies are emitted in name order, so two sessions holding the same
    /// pairs render identically.
    pub fn cookie_header(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.cookies {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// The session cookies
    pub fn cookies(&self) -> &BTreeMap<String, String> {
        &self.cookies
    }

    /// Whether any cookie was obtained at login time
    pub fn has_cookies(&self) -> bool {
        !self.cookies.is_empty()
    }
}

/// Interface for establishing an authenticated session
#[async_trait]
pub trait Authenticator {
    /// Exchanges the configured credentials for a session
    async fn login(&self) -> Result<EtnaSession, AppError>;
}
