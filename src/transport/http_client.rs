/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 13/7/26
******************************************************************************/

//! Request dispatcher for the ETNA APIs
//!
//! Issues HTTP calls with the session credential attached, classifies the
//! response and applies a bounded retry policy on transport-level failures:
//! - a non-success HTTP status becomes [`AppError::BadStatus`] immediately
//!   and is never retried;
//! - connect/timeout/body failures are retried with exponential backoff and
//!   jitter, up to the configured bound, then become
//!   [`AppError::MaxRetriesExceeded`].

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::session::interface::EtnaSession;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Status and URL of the most recent HTTP exchange
///
/// Diagnostic only: overwritten on every call, carries no correctness
/// guarantee for concurrent callers. This is not a cache.
#[derive(Debug, Clone)]
pub struct LastResponse {
    /// Status code of the most recent response
    pub status: StatusCode,
    /// Resolved URL the response came from
    pub url: String,
}

/// An HTTP response returned without JSON decoding
///
/// Used for binary endpoints such as profile photos, or when the caller
/// needs the response headers.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code of the response
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Undecoded response body
    pub body: Vec<u8>,
}

/// HTTP client trait for the ETNA APIs
///
/// The client and the per-operation methods are generic over this seam so
/// tests and alternative transports can substitute their own implementation.
#[async_trait]
pub trait EtnaHttpClient: Send + Sync {
    /// Performs a request and decodes the response body as JSON
    ///
    /// # Arguments
    /// * `method` - HTTP verb
    /// * `url` - Fully resolved URL
    /// * `session` - Session whose credential is attached to the request
    /// * `body` - Optional JSON body
    /// * `query` - Optional URL query parameters
    async fn request(
        &self,
        method: Method,
        url: &str,
        session: &EtnaSession,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<Value, AppError>;

    /// Performs a request and returns the response undecoded
    async fn request_raw(
        &self,
        method: Method,
        url: &str,
        session: &EtnaSession,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<RawResponse, AppError>;

    /// Status and URL of the most recent exchange, if any
    fn last_response(&self) -> Option<LastResponse>;
}

/// Dispatcher implementation over a pooled `reqwest` client
pub struct EtnaHttpClientImpl {
    http: Client,
    retry: RetryConfig,
    last: RwLock<Option<LastResponse>>,
}

impl EtnaHttpClientImpl {
    /// Creates a dispatcher from the configuration
    ///
    /// The per-call timeout and the pooling mode come from the config;
    /// `use_session = false` closes connections after each call.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout));
        if !config.use_session {
            builder = builder.pool_max_idle_per_host(0);
        }
        Ok(Self {
            http: builder.build()?,
            retry: config.retry.clone(),
            last: RwLock::new(None),
        })
    }

    /// Sends one logical request through the retry loop and classifies the
    /// final status
    async fn send(
        &self,
        method: Method,
        url: &str,
        session: &EtnaSession,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<Response, AppError> {
        let cookie = session.cookie_header();

        let response = execute_with_retry(&self.retry, || {
            debug!("{} {}", method, url);
            let mut request = self.http.request(method.clone(), url);
            if !cookie.is_empty() {
                request = request.header(header::COOKIE, cookie.clone());
            }
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }
            async move { request.send().await }
        })
        .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if let Ok(mut slot) = self.last.write() {
            *slot = Some(LastResponse {
                status,
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::BadStatus { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl EtnaHttpClient for EtnaHttpClientImpl {
    async fn request(
        &self,
        method: Method,
        url: &str,
        session: &EtnaSession,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<Value, AppError> {
        let response = self.send(method, url, session, body, query).await?;
        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn request_raw(
        &self,
        method: Method,
        url: &str,
        session: &EtnaSession,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<RawResponse, AppError> {
        let response = self.send(method, url, session, body, query).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    fn last_response(&self) -> Option<LastResponse> {
        self.last.read().ok().and_then(|slot| slot.clone())
    }
}

/// Runs one request attempt through the bounded retry policy
///
/// `attempt_fn` builds and sends a fresh request on every call. Transport
/// failures are retried with exponential backoff and jitter until the bound
/// is exhausted; the error then carries the total attempt count. Responses
/// are returned as-is, whatever their status; classification is the
/// caller's concern.
///
/// # Arguments
///
/// * `retry` - Retry bound and backoff base
/// * `attempt_fn` - Produces one request attempt per invocation
///
/// # Returns
///
/// * `Ok(Response)` - The first response obtained from the transport
/// * `Err(AppError::MaxRetriesExceeded)` - Transport failures exhausted the bound
pub async fn execute_with_retry<F, Fut>(
    retry: &RetryConfig,
    mut attempt_fn: F,
) -> Result<Response, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let max_retries = retry.max_retries();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match attempt_fn().await {
            Ok(response) => return Ok(response),
            Err(err) => {
                if attempts > max_retries {
                    error!(
                        "Transport failure persisted after {} attempts: {}",
                        attempts, err
                    );
                    return Err(AppError::MaxRetriesExceeded(attempts));
                }

                let delay = retry.backoff_delay(attempts);
                warn!(
                    "Transport failure (attempt {} of {}): {}. Retrying in {:?}",
                    attempts,
                    max_retries + 1,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
