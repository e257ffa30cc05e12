/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 13/7/26
******************************************************************************/

//! Client for the ETNA school APIs
//!
//! This module provides the main entry point of the crate: a client that
//! authenticates once at construction (or accepts a pre-obtained session)
//! and exposes one method per logical operation of the intranet APIs.
//! Payloads are passed through as opaque JSON; the client does not interpret
//! them.
//!
//! # Example
//! ```ignore
//! use etna_client::client::EtnaClient;
//! use etna_client::config::Config;
//!
//! let config = Config::new();
//! let client = EtnaClient::new(config).await?;
//!
//! let activities = client.get_current_activities(None).await?;
//! ```

use crate::config::Config;
use crate::endpoint::Operation;
use crate::error::AppError;
use crate::model::requests::{LogDeclaration, TicketRequest};
use crate::session::auth::EtnaAuth;
use crate::session::interface::{Authenticator, EtnaSession};
use crate::transport::http_client::{EtnaHttpClient, EtnaHttpClientImpl, RawResponse};
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Client for the ETNA school APIs
///
/// Holds the configuration, the authenticated session (an immutable
/// credential snapshot) and the transport. Operations are sequential: each
/// call awaits its HTTP exchange, including any retries, before returning.
/// The client is not designed for concurrent use from multiple tasks.
pub struct EtnaClient<T: EtnaHttpClient = EtnaHttpClientImpl> {
    config: Arc<Config>,
    session: EtnaSession,
    transport: Arc<T>,
}

impl EtnaClient<EtnaHttpClientImpl> {
    /// Creates a new client and performs the initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(EtnaClient)` - Authenticated client ready to use
    /// * `Err(AppError::MissingCredentials)` - No login/password available
    pub async fn new(config: Config) -> Result<Self, AppError> {
        if !config.has_credentials() {
            error!("no credentials available, can not build a session");
            return Err(AppError::MissingCredentials);
        }

        let session = EtnaAuth::new(&config).login().await?;
        let transport = Arc::new(EtnaHttpClientImpl::new(&config)?);

        Ok(Self {
            config: Arc::new(config),
            session,
            transport,
        })
    }

    /// Creates a client from a pre-obtained session, without any HTTP call
    ///
    /// # Arguments
    /// * `config` - Configuration for API settings (credentials unused)
    /// * `session` - Session obtained earlier, e.g. from stored cookies
    pub fn with_session(config: Config, session: EtnaSession) -> Result<Self, AppError> {
        let transport = Arc::new(EtnaHttpClientImpl::new(&config)?);
        Ok(Self {
            config: Arc::new(config),
            session,
            transport,
        })
    }
}

impl<T: EtnaHttpClient> EtnaClient<T> {
    /// Creates a client over a custom transport implementation
    pub fn with_transport(config: Config, session: EtnaSession, transport: Arc<T>) -> Self {
        Self {
            config: Arc::new(config),
            session,
            transport,
        }
    }

    /// Login of the authenticated session
    pub fn login(&self) -> &str {
        &self.session.login
    }

    /// The session in use
    pub fn session(&self) -> &EtnaSession {
        &self.session
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The transport in use
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves an operation's URL, issues its preflight when required, and
    /// performs the call
    async fn dispatch(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<Value, AppError> {
        let descriptor = operation.descriptor();
        let url = descriptor.resolve(&self.config.rest_api, params)?;

        if descriptor.preflight {
            // The service refuses the mutating POST unless an OPTIONS probe
            // preceded it on the same URL.
            debug!("preflight OPTIONS {}", url);
            self.transport
                .request_raw(Method::OPTIONS, &url, &self.session, None, None)
                .await?;
        }

        self.transport
            .request(descriptor.method, &url, &self.session, body, query)
            .await
    }

    /// Same as [`dispatch`](Self::dispatch) but skips JSON decoding
    async fn dispatch_raw(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
    ) -> Result<RawResponse, AppError> {
        let descriptor = operation.descriptor();
        let url = descriptor.resolve(&self.config.rest_api, params)?;
        self.transport
            .request_raw(descriptor.method, &url, &self.session, None, None)
            .await
    }

    /// Returns a user's profile. Defaults to the authenticated user
    pub async fn get_user_info(&self, user_id: Option<u64>) -> Result<Value, AppError> {
        match user_id {
            Some(user_id) => {
                let user_id = user_id.to_string();
                self.dispatch(Operation::UserInfo, &[("user_id", &user_id)], None, None)
                    .await
            }
            None => self.dispatch(Operation::Identity, &[], None, None).await,
        }
    }

    /// Returns a promotion roster. Defaults to the session's own promotion
    pub async fn get_promotion(&self, promotion_id: Option<u64>) -> Result<Value, AppError> {
        match promotion_id {
            Some(promotion_id) => {
                let promotion_id = promotion_id.to_string();
                self.dispatch(Operation::Promotion, &[("promo_id", &promotion_id)], None, None)
                    .await
            }
            None => {
                self.dispatch(Operation::UserPromotion, &[], None, None)
                    .await
            }
        }
    }

    /// Returns a student's current activities
    ///
    /// If `login` is not set, defaults to the session's login.
    pub async fn get_current_activities(&self, login: Option<&str>) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        self.dispatch(Operation::CurrentActivities, &[("login", login)], None, None)
            .await
    }

    /// Returns a student's notifications
    ///
    /// If `login` is not set, defaults to the session's login.
    pub async fn get_notifications(&self, login: Option<&str>) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        self.dispatch(Operation::Notifications, &[("login", login)], None, None)
            .await
    }

    /// Returns a student's grades within a promotion
    pub async fn get_grades(
        &self,
        promotion_id: u64,
        login: Option<&str>,
    ) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        let promotion_id = promotion_id.to_string();
        self.dispatch(
            Operation::Grades,
            &[("promo_id", &promotion_id), ("login", login)],
            None,
            None,
        )
        .await
    }

    /// Returns a user's profile photo as raw bytes
    pub async fn get_picture(&self, login: Option<&str>) -> Result<Vec<u8>, AppError> {
        let login = login.unwrap_or(&self.session.login);
        let response = self
            .dispatch_raw(Operation::Picture, &[("login", login)])
            .await?;
        Ok(response.body)
    }

    /// Returns a student's projects
    ///
    /// # Arguments
    /// * `login` - Student login (defaults to the session's login)
    /// * `date` - Restrict the search to a given date
    pub async fn get_projects(
        &self,
        login: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        let query = date.map(|date| vec![(String::from("date"), date.format("%Y-%m-%d").to_string())]);
        self.dispatch(
            Operation::Search,
            &[("login", login)],
            None,
            query.as_deref(),
        )
        .await
    }

    /// Returns the activities attached to a project
    pub async fn get_activities_for_project(&self, project_id: u64) -> Result<Value, AppError> {
        let project_id = project_id.to_string();
        self.dispatch(
            Operation::ProjectActivities,
            &[("project_id", &project_id)],
            None,
            None,
        )
        .await
    }

    /// Returns the groups registered on a project activity
    pub async fn get_group_for_activity(
        &self,
        module_id: u64,
        project_id: u64,
    ) -> Result<Value, AppError> {
        let module_id = module_id.to_string();
        let project_id = project_id.to_string();
        self.dispatch(
            Operation::ActivityGroups,
            &[("module_id", &module_id), ("project_id", &project_id)],
            None,
            None,
        )
        .await
    }

    /// Returns a student's calendar events over a date range
    pub async fn get_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        login: Option<&str>,
    ) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        let query = vec![
            (String::from("start"), start.format("%Y-%m-%d").to_string()),
            (String::from("end"), end.format("%Y-%m-%d").to_string()),
        ];
        self.dispatch(Operation::Events, &[("login", login)], None, Some(&query))
            .await
    }

    /// Returns a student's GSA log events
    pub async fn get_log_events(&self, login: Option<&str>) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        self.dispatch(Operation::LogEvents, &[("login", login)], None, None)
            .await
    }

    /// Returns a student's GSA worked-hours logs
    pub async fn get_logs(&self, login: Option<&str>) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        self.dispatch(Operation::Logs, &[("login", login)], None, None)
            .await
    }

    /// Declares worked hours on a module activity
    ///
    /// Issues exactly two HTTP calls in order: an OPTIONS preflight, then the
    /// POST carrying the declaration. Returns the POST's decoded payload.
    pub async fn declare_log(
        &self,
        declaration: &LogDeclaration,
        login: Option<&str>,
    ) -> Result<Value, AppError> {
        let login = login.unwrap_or(&self.session.login);
        let module_id = declaration.module.to_string();
        let body = serde_json::to_value(declaration)?;
        self.dispatch(
            Operation::DeclareLog,
            &[("login", login), ("module_id", &module_id)],
            Some(&body),
            None,
        )
        .await
    }

    /// Lists the tickets visible to the session
    pub async fn get_tickets(&self) -> Result<Value, AppError> {
        self.dispatch(Operation::Tickets, &[], None, None).await
    }

    /// Fetches one ticket by id
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Value, AppError> {
        let ticket_id = ticket_id.to_string();
        self.dispatch(Operation::Ticket, &[("ticket_id", &ticket_id)], None, None)
            .await
    }

    /// Opens a new ticket
    ///
    /// Issues exactly two HTTP calls in order: an OPTIONS preflight, then the
    /// POST carrying the ticket. Returns the POST's decoded payload.
    pub async fn open_ticket(&self, ticket: &TicketRequest) -> Result<Value, AppError> {
        let body = serde_json::to_value(ticket)?;
        self.dispatch(Operation::OpenTicket, &[], Some(&body), None)
            .await
    }

    /// Closes a ticket by id
    pub async fn close_ticket(&self, ticket_id: u64) -> Result<Value, AppError> {
        let ticket_id = ticket_id.to_string();
        self.dispatch(
            Operation::CloseTicket,
            &[("ticket_id", &ticket_id)],
            None,
            None,
        )
        .await
    }

    /// Returns a user's conversations
    ///
    /// # Arguments
    /// * `user_id` - Numeric id of the user (from [`get_user_info`](Self::get_user_info))
    /// * `from` - Pagination offset
    /// * `size` - Number of conversations to fetch
    pub async fn get_conversations(
        &self,
        user_id: u64,
        from: Option<u32>,
        size: Option<u32>,
    ) -> Result<Value, AppError> {
        let user_id = user_id.to_string();
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push((String::from("from"), from.to_string()));
        }
        if let Some(size) = size {
            query.push((String::from("size"), size.to_string()));
        }
        let query = if query.is_empty() { None } else { Some(&query[..]) };
        self.dispatch(Operation::Conversations, &[("user_id", &user_id)], None, query)
            .await
    }
}

/// Two clients are equal when their sessions are: same login, same
/// credential. The transport pooling mode does not take part in equality.
impl<T: EtnaHttpClient> PartialEq for EtnaClient<T> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl<T: EtnaHttpClient> Eq for EtnaClient<T> {}

impl<T: EtnaHttpClient> fmt::Debug for EtnaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtnaClient")
            .field("login", &self.session.login)
            .field("cookies", &self.session.cookies().keys())
            .finish()
    }
}
