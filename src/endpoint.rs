/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 11/7/26
******************************************************************************/

//! Static catalog of the ETNA API endpoints
//!
//! Every logical operation the client exposes is declared here as an
//! [`EndpointDescriptor`]: the HTTP verb, the upstream service it lives on,
//! a URL template with `{name}` placeholders, and flags for binary responses
//! and preflight probes. The [`Operation`] enum is a closed table resolved at
//! compile time; there is no string-keyed dispatch and no runtime lookup
//! failure mode.

use crate::config::RestApiConfig;
use crate::error::AppError;
use reqwest::Method;

/// Upstream service an endpoint lives on
///
/// The intranet is split across several hosts; descriptors name the host and
/// [`RestApiConfig::base_url`] supplies the matching base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Authentication API (login, identity, profiles, photos)
    Auth,
    /// Intranet preparation API (promotions, grades, notifications, events)
    Prep,
    /// Modules API (activities, projects, declarations)
    Modules,
    /// GSA API (log events, worked-hours logs)
    Gsa,
    /// Tickets API
    Tickets,
    /// Intranet API (conversations)
    Intra,
}

/// Static declaration of one logical operation
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// HTTP verb of the call
    pub method: Method,
    /// Upstream service the endpoint lives on
    pub host: Host,
    /// URL template with `{name}` placeholders
    pub template: &'static str,
    /// Whether the response is binary and must not be JSON-decoded
    pub raw: bool,
    /// Whether an OPTIONS probe must be issued before the call
    ///
    /// The target service expects a cross-origin style preflight before its
    /// mutating endpoints accept a POST.
    pub preflight: bool,
}

impl EndpointDescriptor {
    fn new(method: Method, host: Host, template: &'static str) -> Self {
        Self {
            method,
            host,
            template,
            raw: false,
            preflight: false,
        }
    }

    fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    fn with_preflight(mut self) -> Self {
        self.preflight = true;
        self
    }

    /// Resolves the template against a base URL and the supplied parameters
    ///
    /// # Arguments
    /// * `rest_api` - Base URL configuration; the descriptor's host picks the entry
    /// * `params` - Placeholder name/value pairs
    ///
    /// # Returns
    /// * `Ok(String)` - Fully resolved URL with no remaining placeholder
    /// * `Err(AppError::MissingPlaceholder)` - A required placeholder was not supplied
    pub fn resolve(
        &self,
        rest_api: &RestApiConfig,
        params: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let base = rest_api.base_url(self.host).trim_end_matches('/');
        let path = render(self.template, params)?;
        Ok(format!("{base}{path}"))
    }
}

/// Substitutes `{name}` placeholders in a URL template
///
/// Every placeholder must be supplied; a missing one is a caller error, not
/// a retryable fault.
pub fn render(template: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| AppError::MissingPlaceholder(after.to_string()))?;
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| AppError::MissingPlaceholder(name.to_string()))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Closed table of the logical operations the client exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Exchange login/password for session cookies
    Login,
    /// Profile of the authenticated user
    Identity,
    /// Profile of a user by id
    UserInfo,
    /// Promotion of the authenticated user
    UserPromotion,
    /// Promotion roster by id
    Promotion,
    /// Current activities of a student
    CurrentActivities,
    /// Notifications of a student
    Notifications,
    /// Grades of a student within a promotion
    Grades,
    /// Profile photo of a user (binary)
    Picture,
    /// Project search for a student
    Search,
    /// Activities attached to a project
    ProjectActivities,
    /// Groups registered on a project activity
    ActivityGroups,
    /// Calendar events of a student over a date range
    Events,
    /// GSA log events of a student
    LogEvents,
    /// GSA worked-hours logs of a student
    Logs,
    /// Declare worked hours on a module activity
    DeclareLog,
    /// List open tickets
    Tickets,
    /// Fetch one ticket by id
    Ticket,
    /// Open a new ticket
    OpenTicket,
    /// Close a ticket by id
    CloseTicket,
    /// Conversations of a user
    Conversations,
}

impl Operation {
    /// Every operation in the catalog
    pub const ALL: [Operation; 21] = [
        Operation::Login,
        Operation::Identity,
        Operation::UserInfo,
        Operation::UserPromotion,
        Operation::Promotion,
        Operation::CurrentActivities,
        Operation::Notifications,
        Operation::Grades,
        Operation::Picture,
        Operation::Search,
        Operation::ProjectActivities,
        Operation::ActivityGroups,
        Operation::Events,
        Operation::LogEvents,
        Operation::Logs,
        Operation::DeclareLog,
        Operation::Tickets,
        Operation::Ticket,
        Operation::OpenTicket,
        Operation::CloseTicket,
        Operation::Conversations,
    ];

    /// Returns the static descriptor for this operation
    pub fn descriptor(&self) -> EndpointDescriptor {
        match self {
            Operation::Login => EndpointDescriptor::new(Method::POST, Host::Auth, "/login"),
            Operation::Identity => EndpointDescriptor::new(Method::GET, Host::Auth, "/identity"),
            Operation::UserInfo => {
                EndpointDescriptor::new(Method::GET, Host::Auth, "/api/users/{user_id}")
            }
            Operation::UserPromotion => EndpointDescriptor::new(Method::GET, Host::Prep, "/promo"),
            Operation::Promotion => {
                EndpointDescriptor::new(Method::GET, Host::Prep, "/trombi/{promo_id}")
            }
            Operation::CurrentActivities => EndpointDescriptor::new(
                Method::GET,
                Host::Modules,
                "/students/{login}/currentactivities",
            ),
            Operation::Notifications => {
                EndpointDescriptor::new(Method::GET, Host::Prep, "/students/{login}/informations")
            }
            Operation::Grades => EndpointDescriptor::new(
                Method::GET,
                Host::Prep,
                "/terms/{promo_id}/students/{login}/marks",
            ),
            Operation::Picture => {
                EndpointDescriptor::new(Method::GET, Host::Auth, "/api/users/{login}/photo").raw()
            }
            Operation::Search => {
                EndpointDescriptor::new(Method::GET, Host::Modules, "/students/{login}/search")
            }
            Operation::ProjectActivities => {
                EndpointDescriptor::new(Method::GET, Host::Modules, "/{project_id}/activities")
            }
            Operation::ActivityGroups => EndpointDescriptor::new(
                Method::GET,
                Host::Prep,
                "/sessions/{module_id}/project/{project_id}/groups",
            ),
            Operation::Events => {
                EndpointDescriptor::new(Method::GET, Host::Prep, "/students/{login}/events")
            }
            Operation::LogEvents => {
                EndpointDescriptor::new(Method::GET, Host::Gsa, "/students/{login}/events")
            }
            Operation::Logs => {
                EndpointDescriptor::new(Method::GET, Host::Gsa, "/students/{login}/logs")
            }
            Operation::DeclareLog => EndpointDescriptor::new(
                Method::POST,
                Host::Modules,
                "/students/{login}/modules/{module_id}/activities/declareLogs",
            )
            .with_preflight(),
            Operation::Tickets => {
                EndpointDescriptor::new(Method::GET, Host::Tickets, "/api/tickets")
            }
            Operation::Ticket => {
                EndpointDescriptor::new(Method::GET, Host::Tickets, "/api/tickets/{ticket_id}")
            }
            Operation::OpenTicket => {
                EndpointDescriptor::new(Method::POST, Host::Tickets, "/api/tickets").with_preflight()
            }
            Operation::CloseTicket => {
                EndpointDescriptor::new(Method::DELETE, Host::Tickets, "/api/tickets/{ticket_id}")
            }
            Operation::Conversations => {
                EndpointDescriptor::new(Method::GET, Host::Intra, "/users/{user_id}/conversations")
            }
        }
    }
}
