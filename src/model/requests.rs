/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 12/7/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Time range and content of a worked-hours declaration
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct DeclarationContent {
    /// Start of the declared range (`YYYY-MM-DD HH:MM`)
    pub start: String,
    /// End of the declared range (`YYYY-MM-DD HH:MM`)
    pub end: String,
    /// Free-form description of the work done
    pub content: String,
}

/// Body for declaring worked hours on a module activity
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct LogDeclaration {
    /// Module the activity belongs to
    pub module: u64,
    /// Activity the declaration targets
    pub activity: u64,
    /// The declared time range and its description
    pub declaration: DeclarationContent,
}

impl LogDeclaration {
    /// Creates a declaration for an activity
    pub fn new(
        module: u64,
        activity: u64,
        start: impl Into<String>,
        end: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            module,
            activity,
            declaration: DeclarationContent {
                start: start.into(),
                end: end.into(),
                content: content.into(),
            },
        }
    }
}

/// Body for opening a new ticket
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Ticket title
    pub title: String,
    /// Initial message of the ticket
    pub message: String,
    /// Tags attached to the ticket
    pub tags: Vec<String>,
    /// Logins of users to add to the ticket
    pub users: Vec<String>,
}

impl TicketRequest {
    /// Creates a ticket request with the required fields
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Sets the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the users
    pub fn with_users(mut self, users: Vec<String>) -> Self {
        self.users = users;
        self
    }
}
