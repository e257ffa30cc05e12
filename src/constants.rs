/// Default base URL for the authentication API (login, identity, profiles)
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth.etna-alternance.net";
/// Default base URL for the intranet preparation API (promotions, grades, notifications)
pub const DEFAULT_PREP_BASE_URL: &str = "https://prepintra-api.etna-alternance.net";
/// Default base URL for the modules API (activities, projects, declarations)
pub const DEFAULT_MODULES_BASE_URL: &str = "https://modules-api.etna-alternance.net";
/// Default base URL for the GSA API (log events and worked-hours logs)
pub const DEFAULT_GSA_BASE_URL: &str = "https://gsa-api.etna-alternance.net";
/// Default base URL for the tickets API
pub const DEFAULT_TICKETS_BASE_URL: &str = "https://tickets.etna-alternance.net";
/// Default base URL for the intranet API (conversations)
pub const DEFAULT_INTRA_BASE_URL: &str = "https://intra-api.etna-alternance.net";
/// Per-call timeout in seconds applied to every HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 50;
/// Default number of retries after a transport-level failure before giving up
///
/// This bounds additional attempts: a call performs at most
/// `DEFAULT_MAX_RETRIES + 1` HTTP exchanges before failing terminally.
pub const DEFAULT_MAX_RETRIES: u32 = 5;
/// Base delay in milliseconds for the first retry backoff step
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 250;
/// Upper bound in milliseconds for a single backoff step, before jitter
pub const MAX_RETRY_DELAY_MS: u64 = 10_000;
/// User agent string used in HTTP requests to identify this client to the ETNA APIs
pub const USER_AGENT: &str = "etna-client/0.3.0";
