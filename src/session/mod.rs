/// Authentication against the ETNA login endpoint
pub mod auth;
/// Session state and the authenticator trait
pub mod interface;
