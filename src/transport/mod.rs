/// HTTP client trait and implementation with bounded retry
pub mod http_client;
