use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to a default when the
/// variable is absent or does not parse
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when the
/// variable is absent or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}
