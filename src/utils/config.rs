use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is absent or does not parse
///
/// An unparseable value is logged and treated like an absent one, so a typo
/// in e.g. `BACKEND_TIMEOUT` degrades to the built-in default instead of
/// poisoning client construction.
pub fn get_env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("ignoring unparseable {name}={raw}: {e:?}");
            default
        }
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// absent or does not parse
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.parse().ok()
}
