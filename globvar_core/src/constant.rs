//! Global constants.

use once_cell::sync::Lazy;
use std::time::Duration;

/// Environment variable name for the mutex locking timeout.
pub const GLOBVAR_MUTEX_TIMEOUT_SECS: &str = "GLOBVAR_MUTEX_TIMEOUT_SECS";

/// Mutex locking timeout in seconds, by default is [`u64::MAX`].
///
/// NOTE: This constant can be configured through `GLOBVAR_MUTEX_TIMEOUT_SECS` environment variable.
pub static MUTEX_TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| {
  parse_timeout_secs(std::env::var(GLOBVAR_MUTEX_TIMEOUT_SECS).ok().as_deref())
});

/// Mutex locking timeout duration, by default is [`u64::MAX`] seconds.
pub static MUTEX_TIMEOUT: Lazy<Duration> =
  Lazy::new(|| Duration::from_secs(*MUTEX_TIMEOUT_SECS));

/// Value of the global name when process starts.
pub const INITIAL_NAME: &str = "Hello";

/// Value of the global name after it is changed.
pub const CHANGED_NAME: &str = "world";

/// File name for logs when running in debug mode.
pub const LOG_FILE_NAME: &str = "globvar.log";

fn parse_timeout_secs(value: Option<&str>) -> u64 {
  value
    .and_then(|v| v.trim().parse::<u64>().ok())
    .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mutex_timeout1() {
    assert!(*MUTEX_TIMEOUT_SECS > 0);
  }

  #[test]
  fn parse_timeout_secs1() {
    assert_eq!(parse_timeout_secs(None), u64::MAX);
    assert_eq!(parse_timeout_secs(Some("128")), 128_u64);
    assert_eq!(parse_timeout_secs(Some(" 7 ")), 7_u64);
    assert_eq!(parse_timeout_secs(Some("abc")), u64::MAX);
    assert_eq!(parse_timeout_secs(Some("-1")), u64::MAX);
  }
}
