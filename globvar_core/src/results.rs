//! Results and errors.

use compact_str::CompactString;
use thiserror::Error as ThisError;

// anyhow {

/// [`anyhow::Result`] with `T` if ok, [`anyhow::Error`] if error.
pub type AnyResult<T> = anyhow::Result<T>;

// anyhow }

// std::io {

/// [`std::io::Error`]
pub type IoErr = std::io::Error;

/// [`std::io::ErrorKind`]
pub type IoErrKind = std::io::ErrorKind;

/// [`std::io::Result`] with `T` if ok.
pub type IoResult<T> = std::io::Result<T>;

// std::io }

// thiserror {

/// All error codes.
#[derive(Debug, ThisError)]
pub enum TheErr {
  #[error("Failed to lock `{0}` within {1} seconds")]
  /// Mutex is still held by someone else after the timeout.
  LockTimeout(CompactString, u64),

  #[error("Failed to write output: {0}")]
  /// Output sink rejected the line.
  WriteOutputFailed(IoErr),

  #[error("Failed to initialize log: {0}")]
  /// Global tracing subscriber is already installed, or cannot be installed.
  InitLogFailed(String),
}

/// [`Result`] with `T` if ok, [`TheErr`] if error.
pub type TheResult<T> = Result<T, TheErr>;

// thiserror }
