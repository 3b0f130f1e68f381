//! Logging utils.

use crate::cli::CliOpt;
use crate::constant::LOG_FILE_NAME;
use crate::results::{TheErr, TheResult};

use std::path::Path;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Build the env filter from `RUST_LOG`, see [`env_filter_from`].
pub fn env_filter(cli_opt: &CliOpt) -> EnvFilter {
  let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
  env_filter_from(cli_opt, directives.as_deref())
}

/// Build the env filter, the level from `cli_opt` is the default directive,
/// `directives` (in `RUST_LOG` syntax) are added on top of it. Invalid
/// directives are ignored.
pub fn env_filter_from(cli_opt: &CliOpt, directives: Option<&str>) -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::from_level(cli_opt.log_level()).into())
    .parse_lossy(directives.unwrap_or_default())
}

/// Create the (never rotated) `globvar.log` appender under `dir`.
pub fn file_appender(dir: &Path) -> TheResult<RollingFileAppender> {
  RollingFileAppender::builder()
    .rotation(Rotation::NEVER)
    .filename_prefix(LOG_FILE_NAME)
    .build(dir)
    .map_err(|e| {
      TheErr::InitLogFailed(format!("{}: {e}", dir.join(LOG_FILE_NAME).display()))
    })
}

/// Initialize logging, always print to `stderr` so `stdout` only contains
/// the program output.
///
/// In debug mode, logs are also appended to `globvar.log` in current directory.
pub fn init(cli_opt: &CliOpt) -> TheResult<()> {
  let builder = tracing_subscriber::FmtSubscriber::builder()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_thread_names(true)
    .with_level(true)
    .with_env_filter(env_filter(cli_opt));

  let result = if cli_opt.debug() {
    let file_appender = file_appender(Path::new("."))?;
    let subscriber = builder
      .with_ansi(false)
      .with_writer(std::io::stderr.and(file_appender))
      .finish();
    tracing::subscriber::set_global_default(subscriber)
  } else {
    let subscriber = builder.with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)
  };
  result.map_err(|e| TheErr::InitLogFailed(e.to_string()))?;

  debug!("Initialize tracing log, cli_opt:{:?}", cli_opt);
  Ok(())
}
