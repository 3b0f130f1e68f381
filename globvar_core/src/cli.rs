//! Command line options.

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug, Clone, Default)]
#[command(
  name = "globvar",
  version,
  about = "Change a process-wide value inside a function and print it",
  long_about = None
)]
/// Command line options.
pub struct CliOpt {
  #[arg(long, help = "Run in verbose mode")]
  verbose: bool,

  #[arg(long, help = "Run in debug mode, also write logs to globvar.log")]
  debug: bool,
}

impl CliOpt {
  /// Verbose mode.
  pub fn verbose(&self) -> bool {
    self.verbose
  }

  /// Debug mode.
  pub fn debug(&self) -> bool {
    self.debug
  }

  /// Max logging level, `--debug` wins over `--verbose`.
  pub fn log_level(&self) -> Level {
    if self.debug {
      Level::DEBUG
    } else if self.verbose {
      Level::INFO
    } else {
      Level::WARN
    }
  }

  #[cfg(test)]
  pub fn new(verbose: bool, debug: bool) -> Self {
    Self { verbose, debug }
  }
}
