//! Change a process-wide value inside a function, and print it before,
//! during and after the change.
//!
//! See [globvar_core] for more details.

use globvar_core::cli::CliOpt;
use globvar_core::demo;
use globvar_core::glovar::GLOBAL_NAME;
use globvar_core::log;
use globvar_core::prelude::*;

use clap::Parser;

fn main() -> AnyResult<()> {
  let cli_opt = CliOpt::parse();
  log::init(&cli_opt)?;
  trace!("cli_opt: {:?}", cli_opt);

  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  demo::run(&GLOBAL_NAME, &mut out)?;

  Ok(())
}
