//! Program entry sequence.

use crate::glovar::{GlobalNameArc, change_global_var, global_name, print_line};
use crate::prelude::*;

use std::io::Write;

/// Print the global name, change it, then print it again.
///
/// On a fresh global name the output is `Hello`, `world`, `world`, one per
/// line.
pub fn run<W: Write>(global: &GlobalNameArc, out: &mut W) -> TheResult<()> {
  let before = global_name(global)?;
  info!("global name before change:{:?}", before);
  print_line(out, &before)?;

  change_global_var(global, out)?;

  let after = global_name(global)?;
  info!("global name after change:{:?}", after);
  print_line(out, &after)?;

  out.flush().map_err(TheErr::WriteOutputFailed)
}
