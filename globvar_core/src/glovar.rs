//! Process-wide (global) variables.
//!
//! The [`GLOBAL_NAME`] is created with [`INITIAL_NAME`] when it's first
//! accessed, and lives until the process exits. Functions that mutate it
//! always receive the shared handle ([`GlobalNameArc`]) explicitly, so the
//! mutation lands on the same binding every caller observes, never on a
//! local copy.

use crate::constant::{CHANGED_NAME, INITIAL_NAME};
use crate::prelude::*;

use once_cell::sync::Lazy;
use std::io::Write;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
/// Stage of the global name.
pub enum Stage {
  /// Still holds the initial value.
  Initialized,
  /// Changed at least once, it never goes back.
  Mutated,
}

#[derive(Debug, Clone)]
/// A string value shared by the whole process.
pub struct GlobalName {
  value: CompactString,
  stage: Stage,
}

arc_mutex_ptr!(GlobalName);

impl GlobalName {
  pub fn new() -> Self {
    GlobalName {
      value: CompactString::const_new(INITIAL_NAME),
      stage: Stage::Initialized,
    }
  }

  /// Current value.
  pub fn value(&self) -> &str {
    &self.value
  }

  /// Current stage.
  pub fn stage(&self) -> Stage {
    self.stage
  }

  /// Overwrite the value, the stage becomes [`Stage::Mutated`].
  pub fn set(&mut self, value: &str) {
    self.value = CompactString::from(value);
    self.stage = Stage::Mutated;
  }
}

impl Default for GlobalName {
  fn default() -> Self {
    Self::new()
  }
}

/// The global name, initialized with [`INITIAL_NAME`].
pub static GLOBAL_NAME: Lazy<GlobalNameArc> =
  Lazy::new(|| GlobalName::to_arc(GlobalName::new()));

/// Read a snapshot of the global name.
pub fn global_name(global: &GlobalNameArc) -> TheResult<CompactString> {
  let name = lock!(global)?;
  trace!("read global name:{:?}, stage:{}", name.value(), name.stage());
  Ok(CompactString::from(name.value()))
}

/// Write one line of `value` to `out`.
pub fn print_line<W: Write>(out: &mut W, value: &str) -> TheResult<()> {
  writeln!(out, "{value}").map_err(TheErr::WriteOutputFailed)
}

/// Change the global name to [`CHANGED_NAME`] and print it.
///
/// The value is overwritten unconditionally, calling it again leaves it
/// unchanged. The lock is released before printing, thus if the output fails
/// the global name is still changed.
pub fn change_global_var<W: Write>(
  global: &GlobalNameArc,
  out: &mut W,
) -> TheResult<()> {
  let value = {
    let mut name: GlobalNameMutexGuard = lock!(global)?;
    let before = name.stage();
    name.set(CHANGED_NAME);
    debug!(
      "change global name to:{:?}, stage:{} => {}",
      name.value(),
      before,
      name.stage()
    );
    CompactString::from(name.value())
  };
  print_line(out, &value)
}
