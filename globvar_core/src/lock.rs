//! Mutex utility.

use crate::results::{TheErr, TheResult};

use compact_str::CompactString;
use parking_lot::{Mutex, MutexGuard};
use std::time::Duration;

/// Generate `Arc<Mutex>` pointers.
#[macro_export]
macro_rules! arc_mutex_ptr {
  ($name:ident) => {
    $crate::prelude::paste! {
      pub type [<$name Arc>] = std::sync::Arc<$crate::prelude::Mutex<$name>>;
      pub type [<$name Wk>] = std::sync::Weak<$crate::prelude::Mutex<$name>>;
      pub type [<$name MutexGuard>]<'a> = $crate::prelude::MutexGuard<'a, $name>;

      impl $name {
        pub fn to_arc(value: $name) -> [<$name Arc>] {
          std::sync::Arc::new($crate::prelude::Mutex::new(value))
        }
      }
    }
  };
}

/// Lock the mutex with the [`MUTEX_TIMEOUT`](crate::constant::MUTEX_TIMEOUT), returns [`TheErr::LockTimeout`] if failed.
#[macro_export]
macro_rules! lock {
  ($id:expr) => {
    $crate::lock::lock_with_timeout(stringify!($id), &($id), *$crate::constant::MUTEX_TIMEOUT)
  };
}

/// Try lock the mutex within `timeout`.
///
/// NOTE: A `timeout` that overflows the clock (i.e. [`u64::MAX`] seconds) waits forever.
pub fn lock_with_timeout<'a, T>(
  name: &str,
  mutex: &'a Mutex<T>,
  timeout: Duration,
) -> TheResult<MutexGuard<'a, T>> {
  match mutex.try_lock_for(timeout) {
    Some(guard) => Ok(guard),
    None => Err(TheErr::LockTimeout(
      CompactString::from(name),
      timeout.as_secs(),
    )),
  }
}
