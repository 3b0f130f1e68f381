//! Prelude.

// Re-export locks
pub use parking_lot::{Mutex, MutexGuard};

// Re-export `tracing`.
pub use tracing::{debug, error, info, trace, warn};

// Re-export `results`.
pub use crate::results::*;

// Re-export `lock`.
pub use crate::{arc_mutex_ptr, lock};
pub use paste::paste;

// Re-export `compact_str`.
pub use compact_str::CompactString;
