//! The core library for `globvar`, it shows how a function mutates a value
//! that lives at process (global) scope.

pub mod cli;
pub mod constant;
pub mod demo;
pub mod glovar;
pub mod lock;
pub mod log;
pub mod prelude;
pub mod results;
