//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] built
//! from config files, environment variables and CLI overrides, in that order
//! of increasing precedence.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
