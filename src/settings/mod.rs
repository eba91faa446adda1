//! Configuration loading and resolution utilities.
//!
//! Values are layered from built-in defaults, configuration files, the
//! environment and finally the command line. `load` is the entry point and
//! returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
