//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for shared state and change listeners.

pub mod aliases;

pub use aliases::*;
