//! the application layer
#[cfg(feature = "cli")]
pub mod cli;
pub mod logging;
