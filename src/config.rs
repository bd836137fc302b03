//! configuration stuff
//!
//! settings are layered: embedded defaults, then the global `themesmith.toml`, then the nearest
//! local one, then `THEMESMITH_*` environment variables (`THEMESMITH_HISTORY__MAX_LENGTH=10`)
pub mod options;
pub mod validate;
