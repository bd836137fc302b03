//! themesmith compiles an editable browser theme into an installable package
//!
//! a theme is edited through an [`session::EditSession`], which keeps a bounded undo/redo
//! history of immutable snapshots. exporting runs the snapshot under the cursor through
//! [`manifest::compile`] and [`package::Packager`] to get a zip archive with a `manifest.json`,
//! the supplied images, and icons
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

#[macro_use]
pub mod macros;

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod manifest;
pub mod package;
pub mod raster;
pub mod session;
pub mod theme;
pub mod utils;
