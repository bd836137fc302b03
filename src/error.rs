//! error handling stuff
use {
    crate::{color::ColorError, manifest::ManifestError},
    thiserror::Error,
};

#[derive(Debug, Error)]
/// An error from the theme pipeline
pub enum ThemeError {
    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// an error decoding or encoding a raster image
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// an error building the zip archive
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// a blocking asset task panicked or was cancelled
    #[error("asset task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// a malformed color value
    #[error(transparent)]
    Color(#[from] ColorError),

    /// the manifest could not be compiled
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// an asset could not be read
    #[error("failed to read asset {name}: {source}")]
    AssetRead {
        /// the file name of the asset
        name: String,
        /// the underlying io error
        #[source]
        source: std::io::Error,
    },

    /// an unknown role name
    #[error("unknown {kind} role: {name}")]
    UnknownRole {
        /// which kind of role was being parsed
        kind: &'static str,
        /// the rejected name
        name: String,
    },

    /// the export preconditions were not met, nothing was packaged
    #[error("export blocked:\n{}", .0.join("\n"))]
    ExportBlocked(Vec<String>),

    /// another export is still running
    #[error("an export is already in progress")]
    ExportInProgress,

    /// two assets would land on the same archive path
    #[error("duplicate archive entry: {0}")]
    DuplicateAsset(String),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for ThemeError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<tokio::sync::TryAcquireError> for ThemeError {
    fn from(_: tokio::sync::TryAcquireError) -> Self {
        Self::ExportInProgress
    }
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::ThemeError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::ThemeError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::ThemeError::from(format!($fmt, $($arg)*)))
    };
}
