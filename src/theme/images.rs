//! image roles and binary assets
use {
    crate::{
        error::{Result, ThemeError},
        raster,
    },
    std::{
        path::{Path, PathBuf},
        sync::Arc,
    },
};

theme_roles! {
    /// a named image slot in the theme
    pub enum ImageRole {
        /// the window frame
        ThemeFrame => "theme_frame",
        /// the window frame while unfocused
        ThemeFrameInactive => "theme_frame_inactive",
        /// the incognito window frame
        ThemeFrameIncognito => "theme_frame_incognito",
        /// the incognito window frame while unfocused
        ThemeFrameIncognitoInactive => "theme_frame_incognito_inactive",
        /// an overlay drawn on top of the frame
        ThemeFrameOverlay => "theme_frame_overlay",
        /// the frame overlay while unfocused
        ThemeFrameOverlayInactive => "theme_frame_overlay_inactive",
        /// the toolbar
        ThemeToolbar => "theme_toolbar",
        /// background tabs
        ThemeTabBackground => "theme_tab_background",
        /// background tabs while unfocused
        ThemeTabBackgroundInactive => "theme_tab_background_inactive",
        /// incognito background tabs
        ThemeTabBackgroundIncognito => "theme_tab_background_incognito",
        /// incognito background tabs while unfocused
        ThemeTabBackgroundIncognitoInactive => "theme_tab_background_incognito_inactive",
        /// the new tab page background
        ThemeNtpBackground => "theme_ntp_background",
        /// the attribution image in the corner of the new tab page
        ThemeNtpAttribution => "theme_ntp_attribution",
        /// toolbar button background
        ThemeButtonBackground => "theme_button_background",
        /// window control background
        ThemeWindowControlBackground => "theme_window_control_background",
    }
}

/// where the bytes of an asset come from
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// bytes already in memory
    Bytes(Arc<[u8]>),
    /// a file read at export time
    Path(PathBuf),
}

/// a user supplied image together with the file name it was supplied under
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// the base file name, used for the archive entry
    file_name: String,
    /// the bytes
    source: AssetSource,
}

impl ImageAsset {
    /// make an asset from in-memory bytes
    ///
    /// any directory part of `file_name` is dropped so the asset can't escape `images/`
    pub fn from_bytes(file_name: impl AsRef<str>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: base_name(file_name.as_ref()),
            source: AssetSource::Bytes(bytes.into()),
        }
    }

    /// make an asset backed by a file on disk, named after that file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format!("{} has no usable file name", path.display()))?;

        Ok(Self {
            file_name: file_name.to_string(),
            source: AssetSource::Path(path.to_path_buf()),
        })
    }

    /// rename the asset
    pub fn with_file_name(mut self, file_name: impl AsRef<str>) -> Self {
        self.file_name = base_name(file_name.as_ref());
        self
    }

    /// the base file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// where the bytes come from
    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    /// read the bytes
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::AssetRead`] if a file backed asset can't be read
    pub async fn read(&self) -> Result<Arc<[u8]>> {
        match &self.source {
            AssetSource::Bytes(bytes) => Ok(Arc::clone(bytes)),
            AssetSource::Path(path) => tokio::fs::read(path)
                .await
                .map(Arc::from)
                .map_err(|source| ThemeError::AssetRead {
                    name: self.file_name.clone(),
                    source,
                }),
        }
    }

    /// read and decode just enough of the asset to get its pixel dimensions
    pub async fn dimensions(&self) -> Result<(u32, u32)> {
        let bytes = self.read().await?;
        raster::dimensions(&bytes)
    }
}

/// the last path component of `name`, split on either kind of slash
fn base_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();

    if base.is_empty() || base == "." || base == ".." {
        "asset".to_string()
    } else {
        base.to_string()
    }
}
