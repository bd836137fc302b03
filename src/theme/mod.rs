//! the editable theme state
pub mod colors;
pub mod images;
pub mod properties;
pub mod tint;

pub use {
    colors::{ColorRole, ColorTable},
    images::{AssetSource, ImageAsset, ImageRole},
    properties::{Alignment, LogoVariant, Repeat, ThemeProperties},
    tint::{HslShift, Tint, TintRole, TintTable},
};

use std::collections::BTreeMap;

/// everything a theme is made of
///
/// colors, tints and properties are always fully populated. images and the icon are sparse,
/// a missing entry means the user never supplied one. cloning is cheap because asset bytes are
/// shared
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// the theme name
    pub name: String,
    /// the theme version, 1 to 4 dot separated integers
    pub version: String,
    /// a short description
    pub description: String,
    /// the author, left out of the manifest when unset
    pub author: Option<String>,
    /// the 128x128 application icon
    pub icon: Option<ImageAsset>,
    /// the color table
    pub colors: ColorTable,
    /// supplied images by role
    pub images: BTreeMap<ImageRole, ImageAsset>,
    /// tints by role
    pub tints: TintTable,
    /// layout properties
    pub properties: ThemeProperties,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            name: "My Chrome Theme".to_string(),
            version: "1.0".to_string(),
            description: "A beautiful custom Chrome theme".to_string(),
            author: None,
            icon: None,
            colors: ColorTable::default(),
            images: BTreeMap::new(),
            tints: TintTable::default(),
            properties: ThemeProperties::default(),
        }
    }
}

impl ThemeState {
    /// the roles with a supplied image, paired with the asset
    pub fn supplied_images(&self) -> impl Iterator<Item = (ImageRole, &ImageAsset)> {
        self.images.iter().map(|(role, asset)| (*role, asset))
    }
}
