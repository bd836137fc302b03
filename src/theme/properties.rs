//! enumerated theme properties
use {
    crate::error::ThemeError,
    serde::{Serialize, Serializer},
    std::{fmt, str::FromStr},
};

/// where the new tab page background image is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    /// centered
    #[default]
    #[serde(rename = "center")]
    Center,
    /// top edge
    #[serde(rename = "top")]
    Top,
    /// bottom edge
    #[serde(rename = "bottom")]
    Bottom,
    /// left edge
    #[serde(rename = "left")]
    Left,
    /// right edge
    #[serde(rename = "right")]
    Right,
    /// top left corner
    #[serde(rename = "top left")]
    TopLeft,
    /// top right corner
    #[serde(rename = "top right")]
    TopRight,
    /// bottom left corner
    #[serde(rename = "bottom left")]
    BottomLeft,
    /// bottom right corner
    #[serde(rename = "bottom right")]
    BottomRight,
}

impl Alignment {
    /// every alignment
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// the manifest keyword
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomLeft => "bottom left",
            Self::BottomRight => "bottom right",
        }
    }
}

impl FromStr for Alignment {
    type Err = ThemeError;

    /// accepts the manifest keyword, or the same words joined with `-` or `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");

        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| format!("unknown background alignment: {s:?}").into())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// how the new tab page background image repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repeat {
    /// draw once
    #[default]
    NoRepeat,
    /// tile both ways
    Repeat,
    /// tile horizontally
    RepeatX,
    /// tile vertically
    RepeatY,
}

impl Repeat {
    /// every repeat mode
    pub const ALL: [Self; 4] = [Self::NoRepeat, Self::Repeat, Self::RepeatX, Self::RepeatY];

    /// the manifest keyword
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoRepeat => "no-repeat",
            Self::Repeat => "repeat",
            Self::RepeatX => "repeat-x",
            Self::RepeatY => "repeat-y",
        }
    }
}

impl FromStr for Repeat {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| format!("unknown background repeat: {s:?}").into())
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// which new tab page logo the host shows, serialized as `0` or `1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoVariant {
    /// the colored logo
    #[default]
    Colored,
    /// the white logo, for dark backgrounds
    White,
}

impl LogoVariant {
    /// the manifest value
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Colored => 0,
            Self::White => 1,
        }
    }
}

impl Serialize for LogoVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// the small enumerated settings of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ThemeProperties {
    /// background alignment
    pub ntp_background_alignment: Alignment,
    /// background repeat mode
    pub ntp_background_repeat: Repeat,
    /// logo variant
    pub ntp_logo_alternate: LogoVariant,
}
