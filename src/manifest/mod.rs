//! manifest compilation stuff
//!
//! turns a [`ThemeState`] into the json document the host browser reads
pub mod validate;

use {
    crate::{
        color::{Rgb, parse_hex},
        error::ThemeError,
        theme::{ColorRole, HslShift, ImageRole, ThemeProperties, ThemeState, TintRole},
    },
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::{collections::BTreeMap, fmt, str::FromStr},
    thiserror::Error,
    tracing::{debug, warn},
};

/// the file name of the manifest inside the archive
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// the folder images are stored under
pub const IMAGE_DIR: &str = "images";

/// the folder icons are stored under
pub const ICON_DIR: &str = "images/icons";

/// every icon size a package ships, smallest first
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// the size the user supplied icon must have
pub const NATIVE_ICON_SIZE: u32 = 128;

/// the archive path of an image
pub fn image_path(file_name: &str) -> String {
    format!("{IMAGE_DIR}/{file_name}")
}

/// the archive path of the icon of a given size
pub fn icon_path(size: u32) -> String {
    format!("{ICON_DIR}/icon{size}.png")
}

/// the manifest schema to emit
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, SmartDefault,
)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// the legacy schema, no icons in the manifest
    V2,
    /// the current schema, icons required
    #[default]
    V3,
}

impl SchemaVersion {
    /// the value of `manifest_version`
    pub const fn manifest_version(self) -> u8 {
        match self {
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }

    /// whether an export under this schema needs a user supplied icon
    pub const fn requires_icon(self) -> bool {
        matches!(self, Self::V3)
    }
}

impl FromStr for SchemaVersion {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            other => Err(ThemeError::Other(format!(
                "unknown schema version {other}, expected v2 or v3"
            ))),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.manifest_version())
    }
}

/// what to do with a color that isn't valid hex
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum ColorFallback {
    /// emit black and log a warning
    #[default]
    Black,
    /// fail the compile
    Reject,
}

/// an error compiling a manifest
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    /// a color role holds something that isn't hex
    #[error("invalid color for {role}: {value:?}")]
    InvalidColor {
        /// the offending role
        role: ColorRole,
        /// what it held
        value: String,
    },
}

/// the icon paths of a v3 manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSet {
    /// the 16px icon
    #[serde(rename = "16")]
    pub small: String,
    /// the 48px icon
    #[serde(rename = "48")]
    pub medium: String,
    /// the 128px icon
    #[serde(rename = "128")]
    pub large: String,
}

impl IconSet {
    /// the standard icon paths
    pub fn standard() -> Self {
        Self {
            small: icon_path(16),
            medium: icon_path(48),
            large: icon_path(128),
        }
    }
}

/// the `theme` object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSection {
    /// archive path per supplied image
    pub images: BTreeMap<ImageRole, String>,
    /// rgb triple per color role
    pub colors: BTreeMap<ColorRole, Rgb>,
    /// hsl shift per applied tint
    pub tints: BTreeMap<TintRole, HslShift>,
    /// layout properties
    pub properties: ThemeProperties,
}

/// a compiled manifest
///
/// computed fresh for each export and never kept around
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    /// 2 or 3
    pub manifest_version: u8,
    /// the theme name
    pub name: String,
    /// the theme version
    pub version: String,
    /// the description
    pub description: String,
    /// the author, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// icon paths, v3 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconSet>,
    /// the theme itself
    pub theme: ThemeSection,
    /// the schema this was compiled for
    #[serde(skip)]
    pub schema: SchemaVersion,
}

impl Manifest {
    /// the manifest as 2-space indented json
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// compile `state` into a manifest for `schema`
///
/// colors that aren't valid hex are handled according to `fallback`. images the user never
/// supplied and tints that aren't applied are left out entirely
///
/// # Errors
///
/// returns [`ManifestError::InvalidColor`] for the first bad color when `fallback` is
/// [`ColorFallback::Reject`]
pub fn compile(
    state: &ThemeState,
    schema: SchemaVersion,
    fallback: ColorFallback,
) -> Result<Manifest, ManifestError> {
    let colors = state
        .colors
        .iter()
        .map(|(role, hex)| {
            let rgb = match parse_hex(hex) {
                Ok(rgb) => rgb,
                Err(e) => match fallback {
                    ColorFallback::Black => {
                        warn!(%role, error = %e, "falling back to black");
                        Rgb::BLACK
                    }
                    ColorFallback::Reject => {
                        return Err(ManifestError::InvalidColor {
                            role,
                            value: hex.to_string(),
                        });
                    }
                },
            };

            Ok((role, rgb))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let images = state
        .supplied_images()
        .map(|(role, asset)| (role, image_path(asset.file_name())))
        .collect::<BTreeMap<_, _>>();

    let tints = state.tints.applied().collect::<BTreeMap<_, _>>();

    debug!(
        %schema,
        images = images.len(),
        tints = tints.len(),
        "compiled manifest"
    );

    Ok(Manifest {
        manifest_version: schema.manifest_version(),
        name: state.name.clone(),
        version: state.version.clone(),
        description: state.description.clone(),
        author: state.author.clone(),
        icons: schema.requires_icon().then(IconSet::standard),
        theme: ThemeSection {
            images,
            colors,
            tints,
            properties: state.properties,
        },
        schema,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::theme::{ImageAsset, Tint},
        serde_json::{Value, json},
    };

    /// compile with the defaults and hand back the json
    fn compiled(state: &ThemeState, schema: SchemaVersion) -> Value {
        let manifest = compile(state, schema, ColorFallback::Black).unwrap();
        serde_json::from_str(&manifest.to_pretty_json().unwrap()).unwrap()
    }

    #[test]
    fn test_frame_color_is_rgb_triple() {
        let mut state = ThemeState::default();
        state.colors.set(ColorRole::Frame, "#4285f4");

        let json = compiled(&state, SchemaVersion::V3);
        assert_eq!(json["theme"]["colors"]["frame"], json!([66, 133, 244]));
        assert_eq!(
            json["theme"]["colors"].as_object().unwrap().len(),
            ColorRole::COUNT
        );
    }

    #[test]
    fn test_unapplied_tints_are_omitted() {
        let mut state = ThemeState::default();
        state
            .tints
            .set(TintRole::Buttons, Tint::Shift(HslShift::new(0.5, -1.0, 0.25).unwrap()));

        let json = compiled(&state, SchemaVersion::V3);
        let tints = json["theme"]["tints"].as_object().unwrap();

        assert_eq!(tints.len(), 1);
        assert_eq!(tints["buttons"], json!([0.5, -1.0, 0.25]));
        assert!(!tints.contains_key("frame"));
    }

    #[test]
    fn test_unset_tints_never_reach_the_manifest() {
        let mut state = ThemeState::default();
        state.tints.set(
            TintRole::Frame,
            Tint::Shift(HslShift::new(-1.0, -1.0, -1.0).unwrap()),
        );
        state
            .tints
            .set(TintRole::Buttons, Tint::from_triple([-2.0, -1.0, -1.0]).unwrap());
        state
            .tints
            .set(TintRole::BackgroundTab, "-1,-1,-9".parse().unwrap());

        for schema in [SchemaVersion::V2, SchemaVersion::V3] {
            let json = compiled(&state, schema);
            let tints = json["theme"]["tints"].as_object().unwrap();
            assert!(tints.is_empty(), "{schema}: {tints:?}");
        }
    }

    #[test]
    fn test_images_only_when_supplied() {
        let mut state = ThemeState::default();
        state.images.insert(
            ImageRole::ThemeNtpBackground,
            ImageAsset::from_bytes("bg.png", vec![1, 2, 3]),
        );

        let json = compiled(&state, SchemaVersion::V3);
        let images = json["theme"]["images"].as_object().unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(images["theme_ntp_background"], "images/bg.png");
        assert!(!images.contains_key("theme_frame"));
    }

    #[test]
    fn test_schema_versions() {
        let state = ThemeState::default();

        let v3 = compiled(&state, SchemaVersion::V3);
        assert_eq!(v3["manifest_version"], 3);
        assert_eq!(v3["icons"]["16"], "images/icons/icon16.png");
        assert_eq!(v3["icons"]["48"], "images/icons/icon48.png");
        assert_eq!(v3["icons"]["128"], "images/icons/icon128.png");

        let v2 = compiled(&state, SchemaVersion::V2);
        assert_eq!(v2["manifest_version"], 2);
        assert!(v2.get("icons").is_none());
    }

    #[test]
    fn test_metadata_and_author() {
        let mut state = ThemeState::default();
        let json = compiled(&state, SchemaVersion::V3);

        assert_eq!(json["name"], "My Chrome Theme");
        assert_eq!(json["version"], "1.0");
        assert!(json.get("author").is_none());

        state.author = Some("somebody".to_string());
        let json = compiled(&state, SchemaVersion::V3);
        assert_eq!(json["author"], "somebody");
    }

    #[test]
    fn test_properties_are_verbatim() {
        let json = compiled(&ThemeState::default(), SchemaVersion::V2);
        assert_eq!(
            json["theme"]["properties"],
            json!({
                "ntp_background_alignment": "center",
                "ntp_background_repeat": "no-repeat",
                "ntp_logo_alternate": 0,
            })
        );
    }

    #[test]
    fn test_bad_color_fallback() {
        let mut state = ThemeState::default();
        state.colors.set(ColorRole::Toolbar, "not a color");

        let json = compiled(&state, SchemaVersion::V3);
        assert_eq!(json["theme"]["colors"]["toolbar"], json!([0, 0, 0]));

        let err = compile(&state, SchemaVersion::V3, ColorFallback::Reject).unwrap_err();
        assert_eq!(
            err,
            ManifestError::InvalidColor {
                role: ColorRole::Toolbar,
                value: "not a color".to_string(),
            }
        );
    }

    #[test]
    fn test_pretty_json_is_two_space_indented() {
        let manifest = compile(&ThemeState::default(), SchemaVersion::V2, ColorFallback::Black)
            .unwrap();
        let text = manifest.to_pretty_json().unwrap();

        assert!(text.starts_with("{\n  \"manifest_version\": 2,"));
    }

    #[test]
    fn test_schema_version_parsing() {
        assert_eq!("v2".parse::<SchemaVersion>().unwrap(), SchemaVersion::V2);
        assert_eq!("3".parse::<SchemaVersion>().unwrap(), SchemaVersion::V3);
        assert_eq!(" V3 ".parse::<SchemaVersion>().unwrap(), SchemaVersion::V3);
        assert!("v4".parse::<SchemaVersion>().is_err());
        assert_eq!(SchemaVersion::V2.to_string(), "v2");
    }
}
