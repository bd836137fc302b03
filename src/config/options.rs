//! every available configuration option and its type is listed in this file
use {
    crate::{
        config::validate::{Validate, format_validation_errors},
        history::{DEFAULT_MAX_LEN, EvictionPolicy},
        manifest::{ColorFallback, SchemaVersion},
        raster::ResizeFilter,
    },
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// the name of the config file, both globally and per project
pub const CONFIG_FILE_NAME: &str = "themesmith.toml";

/// the prefix of environment variable overrides
pub const ENV_PREFIX: &str = "THEMESMITH";

/// Undo/redo settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct HistoryCfg {
    /// The most snapshots to keep before the oldest ones are dropped
    #[default(Some(DEFAULT_MAX_LEN))]
    pub max_length: Option<usize>,

    /// What to do with the cursor when the history overflows
    #[default(Some(EvictionPolicy::TrackNewest))]
    pub eviction: Option<EvictionPolicy>,
}

/// Export settings
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ExportCfg {
    /// The manifest schema to emit (v2 or v3)
    #[default(Some(SchemaVersion::V3))]
    pub schema: Option<SchemaVersion>,

    /// The directory to write archives to
    #[default(Some(".".to_string()))]
    pub output_dir: Option<String>,

    /// What to do with colors that aren't valid hex
    #[default(Some(ColorFallback::Black))]
    pub color_fallback: Option<ColorFallback>,

    /// The filter used when shrinking the icon
    #[default(Some(ResizeFilter::Lanczos3))]
    pub resize_filter: Option<ResizeFilter>,

    /// Block exports whose name or version the host would reject, instead of just warning
    #[default(Some(false))]
    pub strict_metadata: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[serde(rename_all = "lowercase")]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    Compact,

    /// Use an excessively pretty output format
    #[default]
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("info".to_string()))]
    pub level: Option<String>,

    /// Use extra pretty logging
    #[default(Some(LoggingFormat::Pretty))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// themesmith configuration options
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct Settings {
    /// Undo/redo settings
    #[default(Some(HistoryCfg::default()))]
    pub history: Option<HistoryCfg>,

    /// Export settings
    #[default(Some(ExportCfg::default()))]
    pub export: Option<ExportCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl Settings {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let mut builder = Self::create_builder(Self::load_defaults()?)?;

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        if let Some(local) = Self::find_local_config()? {
            info!(path = %local.display(), "using local config");
            builder = builder.add_source(config::File::from(local).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder
            .build()
            .wrap_err("Failed to build configuration")?
            .try_deserialize::<Settings>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        Ok(cfg)
    }

    /// get the global config file path, if the platform has a config dir
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// load default config from the embedded default config file
    pub fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/themesmith.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder seeded with `defaults`
    fn create_builder(defaults: Settings) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(&defaults)
            .wrap_err("Failed to convert default settings to a config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .suggestion(format!("Check your {CONFIG_FILE_NAME} for invalid values"))
            .suggestion("Run `themesmith config --gen-default` to see valid options")
    }

    /// find the nearest local config file, walking up from the working directory
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(curr_dir
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists()))
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }

    /// save config to the global config location
    pub fn save(&self) -> Result<()> {
        let path = Self::global_config_path()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .wrap_err("Failed to create config directory")
                .with_section(|| dir.display().to_string().header("Directory:"))?;
        }

        self.save_to_file(path)
    }
}
