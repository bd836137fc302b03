//! cli stuff
use {
    crate::{
        color::{hex_to_hsl, palette::generate_harmonious_palette, parse_hex},
        config::options::{CONFIG_FILE_NAME, Settings},
        manifest::SchemaVersion,
        session::EditSession,
        theme::{
            Alignment, ColorRole, ImageAsset, ImageRole, LogoVariant, Repeat, ThemeProperties,
            Tint, TintRole,
        },
    },
    clap::{Args, Parser, Subcommand},
    color_eyre::{
        Section,
        eyre::{Context, Result},
    },
    owo_colors::OwoColorize,
    schemars::generate::SchemaSettings,
    std::{fmt::Display, path::PathBuf, str::FromStr},
};

/// where `config --gen-schema --save` writes the schema
const SCHEMA_FILE_NAME: &str = "themesmith.schema.json";

/// the CLI
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// what to do
    #[command(subcommand)]
    pub command: Command,
}

/// the available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Show a hex color as rgb and hsl
    Convert {
        /// The color, like #4285f4
        hex: String,
    },

    /// Generate a harmonious palette from a base color
    Palette {
        /// The base color, like #4285f4
        base: String,
    },

    /// Build a theme from flags and export it
    Export(ExportArgs),

    /// Generate the default config or its schema
    Config(ConfigArgs),
}

/// flags for `export`
#[derive(Args)]
pub struct ExportArgs {
    /// Theme name
    #[arg(long)]
    pub name: Option<String>,

    /// Theme version, 1 to 4 dot separated integers
    #[arg(long = "theme-version")]
    pub version: Option<String>,

    /// Theme description
    #[arg(long)]
    pub description: Option<String>,

    /// Theme author
    #[arg(long)]
    pub author: Option<String>,

    /// Generate every color from this base color first
    #[arg(long)]
    pub base_color: Option<String>,

    /// Set a color, like `toolbar=#ffffff` (repeatable)
    #[arg(long = "color", value_parser = parse_assignment::<ColorRole, String>)]
    pub colors: Vec<(ColorRole, String)>,

    /// Supply an image, like `theme_ntp_background=bg.png` (repeatable)
    #[arg(long = "image", value_parser = parse_assignment::<ImageRole, PathBuf>)]
    pub images: Vec<(ImageRole, PathBuf)>,

    /// The 128x128 application icon
    #[arg(long)]
    pub icon: Option<PathBuf>,

    /// Set a tint, like `buttons=0.5,-1,0.2` or `frame=none` (repeatable)
    #[arg(long = "tint", value_parser = parse_assignment::<TintRole, Tint>)]
    pub tints: Vec<(TintRole, Tint)>,

    /// New tab page background alignment
    #[arg(long)]
    pub alignment: Option<Alignment>,

    /// New tab page background repeat mode
    #[arg(long)]
    pub repeat: Option<Repeat>,

    /// Use the white new tab page logo
    #[arg(long)]
    pub white_logo: bool,

    /// Manifest schema, v2 or v3 (defaults to the configured one)
    #[arg(long)]
    pub schema: Option<SchemaVersion>,

    /// Directory to write the archive to (defaults to the configured one)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// flags for `config`
#[derive(Args)]
pub struct ConfigArgs {
    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schema file based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,
}

/// parse a `key=value` pair
fn parse_assignment<K, V>(s: &str) -> Result<(K, V), String>
where
    K: FromStr,
    K::Err: Display,
    V: FromStr,
    V::Err: Display,
{
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {s:?}"))?;

    Ok((
        key.trim().parse().map_err(|e: K::Err| e.to_string())?,
        value.trim().parse().map_err(|e: V::Err| e.to_string())?,
    ))
}

impl Cli {
    /// run the CLI
    ///
    /// # Errors
    ///
    /// returns an error if the chosen subcommand fails
    pub async fn run(self, settings: &Settings) -> Result<()> {
        match self.command {
            Command::Convert { hex } => Self::convert(&hex),
            Command::Palette { base } => Self::palette(&base),
            Command::Export(args) => Self::export(args, settings).await,
            Command::Config(args) => {
                if args.gen_schema {
                    Self::gen_schema(args.save)?;
                }

                if args.gen_default || !args.gen_schema {
                    Self::gen_defaults(args.save)?;
                }

                Ok(())
            }
        }
    }

    /// print a color as rgb and hsl
    fn convert(hex: &str) -> Result<()> {
        let rgb = parse_hex(hex)
            .wrap_err("Failed to parse color")
            .suggestion("Colors are six hex digits, like #4285f4")?;
        let hsl = hex_to_hsl(hex);

        println!("{} {}", "  ".on_truecolor(rgb.r, rgb.g, rgb.b), rgb.to_hex().bold());
        println!("  rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
        println!("  hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l);

        Ok(())
    }

    /// print the palette generated from `base`
    fn palette(base: &str) -> Result<()> {
        parse_hex(base)
            .wrap_err("Failed to parse base color")
            .suggestion("Colors are six hex digits, like #4285f4")?;

        for (role, hex) in generate_harmonious_palette(base).iter() {
            let swatch = match parse_hex(hex) {
                Ok(rgb) => "  ".on_truecolor(rgb.r, rgb.g, rgb.b).to_string(),
                Err(_) => "??".red().to_string(),
            };

            println!("{swatch} {} {hex}", format!("{:<28}", role.as_str()).bright_white());
        }

        Ok(())
    }

    /// build a session from `args` and export it
    async fn export(args: ExportArgs, settings: &Settings) -> Result<()> {
        let mut session = EditSession::new(settings);

        if let Some(base) = &args.base_color {
            session.apply_palette(base);
        }

        for (role, hex) in args.colors {
            session.set_color(role, hex);
        }

        for (role, path) in args.images {
            let asset = ImageAsset::from_path(&path)
                .wrap_err_with(|| format!("Invalid image path: {}", path.display()))?;
            session.set_image(role, asset);
        }

        if let Some(path) = &args.icon {
            let icon = ImageAsset::from_path(path)
                .wrap_err_with(|| format!("Invalid icon path: {}", path.display()))?;
            session.set_icon(Some(icon));
        }

        for (role, tint) in args.tints {
            session.set_tint(role, tint);
        }

        let mut properties = session.state().properties;
        if let Some(alignment) = args.alignment {
            properties.ntp_background_alignment = alignment;
        }
        if let Some(repeat) = args.repeat {
            properties.ntp_background_repeat = repeat;
        }
        if args.white_logo {
            properties.ntp_logo_alternate = LogoVariant::White;
        }
        if properties != ThemeProperties::default() {
            session.set_properties(properties);
        }

        session.edit(|state| {
            if let Some(name) = args.name {
                state.name = name;
            }
            if let Some(version) = args.version {
                state.version = version;
            }
            if let Some(description) = args.description {
                state.description = description;
            }
            if args.author.is_some() {
                state.author = args.author;
            }
        });

        let schema = args.schema.unwrap_or(session.schema());
        let archive = session
            .export(schema)
            .await
            .wrap_err("Failed to export theme")
            .suggestion("Under v3 an --icon of exactly 128x128 is required, or pass --schema v2")?;

        let out = args
            .out
            .unwrap_or_else(|| PathBuf::from(getopt!(settings, export.output_dir)));
        let path = archive.write_to(&out).await?;

        println!(
            "{} Exported {} theme to {}",
            "✓".green().bold(),
            schema.bright_cyan(),
            path.display().bright_white()
        );

        Ok(())
    }

    /// generate/save the config schema
    fn gen_schema(save: bool) -> Result<()> {
        let generator = SchemaSettings::draft2020_12().for_serialize().into_generator();
        let schema = generator.into_root_schema_for::<Settings>();
        let schema_str = serde_json::to_string_pretty(&schema)?;

        if save {
            std::fs::write(SCHEMA_FILE_NAME, &schema_str)
                .wrap_err_with(|| format!("Failed to write {SCHEMA_FILE_NAME}"))?;
        } else {
            println!("{schema_str}");
        }

        Ok(())
    }

    /// generate/save the default config file
    fn gen_defaults(save: bool) -> Result<()> {
        if save {
            Settings::default().save_to_file(CONFIG_FILE_NAME)?;
        } else {
            println!("{}", toml::to_string_pretty(&Settings::default())?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        let (role, hex) = parse_assignment::<ColorRole, String>("toolbar = #ffffff").unwrap();
        assert_eq!(role, ColorRole::Toolbar);
        assert_eq!(hex, "#ffffff");

        let (role, tint) = parse_assignment::<TintRole, Tint>("buttons=none").unwrap();
        assert_eq!(role, TintRole::Buttons);
        assert_eq!(tint, Tint::None);

        assert!(parse_assignment::<ColorRole, String>("toolbar").is_err());
        assert!(parse_assignment::<ColorRole, String>("nope=#ffffff").is_err());
    }

    #[test]
    fn test_export_flags_parse() {
        let cli = Cli::try_parse_from([
            "themesmith",
            "export",
            "--name",
            "Dusk",
            "--color",
            "frame=#000000",
            "--tint",
            "frame=0.5,0.5,0.5",
            "--alignment",
            "top-left",
            "--schema",
            "v2",
        ])
        .unwrap();

        let Command::Export(args) = cli.command else {
            panic!("expected the export subcommand");
        };
        assert_eq!(args.name.as_deref(), Some("Dusk"));
        assert_eq!(args.colors, [(ColorRole::Frame, "#000000".to_string())]);
        assert_eq!(args.alignment, Some(Alignment::TopLeft));
        assert_eq!(args.schema, Some(SchemaVersion::V2));
    }

    #[tokio::test]
    async fn test_export_writes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "themesmith",
            "export",
            "--name",
            "Flag Theme",
            "--base-color",
            "#336699",
            "--schema",
            "v2",
            "--out",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        cli.run(&Settings::default()).await.unwrap();
        assert!(dir.path().join("flag-theme-theme.zip").exists());
    }
}
