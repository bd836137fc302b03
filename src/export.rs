//! export stuff
//!
//! the one entry point that turns a theme into an archive: preflight, compile, package
use {
    crate::{
        config::options::Settings,
        error::{Result, ThemeError},
        manifest::{ColorFallback, SchemaVersion, compile, validate::preflight},
        package::{Packager, ThemeArchive},
        raster::RasterProcessor,
        theme::ThemeState,
    },
    tokio::sync::Semaphore,
    tracing::{info, warn},
};

/// runs exports, one at a time
#[derive(Debug)]
pub struct Exporter {
    /// builds the archive
    packager: Packager,
    /// what to do with bad colors
    fallback: ColorFallback,
    /// whether bad names and versions block the export
    strict_metadata: bool,
    /// held for the duration of an export
    gate: Semaphore,
}

impl Exporter {
    /// make an exporter
    pub fn new(packager: Packager, fallback: ColorFallback) -> Self {
        Self {
            packager,
            fallback,
            strict_metadata: false,
            gate: Semaphore::new(1),
        }
    }

    /// block exports on name and version problems instead of only warning
    pub fn with_strict_metadata(mut self, strict: bool) -> Self {
        self.strict_metadata = strict;
        self
    }

    /// make an exporter from the `export` settings
    pub fn from_settings(settings: &Settings) -> Self {
        let processor = RasterProcessor::from_filter(getopt!(settings, export.resize_filter));
        Self::new(
            Packager::new(processor),
            getopt!(settings, export.color_fallback),
        )
        .with_strict_metadata(getopt!(settings, export.strict_metadata))
    }

    /// the color fallback in use
    pub fn fallback(&self) -> ColorFallback {
        self.fallback
    }

    /// export `state` under `schema`
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ExportInProgress`] if another export on this exporter hasn't finished
    /// - [`ThemeError::ExportBlocked`] with every problem found if the theme can't be exported,
    ///   in which case no packaging work is started
    /// - whatever compiling or packaging fails with
    pub async fn export(&self, state: &ThemeState, schema: SchemaVersion) -> Result<ThemeArchive> {
        let _permit = self.gate.try_acquire()?;
        info!(name = %state.name, %schema, "starting export");

        if let Err(problems) = preflight(state, schema, self.strict_metadata).await {
            warn!(problems = problems.len(), "export blocked");
            return Err(ThemeError::ExportBlocked(problems));
        }

        let manifest = compile(state, schema, self.fallback)?;
        info!(%schema, "manifest compiled");

        self.packager.package(state, &manifest).await
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(Packager::default(), ColorFallback::default())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            config::options::ExportCfg,
            raster::encode_png,
            theme::{ColorRole, ImageAsset},
        },
        image::{DynamicImage, RgbaImage},
    };

    /// a theme that can be exported under v3
    fn exportable() -> ThemeState {
        let icon = encode_png(&DynamicImage::ImageRgba8(RgbaImage::new(128, 128))).unwrap();
        ThemeState {
            icon: Some(ImageAsset::from_bytes("icon.png", icon)),
            ..ThemeState::default()
        }
    }

    #[tokio::test]
    async fn test_v3_without_icon_is_blocked() {
        let err = Exporter::default()
            .export(&ThemeState::default(), SchemaVersion::V3)
            .await
            .unwrap_err();

        let problems = match err {
            ThemeError::ExportBlocked(problems) => problems,
            other => panic!("expected a blocked export, got {other:?}"),
        };
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("icon:"));
    }

    #[tokio::test]
    async fn test_export_produces_archive() {
        let archive = Exporter::default()
            .export(&exportable(), SchemaVersion::V3)
            .await
            .unwrap();

        assert_eq!(archive.file_name, "my-chrome-theme-theme.zip");
        assert!(!archive.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_export_is_rejected() {
        let exporter = Exporter::default();
        let held = exporter.gate.try_acquire().unwrap();

        let err = exporter
            .export(&exportable(), SchemaVersion::V3)
            .await
            .unwrap_err();
        assert!(matches!(err, ThemeError::ExportInProgress));

        drop(held);
        assert!(exporter.export(&exportable(), SchemaVersion::V3).await.is_ok());
    }

    #[tokio::test]
    async fn test_reject_fallback_from_settings() {
        let settings = Settings {
            export: Some(ExportCfg {
                color_fallback: Some(ColorFallback::Reject),
                ..ExportCfg::default()
            }),
            ..Settings::default()
        };
        let exporter = Exporter::from_settings(&settings);
        assert_eq!(exporter.fallback(), ColorFallback::Reject);

        let mut state = exportable();
        state.colors.set(ColorRole::Frame, "#12");

        let err = exporter.export(&state, SchemaVersion::V3).await.unwrap_err();
        assert!(matches!(err, ThemeError::Manifest(_)));
    }

    #[tokio::test]
    async fn test_strict_metadata_blocks_bad_version() {
        let mut state = exportable();
        state.version = "1.0.0.0.0".to_string();

        assert!(Exporter::default().export(&state, SchemaVersion::V3).await.is_ok());

        let settings = Settings {
            export: Some(ExportCfg {
                strict_metadata: Some(true),
                ..ExportCfg::default()
            }),
            ..Settings::default()
        };
        let err = Exporter::from_settings(&settings)
            .export(&state, SchemaVersion::V3)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::ExportBlocked(problems) if problems[0].starts_with("version:")
        ));
    }
}
