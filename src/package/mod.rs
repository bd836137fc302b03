//! asset packaging stuff
//!
//! every asset read, icon resize and placeholder render is started at once, awaited together,
//! and only written into the archive after all of them succeeded
pub mod writer;

pub use writer::ArchiveWriter;

use {
    crate::{
        bail,
        error::Result,
        manifest::{
            ICON_DIR, ICON_SIZES, IMAGE_DIR, MANIFEST_FILE_NAME, Manifest, NATIVE_ICON_SIZE,
            icon_path, image_path,
        },
        raster::{RasterProcessor, placeholder_icon},
        theme::{ImageAsset, ThemeState},
        utils::file_name_slug,
    },
    futures::future::try_join_all,
    std::{
        path::{Component, Path, PathBuf},
        sync::Arc,
    },
    tracing::{debug, info},
};

/// one unit of work that produces an archive entry
#[derive(Debug)]
enum AssetJob {
    /// copy an asset verbatim
    Copy {
        /// where it goes in the archive
        path: String,
        /// what to copy
        asset: ImageAsset,
    },
    /// shrink the icon to `size`
    Resize {
        /// where it goes in the archive
        path: String,
        /// the source icon
        asset: ImageAsset,
        /// the target edge length
        size: u32,
    },
    /// render a placeholder icon of `size`
    Placeholder {
        /// where it goes in the archive
        path: String,
        /// the edge length
        size: u32,
    },
}

/// builds theme archives
#[derive(Debug, Clone, Copy, Default)]
pub struct Packager {
    /// used to shrink icons
    processor: RasterProcessor,
}

impl Packager {
    /// make a packager that resizes with `processor`
    pub fn new(processor: RasterProcessor) -> Self {
        Self { processor }
    }

    /// package `state` along with its compiled `manifest`
    ///
    /// # Errors
    ///
    /// fails without producing anything if any asset can't be read or resized, or if two assets
    /// land on the same path
    pub async fn package(&self, state: &ThemeState, manifest: &Manifest) -> Result<ThemeArchive> {
        let json = manifest.to_pretty_json()?;
        let jobs = Self::plan(state, manifest)?;
        let count = jobs.len();

        let mut entries = try_join_all(jobs.into_iter().map(|job| self.run(job))).await?;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut writer = ArchiveWriter::new();
        writer.add_file(MANIFEST_FILE_NAME, json.as_bytes())?;
        writer.add_directory(&format!("{IMAGE_DIR}/"))?;
        writer.add_directory(&format!("{ICON_DIR}/"))?;
        for (path, bytes) in &entries {
            writer.add_file(path, bytes)?;
        }

        let archive = ThemeArchive {
            bytes: writer.finish()?,
            file_name: archive_file_name(&state.name),
        };

        info!(
            file = %archive.file_name,
            assets = count,
            bytes = archive.bytes.len(),
            "packaged theme"
        );

        Ok(archive)
    }

    /// work out every entry the archive needs besides the manifest
    fn plan(state: &ThemeState, manifest: &Manifest) -> Result<Vec<AssetJob>> {
        let mut jobs = state
            .supplied_images()
            .map(|(_, asset)| AssetJob::Copy {
                path: image_path(asset.file_name()),
                asset: asset.clone(),
            })
            .collect::<Vec<_>>();

        match &state.icon {
            Some(icon) => jobs.extend(ICON_SIZES.iter().map(|&size| {
                let path = icon_path(size);
                let asset = icon.clone();

                if size == NATIVE_ICON_SIZE {
                    AssetJob::Copy { path, asset }
                } else {
                    AssetJob::Resize { path, asset, size }
                }
            })),
            None if manifest.schema.requires_icon() => {
                bail!("a {} package needs an icon", manifest.schema);
            }
            None => jobs.extend(ICON_SIZES.iter().map(|&size| AssetJob::Placeholder {
                path: icon_path(size),
                size,
            })),
        }

        Ok(jobs)
    }

    /// produce the bytes of one entry, cpu heavy work runs on the blocking pool
    async fn run(&self, job: AssetJob) -> Result<(String, Arc<[u8]>)> {
        match job {
            AssetJob::Copy { path, asset } => {
                debug!(%path, "copying asset");
                Ok((path, asset.read().await?))
            }
            AssetJob::Resize { path, asset, size } => {
                debug!(%path, size, "resizing icon");
                let bytes = asset.read().await?;
                let processor = self.processor;
                let resized =
                    tokio::task::spawn_blocking(move || processor.resize_square(&bytes, size))
                        .await??;
                Ok((path, Arc::from(resized)))
            }
            AssetJob::Placeholder { path, size } => {
                debug!(%path, size, "rendering placeholder icon");
                let rendered = tokio::task::spawn_blocking(move || placeholder_icon(size)).await??;
                Ok((path, Arc::from(rendered)))
            }
        }
    }
}

/// a finished theme package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeArchive {
    /// the zip bytes
    pub bytes: Vec<u8>,
    /// the suggested file name
    pub file_name: String,
}

impl ThemeArchive {
    /// save the archive into `dir` under its suggested name, creating `dir` if needed
    ///
    /// # Errors
    ///
    /// returns an error if the suggested name isn't a single plain file name, so nothing is ever
    /// written outside `dir`
    pub async fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let mut components = Path::new(&self.file_name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            bail!("refusing to write archive as {:?}", self.file_name);
        }

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;

        info!(path = %path.display(), "wrote theme archive");
        Ok(path)
    }
}

/// the file name an archive for a theme called `name` is saved under
pub fn archive_file_name(name: &str) -> String {
    format!("{}-theme.zip", file_name_slug(name))
}
