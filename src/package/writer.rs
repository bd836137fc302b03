//! zip archive writing stuff
use {
    crate::error::{Result, ThemeError},
    hashbrown::HashSet,
    std::io::{Cursor, Write},
    zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions},
};

/// an in-memory zip archive that refuses to write the same path twice
pub struct ArchiveWriter {
    /// the zip being built
    zip: ZipWriter<Cursor<Vec<u8>>>,
    /// options every entry is written with
    options: SimpleFileOptions,
    /// paths written so far
    written: HashSet<String>,
}

impl ArchiveWriter {
    /// start an empty archive
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default())
                .unix_permissions(0o644),
            written: HashSet::new(),
        }
    }

    /// add a directory entry, `path` should end with a slash
    pub fn add_directory(&mut self, path: &str) -> Result<()> {
        self.claim(path)?;
        self.zip
            .add_directory(path, self.options.unix_permissions(0o755))?;
        Ok(())
    }

    /// add a file entry
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::DuplicateAsset`] if `path` was already written
    pub fn add_file(&mut self, path: &str, bytes: &[u8]) -> Result<()> {
        self.claim(path)?;
        self.zip.start_file(path, self.options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    /// whether `path` was already written
    pub fn contains(&self, path: &str) -> bool {
        self.written.contains(path)
    }

    /// write the central directory and hand back the archive bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }

    /// record `path`, failing if it's taken
    fn claim(&mut self, path: &str) -> Result<()> {
        if self.written.insert(path.to_string()) {
            Ok(())
        } else {
            Err(ThemeError::DuplicateAsset(path.to_string()))
        }
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Read, zip::ZipArchive};

    #[test]
    fn test_written_entries_read_back() {
        let mut writer = ArchiveWriter::new();
        writer.add_directory("images/").unwrap();
        writer.add_file("images/a.png", b"abc").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = Vec::new();
        archive
            .by_name("images/a.png")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"abc");
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let mut writer = ArchiveWriter::new();
        writer.add_file("manifest.json", b"{}").unwrap();
        assert!(writer.contains("manifest.json"));

        let err = writer.add_file("manifest.json", b"{}").unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateAsset(path) if path == "manifest.json"));
    }
}
