//! Filesystem store for uploaded PDF artifacts.
//!
//! Every artifact lives directly in one flat upload directory under a generated
//! name. The directory is created on first write.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Attempts at finding a free generated name before giving up.
const MAX_NAME_ATTEMPTS: usize = 5;

/// Handle to the upload directory.
#[derive(Debug, Clone)]
pub struct PdfStorage {
    dir: PathBuf,
}

impl PdfStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Generates a storage name of the form `<unix-millis>-<random><ext>`.
    ///
    /// The extension is taken from the original name when it is plain alphanumeric,
    /// so client-supplied names never contribute path separators.
    pub fn generate_filename(original_name: &str) -> String {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            rand::random_range(0..1_000_000_000u32),
            extension
        )
    }

    /// Returns whether `filename` has the shape produced by [`Self::generate_filename`].
    ///
    /// Anything else in the upload directory was not written by this store.
    pub fn is_generated_name(filename: &str) -> bool {
        let (stem, extension) = match filename.split_once('.') {
            Some((stem, extension)) => (stem, Some(extension)),
            None => (filename, None),
        };
        let Some((stamp, random)) = stem.split_once('-') else {
            return false;
        };

        let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

        let plain_extension = extension
            .is_none_or(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        digits(stamp) && digits(random) && plain_extension
    }

    /// Stores an upload under a fresh generated name.
    ///
    /// A name that already exists on disk is never reused; another one is drawn.
    ///
    /// # Returns
    /// - `Ok((filename, path))` - Generated name and full path of the written file
    /// - `Err(io::Error)` - Write failed, or no free name was found
    pub async fn store(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> std::io::Result<(String, PathBuf)> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = Self::generate_filename(original_name);
            match self.write(&filename, bytes).await {
                Ok(path) => return Ok((filename, path)),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    tracing::warn!("Generated upload name {} already taken", filename);
                }
                Err(err) => return Err(err),
            }
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "no free upload filename",
        ))
    }

    /// Writes a new artifact, creating the upload directory if needed.
    ///
    /// Fails with `AlreadyExists` instead of overwriting an existing file. A file
    /// left incomplete by a failed write is removed.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Full path of the written file
    /// - `Err(io::Error)` - Directory creation or write failed
    pub async fn write(&self, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(filename);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written = async {
            file.write_all(bytes).await?;
            file.sync_all().await
        }
        .await;

        if let Err(err) = written {
            drop(file);
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                tracing::error!(
                    "Failed to remove partial upload {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(err);
        }

        Ok(path)
    }

    /// Reads an artifact.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - File content
    /// - `Ok(None)` - No such file
    /// - `Err(io::Error)` - Any other read failure
    pub async fn read(&self, filename: &str) -> std::io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(filename)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Removes an artifact. A missing file is not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - File removed
    /// - `Ok(false)` - File was already absent
    pub async fn remove(&self, filename: &str) -> std::io::Result<bool> {
        match tokio::fs::remove_file(self.path_for(filename)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Lists the names of regular files in the upload directory.
    ///
    /// A directory that does not exist yet holds no files.
    pub async fn list(&self) -> std::io::Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut filenames = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                filenames.push(name.to_string());
            }
        }

        filenames.sort();

        Ok(filenames)
    }
}
