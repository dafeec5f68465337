//! Image store
//!
//! Menu images live in one flat content directory and are addressed only by
//! a generated name: `<unix millis>.<ext>`. Names never overwrite an existing
//! file; on a clash the timestamp is bumped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::{AppError, AppResult, ErrorCode};
use tokio::io::AsyncWriteExt;

/// URL prefix under which stored images are served
pub const UPLOAD_URL_PREFIX: &str = "/uploads/";

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Attempts before giving up on finding a free name
const MAX_NAME_ATTEMPTS: i64 = 64;

/// Flat directory of uploaded images
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate and persist one uploaded file, returning `/uploads/<name>`
    pub async fn store(&self, original_name: Option<&str>, data: &[u8]) -> AppResult<String> {
        let ext = self.validate(original_name, data)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::storage(format!("Failed to create uploads directory: {e}")))?;

        let mut stamp = shared::util::now_millis();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = format!("{stamp}.{ext}");
            let path = self.dir.join(&name);

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    stamp += 1;
                    continue;
                }
                Err(e) => {
                    return Err(AppError::storage(format!(
                        "Failed to create {}: {e}",
                        path.display()
                    )));
                }
            };

            let written = async {
                file.write_all(data).await?;
                file.flush().await
            }
            .await;

            if let Err(e) = written {
                drop(file);
                // Partial file must not stay behind
                let _ = tokio::fs::remove_file(&path).await;
                return Err(AppError::storage(format!(
                    "Failed to write {}: {e}",
                    path.display()
                )));
            }

            tracing::info!(
                original_name = original_name.unwrap_or_default(),
                file = %name,
                size = data.len(),
                "Image stored"
            );
            return Ok(format!("{UPLOAD_URL_PREFIX}{name}"));
        }

        Err(AppError::storage("No free file name for upload"))
    }

    /// Best-effort removal of a stored image by its URL
    ///
    /// Failures (including an already missing file) are logged and swallowed.
    pub async fn remove(&self, url: &str) {
        let Some(path) = self.path_for_url(url) else {
            if !url.is_empty() {
                tracing::warn!(url = %url, "Not an upload URL, skipping file removal");
            }
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!(file = %path.display(), "Image removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(file = %path.display(), "Image already gone")
            }
            Err(e) => tracing::warn!(file = %path.display(), error = %e, "Failed to remove image"),
        }
    }

    /// Read a stored file by bare name; `None` if missing or the name is unsafe
    pub async fn read(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.resolve(name)?;
        tokio::fs::read(&path).await.ok()
    }

    /// Map a bare file name to its path inside the store
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if !is_safe_name(name) {
            return None;
        }
        Some(self.dir.join(name))
    }

    /// Map `/uploads/<name>` to a path inside the store
    pub fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        url.strip_prefix(UPLOAD_URL_PREFIX)
            .and_then(|name| self.resolve(name))
    }

    /// Check size, presence and extension; returns the lowercase extension
    fn validate(&self, original_name: Option<&str>, data: &[u8]) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile));
        }

        if data.len() > self.max_bytes {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large. Maximum size is {} bytes ({}MB)",
                    self.max_bytes,
                    self.max_bytes / 1024 / 1024
                ),
            )
            .with_detail("max_bytes", self.max_bytes as u64));
        }

        let name = original_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;

        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::UnsupportedFileFormat,
                format!(
                    "Unsupported file format '{}'. Supported: {}",
                    ext,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ));
        }

        Ok(ext)
    }
}

/// Flat names only: no separators, no parent references
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}
