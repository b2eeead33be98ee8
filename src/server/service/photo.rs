//! File storage for uploaded player photos.

use std::path::{Path, PathBuf};

use crate::server::util::photo::PHOTO_PREFIX;

/// Stores uploaded photo blobs under the media root and hands back stable
/// reference strings. References live under `players/img/` so that
/// [`photo_url`](crate::server::util::photo::photo_url) can later derive the
/// servable `/media/...` path.
#[derive(Clone)]
pub struct PhotoStorage {
    root: PathBuf,
}

impl PhotoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes an uploaded photo and returns its stable reference string.
    ///
    /// The reference keeps the upload's file extension; the stored name is
    /// derived from the current timestamp.
    ///
    /// # Arguments
    /// - `file_name` - Client-supplied file name, used only for its extension
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(String)` - Reference string, e.g. `players/img/1738229771000123.jpg`
    /// - `Err(std::io::Error)` - Failed to create the directory or write the file
    pub async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let stamp = chrono::Utc::now().timestamp_micros();
        let reference = format!("{}{}.{}", PHOTO_PREFIX, stamp, extension);

        let path = self.root.join(&reference);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(reference)
    }
}
