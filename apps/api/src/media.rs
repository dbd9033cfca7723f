//! On-disk storage for uploaded files. Only the relative path under the media
//! root is persisted with a record; serving the files is someone else's job.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Subdirectory for candidate profile images.
pub const PROFILE_IMAGE_DIR: &str = "profileimg";
/// Subdirectory for candidate resume documents.
pub const RESUME_DOC_DIR: &str = "doc";

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes `bytes` under `<root>/<subdir>/` and returns the stored
    /// relative path. An existing file with the same name is never
    /// overwritten; a numeric suffix is appended instead.
    pub async fn save(&self, subdir: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create media directory {}", dir.display()))?;

        let name = sanitize_filename(filename);
        let unique = unique_name(&dir, &name).await;
        let path = dir.join(&unique);

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write upload to {}", path.display()))?;

        info!("Stored upload at {}", path.display());
        Ok(format!("{subdir}/{unique}"))
    }

    /// Best-effort removal of a previously stored file, for callers that
    /// wrote an upload and then failed to persist the record referencing it.
    pub async fn remove(&self, stored: &str) {
        let path = self.root.join(stored);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!("Failed to remove {}: {e}", path.display());
        }
    }
}

/// Strips any directory components and control characters from a client
/// supplied filename. An empty result falls back to `upload`.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(&['/', '\\'][..])
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>();

    let trimmed = base.trim_matches(&['.', ' '][..]).to_string();
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed
    }
}

/// Appends `_1`, `_2`, ... before the extension until the name is free.
async fn unique_name(dir: &Path, name: &str) -> String {
    if !dir.join(name).exists() {
        return name.to_string();
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), Some(ext.to_string())),
        _ => (name.to_string(), None),
    };

    let mut counter = 1u32;
    loop {
        let candidate = match &ext {
            Some(ext) => format!("{stem}_{counter}.{ext}"),
            None => format!("{stem}_{counter}"),
        };
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}
