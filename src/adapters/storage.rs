use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

/// Cross-filesystem move: copy over any existing destination, then drop the source.
async fn copy_then_remove(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).await?;
    fs::remove_file(from).await?;
    Ok(())
}

impl Storage for LocalStorage {
    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            // metadata 會跟隨符號連結
            match fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable entry {}: {}", path.display(), e),
            }
        }

        files.sort();
        Ok(files)
    }

    async fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).await?;
        }

        // rename 會覆蓋目的地既有檔案
        match fs::rename(from, to).await {
            Err(e) if e.kind() == ErrorKind::CrossesDevices => {
                tracing::debug!(
                    "{} and {} are on different filesystems, copying instead",
                    from.display(),
                    to.display()
                );
                copy_then_remove(from, to).await
            }
            other => Ok(other?),
        }
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).await?;
        Ok(())
    }
}
