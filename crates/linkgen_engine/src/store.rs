use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store directory missing or not writable: {0}")]
    StoreDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Opaque keyed blob storage for persisted snapshots. Missing or unreadable
/// blobs surface as `None`; whether a blob decodes is the caller's concern.
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&self, key: &str, blob: &[u8]) -> Result<(), StoreError>;
}

/// File-backed store: one `{key}.json` file per key inside a fixed
/// directory, replaced atomically (temp file, fsync, rename) so readers
/// never observe a half-written snapshot.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if self.dir.exists() {
            let meta =
                fs::metadata(&self.dir).map_err(|e| StoreError::StoreDir(e.to_string()))?;
            if !meta.is_dir() {
                return Err(StoreError::StoreDir("path is not a directory".into()));
            }
        } else {
            fs::create_dir_all(&self.dir).map_err(|e| StoreError::StoreDir(e.to_string()))?;
        }
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(blob) => Some(blob),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Failed to read blob {:?}: {}", path, err);
                None
            }
        }
    }

    fn set(&self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let target = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(blob)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        replace_file(tmp, &target)
    }
}

fn replace_file(tmp: NamedTempFile, target: &Path) -> Result<(), StoreError> {
    if target.exists() {
        fs::remove_file(target)?;
    }
    tmp.persist(target).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
