//! File-backed store: one `<key>.json` per record in a data directory.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::error::StoreError;
use super::StoreBackend;

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Default data directory.
    ///
    /// Uses `~/.local/share/luganda-lexicon` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`. Falls back to the current
    /// directory if no data dir is known.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("luganda-lexicon")
    }

    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.lock", key))
    }

    /// Hold an exclusive lock for `key` until the returned file drops.
    fn lock(&self, key: &str) -> Result<File, StoreError> {
        let path = self.lock_path(key);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| StoreError::Io {
                path: path.clone(),
                source: e,
            })?;
        FileExt::lock_exclusive(&file).map_err(|e| StoreError::Lock { path, source: e })?;
        Ok(file)
    }
}

impl StoreBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::Io { path, source: e })
    }

    /// Whole-value overwrite: the new contents go to a temp file that is
    /// synced and renamed over the record.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let _guard = self.lock(key)?;

        let tmp_path = path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(io_error(&tmp_path))?;
        tmp.write_all(value.as_bytes()).map_err(io_error(&tmp_path))?;
        tmp.sync_all().map_err(io_error(&tmp_path))?;
        drop(tmp);

        fs::rename(&tmp_path, &path).map_err(io_error(&path))?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Wrote store record");
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("lexicon_favorites").is_ok());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("a.b").is_err());
    }

    #[test]
    fn default_dir_is_namespaced() {
        assert!(FileBackend::default_dir().ends_with("luganda-lexicon"));
    }
}
