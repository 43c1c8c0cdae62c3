//! JSON-file preference store.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DriftError, Result};

use super::{MemoryStore, PreferenceStore};

/// Preference store persisted as a flat JSON object of text values.
///
/// ```text
/// {
///   "fov": "90",
///   "sensitivity": "0.8",
///   "theme": "dark"
/// }
/// ```
///
/// Every put rewrites the file, so writes made earlier in a pass stay on
/// disk even if a later one fails. The file is replaced by renaming a
/// finished sibling, never truncated in place.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use driftfix::{FileStore, PreferenceStore};
    ///
    /// let store = FileStore::open("prefs.json").unwrap();
    /// println!("fov = {}", store.get_int("fov", 70).unwrap());
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(Self {
                path,
                inner: MemoryStore::new(),
            });
        }

        let file = File::open(&path).map_err(|e| store_error(&path, format!("failed to open: {}", e)))?;

        let entries: IndexMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| store_error(&path, format!("failed to parse: {}", e)))?;

        debug!(path = %path.display(), entries = entries.len(), "opened store");

        Ok(Self {
            path,
            inner: MemoryStore::from_entries(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents of the store.
    pub fn entries(&self) -> &IndexMap<String, String> {
        self.inner.entries()
    }

    /// Write the current contents to disk.
    pub fn save(&self) -> Result<()> {
        let entries = self.inner.entries();
        replace_file(&self.path, |writer| {
            serde_json::to_writer_pretty(writer, entries).map_err(io::Error::from)
        })
    }
}

/// Replace `path` with whatever `write` produces. The content goes to a temp
/// file in the same directory, which is synced and then renamed over `path`;
/// on any failure the previous file is left as it was.
fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            store_error(
                path,
                format!("failed to create directory '{}': {}", dir.display(), e),
            )
        })?;
    }

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| store_error(path, format!("failed to create temp file: {}", e)))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| store_error(path, format!("failed to write: {}", e)))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| store_error(path, format!("failed to sync: {}", e)))?;

    temp.persist(path)
        .map_err(|e| store_error(path, format!("failed to replace: {}", e.error)))?;

    Ok(())
}

fn store_error(path: &Path, reason: String) -> DriftError {
    DriftError::StoreAccess {
        path: path.to_path_buf(),
        reason,
    }
}

impl PreferenceStore for FileStore {
    fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        self.inner.get_int(key, default)
    }

    fn get_double(&self, key: &str, default: f64) -> Result<f64> {
        self.inner.get_double(key, default)
    }

    fn get_float(&self, key: &str, default: f32) -> Result<f32> {
        self.inner.get_float(key, default)
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        self.inner.get_bool(key, default)
    }

    fn get_string(&self, key: &str, default: &str) -> Result<String> {
        self.inner.get_string(key, default)
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.inner.put_int(key, value)?;
        self.save()
    }

    fn put_double(&mut self, key: &str, value: f64) -> Result<()> {
        self.inner.put_double(key, value)?;
        self.save()
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<()> {
        self.inner.put_float(key, value)?;
        self.save()
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.inner.put_bool(key, value)?;
        self.save()
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.put_string(key, value)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.entries().is_empty());
        assert_eq!(store.get_int("fov", 70).unwrap(), 70);
    }

    #[test]
    fn test_put_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.put_bool("overlay", true).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"fov": "90"}"#).unwrap();

        let result = replace_file(&path, |writer| {
            writer.write_all(b"{\"fov\": \"1")?;
            Err(io::Error::other("disk full"))
        });

        assert!(matches!(result, Err(DriftError::StoreAccess { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"fov": "90"}"#);

        // the half-written temp file is cleaned up
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"fov": "70"}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.put_int("fov", 90).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_int("fov", 0).unwrap(), 90);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_non_object_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(DriftError::StoreAccess { .. })
        ));
    }
}
