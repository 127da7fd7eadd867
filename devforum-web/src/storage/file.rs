use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::warn;

use super::KeyValueStorage;

/// A JSON object on disk standing in for browser local storage.
///
/// The file is re-read on every access so separate processes observe each
/// other's writes. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(entries)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn update(&self, key: &str, apply: impl FnOnce(&mut BTreeMap<String, String>)) {
        let result = self.load().and_then(|mut entries| {
            apply(&mut entries);
            self.persist(&entries)
        });
        if let Err(err) = result {
            warn!(key, path = %self.path.display(), error = %err, "failed to update storage file");
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn is_available(&self) -> bool {
        self.load().is_ok()
    }

    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(err) => {
                warn!(key, path = %self.path.display(), error = %err, "failed to read storage file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(key, |entries| {
            entries.remove(key);
        });
    }
}
