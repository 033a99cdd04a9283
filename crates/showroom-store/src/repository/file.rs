//! # File Store
//!
//! Keeps each saved configuration as `<name>.json` in one directory.
//!
//! ## Layout
//! ```text
//! <data dir>/
//! ├── daily.json
//! ├── red-sedan.json
//! └── weekend.json
//! ```
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! crash mid-write never leaves a half-written record under the real name.
//! A record is only listed when its `name` matches its file stem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info, warn};

use super::SnapshotStore;
use crate::error::{StoreError, StoreResult};
use crate::record::{validate_name, SavedConfiguration};

const RECORD_EXTENSION: &str = "json";

/// Directory-backed [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Opened configuration store");
        Ok(FileStore { dir })
    }

    /// Opens the store in the platform data directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(default_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{RECORD_EXTENSION}"))
    }

    fn read_record(path: &Path) -> StoreResult<SavedConfiguration> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, record: &SavedConfiguration) -> StoreResult<()> {
        validate_name(&record.name)?;

        let path = self.record_path(&record.name);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(record)?;

        fs::write(&tmp, body)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(name = %record.name, path = %path.display(), "Saved configuration");
        Ok(())
    }

    fn load(&self, name: &str) -> StoreResult<SavedConfiguration> {
        validate_name(name)?;

        match Self::read_record(&self.record_path(name)) {
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound {
                    name: name.to_string(),
                })
            }
            other => other,
        }
    }

    fn list(&self) -> StoreResult<Vec<SavedConfiguration>> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned);
            match Self::read_record(&path) {
                Ok(record) if stem.as_deref() == Some(record.name.as_str()) => records.push(record),
                Ok(record) => {
                    warn!(
                        path = %path.display(),
                        name = %record.name,
                        "Skipping saved configuration whose name does not match its file"
                    );
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable saved configuration");
                }
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        validate_name(name)?;

        match fs::remove_file(self.record_path(name)) {
            Ok(()) => {
                debug!(name = %name, "Deleted configuration");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Platform data directory for saved configurations.
///
/// Linux: `~/.local/share/configurator/saved`.
pub fn default_dir() -> StoreResult<PathBuf> {
    ProjectDirs::from("com", "showroom", "configurator")
        .map(|dirs| dirs.data_dir().join("saved"))
        .ok_or(StoreError::NoDataDir)
}
