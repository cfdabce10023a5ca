//! Persistent `date -> localName` cache, one entry per country and year.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HolidayError, Result};

/// Environment variable overriding the cache root directory.
pub const CACHE_DIR_ENV: &str = "CAL_CACHE_DIR";

/// Holiday names keyed by ISO date (`YYYY-MM-DD`).
pub type Entries = BTreeMap<String, String>;

/// Key-value storage namespaced as `holidays/{ISO2}/{year}`.
pub trait CacheStore {
    /// Return the cached entries, or `None` when nothing was stored yet.
    fn load(&self, country: &str, year: i32) -> Result<Option<Entries>>;
    fn save(&self, country: &str, year: i32, entries: &Entries) -> Result<()>;
    /// Remove every cached country and year.
    fn clear(&self) -> Result<()>;
}

/// JSON files under `<root>/holidays/{ISO2}/{year}.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    /// Cache root from `CAL_CACHE_DIR` (tilde-expanded) or the user cache dir.
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var(CACHE_DIR_ENV)
            && !dir.trim().is_empty()
        {
            let expanded = shellexpand::tilde(dir.trim());
            return Ok(FileStore::new(expanded.into_owned()));
        }
        dirs::cache_dir()
            .map(|dir| FileStore::new(dir.join("cal")))
            .ok_or(HolidayError::NoCacheDir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace(&self) -> PathBuf {
        self.root.join("holidays")
    }

    pub fn entry_path(&self, country: &str, year: i32) -> PathBuf {
        self.namespace().join(country).join(format!("{year}.json"))
    }
}

impl CacheStore for FileStore {
    fn load(&self, country: &str, year: i32) -> Result<Option<Entries>> {
        let path = self.entry_path(country, year);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(HolidayError::Cache { path, source }),
        };
        let entries = serde_json::from_str(&raw)
            .map_err(|source| HolidayError::CacheFormat { path: path.clone(), source })?;
        debug!(path = %path.display(), "holiday cache hit");
        Ok(Some(entries))
    }

    fn save(&self, country: &str, year: i32, entries: &Entries) -> Result<()> {
        let path = self.entry_path(country, year);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| HolidayError::Cache {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|source| HolidayError::CacheFormat { path: path.clone(), source })?;
        std::fs::write(&path, json).map_err(|source| HolidayError::Cache { path, source })
    }

    fn clear(&self) -> Result<()> {
        let path = self.namespace();
        match std::fs::remove_dir_all(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(HolidayError::Cache { path, source }),
        }
    }
}

/// In-process store, mainly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<(String, i32), Entries>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached (country, year) pairs.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self, country: &str, year: i32) -> Result<Option<Entries>> {
        Ok(self
            .entries
            .borrow()
            .get(&(country.to_string(), year))
            .cloned())
    }

    fn save(&self, country: &str, year: i32, entries: &Entries) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert((country.to_string(), year), entries.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
