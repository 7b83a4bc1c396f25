#![forbid(unsafe_code)]

//! Progress persistence.
//!
//! Only `{progress, settings}` survive a restart; the active session never
//! persists. The persisted document carries a `format_version`
//! tag so the layout can migrate between releases, and progress keys are
//! stored as plain strings: a record written by a build whose catalog still
//! had a since-removed tour loads cleanly, with the unknown entries skipped
//! and logged.
//!
//! # Design Invariants
//!
//! 1. **Graceful degradation**: storage failures never panic; operations
//!    return `Result` and the store falls back to memory-only behavior.
//! 2. **Atomic writes**: file storage uses the write-then-rename pattern.
//! 3. **Forward compatibility**: version mismatch or unknown ids degrade to
//!    partial data, never a load failure.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::progress::TourProgress;
use crate::settings::TourSettings;

/// Current layout version of the persisted document.
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Errors from storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O failure reading or writing the backing file.
    Io(std::io::Error),
    /// Encode/decode failure.
    Serialization(String),
    /// The stored document is structurally invalid.
    Corruption(String),
    /// The backend cannot operate (missing directory permissions, etc.).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The persisted document: versioned progress map plus settings.
///
/// Keys are the kebab-case tour ids. They stay strings at this layer so
/// loading never fails on an id this build no longer knows; the store
/// filters against the catalog when hydrating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub format_version: u32,
    #[serde(default)]
    pub progress: BTreeMap<String, TourProgress>,
    #[serde(default)]
    pub settings: TourSettings,
}

impl PersistedState {
    /// An empty document at the current version.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            format_version: STATE_FORMAT_VERSION,
            progress: BTreeMap::new(),
            settings: TourSettings::default(),
        }
    }
}

/// Pluggable persistence for the progress store.
///
/// Implementations must be resilient: `load` on a missing record is
/// `Ok(None)` (first run), and `save` should be atomic where the medium
/// allows it.
pub trait StorageBackend {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load the persisted document, or `None` on first run.
    fn load(&self) -> StorageResult<Option<PersistedState>>;

    /// Replace the persisted document.
    fn save(&self, state: &PersistedState) -> StorageResult<()>;

    /// Remove all persisted state.
    fn clear(&self) -> StorageResult<()>;

    /// Whether the backend is currently functional.
    fn is_available(&self) -> bool {
        true
    }
}

/// Backends can be shared: a store owns `Box<Arc<S>>` while the host keeps
/// another handle for inspection or reuse across stores.
impl<S: StorageBackend> StorageBackend for std::sync::Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> StorageResult<Option<PersistedState>> {
        (**self).load()
    }

    fn save(&self, state: &PersistedState) -> StorageResult<()> {
        (**self).save(state)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// State is lost when the process exits.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RwLock<Option<PersistedState>>,
}

impl MemoryStorage {
    /// Create empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create memory storage pre-populated with a document.
    #[must_use]
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            slot: RwLock::new(Some(state)),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn load(&self) -> StorageResult<Option<PersistedState>> {
        let guard = self
            .slot
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &PersistedState) -> StorageResult<()> {
        let mut guard = self
            .slot
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        *guard = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let mut guard = self
            .slot
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.slot.read().map(|g| g.is_some()).unwrap_or(false);
        f.debug_struct("MemoryStorage")
            .field("occupied", &occupied)
            .finish()
    }
}

#[cfg(feature = "state-persistence")]
mod file_storage {
    use super::*;
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// JSON file storage with atomic write-then-rename.
    ///
    /// # File Format
    ///
    /// ```json
    /// {
    ///   "format_version": 1,
    ///   "progress": {
    ///     "welcome": { "tour": "welcome", "status": "completed", ... }
    ///   },
    ///   "settings": { "enabled": true, ... }
    /// }
    /// ```
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        /// Create file storage at the given path.
        ///
        /// The file does not need to exist; it is created on first save.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        /// Storage at the default location for the application.
        ///
        /// Uses `$XDG_STATE_HOME/waylight/{app_name}/tours.json` on Linux,
        /// with `~/.local/state` and the current directory as fallbacks.
        #[must_use]
        pub fn default_for_app(app_name: &str) -> Self {
            let base = state_dir_or_fallback();
            let path = base.join("waylight").join(app_name).join("tours.json");
            Self { path }
        }

        fn temp_path(&self) -> PathBuf {
            let mut tmp = self.path.clone();
            tmp.set_extension("json.tmp");
            tmp
        }
    }

    fn state_dir_or_fallback() -> PathBuf {
        if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
            return PathBuf::from(state_home);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("state");
        }
        PathBuf::from(".")
    }

    impl StorageBackend for FileStorage {
        fn name(&self) -> &str {
            "FileStorage"
        }

        fn load(&self) -> StorageResult<Option<PersistedState>> {
            if !self.path.exists() {
                // First run - nothing saved yet
                return Ok(None);
            }

            let file = File::open(&self.path)?;
            let reader = BufReader::new(file);

            let state: PersistedState = serde_json::from_reader(reader).map_err(|e| {
                StorageError::Serialization(format!("failed to parse tour state: {e}"))
            })?;

            if state.format_version != STATE_FORMAT_VERSION {
                tracing::warn!(
                    stored = state.format_version,
                    expected = STATE_FORMAT_VERSION,
                    "tour state format version mismatch, ignoring stored state"
                );
                return Ok(None);
            }

            Ok(Some(state))
        }

        fn save(&self, state: &PersistedState) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }

            // Write to temp file first (atomic pattern)
            let tmp_path = self.temp_path();
            {
                let file = File::create(&tmp_path)?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, state).map_err(|e| {
                    StorageError::Serialization(format!("failed to serialize tour state: {e}"))
                })?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }

            fs::rename(&tmp_path, &self.path)?;

            tracing::debug!(
                path = %self.path.display(),
                tours = state.progress.len(),
                "saved tour state"
            );

            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            Ok(())
        }

        fn is_available(&self) -> bool {
            if let Some(parent) = self.path.parent() {
                if !parent.exists() {
                    return std::fs::create_dir_all(parent).is_ok();
                }
                let test_path = parent.join(".waylight_test_write");
                if std::fs::write(&test_path, b"test").is_ok() {
                    let _ = std::fs::remove_file(&test_path);
                    return true;
                }
            }
            false
        }
    }

    impl fmt::Debug for FileStorage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileStorage")
                .field("path", &self.path)
                .finish()
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use file_storage::FileStorage;


#[cfg(all(test, feature = "state-persistence"))]
mod file_storage_tests {
    use super::*;
    use crate::progress::{TourProgress, TourStatus};
    use tempfile::TempDir;
    use waylight_catalog::TourId;

    fn sample_state() -> PersistedState {
        let mut state = PersistedState::empty();
        let mut p = TourProgress::fresh(TourId::PosBasics);
        p.status = TourStatus::InProgress;
        p.current_step = 2;
        state.progress.insert(TourId::PosBasics.as_str().into(), p);
        state
    }

    #[test]
    fn file_storage_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tours.json");
        let storage = FileStorage::new(&path);

        let state = sample_state();
        storage.save(&state).unwrap();
        assert!(path.exists());

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn file_storage_load_nonexistent_is_first_run() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::new(tmp.path().join("missing.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_version_mismatch_ignores_stored_state() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tours.json");
        std::fs::write(
            &path,
            r#"{"format_version": 99, "progress": {}, "settings": {}}"#,
        )
        .unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("deep").join("tours.json");
        let storage = FileStorage::new(&path);

        storage.save(&sample_state()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_storage_clear_removes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tours.json");
        let storage = FileStorage::new(&path);

        storage.save(&sample_state()).unwrap();
        assert!(path.exists());
        storage.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn file_storage_corrupt_document_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tours.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }
}
