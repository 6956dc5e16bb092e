//! Durable persistence for the submission store.
//!
//! One structured JSON file holds the full [`Store`] and is the unit of
//! load/save. Writes go to a sibling temp file and are renamed into place
//! so a concurrent load never observes a half-written file. The whole
//! load-modify-save cycle of [`RecordStore::update`] runs under a single
//! in-process lock; that is the serialization the upsert contract needs so
//! concurrent upserts for different users on the same date both survive.
//!
//! Known limitation: nothing here is safe for multi-process deployment.
//! The lock is per-process; coordinating several processes against one
//! file would need an external file lock.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;
use crate::model::{Store, Submission};

/// Byte-level access to the backing resource, injected so tests can run
/// against an in-memory fake instead of the filesystem.
pub trait StorageBackend: Send + Sync {
    /// Read the full resource. `Ok(None)` means "no file yet", which is
    /// distinct from a read error.
    fn read(&self) -> std::io::Result<Option<String>>;

    /// Atomically replace the resource with `contents`.
    fn write_atomic(&self, contents: &str) -> std::io::Result<()>;

    /// Path-like description of the resource, used in error reports.
    fn location(&self) -> PathBuf;
}

/// Filesystem backend: one JSON file, replaced via write-to-temp-then-rename.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Temp file lives in the same directory so the rename stays on one
        // filesystem and is atomic.
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, contents)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// In-memory backend for tests and fakes.
#[derive(Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-seeded contents, as if the file already existed.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> std::io::Result<Option<String>> {
        let guard = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        let mut guard = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

/// Durable key-value persistence of submissions, partitioned by calendar
/// date then by user name.
pub struct RecordStore {
    backend: Box<dyn StorageBackend>,

    /// Serializes every load-modify-save cycle in this process.
    op_lock: Mutex<()>,
}

impl RecordStore {
    /// Open a store backed by a JSON file at `path`. The file is created
    /// on first load if absent.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_backend(Box::new(FileBackend::new(path.as_ref())))
    }

    /// Open a store over an injected backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            op_lock: Mutex::new(()),
        }
    }

    /// Read the full persisted state.
    ///
    /// # Errors
    /// Returns [`StoreError::Corrupt`] if the resource exists but cannot be
    /// parsed; an unreadable resource surfaces as [`StoreError::Io`]. A
    /// missing resource is not an error: it yields an empty store and
    /// creates the resource.
    pub fn load(&self) -> Result<Store, StoreError> {
        let _guard = self.op_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.load_unlocked()
    }

    /// Atomically overwrite the backing resource with `store`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails; a failed write
    /// never leaves a partially-written resource visible.
    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        let _guard = self.op_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.save_unlocked(store)
    }

    /// Insert or fully replace the submission for `(date, user)`.
    ///
    /// Empty `progress` or `question` strings are accepted at this layer:
    /// the non-emptiness rule belongs to the submission service, and the
    /// store stays a faithful byte sink.
    pub fn upsert(
        &self,
        date: &str,
        user: &str,
        progress: &str,
        question: &str,
        submitted_at: &str,
    ) -> Result<(), StoreError> {
        self.update(|store| {
            store.entry(date.to_string()).or_default().insert(
                user.to_string(),
                Submission {
                    progress: progress.to_string(),
                    question: question.to_string(),
                    submitted_at: submitted_at.to_string(),
                },
            );
        })
    }

    /// Run one load-modify-save cycle under the store lock.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut Store) -> T) -> Result<T, StoreError> {
        let _guard = self.op_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut store = self.load_unlocked()?;
        let out = mutate(&mut store);
        self.save_unlocked(&store)?;
        Ok(out)
    }

    fn load_unlocked(&self) -> Result<Store, StoreError> {
        match self.backend.read()? {
            Some(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: self.backend.location(),
                    source,
                })
            }
            None => {
                let store = Store::new();
                self.save_unlocked(&store)?;
                Ok(store)
            }
        }
    }

    fn save_unlocked(&self, store: &Store) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(store).map_err(StoreError::Serialize)?;
        self.backend.write_atomic(&content)?;
        Ok(())
    }
}
