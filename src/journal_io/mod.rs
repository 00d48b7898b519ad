//! Journal persistence.
//!
//! The journal lives in a single JSON file holding an array of entries. This
//! module reads and rewrites that file, keeps its permissions private, and
//! holds an advisory lock so two daybook invocations cannot interleave a
//! load and a save on the same journal.

use crate::constants::LOCK_FILE_SUFFIX;
#[cfg(unix)]
use crate::constants::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
use crate::errors::{AppError, AppResult, LockError, StorageError};
use crate::journal_core::{Entry, Field};
use fs2::FileExt;
use serde::{Deserialize, Deserializer};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the journal's entries are loaded from and saved to.
pub trait EntryStore {
    /// Loads every stored entry, in stored order, with instants recomputed
    /// from their timestamps.
    fn load_all(&self) -> AppResult<Vec<Entry>>;

    /// Replaces the stored entries with `entries`.
    fn save_all(&self, entries: &[Entry]) -> AppResult<()>;
}

/// An entry as written on disk. Older journals store `null` for empty lists.
#[derive(Deserialize)]
struct EntryRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    timestamp: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    fields: Vec<Field>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A journal stored as pretty-printed JSON in a single file.
///
/// Opening the store takes an exclusive lock on a `.lock` file next to the
/// journal; the lock is released when the store is dropped.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    _lock: File,
}

impl JsonFileStore {
    /// Opens the journal at `path`, creating its directory if needed and
    /// locking it for the lifetime of the returned store.
    ///
    /// # Errors
    ///
    /// - `AppError::Journal` if `path` is relative or has no parent directory
    /// - `AppError::Io` if the directory cannot be created
    /// - `AppError::Lock` if another process holds the journal
    pub fn open(path: &Path) -> AppResult<Self> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
            AppError::Journal(format!(
                "Journal path has no parent directory: {}",
                path.display()
            ))
        })?;
        ensure_journal_directory_exists(parent)?;

        let lock = acquire_lock(path)?;
        debug!("Acquired journal lock");

        Ok(JsonFileStore {
            path: path.to_path_buf(),
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for JsonFileStore {
    fn load_all(&self) -> AppResult<Vec<Entry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No journal file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<EntryRecord> =
            serde_json::from_str(&raw).map_err(|source| StorageError::InvalidFormat {
                path: self.path.clone(),
                source,
            })?;

        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Entry::restore(
                    record.title,
                    record.content,
                    record.timestamp.clone(),
                    record.tags,
                    record.fields,
                )
                .map_err(|source| StorageError::MalformedTimestamp {
                    index,
                    timestamp: record.timestamp,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} entries", entries.len());
        Ok(entries)
    }

    fn save_all(&self, entries: &[Entry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        // Write beside the journal and rename over it so a crash never leaves
        // a half-written file behind.
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.write_all(b"\n")?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS);
            fs::set_permissions(temp.path(), permissions)?;
        }

        temp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        debug!("Saved {} entries", entries.len());
        Ok(())
    }
}

/// Ensures the journal directory exists, creating it if necessary.
///
/// Newly created directories are private to the owner on unix.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_journal_directory_exists(journal_dir: &Path) -> AppResult<()> {
    if !journal_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Journal directory path must be absolute: {}",
            journal_dir.display()
        )));
    }

    if !journal_dir.exists() {
        fs::create_dir_all(journal_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create journal directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(journal_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set secure permissions on journal directory: {}",
                        e
                    ),
                ))
            })?;
            debug!("Set 0o700 permissions on journal directory");
        }
    }
    Ok(())
}

/// Path of the sidecar lock file for the journal at `path`.
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(LOCK_FILE_SUFFIX);
    PathBuf::from(name)
}

fn acquire_lock(path: &Path) -> AppResult<File> {
    let lock_path = lock_path(path);
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|source| LockError::AcquisitionFailed {
            path: path.to_path_buf(),
            source,
        })?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(file),
        Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
            Err(LockError::FileBusy {
                path: path.to_path_buf(),
            }
            .into())
        }
        Err(source) => Err(LockError::AcquisitionFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}
