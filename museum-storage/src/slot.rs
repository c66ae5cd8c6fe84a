//! The durable state slot.
//!
//! The whole museum state persists as one JSON value under one fixed
//! key. [`StateSlot`] is the repository seam: [`JsonFileSlot`] is the
//! production implementation, [`MemorySlot`] backs tests and embedders
//! that manage durability themselves.

use crate::error::StorageResult;
use museum_store::MuseumState;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the durable slot inside its directory.
pub const SLOT_FILE_NAME: &str = "museum-storage.json";

/// Repository seam for the durable slot.
///
/// `load` is infallible over bad content by contract: absent, unreadable,
/// malformed, or shape-incompatible values all come back as `Ok(None)`
/// so the caller seeds. Only `save` surfaces errors — a failed save means
/// the mutation was not durably committed.
pub trait StateSlot {
    /// Reads the previously persisted state, or `None` when no usable
    /// value exists.
    fn load(&self) -> StorageResult<Option<MuseumState>>;

    /// Replaces the slot value with the given state.
    fn save(&self, state: &MuseumState) -> StorageResult<()>;
}

/// Slot stored as a single JSON file on disk.
///
/// Saves write a sibling temp file and rename it into place, so an
/// interrupted write can never leave a torn slot behind.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Creates a slot at `{dir}/museum-storage.json`. The directory is
    /// created on first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_FILE_NAME),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSlot for JsonFileSlot {
    fn load(&self) -> StorageResult<Option<MuseumState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "slot unreadable, falling back to seed data");
                return Ok(None);
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => {
                debug!(path = %self.path.display(), "loaded persisted state");
                Ok(Some(state))
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "slot malformed, falling back to seed data");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &MuseumState) -> StorageResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved state");
        Ok(())
    }
}

/// In-memory slot holding the serialized value, for tests and hosts
/// that provide their own durable storage.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with a raw value, which does not have
    /// to be valid state JSON.
    #[must_use]
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
        }
    }

    /// Returns the currently stored raw value.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StateSlot for MemorySlot {
    fn load(&self) -> StorageResult<Option<MuseumState>> {
        let borrowed = self.value.borrow();
        let Some(raw) = borrowed.as_deref() else {
            return Ok(None);
        };
        match serde_json::from_str(raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                warn!(%err, "in-memory slot malformed, falling back to seed data");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &MuseumState) -> StorageResult<()> {
        *self.value.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}
