//! Persistence layer for the museum content store.
//!
//! The pure store lives in `museum-store`; this crate makes it durable:
//! - [`StateSlot`] — the repository seam: `load` a previously persisted
//!   state, `save` the current one, all as a single JSON value under one
//!   fixed key
//! - [`JsonFileSlot`] — the production slot, one JSON file on disk with
//!   temp-file-and-rename writes
//! - [`MemorySlot`] — an in-memory slot for tests and embedders
//! - [`Museum`] — the root context wrapping store + slot so that every
//!   mutation is durably written before it is reported committed, and
//!   change listeners see each new state
//!
//! A slot value that is absent, unreadable, malformed, or written under
//! an incompatible shape is never an error: loading falls back to the
//! built-in seed dataset.

mod error;
mod museum;
mod slot;

pub use error::{StorageError, StorageResult};
pub use museum::Museum;
pub use slot::{JsonFileSlot, MemorySlot, SLOT_FILE_NAME, StateSlot};
