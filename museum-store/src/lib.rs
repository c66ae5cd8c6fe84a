//! The museum content store.
//!
//! The single authoritative in-memory model of exhibitions, exhibit
//! items and photos, plus the rules around it:
//! - [`MuseumState`] — the plain state container with sorted read views
//! - [`MuseumStore`] — the mutation API: creates with computed ordering,
//!   field-wise patch updates, set-based cascade deletes, batch photo
//!   insertion, partial reordering
//! - [`IdGenerator`] — capability for minting entity ids, injectable for
//!   deterministic tests
//! - [`TapUnlock`] — the secret-gesture state machine that unlocks admin
//!   mode, together with the `admin=1` URL-flag check
//! - [`seed_state`] — the built-in dataset used when no persisted state
//!   exists
//!
//! This crate is pure: no I/O, no clocks it didn't receive, no storage
//! dependency. Persistence wraps it one layer up.

mod admin;
mod idgen;
mod order;
mod seed;
mod state;
mod store;

pub use admin::{TAP_THRESHOLD, TAP_WINDOW, TapUnlock, admin_query_unlocks};
pub use idgen::{IdGenerator, SequentialIds, UuidIds};
pub use order::next_order;
pub use seed::seed_state;
pub use state::MuseumState;
pub use store::{MuseumStore, NewPhoto};
