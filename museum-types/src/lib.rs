//! Entity model for the museum content store.
//!
//! Defines the three-level containment hierarchy the whole site is built
//! around:
//! - [`Exhibition`] — a top-level gallery category, permanent or special
//! - [`ExhibitItem`] — a themed sub-topic owned by one exhibition
//! - [`Photo`] — a captioned media record owned by one exhibit item
//!
//! plus the opaque identifier newtypes and the all-optional patch records
//! used for partial updates. These types are plain serde data: no
//! behavior beyond field access and merging lives here.

mod entity;
mod ids;
mod patch;

pub use entity::{ExhibitItem, Exhibition, ExhibitionKind, Photo};
pub use ids::{ExhibitItemId, ExhibitionId, PhotoId};
pub use patch::{ExhibitItemPatch, ExhibitionPatch, PhotoPatch};
