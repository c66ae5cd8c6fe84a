use crate::{ExhibitItemId, ExhibitionId, PhotoId};
use serde::{Deserialize, Serialize};

/// Which of the two ordering spaces an exhibition belongs to.
///
/// Permanent and special exhibitions are displayed in separate sections
/// and each keeps its own zero-based `order` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionKind {
    Permanent,
    Special,
}

/// A top-level gallery category ("room") visitors enter from the lobby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub kind: ExhibitionKind,
    pub name: String,
    pub description: String,
    /// Display position within this exhibition's kind. Sequencing only:
    /// duplicates and gaps are tolerated.
    pub order: i64,
}

/// A themed sub-topic shown inside one exhibition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitItem {
    pub id: ExhibitItemId,
    pub exhibition_id: ExhibitionId,
    pub name: String,
    pub description: String,
    /// Long-form story text shown on the item's detail page.
    pub episode: String,
    /// Locator string for the cover image; resolved by the UI layer.
    pub cover_image: String,
    pub order: i64,
}

/// A captioned media record attached to one exhibit item. Leaf of the
/// hierarchy; nothing references photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub exhibit_item_id: ExhibitItemId,
    pub image_src: String,
    pub caption: String,
    pub order: i64,
}
