//! The state container and its read views.

use museum_types::{
    ExhibitItem, ExhibitItemId, Exhibition, ExhibitionId, ExhibitionKind, Photo, PhotoId,
};
use serde::{Deserialize, Serialize};

/// The complete museum content state: three flat entity collections plus
/// the session admin flag. This is exactly the shape the persistence
/// layer writes to the durable slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuseumState {
    pub exhibitions: Vec<Exhibition>,
    pub exhibit_items: Vec<ExhibitItem>,
    pub photos: Vec<Photo>,
    pub is_admin_mode: bool,
}

impl MuseumState {
    /// Exhibitions of one kind, ascending by `order`. The sort is stable:
    /// entities with equal orders keep their relative position in the
    /// backing collection. Callers rely on that for tie-breaking.
    #[must_use]
    pub fn exhibitions_of_kind(&self, kind: ExhibitionKind) -> Vec<&Exhibition> {
        let mut out: Vec<&Exhibition> = self
            .exhibitions
            .iter()
            .filter(|e| e.kind == kind)
            .collect();
        out.sort_by_key(|e| e.order);
        out
    }

    /// Items of one exhibition, ascending by `order` (stable).
    #[must_use]
    pub fn items_of_exhibition(&self, exhibition_id: &ExhibitionId) -> Vec<&ExhibitItem> {
        let mut out: Vec<&ExhibitItem> = self
            .exhibit_items
            .iter()
            .filter(|i| &i.exhibition_id == exhibition_id)
            .collect();
        out.sort_by_key(|i| i.order);
        out
    }

    /// Photos of one item, ascending by `order` (stable).
    #[must_use]
    pub fn photos_of_item(&self, exhibit_item_id: &ExhibitItemId) -> Vec<&Photo> {
        let mut out: Vec<&Photo> = self
            .photos
            .iter()
            .filter(|p| &p.exhibit_item_id == exhibit_item_id)
            .collect();
        out.sort_by_key(|p| p.order);
        out
    }

    /// Looks up one exhibition by id.
    #[must_use]
    pub fn exhibition(&self, id: &ExhibitionId) -> Option<&Exhibition> {
        self.exhibitions.iter().find(|e| &e.id == id)
    }

    /// Looks up one exhibit item by id.
    #[must_use]
    pub fn exhibit_item(&self, id: &ExhibitItemId) -> Option<&ExhibitItem> {
        self.exhibit_items.iter().find(|i| &i.id == id)
    }

    /// Looks up one photo by id.
    #[must_use]
    pub fn photo(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| &p.id == id)
    }
}
