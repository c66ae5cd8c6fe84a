//! Partial-update records.
//!
//! Each patch mirrors its entity with every field optional: `Some`
//! fields replace, `None` fields keep the stored value. Parent ids and
//! `order` are patchable too, so a caller can move a child or pin an
//! explicit position.

use crate::{ExhibitItem, ExhibitItemId, Exhibition, ExhibitionId, ExhibitionKind, Photo};
use serde::{Deserialize, Serialize};

/// Field-wise update for an [`Exhibition`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitionPatch {
    pub kind: Option<ExhibitionKind>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
}

impl ExhibitionPatch {
    /// Merges this patch into `target`, replacing only the `Some` fields.
    pub fn apply_to(self, target: &mut Exhibition) {
        if let Some(kind) = self.kind {
            target.kind = kind;
        }
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(order) = self.order {
            target.order = order;
        }
    }
}

/// Field-wise update for an [`ExhibitItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitItemPatch {
    pub exhibition_id: Option<ExhibitionId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub episode: Option<String>,
    pub cover_image: Option<String>,
    pub order: Option<i64>,
}

impl ExhibitItemPatch {
    /// Merges this patch into `target`, replacing only the `Some` fields.
    pub fn apply_to(self, target: &mut ExhibitItem) {
        if let Some(exhibition_id) = self.exhibition_id {
            target.exhibition_id = exhibition_id;
        }
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(episode) = self.episode {
            target.episode = episode;
        }
        if let Some(cover_image) = self.cover_image {
            target.cover_image = cover_image;
        }
        if let Some(order) = self.order {
            target.order = order;
        }
    }
}

/// Field-wise update for a [`Photo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoPatch {
    pub exhibit_item_id: Option<ExhibitItemId>,
    pub image_src: Option<String>,
    pub caption: Option<String>,
    pub order: Option<i64>,
}

impl PhotoPatch {
    /// Merges this patch into `target`, replacing only the `Some` fields.
    pub fn apply_to(self, target: &mut Photo) {
        if let Some(exhibit_item_id) = self.exhibit_item_id {
            target.exhibit_item_id = exhibit_item_id;
        }
        if let Some(image_src) = self.image_src {
            target.image_src = image_src;
        }
        if let Some(caption) = self.caption {
            target.caption = caption;
        }
        if let Some(order) = self.order {
            target.order = order;
        }
    }
}
