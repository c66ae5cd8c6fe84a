//! The mutation API over [`MuseumState`].

use crate::idgen::{IdGenerator, UuidIds};
use crate::order::next_order;
use crate::state::MuseumState;
use museum_types::{
    ExhibitItem, ExhibitItemId, ExhibitItemPatch, Exhibition, ExhibitionId, ExhibitionKind,
    ExhibitionPatch, Photo, PhotoId, PhotoPatch,
};
use std::collections::{HashMap, HashSet};

/// Input record for batch photo insertion. Elements of one batch may
/// target different parent items.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub exhibit_item_id: ExhibitItemId,
    pub image_src: String,
    pub caption: String,
}

/// The content store: owns the state and enforces ordering and cascade
/// rules on every mutation.
///
/// Every operation is total. Updates and deletes of ids that do not
/// exist are silent no-ops, never errors. The store performs no input
/// validation (empty names, dangling parent ids) — by contract that is
/// the caller's concern, which keeps this a pure data engine.
///
/// The store also does not gate anything on `is_admin_mode`; the flag
/// only tells the UI whether to show editing controls.
pub struct MuseumStore {
    state: MuseumState,
    ids: Box<dyn IdGenerator>,
}

impl MuseumStore {
    /// Creates a store over `state` with random UUID ids.
    #[must_use]
    pub fn new(state: MuseumState) -> Self {
        Self::with_ids(state, Box::new(UuidIds))
    }

    /// Creates a store with an injected id generator.
    #[must_use]
    pub fn with_ids(state: MuseumState, ids: Box<dyn IdGenerator>) -> Self {
        Self { state, ids }
    }

    /// Borrows the current state.
    #[must_use]
    pub fn state(&self) -> &MuseumState {
        &self.state
    }

    /// Clones the current state. A snapshot is never touched by later
    /// mutations, so a reader holding one cannot observe partial updates.
    #[must_use]
    pub fn snapshot(&self) -> MuseumState {
        self.state.clone()
    }

    // ── Exhibitions ──────────────────────────────────────────────

    /// Creates an exhibition. Ordering is scoped per kind: permanent and
    /// special exhibitions each run their own zero-based sequence.
    pub fn add_exhibition(
        &mut self,
        kind: ExhibitionKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ExhibitionId {
        let order = next_order(
            self.state
                .exhibitions
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.order),
        );
        let id = ExhibitionId::new(self.ids.fresh());
        self.state.exhibitions.push(Exhibition {
            id: id.clone(),
            kind,
            name: name.into(),
            description: description.into(),
            order,
        });
        id
    }

    /// Merges `patch` into the matching exhibition; no-op if `id` is absent.
    pub fn update_exhibition(&mut self, id: &ExhibitionId, patch: ExhibitionPatch) {
        if let Some(exhibition) = self.state.exhibitions.iter_mut().find(|e| &e.id == id) {
            patch.apply_to(exhibition);
        }
    }

    /// Deletes an exhibition and everything reachable from it: its items
    /// and, transitively, their photos. The affected item ids are
    /// collected from the pre-deletion state first so the photo filter
    /// works set-wise, not iteratively.
    pub fn delete_exhibition(&mut self, id: &ExhibitionId) {
        let doomed_items: HashSet<ExhibitItemId> = self
            .state
            .exhibit_items
            .iter()
            .filter(|i| &i.exhibition_id == id)
            .map(|i| i.id.clone())
            .collect();
        self.state.exhibitions.retain(|e| &e.id != id);
        self.state.exhibit_items.retain(|i| &i.exhibition_id != id);
        self.state
            .photos
            .retain(|p| !doomed_items.contains(&p.exhibit_item_id));
    }

    // ── Exhibit items ────────────────────────────────────────────

    /// Creates an item inside an exhibition; ordering is scoped to that
    /// exhibition's items.
    pub fn add_exhibit_item(
        &mut self,
        exhibition_id: &ExhibitionId,
        name: impl Into<String>,
        description: impl Into<String>,
        episode: impl Into<String>,
        cover_image: impl Into<String>,
    ) -> ExhibitItemId {
        let order = next_order(
            self.state
                .exhibit_items
                .iter()
                .filter(|i| &i.exhibition_id == exhibition_id)
                .map(|i| i.order),
        );
        let id = ExhibitItemId::new(self.ids.fresh());
        self.state.exhibit_items.push(ExhibitItem {
            id: id.clone(),
            exhibition_id: exhibition_id.clone(),
            name: name.into(),
            description: description.into(),
            episode: episode.into(),
            cover_image: cover_image.into(),
            order,
        });
        id
    }

    /// Merges `patch` into the matching item; no-op if `id` is absent.
    pub fn update_exhibit_item(&mut self, id: &ExhibitItemId, patch: ExhibitItemPatch) {
        if let Some(item) = self.state.exhibit_items.iter_mut().find(|i| &i.id == id) {
            patch.apply_to(item);
        }
    }

    /// Deletes an item and its photos.
    pub fn delete_exhibit_item(&mut self, id: &ExhibitItemId) {
        self.state.exhibit_items.retain(|i| &i.id != id);
        self.state.photos.retain(|p| &p.exhibit_item_id != id);
    }

    // ── Photos ───────────────────────────────────────────────────

    /// Adds one photo; ordering is scoped to the parent item's photos.
    pub fn add_photo(
        &mut self,
        exhibit_item_id: &ExhibitItemId,
        image_src: impl Into<String>,
        caption: impl Into<String>,
    ) -> PhotoId {
        let order = next_order(self.photo_orders_of(exhibit_item_id));
        self.push_photo(exhibit_item_id.clone(), image_src.into(), caption.into(), order)
    }

    /// Adds a batch of photos in one operation. Each element's order is
    /// the parent's pre-batch `next_order` baseline plus the element's
    /// zero-based position among batch members with the same parent.
    /// Batch members therefore keep their submission order within each
    /// parent, and parents do not interfere with each other: a batch of
    /// two photos for item A and one for item B gives A orders 0, 1 and
    /// B order 0 (against empty parents).
    pub fn add_photos(&mut self, photos: Vec<NewPhoto>) -> Vec<PhotoId> {
        let mut next_by_parent: HashMap<ExhibitItemId, i64> = HashMap::new();
        let mut minted = Vec::with_capacity(photos.len());
        for photo in photos {
            // The baseline for a parent is computed on first encounter,
            // before any photo of that parent from this batch lands.
            let slot = next_by_parent
                .entry(photo.exhibit_item_id.clone())
                .or_insert_with(|| next_order(self.photo_orders_of(&photo.exhibit_item_id)));
            let order = *slot;
            *slot += 1;
            minted.push(self.push_photo(
                photo.exhibit_item_id,
                photo.image_src,
                photo.caption,
                order,
            ));
        }
        minted
    }

    /// Merges `patch` into the matching photo; no-op if `id` is absent.
    pub fn update_photo(&mut self, id: &PhotoId, patch: PhotoPatch) {
        if let Some(photo) = self.state.photos.iter_mut().find(|p| &p.id == id) {
            patch.apply_to(photo);
        }
    }

    /// Deletes one photo. Photos are leaves; nothing cascades.
    pub fn delete_photo(&mut self, id: &PhotoId) {
        self.state.photos.retain(|p| &p.id != id);
    }

    /// Re-sequences the photos of one item: every photo whose id appears
    /// in `ordered_ids` gets its index in that list as its new order.
    /// Photos of the item that are absent from the list keep their
    /// previous order, and photos of other items are untouched — the
    /// operation is best-effort, not a full resequence.
    pub fn reorder_photos(&mut self, exhibit_item_id: &ExhibitItemId, ordered_ids: &[PhotoId]) {
        for photo in &mut self.state.photos {
            if &photo.exhibit_item_id != exhibit_item_id {
                continue;
            }
            if let Some(index) = ordered_ids.iter().position(|id| id == &photo.id) {
                photo.order = index as i64;
            }
        }
    }

    // ── Admin flag ───────────────────────────────────────────────

    /// Sets the session admin flag unconditionally.
    pub fn set_admin_mode(&mut self, enabled: bool) {
        self.state.is_admin_mode = enabled;
    }

    // ── Helpers ──────────────────────────────────────────────────

    fn photo_orders_of<'a>(
        &'a self,
        exhibit_item_id: &'a ExhibitItemId,
    ) -> impl Iterator<Item = i64> + 'a {
        self.state
            .photos
            .iter()
            .filter(move |p| &p.exhibit_item_id == exhibit_item_id)
            .map(|p| p.order)
    }

    fn push_photo(
        &mut self,
        exhibit_item_id: ExhibitItemId,
        image_src: String,
        caption: String,
        order: i64,
    ) -> PhotoId {
        let id = PhotoId::new(self.ids.fresh());
        self.state.photos.push(Photo {
            id: id.clone(),
            exhibit_item_id,
            image_src,
            caption,
            order,
        });
        id
    }
}

impl Default for MuseumStore {
    fn default() -> Self {
        Self::new(MuseumState::default())
    }
}

impl std::fmt::Debug for MuseumStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuseumStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
