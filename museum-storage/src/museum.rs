//! The persisted museum: the pure store wrapped with durability and
//! change notification.

use crate::error::StorageResult;
use crate::slot::StateSlot;
use museum_store::{
    IdGenerator, MuseumState, MuseumStore, NewPhoto, TapUnlock, admin_query_unlocks, seed_state,
};
use museum_types::{
    ExhibitItemId, ExhibitItemPatch, ExhibitionId, ExhibitionKind, ExhibitionPatch, PhotoId,
    PhotoPatch,
};
use std::time::Instant;

type Listener = Box<dyn Fn(&MuseumState)>;

/// The root context of the content system.
///
/// Owns the pure [`MuseumStore`], the durable [`StateSlot`], the
/// admin-activation tap machine, and the change listeners. Every
/// mutation runs against the in-memory store, is saved to the slot, and
/// then notifies listeners — in that order, so a mutation whose save
/// fails returns the error and is not announced as committed.
///
/// Created once at process start and handed to whatever needs it; there
/// is no ambient global instance.
pub struct Museum<S: StateSlot> {
    store: MuseumStore,
    slot: S,
    taps: TapUnlock,
    listeners: Vec<Listener>,
}

impl<S: StateSlot> Museum<S> {
    /// Opens the museum over a slot: a previously persisted state becomes
    /// the initial state, otherwise the built-in seed dataset does.
    pub fn open(slot: S) -> StorageResult<Self> {
        let state = slot.load()?.unwrap_or_else(seed_state);
        Ok(Self {
            store: MuseumStore::new(state),
            slot,
            taps: TapUnlock::new(),
            listeners: Vec::new(),
        })
    }

    /// Opens with an injected id generator, for deterministic tests.
    pub fn open_with_ids(slot: S, ids: Box<dyn IdGenerator>) -> StorageResult<Self> {
        let state = slot.load()?.unwrap_or_else(seed_state);
        Ok(Self {
            store: MuseumStore::with_ids(state, ids),
            slot,
            taps: TapUnlock::new(),
            listeners: Vec::new(),
        })
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Borrows the current state.
    #[must_use]
    pub fn state(&self) -> &MuseumState {
        self.store.state()
    }

    /// Clones the current state.
    #[must_use]
    pub fn snapshot(&self) -> MuseumState {
        self.store.snapshot()
    }

    /// Whether the session has admin mode enabled.
    #[must_use]
    pub fn is_admin_mode(&self) -> bool {
        self.store.state().is_admin_mode
    }

    /// Registers a listener called with the new state after every
    /// committed mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&MuseumState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ── Mutations ────────────────────────────────────────────────

    pub fn add_exhibition(
        &mut self,
        kind: ExhibitionKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> StorageResult<ExhibitionId> {
        let (name, description) = (name.into(), description.into());
        self.commit(|store| store.add_exhibition(kind, name, description))
    }

    pub fn update_exhibition(
        &mut self,
        id: &ExhibitionId,
        patch: ExhibitionPatch,
    ) -> StorageResult<()> {
        self.commit(|store| store.update_exhibition(id, patch))
    }

    pub fn delete_exhibition(&mut self, id: &ExhibitionId) -> StorageResult<()> {
        self.commit(|store| store.delete_exhibition(id))
    }

    pub fn add_exhibit_item(
        &mut self,
        exhibition_id: &ExhibitionId,
        name: impl Into<String>,
        description: impl Into<String>,
        episode: impl Into<String>,
        cover_image: impl Into<String>,
    ) -> StorageResult<ExhibitItemId> {
        let (name, description) = (name.into(), description.into());
        let (episode, cover_image) = (episode.into(), cover_image.into());
        self.commit(|store| {
            store.add_exhibit_item(exhibition_id, name, description, episode, cover_image)
        })
    }

    pub fn update_exhibit_item(
        &mut self,
        id: &ExhibitItemId,
        patch: ExhibitItemPatch,
    ) -> StorageResult<()> {
        self.commit(|store| store.update_exhibit_item(id, patch))
    }

    pub fn delete_exhibit_item(&mut self, id: &ExhibitItemId) -> StorageResult<()> {
        self.commit(|store| store.delete_exhibit_item(id))
    }

    pub fn add_photo(
        &mut self,
        exhibit_item_id: &ExhibitItemId,
        image_src: impl Into<String>,
        caption: impl Into<String>,
    ) -> StorageResult<PhotoId> {
        let (image_src, caption) = (image_src.into(), caption.into());
        self.commit(|store| store.add_photo(exhibit_item_id, image_src, caption))
    }

    pub fn add_photos(&mut self, photos: Vec<NewPhoto>) -> StorageResult<Vec<PhotoId>> {
        self.commit(|store| store.add_photos(photos))
    }

    pub fn update_photo(&mut self, id: &PhotoId, patch: PhotoPatch) -> StorageResult<()> {
        self.commit(|store| store.update_photo(id, patch))
    }

    pub fn delete_photo(&mut self, id: &PhotoId) -> StorageResult<()> {
        self.commit(|store| store.delete_photo(id))
    }

    pub fn reorder_photos(
        &mut self,
        exhibit_item_id: &ExhibitItemId,
        ordered_ids: &[PhotoId],
    ) -> StorageResult<()> {
        self.commit(|store| store.reorder_photos(exhibit_item_id, ordered_ids))
    }

    pub fn set_admin_mode(&mut self, enabled: bool) -> StorageResult<()> {
        self.commit(|store| store.set_admin_mode(enabled))
    }

    // ── Admin activation ─────────────────────────────────────────

    /// Applies the page-load URL flag check (`?admin=1`). Returns whether
    /// admin mode is enabled afterwards.
    pub fn unlock_from_query(&mut self, query: &str) -> StorageResult<bool> {
        if admin_query_unlocks(query) && !self.is_admin_mode() {
            self.set_admin_mode(true)?;
        }
        Ok(self.is_admin_mode())
    }

    /// Registers a secret-gesture tap at the current instant. Returns
    /// whether admin mode is enabled afterwards.
    pub fn tap(&mut self) -> StorageResult<bool> {
        self.tap_at(Instant::now())
    }

    /// Registers a secret-gesture tap at an explicit instant.
    pub fn tap_at(&mut self, at: Instant) -> StorageResult<bool> {
        if self.taps.tap_at(at) && !self.is_admin_mode() {
            self.set_admin_mode(true)?;
        }
        Ok(self.is_admin_mode())
    }

    // ── Internal ─────────────────────────────────────────────────

    fn commit<T>(&mut self, mutation: impl FnOnce(&mut MuseumStore) -> T) -> StorageResult<T> {
        let out = mutation(&mut self.store);
        self.slot.save(self.store.state())?;
        for listener in &self.listeners {
            listener(self.store.state());
        }
        Ok(out)
    }
}

impl<S: StateSlot + std::fmt::Debug> std::fmt::Debug for Museum<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Museum")
            .field("state", self.store.state())
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}
