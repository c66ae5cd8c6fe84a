use museum_types::{
    ExhibitItem, ExhibitItemPatch, Exhibition, ExhibitionKind, ExhibitionPatch, Photo, PhotoPatch,
};
use pretty_assertions::assert_eq;

fn exhibition() -> Exhibition {
    Exhibition {
        id: "ex1".into(),
        kind: ExhibitionKind::Permanent,
        name: "Favorite Things".to_string(),
        description: "original description".to_string(),
        order: 0,
    }
}

fn item() -> ExhibitItem {
    ExhibitItem {
        id: "item1".into(),
        exhibition_id: "ex1".into(),
        name: "Baguette".to_string(),
        description: "desc".to_string(),
        episode: "episode".to_string(),
        cover_image: "cover.jpg".to_string(),
        order: 0,
    }
}

// ── Field-wise merge ─────────────────────────────────────────────

#[test]
fn empty_patch_changes_nothing() {
    let mut e = exhibition();
    ExhibitionPatch::default().apply_to(&mut e);
    assert_eq!(e, exhibition());
}

#[test]
fn patch_replaces_only_some_fields() {
    let mut e = exhibition();
    ExhibitionPatch {
        name: Some("Renamed".to_string()),
        ..Default::default()
    }
    .apply_to(&mut e);
    assert_eq!(e.name, "Renamed");
    assert_eq!(e.description, "original description");
    assert_eq!(e.kind, ExhibitionKind::Permanent);
    assert_eq!(e.order, 0);
}

#[test]
fn patch_can_change_kind_and_order() {
    let mut e = exhibition();
    ExhibitionPatch {
        kind: Some(ExhibitionKind::Special),
        order: Some(5),
        ..Default::default()
    }
    .apply_to(&mut e);
    assert_eq!(e.kind, ExhibitionKind::Special);
    assert_eq!(e.order, 5);
}

#[test]
fn item_patch_can_move_to_another_exhibition() {
    let mut i = item();
    ExhibitItemPatch {
        exhibition_id: Some("ex2".into()),
        episode: Some("rewritten".to_string()),
        ..Default::default()
    }
    .apply_to(&mut i);
    assert_eq!(i.exhibition_id, "ex2".into());
    assert_eq!(i.episode, "rewritten");
    assert_eq!(i.name, "Baguette");
}

#[test]
fn photo_patch_updates_caption_only() {
    let mut p = Photo {
        id: "ph1".into(),
        exhibit_item_id: "item1".into(),
        image_src: "a.jpg".to_string(),
        caption: "before".to_string(),
        order: 3,
    };
    PhotoPatch {
        caption: Some("after".to_string()),
        ..Default::default()
    }
    .apply_to(&mut p);
    assert_eq!(p.caption, "after");
    assert_eq!(p.image_src, "a.jpg");
    assert_eq!(p.order, 3);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn patch_deserializes_with_missing_fields_as_none() {
    let patch: ExhibitionPatch = serde_json::from_str(r#"{"name": "New"}"#).unwrap();
    assert_eq!(patch.name.as_deref(), Some("New"));
    assert!(patch.kind.is_none());
    assert!(patch.description.is_none());
    assert!(patch.order.is_none());
}
