//! Built-in starter content.
//!
//! Used whenever the durable slot holds no usable state: first visit,
//! or a corrupt/incompatible persisted value.

use crate::state::MuseumState;
use museum_types::{ExhibitItem, Exhibition, ExhibitionKind, Photo};

/// Returns the built-in seed dataset: two permanent exhibitions and one
/// special exhibition, with a handful of items and captioned photos.
#[must_use]
pub fn seed_state() -> MuseumState {
    let exhibitions = vec![
        Exhibition {
            id: "ex-things".into(),
            kind: ExhibitionKind::Permanent,
            name: "Favorite Things".to_string(),
            description: "A permanent walk through the objects I keep coming back to".to_string(),
            order: 0,
        },
        Exhibition {
            id: "ex-pastimes".into(),
            kind: ExhibitionKind::Permanent,
            name: "Favorite Pastimes".to_string(),
            description: "A permanent exhibition of the things I love doing".to_string(),
            order: 1,
        },
        Exhibition {
            id: "ex-current".into(),
            kind: ExhibitionKind::Special,
            name: "Current Obsessions".to_string(),
            description: "A rotating look at whatever has taken over my desk this season"
                .to_string(),
            order: 0,
        },
    ];

    let exhibit_items = vec![
        ExhibitItem {
            id: "item-baguette".into(),
            exhibition_id: "ex-things".into(),
            name: "The Baguette".to_string(),
            description: "A lifelong companion and something of an identity".to_string(),
            episode: "It started in grade school: the crust, the weight, the plain honest \
                      shape. One went into the backpack for every hike, and the habit never \
                      broke."
                .to_string(),
            cover_image: "https://images.example.org/museum/baguette-cover.jpg".to_string(),
            order: 0,
        },
        ExhibitItem {
            id: "item-pocketknife".into(),
            exhibition_id: "ex-things".into(),
            name: "The Pocket Knife".to_string(),
            description: "Hard to believe something this expressive is ground from one bar \
                          of steel"
                .to_string(),
            episode: "A grandfather's knife began it. Then came whittling summers, then a \
                      failed attempt at forging a letter opener, which still sits on the \
                      shelf as a warning."
                .to_string(),
            cover_image: "https://images.example.org/museum/knife-cover.jpg".to_string(),
            order: 1,
        },
        ExhibitItem {
            id: "item-inkwash".into(),
            exhibition_id: "ex-things".into(),
            name: "Ink-Wash Painting".to_string(),
            description: "The aesthetics of empty space, in ink and water only".to_string(),
            episode: "A novel about an ink-wash master started it; a flea-market inkstone \
                      sealed it. Every new year card since has carried a small painting, \
                      and the smell of fresh ink is half the point."
                .to_string(),
            cover_image: "https://images.example.org/museum/inkwash-cover.jpg".to_string(),
            order: 2,
        },
        ExhibitItem {
            id: "item-programming".into(),
            exhibition_id: "ex-pastimes".into(),
            name: "Programming".to_string(),
            description: "Building worlds out of text files".to_string(),
            episode: "The first Hello World printed to a screen and something clicked. The \
                      systems got bigger; the hope is the beginner's delight never does."
                .to_string(),
            cover_image: "https://images.example.org/museum/code-cover.jpg".to_string(),
            order: 0,
        },
        ExhibitItem {
            id: "item-sunrise".into(),
            exhibition_id: "ex-current".into(),
            name: "The Sea at Sunrise".to_string(),
            description: "Light inside the quiet".to_string(),
            episode: "Waiting on the shore from before dawn, shivering, and then the \
                      horizon caught fire and turned the water gold. Worth every minute."
                .to_string(),
            cover_image: "https://images.example.org/museum/sunrise-cover.jpg".to_string(),
            order: 0,
        },
    ];

    let photos = vec![
        Photo {
            id: "ph-baguette-1".into(),
            exhibit_item_id: "item-baguette".into(),
            image_src: "https://images.example.org/museum/baguette-1.jpg".to_string(),
            caption: "Sourdough baguette, first try with a new starter".to_string(),
            order: 0,
        },
        Photo {
            id: "ph-baguette-2".into(),
            exhibit_item_id: "item-baguette".into(),
            image_src: "https://images.example.org/museum/baguette-2.jpg".to_string(),
            caption: "Lunch from the bakery around the corner".to_string(),
            order: 1,
        },
        Photo {
            id: "ph-knife-1".into(),
            exhibit_item_id: "item-pocketknife".into(),
            image_src: "https://images.example.org/museum/knife-1.jpg".to_string(),
            caption: "Grain in the blade like petals drifting on a river".to_string(),
            order: 0,
        },
        Photo {
            id: "ph-knife-2".into(),
            exhibit_item_id: "item-pocketknife".into(),
            image_src: "https://images.example.org/museum/knife-2.jpg".to_string(),
            caption: "The homemade letter opener. It opens letters, eventually.".to_string(),
            order: 1,
        },
        Photo {
            id: "ph-inkwash-1".into(),
            exhibit_item_id: "item-inkwash".into(),
            image_src: "https://images.example.org/museum/inkwash-1.jpg".to_string(),
            caption: "The flea-market inkstone, still the favorite".to_string(),
            order: 0,
        },
        Photo {
            id: "ph-code-1".into(),
            exhibit_item_id: "item-programming".into(),
            image_src: "https://images.example.org/museum/code-1.jpg".to_string(),
            caption: "The digital world".to_string(),
            order: 0,
        },
        Photo {
            id: "ph-code-2".into(),
            exhibit_item_id: "item-programming".into(),
            image_src: "https://images.example.org/museum/code-2.jpg".to_string(),
            caption: "Where craft and art overlap".to_string(),
            order: 1,
        },
        Photo {
            id: "ph-sunrise-1".into(),
            exhibit_item_id: "item-sunrise".into(),
            image_src: "https://images.example.org/museum/sunrise-1.jpg".to_string(),
            caption: "What the waves remember".to_string(),
            order: 0,
        },
        Photo {
            id: "ph-sunrise-2".into(),
            exhibit_item_id: "item-sunrise".into(),
            image_src: "https://images.example.org/museum/sunrise-2.jpg".to_string(),
            caption: "Light through the morning fog".to_string(),
            order: 1,
        },
    ];

    MuseumState {
        exhibitions,
        exhibit_items,
        photos,
        is_admin_mode: false,
    }
}
