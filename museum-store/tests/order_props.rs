use museum_store::{MuseumState, MuseumStore, SequentialIds, next_order};
use museum_types::ExhibitionKind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn next_order_is_greater_than_every_existing(orders in proptest::collection::vec(-1000i64..1000, 0..32)) {
        let next = next_order(orders.iter().copied());
        for order in &orders {
            prop_assert!(next > *order);
        }
        if orders.is_empty() {
            prop_assert_eq!(next, 0);
        }
    }

    #[test]
    fn sequential_item_adds_count_up_from_zero(count in 1usize..24) {
        let mut store = MuseumStore::with_ids(
            MuseumState::default(),
            Box::new(SequentialIds::new("id")),
        );
        let ex = store.add_exhibition(ExhibitionKind::Permanent, "Room", "");
        let ids: Vec<_> = (0..count)
            .map(|i| store.add_exhibit_item(&ex, format!("item {i}"), "", "", ""))
            .collect();

        let orders: Vec<i64> = ids
            .iter()
            .map(|id| store.state().exhibit_item(id).unwrap().order)
            .collect();
        let expected: Vec<i64> = (0..count as i64).collect();
        prop_assert_eq!(orders, expected);
    }

    #[test]
    fn batch_photo_orders_are_contiguous_per_parent(
        parents in proptest::collection::vec(0usize..4, 1..24),
    ) {
        let mut store = MuseumStore::with_ids(
            MuseumState::default(),
            Box::new(SequentialIds::new("id")),
        );
        let ex = store.add_exhibition(ExhibitionKind::Permanent, "Room", "");
        let items: Vec<_> = (0..4)
            .map(|i| store.add_exhibit_item(&ex, format!("item {i}"), "", "", ""))
            .collect();

        let batch = parents
            .iter()
            .map(|&p| museum_store::NewPhoto {
                exhibit_item_id: items[p].clone(),
                image_src: String::new(),
                caption: String::new(),
            })
            .collect();
        store.add_photos(batch);

        // Within each parent, photos carry orders 0..n in submission order.
        for item in &items {
            let orders: Vec<i64> = store
                .state()
                .photos_of_item(item)
                .iter()
                .map(|p| p.order)
                .collect();
            let expected: Vec<i64> = (0..orders.len() as i64).collect();
            prop_assert_eq!(orders, expected);
        }
    }
}
