//! Concurrency tests for the in-memory city store.

use std::collections::HashSet;

use store::{CityId, CityStore, InMemoryCityStore, PointOfInterestFields, StoreError};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_share_an_id() {
    let store = InMemoryCityStore::seeded();
    let initial = store.point_of_interest_count().await;

    let mut handles = Vec::new();
    for i in 0..64 {
        let store = store.clone();
        let city_id = CityId::new(i % 3 + 1);
        handles.push(tokio::spawn(async move {
            store
                .add_point_of_interest(
                    city_id,
                    PointOfInterestFields::new(format!("Sight {i}"), "Worth a visit"),
                )
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id allocated");
    }

    assert_eq!(ids.len(), 64);
    assert_eq!(store.point_of_interest_count().await, initial + 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_racing_delete_never_resurrects() {
    let store = InMemoryCityStore::seeded();
    let city_id = CityId::new(1);
    let poi_id = store
        .add_point_of_interest(city_id, PointOfInterestFields::new("Temp", "Short lived"))
        .await
        .unwrap()
        .id;

    let remover = {
        let store = store.clone();
        tokio::spawn(async move { store.remove_point_of_interest(city_id, poi_id).await })
    };
    let updater = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update_point_of_interest(
                    city_id,
                    poi_id,
                    PointOfInterestFields::new("Renamed", "Still short lived"),
                )
                .await
        })
    };

    assert!(remover.await.unwrap().is_ok());
    match updater.await.unwrap() {
        Ok(_) | Err(StoreError::PointOfInterestNotFound { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }

    let after = store.get_point_of_interest(city_id, poi_id).await;
    assert!(matches!(after, Err(StoreError::PointOfInterestNotFound { .. })));
}
