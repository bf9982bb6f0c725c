use chrono::{TimeZone, Utc};
use gatehouse_core::{
    seed_roster, AccessType, LogNotifier, MemoryResidentStore, Resident, RosterViewModel,
    SortDirection, SortField,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

async fn seeded_view() -> RosterViewModel<MemoryResidentStore> {
    view_with(seed_roster()).await
}

async fn view_with(seed: Vec<Resident>) -> RosterViewModel<MemoryResidentStore> {
    let store = MemoryResidentStore::with_latency(seed, Duration::ZERO);
    let mut view = RosterViewModel::new(store, Arc::new(LogNotifier));
    view.reload().await;
    view
}

#[tokio::test]
async fn default_order_is_most_recent_visit_first() {
    let view = seeded_view().await;
    let rows = view.rows();

    assert_eq!(rows[0].name, "Robert Wilson"); // 2025-01-15 18:00
    assert_eq!(rows[1].name, "Michael Chukwudi"); // 2025-01-15 16:45
    assert_eq!(rows[7].name, "Deborah Smith"); // 2025-01-12 15:30

    for pair in rows.windows(2) {
        assert!(pair[0].last_visit >= pair[1].last_visit);
    }
}

#[tokio::test]
async fn toggling_the_active_field_reverses_the_order_exactly() {
    let mut view = seeded_view().await;
    let descending = view.rows();

    view.toggle_sort(SortField::LastVisit);
    assert_eq!(view.sort_state().direction, SortDirection::Ascending);

    let ascending = view.rows();
    let reversed: Vec<_> = descending.into_iter().rev().collect();
    assert_eq!(ascending, reversed);
}

#[tokio::test]
async fn selecting_a_different_field_resets_to_ascending() {
    let mut view = seeded_view().await;

    view.toggle_sort(SortField::Name);
    assert_eq!(view.sort_state().field, SortField::Name);
    assert_eq!(view.sort_state().direction, SortDirection::Ascending);

    let rows = view.rows();
    assert_eq!(rows[0].name, "Abubakar Musa");
    assert_eq!(rows[7].name, "Sarah Johnson");
}

#[tokio::test]
async fn house_number_sort_orders_lexicographically() {
    let mut view = seeded_view().await;
    view.toggle_sort(SortField::HouseNumber);

    let houses: Vec<String> = view.rows().into_iter().map(|r| r.house_number).collect();
    let mut expected = houses.clone();
    expected.sort();
    assert_eq!(houses, expected);
    assert_eq!(houses[0], "A-101");
}

#[tokio::test]
async fn equal_keys_keep_snapshot_order() {
    let shared_visit = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
    let tied = |name: &str| Resident {
        id: Uuid::new_v4(),
        name: name.to_string(),
        house_number: "T-1".to_string(),
        access_type: AccessType::Resident,
        last_visit: shared_visit,
    };
    let seed = vec![tied("First In"), tied("Second In"), tied("Third In")];
    let snapshot_order: Vec<_> = seed.iter().map(|r| r.id).collect();

    let mut view = view_with(seed).await;

    let descending: Vec<_> = view.rows().into_iter().map(|r| r.id).collect();
    assert_eq!(descending, snapshot_order);

    view.toggle_sort(SortField::LastVisit);
    let ascending: Vec<_> = view.rows().into_iter().map(|r| r.id).collect();
    assert_eq!(ascending, snapshot_order);
}
