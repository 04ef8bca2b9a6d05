use marketplace::{
    Config, MarketError, Marketplace, Notification, RecordingNotifier, Repository, SearchFilters,
    SortOption, StorageKind, TracingNotifier,
};
use rust_decimal::Decimal;
use shared::{ErrorCode, ListingDraft, TransactionStatus};
use std::sync::Arc;

fn config_for(kind: StorageKind, dir: &std::path::Path) -> Config {
    Config {
        storage: kind,
        data_dir: dir.to_string_lossy().into_owned(),
        ..Config::for_tests()
    }
}

fn lamp_draft(quantity: u32) -> ListingDraft {
    ListingDraft {
        title: "Brass Desk Lamp".to_string(),
        price: Decimal::new(4550, 2),
        category: "home-garden".to_string(),
        condition: Some("like-new".to_string()),
        description: "Warm light, adjustable arm, barely used.".to_string(),
        quantity: Some(quantity),
        shipping_option: None,
    }
}

async fn run_session(kind: StorageKind, dir: &std::path::Path) -> (String, String) {
    let market = Marketplace::open(config_for(kind, dir), Arc::new(TracingNotifier))
        .expect("Failed to open marketplace");

    // 1. Publish and buy
    let lamp = market.publish_listing(lamp_draft(3)).await.expect("Publish failed");
    let order = market.buy(&lamp.id, 2).expect("Purchase failed");

    // 2. Move the order forward once
    market.advance_order(&order.id).expect("Advance failed");

    (lamp.id, order.id)
}

#[tokio::test]
async fn test_json_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let (lamp_id, order_id) = run_session(StorageKind::Json, dir.path()).await;

    assert!(dir.path().join("listings.json").exists());
    assert!(dir.path().join("transactions.json").exists());

    let market = Marketplace::open(
        config_for(StorageKind::Json, dir.path()),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();

    assert_eq!(market.listings().len(), 11);
    assert_eq!(market.listings().get_listing(&lamp_id).unwrap().quantity, Some(1));

    let order = market.transactions().get_transaction(&order_id).unwrap();
    assert_eq!(order.status, TransactionStatus::Processing);
    assert_eq!(order.previous_status, Some(TransactionStatus::Pending));
    assert_eq!(order.total, Decimal::new(9100, 2));

    // 3. Undo survives the restart too
    assert_eq!(market.undo_order(&order_id).unwrap(), TransactionStatus::Pending);
}

#[tokio::test]
async fn test_redb_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let (lamp_id, order_id) = run_session(StorageKind::Redb, dir.path()).await;

    assert!(dir.path().join("marketplace.redb").exists());

    let market = Marketplace::open(
        config_for(StorageKind::Redb, dir.path()),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();

    assert_eq!(market.listings().get_listing(&lamp_id).unwrap().quantity, Some(1));
    assert_eq!(market.orders(None)[0].id, order_id);
    assert_eq!(market.orders(None).len(), 11);
}

#[test]
fn test_seeds_are_persisted_on_first_open() {
    let dir = tempfile::tempdir().unwrap();
    let first = Marketplace::open(
        config_for(StorageKind::Json, dir.path()),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();
    let seeded_stock: Vec<_> = first
        .listings()
        .listings()
        .into_iter()
        .map(|l| (l.id, l.quantity))
        .collect();
    drop(first);

    // Random seed stock must not be re-rolled on the second open
    let second = Marketplace::open(
        config_for(StorageKind::Json, dir.path()),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();
    let reloaded_stock: Vec<_> = second
        .listings()
        .listings()
        .into_iter()
        .map(|l| (l.id, l.quantity))
        .collect();

    assert_eq!(seeded_stock, reloaded_stock);
}

#[test]
fn test_corrupt_slot_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("transactions.json"), b"{not json").unwrap();

    let market = Marketplace::open(
        config_for(StorageKind::Json, dir.path()),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();

    assert_eq!(market.orders(None).len(), 10);
    assert_eq!(market.orders(None)[0].id, "t1");
}

#[tokio::test]
async fn test_sell_buy_cancel_undo_flow() {
    let notifier = Arc::new(RecordingNotifier::new());
    let market =
        Marketplace::with_repository(Config::for_tests(), Repository::in_memory(), notifier.clone());

    let lamp = market.publish_listing(lamp_draft(2)).await.unwrap();
    let found = market.browse("brass", &SearchFilters::default(), SortOption::Newest, 1);
    assert_eq!(found.items[0].id, lamp.id);

    let order = market.buy(&lamp.id, 2).unwrap();
    let err = market.buy(&lamp.id, 1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InsufficientStock);

    market.cancel_order(&order.id).unwrap();
    assert_eq!(market.undo_order(&order.id).unwrap(), TransactionStatus::Pending);
    assert!(matches!(
        market.undo_order(&order.id),
        Err(MarketError::NothingToUndo(_))
    ));

    let titles: Vec<_> = notifier.drain().iter().map(Notification::title).collect();
    assert_eq!(
        titles,
        vec![
            "Listing Created Successfully!",
            "Purchase Successful",
            "Insufficient Stock",
            "Order Cancelled",
            "Cancellation Undone",
        ]
    );
}
