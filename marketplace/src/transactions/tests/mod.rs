use super::*;
use crate::notify::RecordingNotifier;
use rust_decimal::Decimal;
use shared::{Listing, ListingDraft, NewListing};

mod test_policy;

struct TestMarket {
    store: TransactionStore,
    listings: Arc<ListingStore>,
    notifier: Arc<RecordingNotifier>,
    repository: Repository,
}

fn create_test_market() -> TestMarket {
    create_test_market_with_policy(StatusPolicy::Strict)
}

fn create_test_market_with_policy(policy: StatusPolicy) -> TestMarket {
    create_test_market_with(policy, Vec::new())
}

fn create_test_market_with_catalog(catalog: Vec<Listing>) -> TestMarket {
    create_test_market_with(StatusPolicy::Strict, catalog)
}

fn create_test_market_with(policy: StatusPolicy, catalog: Vec<Listing>) -> TestMarket {
    let repository = Repository::in_memory();
    let listings = Arc::new(ListingStore::with_listings(
        repository.clone(),
        "Your Store",
        catalog,
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let store = TransactionStore::with_transactions(
        repository.clone(),
        listings.clone(),
        notifier.clone(),
        TransactionSettings {
            buyer_name: "You".to_string(),
            policy,
        },
        Vec::new(),
    );
    TestMarket {
        store,
        listings,
        notifier,
        repository,
    }
}

// ========================================================================
// Helper: catalog entries
// ========================================================================

fn add_physical(market: &TestMarket, price: i64, stock: u32) -> Listing {
    let new_listing = NewListing::try_from(ListingDraft {
        title: "Standing Desk".to_string(),
        price: Decimal::from(price),
        category: "home-garden".to_string(),
        condition: Some("like-new".to_string()),
        description: "Electric standing desk, oak top.".to_string(),
        quantity: Some(stock),
        shipping_option: Some("pickup".to_string()),
    })
    .unwrap();
    market.listings.add_listing(new_listing)
}

fn add_service(market: &TestMarket, price: i64) -> Listing {
    let new_listing = NewListing::try_from(ListingDraft {
        title: "Logo Design".to_string(),
        price: Decimal::from(price),
        category: "services".to_string(),
        condition: None,
        description: "Three logo concepts and two revisions.".to_string(),
        quantity: None,
        shipping_option: None,
    })
    .unwrap();
    market.listings.add_listing(new_listing)
}

/// Place an order and drop the notifications it produced
fn buy(market: &TestMarket, product_id: &str, quantity: u32) -> Transaction {
    let transaction = market.store.add_transaction(product_id, quantity).unwrap();
    market.notifier.drain();
    transaction
}
