use super::*;


#[test]
fn test_strict_rejects_skipping_ahead() {
    let market = create_test_market();
    let desk = add_physical(&market, 100, 1);
    let order = buy(&market, &desk.id, 1);

    let err = market
        .store
        .update_transaction_status(&order.id, TransactionStatus::Shipped)
        .unwrap_err();

    assert_eq!(
        err,
        TransactionError::IllegalTransition {
            from: TransactionStatus::Pending,
            to: TransactionStatus::Shipped
        }
    );
    assert_eq!(err.code(), shared::ErrorCode::InvalidStatusTransition);

    let stored = market.store.get_transaction(&order.id).unwrap();
    assert_eq!(stored.status, TransactionStatus::Pending);
    assert_eq!(stored.previous_status, None);
    assert!(market.notifier.is_empty());
}


#[test]
fn test_strict_rejects_cancel_after_processing() {
    let market = create_test_market();
    let desk = add_physical(&market, 100, 1);
    let order = buy(&market, &desk.id, 1);
    market.store.advance_status(&order.id).unwrap();

    assert!(matches!(
        market.store.cancel_transaction(&order.id),
        Err(TransactionError::IllegalTransition {
            from: TransactionStatus::Processing,
            to: TransactionStatus::Cancelled
        })
    ));
}


#[test]
fn test_strict_terminal_states_are_final() {
    let market = create_test_market();
    let desk = add_physical(&market, 100, 1);
    let order = buy(&market, &desk.id, 1);
    market.store.cancel_transaction(&order.id).unwrap();

    for target in TransactionStatus::ALL {
        assert!(
            market
                .store
                .update_transaction_status(&order.id, target)
                .is_err(),
            "cancelled -> {target} should be rejected"
        );
    }
}


#[test]
fn test_permissive_accepts_any_status() {
    let market = create_test_market_with_policy(StatusPolicy::Permissive);
    let desk = add_physical(&market, 100, 1);
    let order = buy(&market, &desk.id, 1);

    let prior = market
        .store
        .update_transaction_status(&order.id, TransactionStatus::Shipped)
        .unwrap();
    assert_eq!(prior, TransactionStatus::Pending);

    assert_eq!(
        market.store.undo_status_update(&order.id),
        Some(TransactionStatus::Pending)
    );
    let stored = market.store.get_transaction(&order.id).unwrap();
    assert_eq!(stored.status, TransactionStatus::Pending);
    assert_eq!(stored.previous_status, None);

    // leaving a terminal state is allowed too
    market
        .store
        .update_transaction_status(&order.id, TransactionStatus::Delivered)
        .unwrap();
    assert_eq!(
        market
            .store
            .update_transaction_status(&order.id, TransactionStatus::Pending),
        Ok(TransactionStatus::Delivered)
    );
}


#[test]
fn test_permissive_still_stops_advance_at_terminal() {
    let market = create_test_market_with_policy(StatusPolicy::Permissive);
    let desk = add_physical(&market, 100, 1);
    let order = buy(&market, &desk.id, 1);
    market.store.cancel_transaction(&order.id).unwrap();

    assert_eq!(
        market.store.advance_status(&order.id),
        Err(TransactionError::TerminalStatus(TransactionStatus::Cancelled))
    );
}


#[test]
fn test_policy_parse() {
    assert_eq!("Strict".parse::<StatusPolicy>(), Ok(StatusPolicy::Strict));
    assert_eq!("permissive".parse::<StatusPolicy>(), Ok(StatusPolicy::Permissive));
    assert!("loose".parse::<StatusPolicy>().is_err());
    assert_eq!(StatusPolicy::default(), StatusPolicy::Strict);
}
