mod common;

use std::sync::Arc;

use lendsync::domains::entities::LoanUpdate;
use lendsync::error::LendSyncError;
use lendsync::services::dispatcher::{BorrowerApply, Dispatcher, LoanApply};
use lendsync::storage::MemoryStore;

use common::{sample_borrower, FailingStore};

fn dispatcher_with(store: Arc<MemoryStore>) -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    assert!(dispatcher.register(Arc::new(LoanApply::new(store.clone()))));
    assert!(dispatcher.register(Arc::new(BorrowerApply::new(store))));
    dispatcher
}

#[tokio::test]
async fn loan_messages_upsert_and_are_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    let raw = br#"loan:{"id":7,"status":"approved"}"#;
    dispatcher.dispatch(raw).await.unwrap();
    dispatcher.dispatch(raw).await.unwrap();

    assert_eq!(store.loan_count().await, 1);
    assert_eq!(
        store.loan(7).await,
        Some(LoanUpdate {
            id: 7,
            status: "approved".to_string(),
            disburse_date: None,
        })
    );
}

#[tokio::test]
async fn borrower_messages_upsert_the_full_entity() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    let borrower = sample_borrower();
    let raw = format!("borrower:{}", serde_json::to_string(&borrower).unwrap());
    dispatcher.dispatch(raw.as_bytes()).await.unwrap();

    assert_eq!(store.borrower(borrower.id).await, Some(borrower));
}

#[tokio::test]
async fn payloads_may_contain_colons() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    let raw = br#"loan:{"id":7,"status":"approved","disburse_date":"2026-09-01T00:00:00"}"#;
    dispatcher.dispatch(raw).await.unwrap();
    let loan = store.loan(7).await.unwrap();
    assert_eq!(loan.disburse_date.as_deref(), Some("2026-09-01T00:00:00"));
}

#[tokio::test]
async fn unknown_kinds_are_ignored() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    dispatcher.dispatch(b"unknown_kind:{}").await.unwrap();
    assert_eq!(store.loan_count().await, 0);
    assert_eq!(store.borrower_count().await, 0);
}

#[tokio::test]
async fn messages_without_a_prefix_are_dropped() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    dispatcher.dispatch(b"malformed-no-colon").await.unwrap();
    assert_eq!(store.loan_count().await, 0);
}

#[tokio::test]
async fn decode_failures_carry_kind_and_payload_context() {
    let store = Arc::new(MemoryStore::new());
    let dispatcher = dispatcher_with(store.clone());

    let err = dispatcher.dispatch(b"loan:not-json").await.unwrap_err();
    let text = format!("{err}");
    assert!(text.contains("loan"));
    assert!(text.contains("not-json"));
    assert_eq!(store.loan_count().await, 0);
}

#[tokio::test]
async fn storage_failures_surface_as_errors() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(LoanApply::new(Arc::new(FailingStore))));

    let err = dispatcher
        .dispatch(br#"loan:{"id":7,"status":"approved"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, LendSyncError::Runtime(_)));
}

#[tokio::test]
async fn duplicate_registration_is_refused() {
    let store = Arc::new(MemoryStore::new());
    let mut dispatcher = Dispatcher::new();
    assert!(dispatcher.register(Arc::new(LoanApply::new(store.clone()))));
    assert!(!dispatcher.register(Arc::new(LoanApply::new(store))));
}
