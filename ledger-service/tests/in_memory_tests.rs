use std::sync::Arc;

use chrono::{Duration, Utc};
use common::model::operation::{balance, Operation, OperationKind};
use ledger_service::{InMemoryLedgerRepository, LedgerRepository};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryLedgerRepository::new();

    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();
    assert_eq!(customer.cpf, 111);
    assert_eq!(customer.name, "Ana");
    assert!(customer.statement.is_empty());

    let found = repo.find_by_cpf(111).await.unwrap().unwrap();
    assert_eq!(found.id, customer.id);

    assert!(repo.exists_by_cpf(111).await.unwrap());
    assert!(!repo.exists_by_cpf(222).await.unwrap());
    assert!(repo.find_by_cpf(222).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_cpf_leaves_collection_unchanged() {
    let repo = InMemoryLedgerRepository::new();

    repo.create_customer(111, "Ana".to_string()).await.unwrap();
    let result = repo.create_customer(111, "Bia".to_string()).await;

    assert!(matches!(
        result,
        Err(common::Error::AlreadyRegistered(_))
    ));
    assert_eq!(repo.list_customers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_balance_is_a_fold_over_the_statement() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    assert_eq!(repo.balance(customer.id).await.unwrap(), dec!(0));

    repo.credit(customer.id, dec!(100), Some("salary".to_string()))
        .await
        .unwrap();
    repo.credit(customer.id, dec!(50.5), None).await.unwrap();
    repo.debit(customer.id, dec!(30)).await.unwrap();

    assert_eq!(repo.balance(customer.id).await.unwrap(), dec!(120.5));

    let statement = repo.statement(customer.id).await.unwrap();
    assert_eq!(statement.len(), 3);
    assert_eq!(statement[0].kind, OperationKind::Credit);
    assert_eq!(statement[0].description.as_deref(), Some("salary"));
    assert_eq!(statement[2].kind, OperationKind::Debit);
    assert!(statement[2].description.is_none());
}

#[tokio::test]
async fn test_overdraft_leaves_statement_unchanged() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    repo.credit(customer.id, dec!(100), None).await.unwrap();
    let result = repo.debit(customer.id, dec!(150)).await;

    assert!(matches!(
        result,
        Err(common::Error::InsufficientFunds(_))
    ));
    assert_eq!(repo.statement(customer.id).await.unwrap().len(), 1);
    assert_eq!(repo.balance(customer.id).await.unwrap(), dec!(100));
}

#[tokio::test]
async fn test_withdrawing_the_full_balance_is_allowed() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    repo.credit(customer.id, dec!(100), None).await.unwrap();
    repo.debit(customer.id, dec!(100)).await.unwrap();

    assert_eq!(repo.balance(customer.id).await.unwrap(), dec!(0));
}

#[tokio::test]
async fn test_update_keeps_identity_stable() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    let updated = repo
        .update_customer(customer.id, Some("Ana Maria".to_string()), Some(333))
        .await
        .unwrap();
    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.cpf, 333);

    assert!(repo.find_by_cpf(111).await.unwrap().is_none());
    assert!(repo.find_by_cpf(333).await.unwrap().is_some());
}

#[tokio::test]
async fn test_update_without_fields_is_rejected() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    let result = repo.update_customer(customer.id, None, None).await;

    assert!(matches!(
        result,
        Err(common::Error::NoChangesRequested(_))
    ));
    let unchanged = repo.find_by_cpf(111).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Ana");
}

#[tokio::test]
async fn test_delete_is_keyed_by_id_not_by_cpf() {
    let repo = InMemoryLedgerRepository::new();
    let first = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();
    repo.create_customer(222, "Bia".to_string()).await.unwrap();

    // A cpf update must not redirect the delete away from the record.
    repo.update_customer(first.id, None, Some(333)).await.unwrap();

    let remaining = repo.delete_customer(first.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].cpf, 222);

    let result = repo.delete_customer(first.id).await;
    assert!(matches!(
        result,
        Err(common::Error::CustomerNotFound(_))
    ));
}

#[tokio::test]
async fn test_day_filter_on_todays_operations() {
    let repo = InMemoryLedgerRepository::new();
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();

    repo.credit(customer.id, dec!(10), None).await.unwrap();
    repo.credit(customer.id, dec!(20), None).await.unwrap();

    let today = Utc::now().date_naive();
    let todays = repo.statement_on_day(customer.id, today).await.unwrap();
    assert_eq!(todays.len(), 2);
    assert_eq!(todays[0].amount, dec!(10));
    assert_eq!(todays[1].amount, dec!(20));

    let yesterday = today - Duration::days(1);
    let empty = repo.statement_on_day(customer.id, yesterday).await.unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_day_filter_partitions_mixed_days_in_order() {
    let today = Utc::now();
    let yesterday = today - Duration::days(1);

    let mut first = Operation::credit(dec!(1), None);
    first.created_at = yesterday;
    let second = Operation::credit(dec!(2), None);
    let mut third = Operation::debit(dec!(3));
    third.created_at = yesterday;
    let fourth = Operation::debit(dec!(4));

    let statement = vec![first, second, third, fourth];
    let day = yesterday.date_naive();

    let filtered: Vec<_> = statement
        .iter()
        .filter(|operation| operation.occurred_on(day))
        .collect();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].amount, dec!(1));
    assert_eq!(filtered[1].amount, dec!(3));

    // The fold still covers the whole statement regardless of day.
    assert_eq!(balance(&statement), dec!(-4));
}

#[tokio::test]
async fn test_concurrent_creates_admit_exactly_one() {
    let repo = Arc::new(InMemoryLedgerRepository::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create_customer(111, format!("Customer {}", i)).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.list_customers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_withdrawals_cannot_overdraw() {
    let repo = Arc::new(InMemoryLedgerRepository::new());
    let customer = repo
        .create_customer(111, "Ana".to_string())
        .await
        .unwrap();
    repo.credit(customer.id, dec!(100), None).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..2 {
        let repo = Arc::clone(&repo);
        let id = customer.id;
        handles.push(tokio::spawn(async move { repo.debit(id, dec!(80)).await }));
    }

    let mut succeeded = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(repo.balance(customer.id).await.unwrap(), dec!(20));
}
