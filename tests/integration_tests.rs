// File: tests/integration_tests.rs

mod test_helpers;

use common::model::operation::OperationKind;
use common::Error;
use rust_decimal_macros::dec;
use test_helpers::{deposit_payload, new_service, register, withdraw_payload};

#[tokio::test]
async fn test_deposit_withdraw_scenario() {
    let service = new_service();

    register(&service, 111, "Ana").await;

    service.deposit(111, &deposit_payload(100.0)).await.unwrap();
    assert_eq!(service.balance(111).await.unwrap(), dec!(100));

    let overdraft = service.withdraw(111, &withdraw_payload(150.0)).await;
    assert!(matches!(overdraft, Err(Error::InsufficientFunds(_))));
    assert_eq!(service.balance(111).await.unwrap(), dec!(100));

    service.withdraw(111, &withdraw_payload(40.0)).await.unwrap();
    assert_eq!(service.balance(111).await.unwrap(), dec!(60));

    let statement = service.statement(111).await.unwrap();
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[0].kind, OperationKind::Credit);
    assert_eq!(statement[1].kind, OperationKind::Debit);
}

#[tokio::test]
async fn test_listing_scenario() {
    let service = new_service();

    let empty = service.list_customers().await;
    assert!(matches!(empty, Err(Error::EmptyLedger(_))));

    register(&service, 111, "Ana").await;

    let listed = service.list_customers().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].cpf, 111);
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let service = new_service();

    let ana = register(&service, 111, "Ana").await;
    register(&service, 222, "Bia").await;

    let fetched = service.get_customer(111).await.unwrap();
    assert_eq!(fetched.id, ana.id);

    let updated = service
        .update_customer(111, &serde_json::from_value(serde_json::json!({"name": "Ana Maria"})).unwrap())
        .await
        .unwrap();
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.id, ana.id);

    let remaining = service.delete_customer(111).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].cpf, 222);

    assert!(matches!(
        service.get_customer(111).await,
        Err(Error::CustomerNotFound(_))
    ));
}
