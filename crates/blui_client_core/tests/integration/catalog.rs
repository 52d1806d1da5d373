//! Category and transaction CRUD.

use crate::common::fixtures;
use crate::common::stub_backend::{Rule, StubBackend};
use axum::http::Method;
use blui_client_core::{
    ApiError, CategoryId, NewTransaction, TransactionFilter, TransactionId, TransactionType,
    TransactionUpdate,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

#[tokio::test]
async fn categories_are_listed_created_and_deleted() {
    let stub = StubBackend::start(vec![
        Rule::get("/api/categories").json(json!({
            "categories": [
                {"id": "cat-1", "userId": "user-1", "name": "Makanan", "icon": "restaurant", "color": "RED"},
                {"id": "cat-2", "userId": "user-1", "name": "Transport", "icon": "car", "color": "BLUE"}
            ]
        })),
        Rule::post("/api/categories").json(json!(
            {"id": "cat-3", "userId": "user-1", "name": "Bensin", "icon": "gas", "color": "ORANGE"}
        )),
        Rule::new(Method::DELETE, "/api/categories/cat-2").raw(204, ""),
    ])
    .await;
    let client = stub.client();

    let categories = client.categories().await.expect("categories");
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Makanan", "Transport"]);

    let created = client
        .create_category("Bensin", "gas", "ORANGE")
        .await
        .expect("create");
    assert_eq!(created.id.as_str(), "cat-3");
    assert_eq!(
        stub.requests()[1].json_body(),
        json!({ "name": "Bensin", "icon": "gas", "color": "ORANGE" })
    );

    client
        .delete_category(&CategoryId::parse("cat-2").unwrap())
        .await
        .expect("delete");
    assert_eq!(stub.requests()[2].method, Method::DELETE);
}

#[tokio::test]
async fn deleting_a_missing_category_surfaces_the_status() {
    let stub = StubBackend::start(Vec::new()).await;
    let err = stub
        .client()
        .delete_category(&CategoryId::parse("nope").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn transaction_create_update_get_delete() {
    let stub = StubBackend::start(vec![
        Rule::post("/api/transactions").json(fixtures::transaction("t1", "2024-02-29", "expense", 25000.5)),
        Rule::new(Method::PUT, "/api/transactions/t1")
            .json(fixtures::transaction("t1", "2024-03-01", "expense", 26000.0)),
        Rule::get("/api/transactions/t1").json(fixtures::transaction("t1", "2024-03-01", "expense", 26000.0)),
        Rule::new(Method::DELETE, "/api/transactions/t1").raw(200, r#"{"message":"deleted"}"#),
    ])
    .await;
    let client = stub.client();
    let id = TransactionId::parse("t1").unwrap();

    let created = client
        .create_transaction(NewTransaction {
            kind: TransactionType::Expense,
            name: "Bensin".to_string(),
            category_id: CategoryId::parse("cat-1").unwrap(),
            amount: Decimal::from_str("25000.5").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            note: Some("full tank".to_string()),
        })
        .await
        .expect("create");
    assert_eq!(created.id, id);
    assert_eq!(created.kind, TransactionType::Expense);
    assert_eq!(
        stub.requests()[0].json_body(),
        json!({
            "type": "expense",
            "name": "Bensin",
            "categoryId": "cat-1",
            "amount": 25000.5,
            "date": "2024-02-29",
            "note": "full tank"
        })
    );

    let updated = client
        .update_transaction(
            &id,
            TransactionUpdate {
                name: "Bensin".to_string(),
                category_id: CategoryId::parse("cat-1").unwrap(),
                amount: Decimal::from(26_000),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                note: None,
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.amount, Decimal::from(26_000));
    let update_body = stub.requests()[1].json_body();
    assert_eq!(update_body["date"], "2024-03-01");
    assert!(update_body.get("type").is_none());

    let fetched = client.transaction(&id).await.expect("get");
    assert_eq!(fetched, updated);

    client.delete_transaction(&id).await.expect("delete");
    assert_eq!(stub.requests().len(), 4);
}

#[tokio::test]
async fn flat_list_forwards_every_filter() {
    let stub = StubBackend::start(vec![Rule::get("/api/transactions").json(fixtures::flat_scenario())]).await;

    let filter = TransactionFilter {
        date: NaiveDate::from_ymd_opt(2025, 1, 5),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        ..TransactionFilter::month(Some(1), Some(2025))
    };
    let txs = stub.client().transactions(&filter).await.expect("list");
    assert_eq!(txs.len(), 3);

    let query = &stub.requests()[0].query;
    assert_eq!(query.len(), 5);
    assert_eq!(query["date"], "2025-01-05");
    assert_eq!(query["startDate"], "2025-01-01");
    assert_eq!(query["endDate"], "2025-01-31");
}

#[tokio::test]
async fn invalid_transactions_never_reach_the_backend() {
    let stub = StubBackend::start(vec![
        Rule::post("/api/transactions").json(fixtures::transaction("t1", "2024-02-29", "expense", 5.0)),
        Rule::new(Method::PUT, "/api/transactions/t1")
            .json(fixtures::transaction("t1", "2024-02-29", "expense", 5.0)),
    ])
    .await;
    let client = stub.client();

    let err = client
        .create_transaction(NewTransaction {
            kind: TransactionType::parse("transfer"),
            name: "  ".to_string(),
            category_id: CategoryId::parse("c1").unwrap(),
            amount: Decimal::from(-5),
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            note: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)), "got {:?}", err);

    let err = client
        .update_transaction(
            &TransactionId::parse("t1").unwrap(),
            TransactionUpdate {
                name: "Bensin".to_string(),
                category_id: CategoryId::parse("c1").unwrap(),
                amount: Decimal::ZERO,
                date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                note: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)), "got {:?}", err);

    assert!(stub.requests().is_empty());
}
