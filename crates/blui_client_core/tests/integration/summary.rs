use crate::common::stub_backend::{Rule, StubBackend};
use blui_client_core::SummaryRange;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;

fn summary_json(month: u32) -> serde_json::Value {
    json!({
        "userId": "user-1",
        "month": month,
        "year": 2025,
        "balance": 65000,
        "totalIncome": 100000,
        "totalExpense": 35000,
        "incomeByCategory": null,
        "expenseByCategory": [
            {"categoryId": "cat-1", "categoryName": "Makanan", "categoryIcon": "restaurant",
             "categoryColor": "RED", "total": 30000, "percentage": 85.71},
            {"categoryId": "cat-2", "categoryName": "Transport", "categoryIcon": "car",
             "categoryColor": "BLUE", "total": 5000, "percentage": 14.29}
        ]
    })
}

#[tokio::test]
async fn monthly_summary_maps_category_breakdown() {
    let stub = StubBackend::start(vec![Rule::get("/api/summary").json(summary_json(1))]).await;

    let summary = stub.client().summary(1, 2025).await.expect("summary");
    assert_eq!(summary.balance, Decimal::from(65_000));
    assert_eq!(summary.income_by_category, None);
    let expense = summary.expense_by_category.expect("expense breakdown");
    assert_eq!(expense.len(), 2);
    assert_eq!(expense[0].category_name, "Makanan");
    assert!((expense[0].percentage - 85.71).abs() < 1e-9);

    let query = &stub.requests()[0].query;
    assert_eq!(query["month"], "1");
    assert_eq!(query["year"], "2025");
}

#[tokio::test]
async fn history_sends_only_given_bounds() {
    let stub = StubBackend::start(vec![Rule::get("/api/summary/history")
        .json(json!({ "summaries": [summary_json(1), summary_json(2)] }))])
    .await;

    let range = SummaryRange {
        start_month: Some(1),
        start_year: Some(2025),
        ..SummaryRange::default()
    };
    let history = stub.client().summary_history(&range).await.expect("history");
    let months: Vec<u32> = history.iter().map(|s| s.month).collect();
    assert_eq!(months, vec![1, 2]);

    let query = &stub.requests()[0].query;
    assert_eq!(query.len(), 2);
    assert_eq!(query["startMonth"], "1");
    assert!(!query.contains_key("endMonth"));
}
