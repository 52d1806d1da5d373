//! Domain models handed to the UI layer.
//! Wire DTOs live in `wire.rs` and convert into these.

use crate::ids::{CategoryId, TransactionId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Transaction kind. The backend sends lowercase strings but we compare
/// case-insensitively; anything else is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
    Other(String),
}

impl TransactionType {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("income") {
            TransactionType::Income
        } else if s.eq_ignore_ascii_case("expense") {
            TransactionType::Expense
        } else {
            TransactionType::Other(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Other(s) => s,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, TransactionType::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, TransactionType::Expense)
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        Ok(TransactionType::parse(&s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub user_id: UserId,
    pub name: String,
    /// Opaque icon token, mapped to a glyph by the UI.
    pub icon: String,
    /// Opaque color token.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub name: String,
    pub category_id: CategoryId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    pub note: Option<String>,
    /// Denormalized category snapshot, when the backend embeds one.
    pub category: Option<Category>,
}

/// Transactions sharing one calendar date, with that date's totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionGroup {
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
}

impl TransactionGroup {
    /// Build a group and compute its totals from `transactions`.
    pub fn new(date: NaiveDate, transactions: Vec<Transaction>) -> Self {
        let total_income = transactions
            .iter()
            .filter(|t| t.kind.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expense = transactions
            .iter()
            .filter(|t| t.kind.is_expense())
            .map(|t| t.amount)
            .sum();
        Self {
            date,
            transactions,
            total_income,
            total_expense,
        }
    }

    pub fn net(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
}

/// Per-category slice of a monthly summary (pie chart input).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_icon: String,
    pub category_color: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub user_id: UserId,
    pub month: u32,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    pub income_by_category: Option<Vec<CategorySummary>>,
    pub expense_by_category: Option<Vec<CategorySummary>>,
}
