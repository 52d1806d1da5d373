//! JSON request/response bodies exactly as the backend speaks them (camelCase),
//! plus conversions into the domain models.

use crate::ids::{CategoryId, TransactionId, UserId};
use crate::models::{
    Category, CategorySummary, MonthlySummary, Transaction, TransactionGroup, TransactionType,
    User,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Auth / profile ---

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<UserResponse> for User {
    fn from(u: UserResponse) -> Self {
        User {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            date_of_birth: u.date_of_birth,
            photo_url: u.photo_url,
        }
    }
}

// --- Categories ---

#[derive(Clone, Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub user_id: UserId,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
}

impl From<CategoryResponse> for Category {
    fn from(c: CategoryResponse) -> Self {
        Category {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            icon: c.icon,
            color: c.color,
        }
    }
}

// --- Transactions ---

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub name: String,
    pub category_id: CategoryId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub name: String,
    pub category_id: CategoryId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
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
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryResponse>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionsListResponse {
    pub transactions: Vec<TransactionResponse>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsByDateResponse {
    #[serde(with = "crate::dates")]
    pub date: NaiveDate,
    pub transactions: Vec<TransactionResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupedTransactionsResponse {
    pub groups: Vec<TransactionsByDateResponse>,
}

impl From<TransactionResponse> for Transaction {
    fn from(t: TransactionResponse) -> Self {
        Transaction {
            id: t.id,
            user_id: t.user_id,
            kind: t.kind,
            name: t.name,
            category_id: t.category_id,
            amount: t.amount,
            date: t.date,
            note: t.note,
            category: t.category.map(Category::from),
        }
    }
}

/// Server-computed totals are kept as sent; they are not recomputed here.
impl From<TransactionsByDateResponse> for TransactionGroup {
    fn from(g: TransactionsByDateResponse) -> Self {
        TransactionGroup {
            date: g.date,
            transactions: g.transactions.into_iter().map(Transaction::from).collect(),
            total_income: g.total_income,
            total_expense: g.total_expense,
        }
    }
}

// --- Summary ---

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryResponse {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_icon: String,
    pub category_color: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub percentage: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummaryResponse {
    pub user_id: UserId,
    pub month: u32,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(default)]
    pub income_by_category: Option<Vec<CategorySummaryResponse>>,
    #[serde(default)]
    pub expense_by_category: Option<Vec<CategorySummaryResponse>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonthlySummaryListResponse {
    pub summaries: Vec<BalanceSummaryResponse>,
}

impl From<CategorySummaryResponse> for CategorySummary {
    fn from(c: CategorySummaryResponse) -> Self {
        CategorySummary {
            category_id: c.category_id,
            category_name: c.category_name,
            category_icon: c.category_icon,
            category_color: c.category_color,
            total: c.total,
            percentage: c.percentage,
        }
    }
}

impl From<BalanceSummaryResponse> for MonthlySummary {
    fn from(s: BalanceSummaryResponse) -> Self {
        let convert = |v: Option<Vec<CategorySummaryResponse>>| {
            v.map(|list| list.into_iter().map(CategorySummary::from).collect())
        };
        MonthlySummary {
            user_id: s.user_id,
            month: s.month,
            year: s.year,
            balance: s.balance,
            total_income: s.total_income,
            total_expense: s.total_expense,
            income_by_category: convert(s.income_by_category),
            expense_by_category: convert(s.expense_by_category),
        }
    }
}
