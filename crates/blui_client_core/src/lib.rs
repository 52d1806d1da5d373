//! Client core for the Blui personal finance backend: REST client, wire/domain
//! models and grouped transaction retrieval with endpoint fallback.

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod grouping;
pub mod ids;
pub mod logging;
pub mod models;
pub mod retrieval;
pub mod session;
pub mod wire;

pub use api::{
    ApiClient, GroupedFilter, NewTransaction, ProfileUpdate, SummaryRange, TransactionFilter,
    TransactionUpdate,
};
pub use config::ClientConfig;
pub use dates::MonthYear;
pub use error::ApiError;
pub use grouping::{filter_by_type, group_by_date, TypeFilter};
pub use ids::{CategoryId, TransactionId, UserId};
pub use models::{
    Category, CategorySummary, MonthlySummary, Transaction, TransactionGroup, TransactionType, User,
};
pub use retrieval::{
    plan_tiers, CancelHandle, Cancellation, GroupedTransactionRetriever, Tier, TransactionSource,
};
pub use session::Session;
