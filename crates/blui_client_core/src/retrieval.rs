//! Grouped transaction retrieval with endpoint fallback.
//!
//! Tiers run strictly in order and stop at the first success:
//! 1. `transactions/grouped?month&year`
//! 2. `transactions/grouped?startDate&endDate` (only when month and year are both known)
//! 3. `transactions?month&year`, grouped locally by date
//!
//! Only the last failure reaches the caller; earlier ones are logged.

use crate::api::{ApiClient, GroupedFilter, TransactionFilter};
use crate::dates::month_bounds;
use crate::error::ApiError;
use crate::grouping::group_by_date;
use crate::models::{Transaction, TransactionGroup};
use chrono::NaiveDate;
use std::fmt;
use std::future::Future;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The two backend reads the retriever needs.
pub trait TransactionSource {
    fn grouped(
        &self,
        filter: &GroupedFilter,
    ) -> impl Future<Output = Result<Vec<TransactionGroup>, ApiError>> + Send;

    fn flat(
        &self,
        filter: &TransactionFilter,
    ) -> impl Future<Output = Result<Vec<Transaction>, ApiError>> + Send;
}

impl TransactionSource for ApiClient {
    async fn grouped(&self, filter: &GroupedFilter) -> Result<Vec<TransactionGroup>, ApiError> {
        self.grouped_transactions(filter).await
    }

    async fn flat(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
        self.transactions(filter).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    GroupedByMonth,
    GroupedByRange { start: NaiveDate, end: NaiveDate },
    FlatLocal,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::GroupedByMonth => f.write_str("grouped-by-month"),
            Tier::GroupedByRange { start, end } => write!(f, "grouped-by-range {}..{}", start, end),
            Tier::FlatLocal => f.write_str("flat+local-grouping"),
        }
    }
}

/// Tiers to try for a request, in order. The range tier needs both a valid
/// month and a year.
pub fn plan_tiers(month: Option<u32>, year: Option<i32>) -> Vec<Tier> {
    let mut tiers = vec![Tier::GroupedByMonth];
    if let (Some(m), Some(y)) = (month, year) {
        if let Some((start, end)) = month_bounds(m, y) {
            tiers.push(Tier::GroupedByRange { start, end });
        }
    }
    tiers.push(Tier::FlatLocal);
    tiers
}

/// Trigger side of a [`Cancellation`].
#[derive(Clone, Debug)]
pub struct CancelHandle {
    tx: std::sync::Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Cancellation signal observed by [`GroupedTransactionRetriever::fetch`].
#[derive(Clone, Debug)]
pub struct Cancellation {
    rx: watch::Receiver<bool>,
}

impl Cancellation {
    pub fn new() -> (CancelHandle, Cancellation) {
        let (tx, rx) = watch::channel(false);
        (
            CancelHandle {
                tx: std::sync::Arc::new(tx),
            },
            Cancellation { rx },
        )
    }

    /// A signal that never fires.
    pub fn never() -> Cancellation {
        Cancellation::new().1
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Never resolves if every handle was dropped first.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|c| *c).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Run `work`, dropping it (and any in-flight request) if cancelled first.
    pub async fn run<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ApiError::Cancelled),
            res = work => res,
        }
    }
}

pub struct GroupedTransactionRetriever<S> {
    source: S,
}

impl<S: TransactionSource> GroupedTransactionRetriever<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Groups for `month`/`year`, newest date first.
    pub async fn fetch(
        &self,
        month: Option<u32>,
        year: Option<i32>,
        cancel: &Cancellation,
    ) -> Result<Vec<TransactionGroup>, ApiError> {
        let mut last_err = None;
        for tier in plan_tiers(month, year) {
            if cancel.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            debug!(%tier, ?month, ?year, "grouped transactions: attempt");
            match cancel.run(self.run_tier(tier, month, year)).await {
                Ok(groups) => {
                    info!(%tier, groups = groups.len(), "grouped transactions: loaded");
                    return Ok(groups);
                }
                Err(ApiError::Cancelled) => {
                    info!(%tier, "grouped transactions: cancelled");
                    return Err(ApiError::Cancelled);
                }
                Err(e) => {
                    warn!(%tier, error = %e, "grouped transactions: tier failed");
                    last_err = Some(e);
                }
            }
        }
        // plan_tiers always yields at least two tiers, so a failure was recorded.
        Err(last_err.unwrap_or_else(|| ApiError::Config("no retrieval tier planned".to_string())))
    }

    async fn run_tier(
        &self,
        tier: Tier,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<TransactionGroup>, ApiError> {
        match tier {
            Tier::GroupedByMonth => self.source.grouped(&GroupedFilter::month(month, year)).await,
            Tier::GroupedByRange { start, end } => {
                self.source.grouped(&GroupedFilter::range(start, end)).await
            }
            Tier::FlatLocal => {
                let flat = self.source.flat(&TransactionFilter::month(month, year)).await?;
                Ok(group_by_date(flat))
            }
        }
    }
}

impl ApiClient {
    /// Retriever over a clone of this client (clones share the session and pool).
    pub fn grouped_retriever(&self) -> GroupedTransactionRetriever<ApiClient> {
        GroupedTransactionRetriever::new(self.clone())
    }
}
