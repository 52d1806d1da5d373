//! Local date grouping used when the backend cannot group for us,
//! plus the list screen's type filter.

use crate::models::{Transaction, TransactionGroup, TransactionType};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Partition transactions by date, newest date first.
///
/// Within a group the input order is kept. Every emitted group holds at
/// least one transaction, and its totals are computed from exactly the
/// transactions it holds.
pub fn group_by_date<I>(transactions: I) -> Vec<TransactionGroup>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for tx in transactions {
        by_date.entry(tx.date).or_default().push(tx);
    }
    by_date
        .into_iter()
        .rev()
        .map(|(date, txs)| TransactionGroup::new(date, txs))
        .collect()
}

/// "All" / "Income" / "Expense" selector on the transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(TypeFilter::All),
            "income" => Some(TypeFilter::Income),
            "expense" => Some(TypeFilter::Expense),
            _ => None,
        }
    }

    pub fn matches(&self, kind: &TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind.is_income(),
            TypeFilter::Expense => kind.is_expense(),
        }
    }
}

/// Keep only transactions of the selected type; groups left empty are dropped.
/// Group totals stay as they were fetched.
pub fn filter_by_type(groups: Vec<TransactionGroup>, filter: TypeFilter) -> Vec<TransactionGroup> {
    if filter == TypeFilter::All {
        return groups;
    }
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.transactions.retain(|t| filter.matches(&t.kind));
            (!group.transactions.is_empty()).then_some(group)
        })
        .collect()
}
