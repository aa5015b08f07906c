//! Summary aggregator
//!
//! Reduces a record collection into per-category money totals plus a
//! grand balance (credit-like total minus debit-like total). The
//! aggregator runs over the FULL snapshot, not the filtered view:
//! summary cards stay global while the table below them is filtered.

use std::collections::BTreeMap;

use crate::models::Money;
use crate::query::FieldSchema;

/// Per-category totals plus the signed grand balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTotals {
    /// Sum per category value, in category-list order keys
    pub group_totals: BTreeMap<String, Money>,
    /// Credit-like total minus debit-like total
    pub grand_balance: Money,
}

impl SummaryTotals {
    /// Total for one category; zero when the category has no bucket
    pub fn total(&self, category: &str) -> Money {
        self.group_totals.get(category).copied().unwrap_or_default()
    }
}

/// Accumulate per-category sums over a record collection
///
/// `categories` names the buckets to accumulate; records whose category
/// value is not listed are ignored. Value fields coerce defensively to
/// money (strings parsed, nulls and garbage become zero). The grand
/// balance is `total(credit) - total(debit)`.
pub fn aggregate<T>(
    records: &[T],
    schema: &FieldSchema<T>,
    category_field: &str,
    value_field: &str,
    categories: &[&str],
    credit: &str,
    debit: &str,
) -> SummaryTotals {
    let mut group_totals: BTreeMap<String, Money> = categories
        .iter()
        .map(|category| (category.to_string(), Money::zero()))
        .collect();

    for record in records {
        let category = schema.resolve(category_field, record).as_text();
        if let Some(total) = group_totals.get_mut(&category) {
            *total += schema.resolve(value_field, record).as_money();
        }
    }

    let grand_balance = group_totals.get(credit).copied().unwrap_or_default()
        - group_totals.get(debit).copied().unwrap_or_default();

    SummaryTotals {
        group_totals,
        grand_balance,
    }
}
