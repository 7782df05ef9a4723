// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over an in-memory transaction snapshot. Callers own
//! the snapshot (usually a fresh `TransactionStore::list()`) and pass it
//! into each query; nothing here touches I/O or shared state.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::classify::{Controllability, classify};
use crate::models::{Month, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

impl Totals {
    fn add(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Income => self.income += tx.amount,
            TransactionKind::Expense => self.expense += tx.amount,
        }
        self.balance = self.income - self.expense;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Split {
    pub controllable: Decimal,
    pub non_controllable: Decimal,
}

/// One category's slice of a breakdown: its transactions, their sum, and
/// the sum's percentage share of the whole set.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub transactions: Vec<&'a Transaction>,
    pub total: Decimal,
    pub share: Decimal,
}

pub fn transactions_in_month<'a>(
    snapshot: &'a [Transaction],
    month: Month,
) -> Vec<&'a Transaction> {
    snapshot.iter().filter(|t| month.contains(t.date)).collect()
}

pub fn transactions_on_day<'a>(snapshot: &'a [Transaction], day: NaiveDate) -> Vec<&'a Transaction> {
    snapshot.iter().filter(|t| t.date == day).collect()
}

pub fn monthly_totals(snapshot: &[Transaction], month: Month) -> Totals {
    let mut totals = Totals::default();
    for tx in snapshot.iter().filter(|t| month.contains(t.date)) {
        totals.add(tx);
    }
    totals
}

/// Per-day income/expense sums for the month; days with no transactions
/// are absent. Feeds the calendar view.
pub fn daily_totals(snapshot: &[Transaction], month: Month) -> BTreeMap<NaiveDate, Totals> {
    let mut days: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for tx in snapshot.iter().filter(|t| month.contains(t.date)) {
        days.entry(tx.date).or_default().add(tx);
    }
    days
}

/// Expense sums grouped by category for the month. Categories with no
/// matching expense are absent, not present with zero.
pub fn expenses_by_category(snapshot: &[Transaction], month: Month) -> BTreeMap<String, Decimal> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for tx in snapshot.iter().filter(|t| {
        t.kind == TransactionKind::Expense && month.contains(t.date)
    }) {
        *sums.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    sums
}

/// Buckets the month's expenses by the non-discretionary rule table.
/// Income is not part of either bucket.
pub fn controllable_split(snapshot: &[Transaction], month: Month) -> Split {
    let mut split = Split::default();
    for tx in snapshot.iter().filter(|t| {
        t.kind == TransactionKind::Expense && month.contains(t.date)
    }) {
        match classify(tx) {
            Controllability::Controllable => split.controllable += tx.amount,
            Controllability::NonControllable => split.non_controllable += tx.amount,
        }
    }
    split
}

/// Groups the given set by category, ordered by descending total. Ties
/// keep first-seen order. Shares are percentages of the set's grand
/// total, and 0 when the grand total is 0.
pub fn breakdown_by_category<'a>(transactions: &[&'a Transaction]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for &tx in transactions {
        let at = *index.entry(tx.category.clone()).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: tx.category.clone(),
                transactions: Vec::new(),
                total: Decimal::ZERO,
                share: Decimal::ZERO,
            });
            groups.len() - 1
        });
        groups[at].transactions.push(tx);
        groups[at].total += tx.amount;
    }

    let grand: Decimal = groups.iter().map(|g| g.total).sum();
    if !grand.is_zero() {
        for group in &mut groups {
            group.share = group.total / grand * Decimal::ONE_HUNDRED;
        }
    }

    // Vec::sort_by is stable, so equal totals stay in first-seen order.
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

pub fn sort_by_amount_descending<'a>(transactions: &[&'a Transaction]) -> Vec<&'a Transaction> {
    let mut out = transactions.to_vec();
    out.sort_by(|a, b| b.amount.cmp(&a.amount));
    out
}

/// Distinct income-source names, sorted. Suggestion data only.
pub fn income_sources(snapshot: &[Transaction]) -> Vec<String> {
    distinct(snapshot, |t| {
        (t.kind == TransactionKind::Income).then(|| t.category.as_str())
    })
}

/// Distinct expense-category names, sorted. Suggestion data only.
pub fn expense_categories(snapshot: &[Transaction]) -> Vec<String> {
    distinct(snapshot, |t| {
        (t.kind == TransactionKind::Expense).then(|| t.category.as_str())
    })
}

/// Distinct expense-item names, sorted. Suggestion data only.
pub fn expense_items(snapshot: &[Transaction]) -> Vec<String> {
    distinct(snapshot, |t| {
        (t.kind == TransactionKind::Expense).then(|| t.item.as_str())
    })
}

fn distinct<F>(snapshot: &[Transaction], pick: F) -> Vec<String>
where
    F: Fn(&Transaction) -> Option<&str>,
{
    let mut names: BTreeSet<String> = BTreeSet::new();
    for tx in snapshot {
        if let Some(name) = pick(tx) {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                names.insert(trimmed.to_string());
            }
        }
    }
    names.into_iter().collect()
}
