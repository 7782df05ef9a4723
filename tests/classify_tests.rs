// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendlog::aggregate::{controllable_split, monthly_totals};
use spendlog::classify::{Controllability, NON_DISCRETIONARY, classify};
use spendlog::models::{Month, Transaction, TransactionKind};

fn expense(id: i64, date: &str, amount: &str, category: &str, item: &str) -> Transaction {
    Transaction {
        id,
        kind: TransactionKind::Expense,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        item: item.to_string(),
        note: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn classify_labels(category: &str, item: &str) -> Controllability {
    classify(&expense(1, "2024-03-01", "10", category, item))
}

#[test]
fn rule_table_is_the_fixed_five() {
    assert_eq!(NON_DISCRETIONARY.len(), 5);
    let categories: Vec<&str> = NON_DISCRETIONARY.iter().map(|r| r.category).collect();
    assert_eq!(categories, vec!["emi", "emis", "investment", "investments", "home"]);
    assert!(NON_DISCRETIONARY[..4].iter().all(|r| r.item.is_none()));
    assert_eq!(NON_DISCRETIONARY[4].item, Some("home"));
}

#[test]
fn category_only_rules_match_any_item() {
    for category in ["EMI", "emis", "Investment", "INVESTMENTS"] {
        assert_eq!(
            classify_labels(category, "whatever"),
            Controllability::NonControllable,
            "{} should be non-controllable",
            category
        );
    }
}

#[test]
fn matching_trims_and_lowercases() {
    assert_eq!(classify_labels("  EMI  ", ""), Controllability::NonControllable);
    assert_eq!(classify_labels(" Home ", "HOME "), Controllability::NonControllable);
}

#[test]
fn home_requires_home_item() {
    assert_eq!(classify_labels("Home", "Rent"), Controllability::Controllable);
    assert_eq!(classify_labels("Home", ""), Controllability::Controllable);
    assert_eq!(classify_labels("home", "home"), Controllability::NonControllable);
}

#[test]
fn everything_else_is_controllable() {
    assert_eq!(classify_labels("Food", "Groceries"), Controllability::Controllable);
    assert_eq!(classify_labels("Travel", ""), Controllability::Controllable);
}

#[test]
fn split_worked_example() {
    let snapshot = vec![
        Transaction {
            id: 1,
            kind: TransactionKind::Income,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount: Decimal::from(5000),
            category: "Salary".to_string(),
            item: String::new(),
            note: None,
            created_at: String::new(),
            updated_at: String::new(),
        },
        expense(2, "2024-03-05", "1200", "EMI", ""),
        expense(3, "2024-03-10", "300", "Food", "Groceries"),
    ];
    let split = controllable_split(&snapshot, Month::new(2024, 3).unwrap());
    assert_eq!(split.controllable, Decimal::from(300));
    assert_eq!(split.non_controllable, Decimal::from(1200));
}

#[test]
fn split_buckets_sum_to_monthly_expense() {
    let snapshot = vec![
        expense(1, "2024-03-02", "450.25", "Investments", ""),
        expense(2, "2024-03-08", "1200", "Home", "Home"),
        expense(3, "2024-03-09", "80.75", "Home", "Rent"),
        expense(4, "2024-03-21", "19", "Food", ""),
    ];
    let m = Month::new(2024, 3).unwrap();
    let split = controllable_split(&snapshot, m);
    assert_eq!(
        split.controllable + split.non_controllable,
        monthly_totals(&snapshot, m).expense
    );
    assert_eq!(split.non_controllable, "1650.25".parse::<Decimal>().unwrap());
}

#[test]
fn split_ignores_income_even_in_rule_categories() {
    let snapshot = vec![Transaction {
        id: 1,
        kind: TransactionKind::Income,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        amount: Decimal::from(900),
        category: "EMI".to_string(),
        item: String::new(),
        note: None,
        created_at: String::new(),
        updated_at: String::new(),
    }];
    let split = controllable_split(&snapshot, Month::new(2024, 3).unwrap());
    assert_eq!(split.controllable, Decimal::ZERO);
    assert_eq!(split.non_controllable, Decimal::ZERO);
}
