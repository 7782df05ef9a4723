// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendlog::models::{Month, TransactionKind};

#[test]
fn month_rejects_out_of_range_indices() {
    assert!(Month::new(2024, 0).is_err());
    assert!(Month::new(2024, 13).is_err());
    assert!(Month::new(2024, 12).is_ok());
}

#[test]
fn month_parses_year_dash_month() {
    let m: Month = " 2024-03 ".parse().unwrap();
    assert_eq!(m.year(), 2024);
    assert_eq!(m.month(), 3);
    assert_eq!(m.to_string(), "2024-03");
    assert!("2024-3-foo".parse::<Month>().is_err());
    assert!("March 2024".parse::<Month>().is_err());
}

#[test]
fn month_boundaries() {
    let m = Month::new(2024, 2).unwrap();
    assert_eq!(m.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(m.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    let m = Month::new(2023, 2).unwrap();
    assert_eq!(m.last_day(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());

    assert!(m.contains(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()));
    assert!(!m.contains(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()));
    assert!(!m.contains(NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()));
}

#[test]
fn transaction_kind_round_trips() {
    assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
    assert_eq!(" Expense ".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
    assert_eq!(TransactionKind::Income.to_string(), "income");
    assert!("transfer".parse::<TransactionKind>().is_err());
}
