// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::aggregate::{Totals, daily_totals};
use crate::commands::month_or_current;
use crate::models::Month;
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, pretty_table};

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let month = month_or_current(m)?;
    let snapshot = store.list()?;
    let days = daily_totals(&snapshot, month);
    println!("Calendar for {}", month);
    println!(
        "{}",
        pretty_table(
            &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            month_grid(month, &days),
        )
    );
    Ok(())
}

/// Lays the month out as Mon..Sun weeks. Cells outside the month are
/// empty; cells with activity carry the day's income/expense totals.
pub fn month_grid(month: Month, days: &BTreeMap<NaiveDate, Totals>) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut week = vec![String::new(); 7];
    let mut col = month.first_day().weekday().num_days_from_monday() as usize;

    for day in 1..=month.last_day().day() {
        let date = NaiveDate::from_ymd_opt(month.year(), month.month(), day).unwrap();
        week[col] = day_cell(day, days.get(&date));
        col += 1;
        if col == 7 {
            rows.push(week);
            week = vec![String::new(); 7];
            col = 0;
        }
    }
    if col > 0 {
        rows.push(week);
    }
    rows
}

fn day_cell(day: u32, totals: Option<&Totals>) -> String {
    let mut cell = day.to_string();
    if let Some(t) = totals {
        if !t.income.is_zero() {
            cell.push_str(&format!("\n+{}", fmt_amount(&t.income)));
        }
        if !t.expense.is_zero() {
            cell.push_str(&format!("\n-{}", fmt_amount(&t.expense)));
        }
    }
    cell
}
