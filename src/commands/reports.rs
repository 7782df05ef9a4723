// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::{
    breakdown_by_category, controllable_split, expenses_by_category, monthly_totals,
    sort_by_amount_descending, transactions_in_month,
};
use crate::commands::month_or_current;
use crate::models::{Transaction, TransactionKind};
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub),
        Some(("by-category", sub)) => by_category(store, sub),
        Some(("breakdown", sub)) => breakdown(store, sub),
        Some(("split", sub)) => split(store, sub),
        _ => Ok(()),
    }
}

fn summary(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or_current(sub)?;
    let snapshot = store.list()?;
    let totals = monthly_totals(&snapshot, month);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        println!("Summary for {}", month);
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Balance"],
                vec![vec![
                    fmt_amount(&totals.income),
                    fmt_amount(&totals.expense),
                    fmt_amount(&totals.balance),
                ]],
            )
        );
    }
    Ok(())
}

fn by_category(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or_current(sub)?;
    let snapshot = store.list()?;
    let sums = expenses_by_category(&snapshot, month);

    let mut items: Vec<_> = sums.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let data: Vec<Vec<String>> = items
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_amount(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("Expenses by category for {}", month);
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn breakdown(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let detail = sub.get_flag("detail");
    let month = month_or_current(sub)?;
    let snapshot = store.list()?;
    let expenses: Vec<&Transaction> = transactions_in_month(&snapshot, month)
        .into_iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .collect();
    let groups = breakdown_by_category(&expenses);

    if maybe_print_json(json_flag, jsonl_flag, &groups)? {
        return Ok(());
    }

    println!("Expense breakdown for {}", month);
    let data: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            vec![
                g.category.clone(),
                fmt_amount(&g.total),
                format!("{}%", g.share.round_dp(1)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Total", "Share"], data));

    if detail {
        for group in &groups {
            println!(
                "{}: {} ({}%)",
                group.category,
                fmt_amount(&group.total),
                group.share.round_dp(1)
            );
            let rows: Vec<Vec<String>> = sort_by_amount_descending(&group.transactions)
                .iter()
                .map(|t| {
                    vec![
                        t.date.to_string(),
                        t.item.clone(),
                        fmt_amount(&t.amount),
                        t.note.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Date", "Item", "Amount", "Note"], rows));
        }
    }
    Ok(())
}

fn split(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_or_current(sub)?;
    let snapshot = store.list()?;
    let split = controllable_split(&snapshot, month);
    if !maybe_print_json(json_flag, jsonl_flag, &split)? {
        println!("Expense split for {}", month);
        println!(
            "{}",
            pretty_table(
                &["Controllable", "Non-controllable"],
                vec![vec![
                    fmt_amount(&split.controllable),
                    fmt_amount(&split.non_controllable),
                ]],
            )
        );
    }
    Ok(())
}
