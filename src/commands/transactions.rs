// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::commands::month_arg;
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub),
        Some(("edit", sub)) => edit(store, sub),
        Some(("rm", sub)) => rm(store, sub),
        Some(("list", sub)) => list(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind: TransactionKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .unwrap()
        .trim()
        .to_string();
    let item = sub
        .get_one::<String>("item")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let note = sub
        .get_one::<String>("note")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let tx = store.create(&NewTransaction {
        kind,
        date,
        amount,
        category,
        item,
        note,
    })?;
    println!(
        "Recorded {} of {} on {} in '{}' (id {})",
        tx.kind,
        fmt_amount(&tx.amount),
        tx.date,
        tx.category,
        tx.id
    );
    Ok(())
}

// Full-record replace, except the transaction keeps its type.
fn edit(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut tx = store
        .get(id)?
        .with_context(|| format!("Transaction {} not found", id))?;

    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = parse_date(d)?;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        tx.amount = parse_decimal(a)?;
    }
    if let Some(c) = sub.get_one::<String>("category") {
        tx.category = c.trim().to_string();
    }
    if let Some(i) = sub.get_one::<String>("item") {
        tx.item = i.trim().to_string();
    }
    if let Some(n) = sub.get_one::<String>("note") {
        let n = n.trim();
        tx.note = if n.is_empty() { None } else { Some(n.to_string()) };
    }

    store.update(&tx)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("Transaction {} not found", id);
    }
    Ok(())
}

fn list(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.item.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Amount", "Category", "Item", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub item: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        TransactionRow {
            id: tx.id,
            date: tx.date.to_string(),
            kind: tx.kind.to_string(),
            amount: fmt_amount(&tx.amount),
            category: tx.category.clone(),
            item: tx.item.clone(),
            note: tx.note.clone().unwrap_or_default(),
        }
    }
}

/// Snapshot-backed listing: fetches the full set once and filters in
/// memory, newest first (store order).
pub fn query_rows(
    store: &dyn TransactionStore,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let snapshot = store.list()?;
    let month = month_arg(sub)?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionKind>())
        .transpose()?;
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut rows = Vec::new();
    for tx in &snapshot {
        if let Some(m) = month {
            if !m.contains(tx.date) {
                continue;
            }
        }
        if let Some(k) = kind {
            if tx.kind != k {
                continue;
            }
        }
        if let Some(c) = category {
            if &tx.category != c {
                continue;
            }
        }
        if let Some(l) = limit {
            if rows.len() == l {
                break;
            }
        }
        rows.push(TransactionRow::from(tx));
    }
    Ok(rows)
}
