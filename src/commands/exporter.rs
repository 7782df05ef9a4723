// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde_json::json;

use crate::commands::month_arg;
use crate::models::Transaction;
use crate::store::TransactionStore;

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let month = month_arg(sub)?;

    let snapshot = store.list()?;
    let mut txs: Vec<&Transaction> = snapshot.iter().collect();
    if let Some(m) = month {
        txs.retain(|t| m.contains(t.date));
    }
    // Exports read oldest first.
    txs.sort_by_key(|t| (t.date, t.id));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "amount", "category", "item", "note"])?;
            for t in &txs {
                wtr.write_record([
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.item.clone(),
                    t.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = txs
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date.to_string(),
                        "type": t.kind.to_string(),
                        "amount": t.amount.to_string(),
                        "category": t.category,
                        "item": t.item,
                        "note": t.note,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
