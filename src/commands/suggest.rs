// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::{expense_categories, expense_items, income_sources};
use crate::store::TransactionStore;
use crate::utils::pretty_table;

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let snapshot = store.list()?;
    let (label, names) = match m.subcommand() {
        Some(("sources", _)) => ("Income source", income_sources(&snapshot)),
        Some(("categories", _)) => ("Expense category", expense_categories(&snapshot)),
        Some(("items", _)) => ("Expense item", expense_items(&snapshot)),
        _ => return Ok(()),
    };
    let rows: Vec<Vec<String>> = names.into_iter().map(|n| vec![n]).collect();
    println!("{}", pretty_table(&[label], rows));
    Ok(())
}
