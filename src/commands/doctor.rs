// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::models::TransactionKind;
use crate::utils::pretty_table;

/// Reads the raw table, not the snapshot: rows the snapshot decode
/// skips are exactly the ones this report exists to surface.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt = conn.prepare("SELECT id, kind, date, amount FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let kind: String = r.get(1)?;
        let date: String = r.get(2)?;
        let amount: String = r.get(3)?;

        if kind.parse::<TransactionKind>().is_err() {
            rows.push(vec!["bad_kind".into(), id.to_string(), kind.clone()]);
        }
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_date".into(), id.to_string(), date.clone()]);
        }
        match amount.parse::<Decimal>() {
            Err(_) => rows.push(vec!["bad_amount".into(), id.to_string(), amount.clone()]),
            Ok(a) if a <= Decimal::ZERO => {
                rows.push(vec!["non_positive_amount".into(), id.to_string(), amount.clone()]);
            }
            Ok(_) => {}
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Id", "Detail"], rows));
    }
    Ok(())
}
