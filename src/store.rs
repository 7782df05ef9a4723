// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

use crate::models::{NewTransaction, Transaction, TransactionKind};

/// CRUD contract for transaction persistence. Aggregation and the
/// command layer depend on this trait only, never on the backing
/// database, so the query code is identical for any store.
pub trait TransactionStore {
    /// Full snapshot, newest first. Rows that fail to decode (bad kind,
    /// date, or amount) are skipped rather than failing the snapshot;
    /// `doctor` reports them.
    fn list(&self) -> Result<Vec<Transaction>>;
    fn get(&self, id: i64) -> Result<Option<Transaction>>;
    /// Persists the record and returns it with the store-assigned id
    /// and timestamps.
    fn create(&self, new: &NewTransaction) -> Result<Transaction>;
    /// Full-record replace. Returns false when no row has the id.
    fn update(&self, tx: &Transaction) -> Result<bool>;
    /// Permanent; returns false when no row has the id.
    fn delete(&self, id: i64) -> Result<bool>;
}

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteStore { conn }
    }
}

const COLUMNS: &str = "id, kind, date, amount, category, item, note, created_at, updated_at";

fn decode_row(row: &Row<'_>) -> rusqlite::Result<Option<Transaction>> {
    let id: i64 = row.get(0)?;
    let kind: String = row.get(1)?;
    let date: String = row.get(2)?;
    let amount: String = row.get(3)?;
    let category: String = row.get(4)?;
    let item: Option<String> = row.get(5)?;
    let note: Option<String> = row.get(6)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    let kind = match kind.parse::<TransactionKind>() {
        Ok(k) => k,
        Err(_) => return Ok(None),
    };
    let date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return Ok(None),
    };
    let amount = match amount.parse::<Decimal>() {
        Ok(a) => a,
        Err(_) => return Ok(None),
    };

    Ok(Some(Transaction {
        id,
        kind,
        date,
        amount,
        category,
        item: item.unwrap_or_default(),
        note,
        created_at,
        updated_at,
    }))
}

impl TransactionStore for SqliteStore<'_> {
    fn list(&self) -> Result<Vec<Transaction>> {
        let sql = format!("SELECT {} FROM transactions ORDER BY date DESC, id DESC", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            if let Some(tx) = decode_row(row)? {
                out.push(tx);
            }
        }
        Ok(out)
    }

    fn get(&self, id: i64) -> Result<Option<Transaction>> {
        let sql = format!("SELECT {} FROM transactions WHERE id=?1", COLUMNS);
        let found = self
            .conn
            .query_row(&sql, params![id], decode_row)
            .optional()?;
        Ok(found.flatten())
    }

    fn create(&self, new: &NewTransaction) -> Result<Transaction> {
        self.conn.execute(
            "INSERT INTO transactions(kind, date, amount, category, item, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new.kind.as_str(),
                new.date.to_string(),
                new.amount.to_string(),
                new.category,
                new.item,
                new.note
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get(id)?
            .with_context(|| format!("Transaction {} missing after insert", id))
    }

    fn update(&self, tx: &Transaction) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE transactions
             SET kind=?1, date=?2, amount=?3, category=?4, item=?5, note=?6,
                 updated_at=datetime('now')
             WHERE id=?7",
            params![
                tx.kind.as_str(),
                tx.date.to_string(),
                tx.amount.to_string(),
                tx.category,
                tx.item,
                tx.note,
                tx.id
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(changed > 0)
    }
}
