// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::json;
use spendlog::models::{NewTransaction, TransactionKind};
use spendlog::store::{SqliteStore, TransactionStore};
use spendlog::{cli, commands::exporter, db};
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("export", export_m)) = matches.subcommand() {
        export_m.clone()
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    store
        .create(&NewTransaction {
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            amount: "12.34".parse().unwrap(),
            category: "Groceries".to_string(),
            item: "Corner Shop".to_string(),
            note: Some("Weekly run".to_string()),
        })
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "spendlog",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "type": "expense",
                "amount": "12.34",
                "category": "Groceries",
                "item": "Corner Shop",
                "note": "Weekly run"
            }
        ])
    );
}

#[test]
fn export_transactions_csv_is_oldest_first() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    for (date, amount) in [("2025-01-20", "5"), ("2025-01-02", "7")] {
        store
            .create(&NewTransaction {
                kind: TransactionKind::Expense,
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                amount: amount.parse().unwrap(),
                category: "Food".to_string(),
                item: String::new(),
                note: None,
            })
            .unwrap();
    }

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "spendlog",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "date,type,amount,category,item,note");
    assert!(lines[1].starts_with("2025-01-02"));
    assert!(lines[2].starts_with("2025-01-20"));
}

#[test]
fn export_transactions_honours_month_filter() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    for date in ["2025-01-02", "2025-02-02"] {
        store
            .create(&NewTransaction {
                kind: TransactionKind::Expense,
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                amount: "1".parse().unwrap(),
                category: "Food".to_string(),
                item: String::new(),
                note: None,
            })
            .unwrap();
    }

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "spendlog",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
        "--month",
        "2025-02",
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2025-02-02"));
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "spendlog",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    assert!(exporter::handle(&store, &export_m).is_err());
    assert!(!out_path.exists());
}
