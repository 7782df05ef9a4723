// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlog::store::SqliteStore;
use spendlog::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let store = SqliteStore::new(&conn);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("calendar", sub)) => commands::calendar::handle(&store, sub)?,
        Some(("suggest", sub)) => commands::suggest::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
