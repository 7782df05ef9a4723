// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal income/expense tracker: monthly summaries, calendar view, category breakdowns")
        .subcommand(Command::new("init").about("Create the database if it does not exist"))
        .subcommand(tx_cmd())
        .subcommand(report_cmd())
        .subcommand(calendar_cmd())
        .subcommand(suggest_cmd())
        .subcommand(export_cmd())
        .subcommand(Command::new("doctor").about("Report stored rows the snapshot would skip"))
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month; defaults to the current month")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record and manage transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("income|expense")
                        .required(true),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("item").long("item"))
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace fields of a transaction; its type is kept")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_parser(value_parser!(i64))
                        .required(true),
                )
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("item").long("item"))
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("rm").about("Delete a transaction").arg(
                Arg::new("id")
                    .long("id")
                    .value_parser(value_parser!(i64))
                    .required(true),
            ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions")
                .arg(month_arg())
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("income|expense"),
                )
                .arg(Arg::new("category").long("category"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Monthly summaries and breakdowns")
        .subcommand(json_flags(
            Command::new("summary")
                .about("Income, expense, and balance for a month")
                .arg(month_arg()),
        ))
        .subcommand(json_flags(
            Command::new("by-category")
                .about("Expense totals per category")
                .arg(month_arg()),
        ))
        .subcommand(json_flags(
            Command::new("breakdown")
                .about("Category breakdown with share percentages")
                .arg(month_arg())
                .arg(
                    Arg::new("detail")
                        .long("detail")
                        .action(ArgAction::SetTrue)
                        .help("List each category's transactions, largest first"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("split")
                .about("Controllable vs non-controllable expense totals")
                .arg(month_arg()),
        ))
}

fn calendar_cmd() -> Command {
    Command::new("calendar")
        .about("Month grid with per-day income and expense totals")
        .arg(month_arg())
}

fn suggest_cmd() -> Command {
    Command::new("suggest")
        .about("Distinct names seen so far, for form auto-completion")
        .subcommand(Command::new("sources").about("Income source names"))
        .subcommand(Command::new("categories").about("Expense category names"))
        .subcommand(Command::new("items").about("Expense item names"))
}

fn export_cmd() -> Command {
    Command::new("export").about("Export data").subcommand(
        Command::new("transactions")
            .about("Export transactions to CSV or JSON")
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_name("csv|json")
                    .required(true),
            )
            .arg(Arg::new("out").long("out").value_name("PATH").required(true))
            .arg(month_arg()),
    )
}
