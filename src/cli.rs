// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines instead of a table"),
    )
}

fn year_arg() -> Arg {
    Arg::new("year")
        .long("year")
        .value_parser(value_parser!(i32))
        .help("Calendar year (defaults to the current year)")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_parser(value_parser!(u32))
        .help("Month number 1-12")
}

pub fn build_cli() -> Command {
    Command::new("ledgerlens")
        .version(crate_version!())
        .about("Income/expense tracking with analytic reports, trends, and forecasts")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Non-negative amount"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type").help("income or expense"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Analytic reports")
                .subcommand(output_flags(
                    Command::new("monthly")
                        .about("Daily breakdown for a month, or 12 month rows for a year")
                        .arg(year_arg())
                        .arg(month_arg()),
                ))
                .subcommand(output_flags(
                    Command::new("yearly")
                        .about("Year summary with quarters and year-over-year comparison")
                        .arg(year_arg()),
                ))
                .subcommand(output_flags(
                    Command::new("category")
                        .about("Category breakdowns, or one category's series")
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(Arg::new("category").long("category").help("Category name")),
                ))
                .subcommand(output_flags(
                    Command::new("trend")
                        .about("Trailing 12-month trend with moving averages and forecast"),
                ))
                .subcommand(output_flags(
                    Command::new("insights")
                        .about("Insight cards for a month")
                        .arg(year_arg())
                        .arg(month_arg()),
                )),
        )
        .subcommand(output_flags(
            Command::new("stats")
                .about("Period statistics and category breakdowns")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("month")
                        .help("week, month, year, or all"),
                ),
        ))
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV (date,type,category,amount,note)")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for integrity issues"))
}
