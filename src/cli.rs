// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as a JSON array"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Expense logging, budget progress, and spending summaries")
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help("Expense file to use instead of the platform data dir"),
        )
        .subcommand(Command::new("init").about("Create the expense file and print its location"))
        .subcommand(
            Command::new("add")
                .about("Log an expense")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Positive amount, e.g. 12.50"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Category, defaults to Miscellaneous"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("YYYY-MM-DD")
                        .help("Date, defaults to today"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('m')
                        .help("Free-text description"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List logged expenses")
                .arg(Arg::new("category").long("category").help("Only this category"))
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("YYYY-MM")
                        .help("Only this month"),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an expense by its list position")
                .arg(
                    Arg::new("index")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Position as shown by 'list'"),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(json_flags(
            Command::new("stats")
                .about("Budget progress and spending summaries")
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .help("Override the stored budget limit for this run"),
                ),
        ))
        .subcommand(
            Command::new("budget")
                .about("Manage the monthly budget limit")
                .subcommand(
                    Command::new("set")
                        .about("Set the limit")
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true)),
                )
                .subcommand(Command::new("show").about("Show the limit")),
        )
        .subcommand(
            Command::new("export")
                .about("Export the full expense set")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true).help("Output path")),
        )
        .subcommand(
            Command::new("import")
                .about("Append expenses from a headered CSV (date,amount,category,description)")
                .arg(Arg::new("path").long("path").required(true).help("CSV path")),
        )
        .subcommand(Command::new("doctor").about("Check the expense file for suspect records"))
}
