use std::{fs::File, path::PathBuf, process};
#[macro_use]
extern crate log;

use anyhow::Context;
use clap::{ArgEnum, Parser};
use savings_account::{replay, Account, Statement};

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

/// Replays deposits, withdrawals and interest against a savings account and prints a statement
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Starting balance
    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    balance: f64,

    /// Annual percentage rate, in percent (4.4 means 4.4%)
    #[clap(long, default_value_t = 4.4, allow_hyphen_values = true)]
    rate: f64,

    /// Months of interest to compound after the script has been replayed
    #[clap(long, default_value_t = 0)]
    months: u32,

    #[clap(long, arg_enum, default_value = "csv")]
    format: Format,

    /// CSV file of operations with a `type, amount` header
    script: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<Account> {
    info!(
        "opening account with balance {} at {}% APR",
        cli.balance, cli.rate
    );
    let mut account = Account::new(cli.balance, cli.rate);

    if let Some(path) = &cli.script {
        let file =
            File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
        let outcome = replay(file, &mut account)
            .with_context(|| format!("Unable to replay {}", path.display()))?;
        info!(
            "replayed {}: {} applied, {} skipped",
            path.display(),
            outcome.applied,
            outcome.skipped
        );
    }

    for _ in 0..cli.months {
        account.accrue_interest();
    }

    let statement = Statement::from(&account);
    let rendered = match cli.format {
        Format::Csv => statement.to_csv()?,
        Format::Json => statement.to_json()?,
    };
    print!("{rendered}");
    if cli.format == Format::Json {
        println!();
    }

    Ok(account)
}
