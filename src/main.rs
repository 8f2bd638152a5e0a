//! # Account-session
//! Application opens a single account from console input and lets user deposit and withdraw
//! money until exit is chosen.
//!
//! ## Statement format
//! csv with columns `seq`, `type`, `amount`, `outcome`, `balance`
//!
//! ```csv
//! seq,type,amount,outcome,balance
//! 1,deposit,2000,applied,7000
//! 2,withdrawal,999999,insufficient_funds,7000
//! ```

#![deny(missing_docs)]

use account_session::{account::Account, csv, session, AccountID};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{stdin, stdout, AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive deposit and withdraw console for a single account
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Account number, assigned automatically when missing
    #[arg(long)]
    account_number: Option<AccountID>,

    /// Write journal of the session to this csv file on exit
    #[arg(long)]
    statement: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn save_statement(path: PathBuf, account: &Account) -> anyhow::Result<()> {
    let f = tokio::fs::File::create(&path)
        .await
        .with_context(|| format!("create statement file {}", path.display()))?;

    csv::write_statement(tokio_stream::iter(account.journal()), f)
        .await
        .context("failed to save statement")?;

    info!(path = %path.display(), entries = account.journal().len(), "statement saved");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lines = LinesStream::new(BufReader::new(stdin()).lines());
    let account = session::run_session(lines, stdout(), cli.account_number).await?;

    match (cli.statement, account) {
        (Some(path), Some(account)) => save_statement(path, &account).await?,
        (Some(path), None) => {
            info!(path = %path.display(), "no account was opened, statement skipped")
        }
        (None, _) => (),
    }

    Ok(())
}
