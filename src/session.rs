//! Interactive console driving a single [`Account`]
//!
//! The session reads answers line by line from any stream of lines and writes the dialogue
//! into any async writer, so it works the same on stdin/stdout and in memory.

use std::io;

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::{account::Account, amount::parse_decimal, errors::AccountErr, AccountID};

const INVALID_NUMBER: &str = "Invalid number, please try again.";

/// Option picked from main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`
    Deposit,
    /// `2`
    Withdraw,
    /// `3`
    Exit,
}

impl MenuChoice {
    /// `None` for anything that is not on the menu
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Deposit),
            "2" => Some(MenuChoice::Withdraw),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Deposit,
    Withdraw,
}

struct Console<L, W> {
    lines: L,
    out: W,
}

impl<L, W> Console<L, W>
where
    L: Stream<Item = io::Result<String>> + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.out
            .write_all(text.as_bytes())
            .await
            .context("write to console")?;
        self.out.flush().await.context("flush console")
    }

    async fn say(&mut self, line: &str) -> anyhow::Result<()> {
        self.write(&format!("{line}\n")).await
    }

    /// `None` when input is closed
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.lines.next().await {
            Some(line) => Ok(Some(line.context("read from console")?.trim().to_owned())),
            None => Ok(None),
        }
    }

    async fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        self.say(question).await?;
        self.read_line().await
    }

    async fn print_details(&mut self, account: &Account) -> anyhow::Result<()> {
        let details = format!(
            "\nAccount Details:\nAccount Number: {}\nAccount Holder: {}\nBalance: {}\n",
            account.id(),
            account.owner_name(),
            account.balance()
        );
        self.write(&details).await
    }

    async fn print_menu(&mut self) -> anyhow::Result<()> {
        self.write(
            "\nChoose one of the following options:\n\
             1. Deposit\n2. Withdraw\n3. Exit\nEnter your choice: ",
        )
        .await
    }
}

/// Run whole console dialogue: ask for holder name and opening balance, then serve the menu
/// until user picks exit or input ends.
///
/// Returns final state of the account, or `None` when input ended before it was opened.
/// Only I/O problems are returned as errors, rejected operations are reported to the user and
/// the session continues.
pub async fn run_session<L, W>(
    lines: L,
    out: W,
    account_number: Option<AccountID>,
) -> anyhow::Result<Option<Account>>
where
    L: Stream<Item = io::Result<String>> + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut console = Console { lines, out };

    let Some(mut account) = open_account(&mut console, account_number).await? else {
        warn!("input closed before account was opened");
        return Ok(None);
    };
    info!(
        account = account.id(),
        owner = account.owner_name(),
        balance = %account.balance(),
        "account opened"
    );
    console.print_details(&account).await?;

    loop {
        console.print_menu().await?;
        let Some(choice) = console.read_line().await? else {
            warn!("input closed, ending session");
            break;
        };

        let op = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Deposit) => Operation::Deposit,
            Some(MenuChoice::Withdraw) => Operation::Withdraw,
            Some(MenuChoice::Exit) => {
                console.say("Thank you!").await?;
                break;
            }
            None => {
                debug!(%choice, "unknown menu choice");
                console.say("Invalid choice! Please try again.").await?;
                continue;
            }
        };

        if !money_step(&mut console, &mut account, op).await? {
            warn!("input closed, ending session");
            break;
        }
    }

    info!(
        account = account.id(),
        balance = %account.balance(),
        operations = account.journal().len(),
        "session finished"
    );
    Ok(Some(account))
}

async fn open_account<L, W>(
    console: &mut Console<L, W>,
    account_number: Option<AccountID>,
) -> anyhow::Result<Option<Account>>
where
    L: Stream<Item = io::Result<String>> + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(name) = console.ask("Enter Name:").await? else {
        return Ok(None);
    };

    loop {
        let Some(line) = console.ask("Enter Initial Balance:").await? else {
            return Ok(None);
        };

        let opening = match parse_decimal(&line) {
            Ok(opening) => opening,
            Err(e) => {
                debug!(%e, "opening balance rejected");
                console.say(INVALID_NUMBER).await?;
                continue;
            }
        };

        let created = match account_number {
            Some(id) => Account::open(id, name.as_str(), opening),
            None => Account::create(name.as_str(), opening),
        };

        match created {
            Ok(account) => return Ok(Some(account)),
            Err(e) => {
                debug!(%e, %opening, "opening balance rejected");
                console
                    .say("Invalid amount: opening balance cannot be negative.")
                    .await?;
            }
        }
    }
}

/// `false` when input is closed
async fn money_step<L, W>(
    console: &mut Console<L, W>,
    account: &mut Account,
    op: Operation,
) -> anyhow::Result<bool>
where
    L: Stream<Item = io::Result<String>> + Unpin,
    W: AsyncWrite + Unpin,
{
    let question = match op {
        Operation::Deposit => "\nEnter the amount to be deposited:",
        Operation::Withdraw => "\nEnter the amount to be withdrawn:",
    };
    let Some(line) = console.ask(question).await? else {
        return Ok(false);
    };

    let amount = match parse_decimal(&line) {
        Ok(amount) => amount,
        Err(e) => {
            debug!(%e, ?op, "amount rejected");
            console.say(INVALID_NUMBER).await?;
            return Ok(true);
        }
    };

    let result = match op {
        Operation::Deposit => account.deposit(amount),
        Operation::Withdraw => account.withdraw(amount),
    };
    debug!(?op, %amount, ?result, "operation finished");

    let msg = match (op, result) {
        (Operation::Deposit, Ok(balance)) => {
            format!("Deposit Successful! Updated Balance: {balance}")
        }
        (Operation::Withdraw, Ok(balance)) => {
            format!("Withdrawal Successful! Updated Balance: {balance}")
        }
        (_, Err(AccountErr::InsufficientFunds { balance, .. })) => {
            format!("Insufficient Balance! Current Balance: {balance}")
        }
        (_, Err(AccountErr::Overflow { balance, .. })) => {
            format!("Amount too large! Current Balance: {balance}")
        }
        (_, Err(AccountErr::InvalidAmount)) => format!(
            "Invalid amount: must be greater than zero. Current Balance: {}",
            account.balance()
        ),
    };
    console.say(&msg).await?;

    Ok(true)
}
