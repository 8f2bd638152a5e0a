//! csv statement format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::{
    account::{AccTrans, AccTransState, MoneyTrans},
    errors::AccountErr,
    TransID,
};
use serde::{Deserialize, Serialize};

use tokio::io::AsyncWrite;
use tokio_stream::{Stream, StreamExt};

// Recorded operation types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawTransactionType {
    Deposit,
    Withdrawal,
}

/// How the operation ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RawOutcome {
    Applied,
    InvalidAmount,
    InsufficientFunds,
    Overflow,
}

/// one statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct JournalRecord {
    pub seq: TransID,
    pub r#type: RawTransactionType,
    pub amount: Decimal,
    pub outcome: RawOutcome,
    pub balance: Decimal,
}

impl From<&AccTrans> for JournalRecord {
    fn from(oth: &AccTrans) -> Self {
        let r#type = match oth.money() {
            MoneyTrans::Deposit(_) => RawTransactionType::Deposit,
            MoneyTrans::Withdraw(_) => RawTransactionType::Withdrawal,
        };
        let outcome = match oth.state() {
            AccTransState::Applied => RawOutcome::Applied,
            AccTransState::Failed(AccountErr::InvalidAmount) => RawOutcome::InvalidAmount,
            AccTransState::Failed(AccountErr::InsufficientFunds { .. }) => {
                RawOutcome::InsufficientFunds
            }
            AccTransState::Failed(AccountErr::Overflow { .. }) => RawOutcome::Overflow,
        };
        Self {
            seq: oth.seq(),
            r#type,
            amount: oth.money().amount(),
            outcome,
            balance: oth.balance_after(),
        }
    }
}

// same order as fields of `JournalRecord`
const STATEMENT_HEADER: [&str; 5] = ["seq", "type", "amount", "outcome", "balance"];

/// read items from `in_stream` and save them as [`JournalRecord`] into `wr`. Header is always
/// written, also for empty journal. Terminator is `\r\n`.
pub async fn write_statement<'a>(
    in_stream: impl Stream<Item = &'a AccTrans> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);
    builder.has_headers(false);

    let mut wr = builder.create_serializer(wr);
    wr.serialize(STATEMENT_HEADER).await?;

    while let Some(acc_trans) = in_stream.next().await {
        wr.serialize(JournalRecord::from(acc_trans)).await?;
    }

    wr.flush().await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_statement;
    use crate::account::Account;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn ser_output_format() -> anyhow::Result<()> {
        let mut a = Account::create("Alice", Decimal::new(5000, 0)).unwrap();
        a.deposit(Decimal::new(2000, 0)).unwrap();
        a.withdraw(Decimal::new(999999, 0)).unwrap_err();
        a.deposit(Decimal::new(-5, 0)).unwrap_err();
        a.withdraw(Decimal::new(1050, 2)).unwrap();

        let output = Vec::with_capacity(8192);
        let mut wr = tokio::io::BufWriter::new(output);

        write_statement(tokio_stream::iter(a.journal()), &mut wr).await?;

        let expected = "seq,type,amount,outcome,balance\r\n\
                        1,deposit,2000,applied,7000\r\n\
                        2,withdrawal,999999,insufficient_funds,7000\r\n\
                        3,deposit,-5,invalid_amount,7000\r\n\
                        4,withdrawal,10.50,applied,6989.50\r\n";

        let output_str = String::from_utf8(wr.into_inner()).unwrap();

        assert_eq!(output_str, expected);

        Ok(())
    }

    #[tokio::test]
    async fn empty_journal_writes_header_only() -> anyhow::Result<()> {
        let a = Account::create("Nobody", Decimal::ZERO).unwrap();
        let mut output = Vec::new();

        write_statement(tokio_stream::iter(a.journal()), &mut output).await?;

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "seq,type,amount,outcome,balance\r\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn overflow_outcome() -> anyhow::Result<()> {
        let mut a = Account::create("Max", Decimal::MAX).unwrap();
        a.deposit(Decimal::ONE).unwrap_err();
        let mut output = Vec::new();

        write_statement(tokio_stream::iter(a.journal()), &mut output).await?;

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str.lines().nth(1),
            Some("1,deposit,1,overflow,79228162514264337593543950335")
        );
        Ok(())
    }
}
