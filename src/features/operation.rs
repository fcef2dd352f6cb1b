use super::account::Account;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Credits the amount to the balance and to total deposits
    Deposit,

    /// Debits the amount from the balance and adds it to total withdrawals.
    /// The balance is allowed to go negative
    #[serde(alias = "withdrawal")]
    Withdraw,

    /// Compounds one month of interest. Carries no amount
    Interest,
}

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Invalid operation - {0:?} requires an amount")]
    MissingAmount(OperationKind),

    #[error("Invalid record - {0}")]
    InvalidRecord(#[from] csv::Error),
}

pub type OperationResult<T> = Result<T, OperationError>;

/// One line of an operation script
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    #[serde(rename = "type")]
    kind: OperationKind,

    /// Ignored for interest operations
    amount: Option<f64>,
}

impl Operation {
    pub fn deposit(amount: impl Into<f64>) -> Self {
        Self {
            kind: OperationKind::Deposit,
            amount: Some(amount.into()),
        }
    }

    pub fn withdraw(amount: impl Into<f64>) -> Self {
        Self {
            kind: OperationKind::Withdraw,
            amount: Some(amount.into()),
        }
    }

    pub fn interest() -> Self {
        Self {
            kind: OperationKind::Interest,
            amount: None,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Applies the operation to `account`. Non-positive amounts are passed through
    /// and absorbed by the account.
    pub fn apply(self, account: &mut Account) -> OperationResult<()> {
        use OperationKind::*;

        match self.kind {
            Deposit => account.deposit(self.required_amount()?),
            Withdraw => account.withdraw(self.required_amount()?),
            Interest => account.accrue_interest(),
        };
        Ok(())
    }

    fn required_amount(&self) -> OperationResult<f64> {
        self.amount.ok_or(OperationError::MissingAmount(self.kind))
    }
}

/// Outcome of replaying a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Replay {
    pub applied: usize,
    pub skipped: usize,
}

/// Replays a CSV script (`type, amount` header) against `account` in order.
///
/// Records that cannot be read or applied are logged and skipped. Only an unreadable
/// header aborts the replay.
pub fn replay<R: io::Read>(reader: R, account: &mut Account) -> OperationResult<Replay> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    rdr.headers()?;

    let mut outcome = Replay::default();
    for (line, result) in rdr.deserialize::<Operation>().enumerate() {
        match result
            .map_err(OperationError::from)
            .and_then(|operation| operation.apply(account).map(|_| operation))
        {
            Ok(operation) => {
                debug!("record {}: applied {:?}", line + 1, operation);
                outcome.applied += 1;
            }
            Err(e) => {
                warn!("record {}: {e}", line + 1);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}
