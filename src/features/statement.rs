use super::account::Account;
use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Unable to write csv - {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to write json - {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to flush statement - {0}")]
    Io(#[from] std::io::Error),

    #[error("Statement is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

type StatementResult<T> = Result<T, StatementError>;

/// Point-in-time view of an account, rounded for display
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Statement {
    #[serde(serialize_with = "round_serialize")]
    balance: f64,

    #[serde(serialize_with = "round_serialize")]
    deposits: f64,

    #[serde(serialize_with = "round_serialize")]
    withdrawals: f64,

    #[serde(serialize_with = "round_serialize")]
    interest: f64,
}

fn round_serialize<S>(amount: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Serialize to 2 decimal, non-finite values have no decimal form
    match Decimal::from_f64(*amount) {
        Some(amount) => {
            let mut amount = amount.round_dp(2);
            amount.rescale(2);
            s.serialize_str(amount.to_string().as_str())
        }
        None => s.serialize_f64(*amount),
    }
}

impl From<&Account> for Statement {
    fn from(account: &Account) -> Self {
        Self {
            balance: account.balance(),
            deposits: account.total_deposits(),
            withdrawals: account.total_withdrawals(),
            interest: account.total_interest(),
        }
    }
}

impl Statement {
    /// Header line plus a single record
    pub fn to_csv(&self) -> StatementResult<String> {
        let mut bytes = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut bytes);
            wtr.serialize(self)?;
            wtr.flush()?;
        }
        Ok(String::from_utf8(bytes)?)
    }

    pub fn to_json(&self) -> StatementResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn scenario() -> Account {
        let mut account = Account::new(1000, 4.4);
        account.deposit(200);
        account.withdraw(50);
        account.accrue_interest();
        account
    }

    fn rounded(amount: f64) -> Decimal {
        Decimal::from_f64(amount).unwrap().round_dp(2)
    }

    #[test]
    fn statement_mirrors_account_totals() {
        let statement = Statement::from(&scenario());

        assert_eq!(rounded(statement.balance), dec!(1154.22));
        assert_eq!(rounded(statement.deposits), dec!(200));
        assert_eq!(rounded(statement.withdrawals), dec!(50));
        assert_eq!(rounded(statement.interest), dec!(4.22));
    }

    #[test]
    fn csv_has_header_and_rounded_row() {
        let csv = Statement::from(&scenario()).to_csv().unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("balance,deposits,withdrawals,interest"));
        assert_eq!(lines.next(), Some("1154.22,200.00,50.00,4.22"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_uses_rounded_strings() {
        let json = Statement::from(&scenario()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["balance"], "1154.22");
        assert_eq!(value["interest"], "4.22");
        assert_eq!(value["deposits"], "200.00");
    }

    #[test]
    fn overdrawn_balance_keeps_its_sign() {
        let mut account = Account::default();
        account.withdraw(12.346);
        let json = Statement::from(&account).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["balance"], "-12.35");
        assert_eq!(value["withdrawals"], "12.35");
    }
}
