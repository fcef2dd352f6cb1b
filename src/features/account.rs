/// Annual rate used when no rate is supplied, as a fraction (4.4%)
const DEFAULT_ANNUAL_RATE: f64 = 0.044;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Savings account compounding interest monthly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Account {
    /// Current spendable funds. May go negative, withdrawals are not checked against it
    balance: f64,

    /// Sum of every accepted deposit
    total_deposits: f64,

    /// Sum of every accepted withdrawal
    total_withdrawals: f64,

    /// Sum of every interest amount credited
    total_interest: f64,

    /// Fixed at construction
    monthly_interest_rate: f64,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: 0.0,
            total_deposits: 0.0,
            total_withdrawals: 0.0,
            total_interest: 0.0,
            monthly_interest_rate: DEFAULT_ANNUAL_RATE / MONTHS_PER_YEAR,
        }
    }
}

impl Account {
    /// Opens an account with a starting balance and an annual rate given in percent
    /// (pass `4.4` for 4.4%). Neither value is validated.
    pub fn new(balance: impl Into<f64>, annual_rate_percent: f64) -> Self {
        Self {
            balance: balance.into(),
            monthly_interest_rate: (annual_rate_percent / 100.0) / MONTHS_PER_YEAR,
            ..Self::default()
        }
    }

    /// Credits `amount`. Non-positive amounts are ignored.
    pub fn deposit(&mut self, amount: impl Into<f64>) {
        let amount = amount.into();
        if amount > 0.0 {
            self.balance += amount;
            self.total_deposits += amount;
        }
    }

    /// Debits `amount`, overdraft allowed. Non-positive amounts are ignored.
    pub fn withdraw(&mut self, amount: impl Into<f64>) {
        let amount = amount.into();
        if amount > 0.0 {
            self.balance -= amount;
            self.total_withdrawals += amount;
        }
    }

    /// Applies a single month of compounding. Nothing happens unless the balance is positive.
    pub fn accrue_interest(&mut self) {
        if self.balance > 0.0 {
            let interest = self.balance * self.monthly_interest_rate;
            self.balance += interest;
            self.total_interest += interest;
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn total_deposits(&self) -> f64 {
        self.total_deposits
    }

    pub fn total_withdrawals(&self) -> f64 {
        self.total_withdrawals
    }

    pub fn total_interest(&self) -> f64 {
        self.total_interest
    }

    pub fn monthly_interest_rate(&self) -> f64 {
        self.monthly_interest_rate
    }
}
