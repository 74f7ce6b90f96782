use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

/// The kind of account, as named by the accounts service.
///
/// The four known kinds are a convention, not a client-side rule: any other
/// value the service returns is kept verbatim in [`AccountType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountType {
    Savings,
    Checking,
    FixedDeposit,
    Loan,
    Other(String),
}

impl AccountType {
    /// The account types offered by the create and edit forms.
    pub const KNOWN: [AccountType; 4] = [
        AccountType::Savings,
        AccountType::Checking,
        AccountType::FixedDeposit,
        AccountType::Loan,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
            AccountType::FixedDeposit => "fixed_deposit",
            AccountType::Loan => "loan",
            AccountType::Other(value) => value,
        }
    }

    /// Human-readable label, as shown in form selectors.
    pub fn label(&self) -> &str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::FixedDeposit => "Fixed Deposit",
            AccountType::Loan => "Loan",
            AccountType::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AccountType::Other(_))
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "savings" => AccountType::Savings,
            "checking" => AccountType::Checking,
            "fixed_deposit" => AccountType::FixedDeposit,
            "loan" => AccountType::Loan,
            other => AccountType::Other(other.to_string()),
        })
    }
}

impl Serialize for AccountType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        Ok(AccountType::from_str(&value_str).unwrap_or_else(|never| match never {}))
    }
}
