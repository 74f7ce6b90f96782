use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::account_type::AccountType;

/// Currencies offered by the account forms.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Currency the accounts service assumes when none is given.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Input for opening a new account.
///
/// The service assigns `id`, `account_number`, `balance` and the timestamps.
/// Validation rules are advisory only: they drive form feedback, and the
/// service remains the authority that accepts or rejects the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateAccountData {
    #[validate(custom(function = "validate_account_type"))]
    pub account_type: AccountType,
    #[serde(default = "default_currency")]
    #[validate(custom(function = "validate_currency"))]
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_interest_rate"))]
    pub interest_rate: Decimal,
    #[validate(range(min = 1, message = "Customer ID must be positive"))]
    pub customer_id: i64,
}

impl CreateAccountData {
    pub fn new(account_type: AccountType, interest_rate: Decimal, customer_id: i64) -> Self {
        Self {
            account_type,
            currency: default_currency(),
            interest_rate,
            customer_id,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Whether the forms offer this currency. Other codes are passed through to
/// the service untouched.
pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&code)
}

pub fn validate_account_type(account_type: &AccountType) -> Result<(), ValidationError> {
    if account_type.is_known() {
        Ok(())
    } else {
        Err(ValidationError::new("account_type")
            .with_message(Cow::Borrowed("Account type is required")))
    }
}

pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if currency.trim().is_empty() {
        Err(ValidationError::new("currency").with_message(Cow::Borrowed("Currency is required")))
    } else {
        Ok(())
    }
}

pub fn validate_interest_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < Decimal::ZERO {
        return Err(ValidationError::new("interest_rate_min")
            .with_message(Cow::Borrowed("Interest rate must be positive")));
    }
    if *rate > Decimal::ONE_HUNDRED {
        return Err(ValidationError::new("interest_rate_max")
            .with_message(Cow::Borrowed("Interest rate cannot exceed 100%")));
    }
    Ok(())
}
