use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::account_type::AccountType;
use super::create_account::{validate_account_type, validate_currency, validate_interest_rate};

/// Partial update of an account's editable attributes.
///
/// Absent fields are left out of the request body, so the service keeps
/// their current values. `balance`, `customer_id` and identity fields cannot
/// be changed through this path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub interest_rate: Option<Decimal>,
}

impl UpdateAccountData {
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_interest_rate(mut self, interest_rate: Decimal) -> Self {
        self.interest_rate = Some(interest_rate);
        self
    }

    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.account_type.is_none() && self.currency.is_none() && self.interest_rate.is_none()
    }
}

// Same advisory rules as account creation, applied to the fields present.
impl Validate for UpdateAccountData {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(account_type) = &self.account_type {
            if let Err(e) = validate_account_type(account_type) {
                errors.add("account_type", e);
            }
        }
        if let Some(currency) = &self.currency {
            if let Err(e) = validate_currency(currency) {
                errors.add("currency", e);
            }
        }
        if let Some(rate) = &self.interest_rate {
            if let Err(e) = validate_interest_rate(rate) {
                errors.add("interest_rate", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
