use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::account_type::AccountType;

/// A financial account as returned by the accounts service.
///
/// Every field is server-owned. `balance` is authoritative on the server and
/// is never computed on the client. Timestamps are kept exactly as the
/// service formatted them; use [`Account::created_at_parsed`] and
/// [`Account::updated_at_parsed`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub account_number: String,
    pub account_type: AccountType,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Percentage, 0 to 100 by convention.
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
    pub customer_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Account {
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_server_timestamp(&self.created_at)
    }

    pub fn updated_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_server_timestamp(&self.updated_at)
    }

    /// Balance rounded to cents followed by the currency code, e.g. `100.00 USD`.
    pub fn formatted_balance(&self) -> String {
        let rounded = self
            .balance
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2} {}", rounded, self.currency)
    }
}

/// Parses a timestamp as emitted by the accounts service.
///
/// Accepts RFC 3339 with an offset, or a naive ISO-8601 date-time (with `T`
/// or a space separator, optional fractional seconds) which is read as UTC.
pub fn parse_server_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
