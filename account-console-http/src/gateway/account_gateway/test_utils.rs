use serde_json::{json, Value};

/// An account as the service would serialize it.
pub fn account_json(id: i64, balance: f64) -> Value {
    json!({
        "id": id,
        "account_number": format!("ACC{id:010}"),
        "account_type": "savings",
        "currency": "USD",
        "balance": balance,
        "interest_rate": 1.5,
        "customer_id": 7,
        "created_at": "2024-01-01T09:30:00.000000",
        "updated_at": "2024-01-01T09:30:00.000000"
    })
}

pub fn not_found_json() -> Value {
    json!({ "detail": "Account not found" })
}
