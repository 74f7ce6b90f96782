use account_console_api::GatewayError;

/// The store operations backed by a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOperation {
    List,
    GetById,
    Create,
    Update,
    Delete,
}

impl AccountOperation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AccountOperation::List => "Failed to fetch accounts",
            AccountOperation::GetById => "Failed to fetch account",
            AccountOperation::Create => "Failed to create account",
            AccountOperation::Update => "Failed to update account",
            AccountOperation::Delete => "Failed to delete account",
        }
    }

    /// The message recorded in the snapshot when this operation fails.
    /// Never empty.
    pub fn failure_message(&self, error: &GatewayError) -> String {
        if error.detail().trim().is_empty() {
            self.fallback_message().to_string()
        } else {
            error.to_string()
        }
    }
}

impl std::fmt::Display for AccountOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountOperation::List => write!(f, "list"),
            AccountOperation::GetById => write!(f, "get_by_id"),
            AccountOperation::Create => write!(f, "create"),
            AccountOperation::Update => write!(f, "update"),
            AccountOperation::Delete => write!(f, "delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_uses_error_text() {
        let error = GatewayError::NotFound("Account not found".to_string());
        assert_eq!(
            AccountOperation::Delete.failure_message(&error),
            "Not found: Account not found"
        );
    }

    #[test]
    fn test_failure_message_falls_back_when_blank() {
        let error = GatewayError::TransportError(String::new());
        assert_eq!(
            AccountOperation::List.failure_message(&error),
            "Failed to fetch accounts"
        );
    }
}
