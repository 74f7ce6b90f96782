use account_console_api::Account;

/// Trait for records that carry a server-assigned numeric identity
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> i64;
}

impl Identifiable for Account {
    fn get_id(&self) -> i64 {
        self.id
    }
}
