use account_console_api::{Account, AccountSummary};
use serde::Serialize;

use crate::models::identifiable::Identifiable;

/// The state the view layer renders from.
///
/// `accounts` holds at most one record per id, in the order the service
/// returned them; records created later are appended. `loading` is shared by
/// every operation and does not say which one is in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub accounts: Vec<Account>,
    pub selected_account: Option<Account>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AccountSnapshot {
    /// Pending transition of every remote operation.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Rejected transition: records the message, keeps the data as it was.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// An operation was dropped before settling; only `loading` changes.
    pub fn abandon(&mut self) {
        self.loading = false;
    }

    /// Replaces the whole collection.
    pub fn apply_listed(&mut self, accounts: Vec<Account>) {
        self.loading = false;
        self.accounts = accounts;
    }

    /// Selects the fetched account; the collection is left alone.
    pub fn apply_loaded(&mut self, account: Account) {
        self.loading = false;
        self.selected_account = Some(account);
    }

    /// Appends the created account. If a concurrent list already brought in
    /// a record with the same id, that record is replaced instead.
    pub fn apply_created(&mut self, account: Account) {
        self.loading = false;
        if let Some(existing) = position_of(&self.accounts, account.get_id()) {
            self.accounts[existing] = account;
        } else {
            self.accounts.push(account);
        }
    }

    /// Replaces the record in place and keeps the selection consistent.
    /// An id missing from the collection leaves the collection untouched.
    pub fn apply_updated(&mut self, account: Account) {
        self.loading = false;
        if let Some(existing) = position_of(&self.accounts, account.get_id()) {
            self.accounts[existing] = account.clone();
        }
        if self.selected_id() == Some(account.get_id()) {
            self.selected_account = Some(account);
        }
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.loading = false;
        self.accounts.retain(|account| account.get_id() != id);
        if self.selected_id() == Some(id) {
            self.selected_account = None;
        }
    }

    pub fn clear_selected_account(&mut self) {
        self.selected_account = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn find(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|account| account.get_id() == id)
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary::from_accounts(&self.accounts)
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected_account.as_ref().map(Identifiable::get_id)
    }
}

fn position_of<T: Identifiable>(items: &[T], id: i64) -> Option<usize> {
    items.iter().position(|item| item.get_id() == id)
}
