//! Test support: account fixtures and an in-memory gateway.
//!
//! `InMemoryAccountGateway` behaves like the remote service for the five
//! account operations, and can be paused (calls wait until resumed) or told
//! to fail its next call, so store transitions can be observed mid-flight.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use account_console_api::{
    Account, AccountType, CreateAccountData, GatewayError, GatewayResult, UpdateAccountData,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Semaphore;

use crate::gateway::{Create, Delete, ListAll, Load, Update};

pub const TEST_TIMESTAMP: &str = "2024-01-01T00:00:00";

pub fn create_test_account(id: i64) -> Account {
    Account {
        id,
        account_number: format!("ACC{id:010}"),
        account_type: AccountType::Savings,
        currency: "USD".to_string(),
        balance: Decimal::from(100),
        interest_rate: Decimal::new(15, 1),
        customer_id: 1,
        created_at: TEST_TIMESTAMP.to_string(),
        updated_at: TEST_TIMESTAMP.to_string(),
    }
}

#[derive(Default)]
struct InMemoryState {
    accounts: Vec<Account>,
    next_id: i64,
    failures: VecDeque<GatewayError>,
    gate: Option<Arc<Semaphore>>,
}

#[derive(Default)]
pub struct InMemoryAccountGateway {
    state: Mutex<InMemoryState>,
}

impl InMemoryAccountGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts: Vec<Account> = accounts.into_iter().collect();
        let next_id = accounts.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(InMemoryState {
                accounts,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Current remote contents.
    pub fn accounts(&self) -> Vec<Account> {
        self.state.lock().unwrap().accounts.clone()
    }

    /// Makes the next call fail with `error` instead of touching the data.
    pub fn fail_next(&self, error: GatewayError) {
        self.state.lock().unwrap().failures.push_back(error);
    }

    /// Holds every call until [`InMemoryAccountGateway::resume`].
    pub fn pause(&self) {
        self.state.lock().unwrap().gate = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn resume(&self) {
        if let Some(gate) = self.state.lock().unwrap().gate.take() {
            gate.close();
        }
    }

    async fn enter(&self) -> GatewayResult<()> {
        let gate = self.state.lock().unwrap().gate.clone();
        if let Some(gate) = gate {
            // Closing the semaphore is the release signal.
            let _ = gate.acquire().await;
        }
        match self.state.lock().unwrap().failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn not_found(id: i64) -> GatewayError {
    GatewayError::NotFound(format!("Account {id} not found"))
}

#[async_trait]
impl ListAll<Account> for InMemoryAccountGateway {
    async fn list_all(&self) -> GatewayResult<Vec<Account>> {
        self.enter().await?;
        Ok(self.accounts())
    }
}

#[async_trait]
impl Load<Account> for InMemoryAccountGateway {
    async fn load(&self, id: i64) -> GatewayResult<Account> {
        self.enter().await?;
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl Create<CreateAccountData, Account> for InMemoryAccountGateway {
    async fn create(&self, data: CreateAccountData) -> GatewayResult<Account> {
        self.enter().await?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut account = create_test_account(state.next_id);
        account.account_type = data.account_type;
        account.currency = data.currency;
        account.interest_rate = data.interest_rate;
        account.customer_id = data.customer_id;
        account.balance = Decimal::ZERO;
        state.accounts.push(account.clone());
        Ok(account)
    }
}

#[async_trait]
impl Update<UpdateAccountData, Account> for InMemoryAccountGateway {
    async fn update(&self, id: i64, data: UpdateAccountData) -> GatewayResult<Account> {
        self.enter().await?;
        let mut state = self.state.lock().unwrap();
        let account = state
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        if let Some(account_type) = data.account_type {
            account.account_type = account_type;
        }
        if let Some(currency) = data.currency {
            account.currency = currency;
        }
        if let Some(interest_rate) = data.interest_rate {
            account.interest_rate = interest_rate;
        }
        Ok(account.clone())
    }
}

#[async_trait]
impl Delete for InMemoryAccountGateway {
    async fn delete(&self, id: i64) -> GatewayResult<()> {
        self.enter().await?;
        let mut state = self.state.lock().unwrap();
        let before = state.accounts.len();
        state.accounts.retain(|a| a.id != id);
        if state.accounts.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
