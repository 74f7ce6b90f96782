use std::future::Future;
use std::sync::Arc;

use account_console_api::{Account, CreateAccountData, GatewayResult, UpdateAccountData};
use tokio::sync::watch;
use tracing::{debug, debug_span, warn, Instrument};

use crate::gateway::AccountGateway;

use super::operation::AccountOperation;
use super::settled::Settled;
use super::snapshot::AccountSnapshot;

/// Observable, in-memory holder of the accounts fetched from the remote
/// service, plus the request status flags.
///
/// Construct one per application session and hand it to the views. Each
/// remote operation marks the snapshot as loading (and clears any previous
/// error) as soon as it is invoked, before its future is first polled, then
/// applies its merge rule when the gateway call resolves. Every transition
/// is published as a whole to [`AccountStore::subscribe`] receivers.
///
/// Several operations may be in flight at once. There is no cancellation or
/// de-duplication: whichever resolves last wins, and `loading` drops to
/// `false` on the first resolution even if another call is still pending.
/// Dropping a returned future before it settles clears `loading` and leaves
/// the data and `error` as they were.
pub struct AccountStore<G> {
    gateway: Arc<G>,
    state: watch::Sender<AccountSnapshot>,
}

impl<G: AccountGateway> AccountStore<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_shared_gateway(Arc::new(gateway))
    }

    pub fn with_shared_gateway(gateway: Arc<G>) -> Self {
        let (state, _) = watch::channel(AccountSnapshot::default());
        Self { gateway, state }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> AccountSnapshot {
        self.state.borrow().clone()
    }

    /// A receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AccountSnapshot> {
        self.state.subscribe()
    }

    /// Fetches every account and replaces the collection with the result.
    pub fn list(&self) -> impl Future<Output = Settled<Vec<Account>>> + '_ {
        let pending = self.begin(AccountOperation::List);
        let call = self.gateway.list_all();
        self.settle(pending, call, |snapshot, accounts| {
            snapshot.apply_listed(accounts.clone())
        })
    }

    /// Fetches one account into `selected_account`.
    pub fn get_by_id(&self, id: i64) -> impl Future<Output = Settled<Account>> + '_ {
        let pending = self.begin(AccountOperation::GetById);
        let call = self.gateway.load(id);
        self.settle(pending, call, |snapshot, account| {
            snapshot.apply_loaded(account.clone())
        })
    }

    pub fn create(&self, data: CreateAccountData) -> impl Future<Output = Settled<Account>> + '_ {
        let pending = self.begin(AccountOperation::Create);
        let call = self.gateway.create(data);
        self.settle(pending, call, |snapshot, account| {
            snapshot.apply_created(account.clone())
        })
    }

    pub fn update(
        &self,
        id: i64,
        data: UpdateAccountData,
    ) -> impl Future<Output = Settled<Account>> + '_ {
        let pending = self.begin(AccountOperation::Update);
        let call = self.gateway.update(id, data);
        self.settle(pending, call, |snapshot, account| {
            snapshot.apply_updated(account.clone())
        })
    }

    /// Deletes an account; resolves to the id that was removed.
    pub fn delete(&self, id: i64) -> impl Future<Output = Settled<i64>> + '_ {
        let pending = self.begin(AccountOperation::Delete);
        let call = self.gateway.delete(id);
        let call = async move { call.await.map(|()| id) };
        self.settle(pending, call, |snapshot, id| snapshot.apply_deleted(*id))
    }

    pub fn clear_selected_account(&self) {
        self.state.send_modify(AccountSnapshot::clear_selected_account);
    }

    pub fn clear_error(&self) {
        self.state.send_modify(AccountSnapshot::clear_error);
    }

    fn begin(&self, operation: AccountOperation) -> Pending<'_> {
        debug!(%operation, "account operation pending");
        self.state.send_modify(AccountSnapshot::begin);
        Pending {
            state: &self.state,
            operation,
            settled: false,
        }
    }

    fn settle<'a, T, F, A>(
        &'a self,
        mut pending: Pending<'a>,
        call: F,
        apply: A,
    ) -> impl Future<Output = Settled<T>> + 'a
    where
        T: 'a,
        F: Future<Output = GatewayResult<T>> + 'a,
        A: FnOnce(&mut AccountSnapshot, &T) + 'a,
    {
        let operation = pending.operation;
        async move {
            let result = call.await;
            pending.settled = true;
            match result {
                Ok(value) => {
                    self.state.send_modify(|snapshot| apply(snapshot, &value));
                    debug!(%operation, "account operation fulfilled");
                    Settled::Fulfilled(value)
                }
                Err(error) => {
                    let message = operation.failure_message(&error);
                    warn!(%operation, kind = error.kind(), %error, "account operation rejected");
                    self.state.send_modify(|snapshot| snapshot.fail(message.clone()));
                    Settled::Rejected(message)
                }
            }
        }
        .instrument(debug_span!("account_store", %operation))
    }
}

/// An invoked operation that has not settled yet. Dropping it unsettled
/// ends the loading state.
struct Pending<'a> {
    state: &'a watch::Sender<AccountSnapshot>,
    operation: AccountOperation,
    settled: bool,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!(operation = %self.operation, "account operation abandoned");
            self.state.send_modify(AccountSnapshot::abandon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_account, InMemoryAccountGateway};
    use account_console_api::{AccountType, GatewayError};
    use rust_decimal::Decimal;
    use tokio_test::{assert_pending, assert_ready, task};

    fn seeded_store(ids: &[i64]) -> AccountStore<InMemoryAccountGateway> {
        let gateway =
            InMemoryAccountGateway::with_accounts(ids.iter().map(|id| create_test_account(*id)));
        AccountStore::new(gateway)
    }

    #[tokio::test]
    async fn test_list_replaces_accounts() {
        let mut first = create_test_account(1);
        first.balance = Decimal::new(1000, 1);
        let mut second = create_test_account(2);
        second.balance = Decimal::new(500, 1);
        let store = AccountStore::new(InMemoryAccountGateway::with_accounts(vec![
            first.clone(),
            second.clone(),
        ]));

        let settled = store.list().await;

        assert_eq!(settled, Settled::Fulfilled(vec![first.clone(), second.clone()]));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.accounts, vec![first, second]);
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.summary().total_balance, Decimal::from(150));
    }

    #[tokio::test]
    async fn test_create_appends_returned_account() {
        let store = seeded_store(&[1, 2]);
        store.list().await;

        let data = CreateAccountData::new(AccountType::Savings, Decimal::new(25, 1), 7)
            .with_currency("USD");
        let created = store.create(data).await.ok().unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.customer_id, 7);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.accounts.len(), 3);
        assert_eq!(snapshot.accounts.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_identity() {
        let store = seeded_store(&[1, 2, 3]);
        store.list().await;
        let before = store.snapshot().accounts[1].clone();

        let settled = store
            .update(2, UpdateAccountData::default().with_interest_rate(Decimal::from(3)))
            .await;

        assert!(settled.is_fulfilled());
        let snapshot = store.snapshot();
        let after = &snapshot.accounts[1];
        assert_eq!(after.id, 2);
        assert_eq!(after.interest_rate, Decimal::from(3));
        assert_eq!(after.account_number, before.account_number);
        assert_eq!(after.currency, before.currency);
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_accounts() {
        let store = seeded_store(&[2, 3]);
        store.list().await;
        let before = store.snapshot().accounts;

        let settled = store.delete(1).await;

        let snapshot = store.snapshot();
        assert!(settled.is_rejected());
        assert_eq!(snapshot.accounts, before);
        assert!(!snapshot.loading);
        let message = snapshot.error.unwrap();
        assert!(!message.is_empty());
        assert_eq!(settled.error(), Some(message.as_str()));
    }

    #[tokio::test]
    async fn test_delete_clears_selection() {
        let store = seeded_store(&[1, 2]);
        store.list().await;
        store.get_by_id(1).await;
        assert_eq!(store.snapshot().selected_account.map(|a| a.id), Some(1));

        assert_eq!(store.delete(1).await, Settled::Fulfilled(1));

        let snapshot = store.snapshot();
        assert!(snapshot.find(1).is_none());
        assert!(snapshot.selected_account.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_missing_sets_error() {
        let store = seeded_store(&[1]);
        store.list().await;

        let settled = store.get_by_id(99).await;

        assert!(settled.is_rejected());
        let snapshot = store.snapshot();
        assert!(snapshot.error.is_some());
        assert!(snapshot.selected_account.is_none());
        assert_eq!(snapshot.accounts.len(), 1);
    }

    #[tokio::test]
    async fn test_update_refreshes_selected_account() {
        let store = seeded_store(&[1, 2]);
        store.list().await;
        store.get_by_id(2).await;

        store
            .update(2, UpdateAccountData::default().with_currency("EUR"))
            .await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.selected_account.as_ref().map(|a| a.currency.as_str()), Some("EUR"));
        assert_eq!(snapshot.find(2).map(|a| a.currency.as_str()), Some("EUR"));
    }

    #[test]
    fn test_loading_brackets_the_remote_call() {
        let store = seeded_store(&[1]);
        store.gateway().pause();
        assert!(!store.snapshot().loading);

        let mut pending = task::spawn(store.list());
        assert!(store.snapshot().loading);
        assert_pending!(pending.poll());
        assert!(store.snapshot().loading);

        store.gateway().resume();
        assert!(pending.is_woken());
        let settled = assert_ready!(pending.poll());
        assert!(settled.is_fulfilled());
        assert!(!store.snapshot().loading);
    }

    #[test]
    fn test_invocation_clears_previous_error() {
        let store = seeded_store(&[1]);
        store
            .gateway()
            .fail_next(GatewayError::TransportError("Failed to fetch accounts".to_string()));
        let settled = tokio_test::block_on(store.list());
        assert!(settled.is_rejected());
        assert!(store.snapshot().error.is_some());

        store.gateway().pause();
        let mut pending = task::spawn(store.get_by_id(1));
        let snapshot = store.snapshot();
        assert!(snapshot.error.is_none());
        assert!(snapshot.loading);

        store
            .gateway()
            .fail_next(GatewayError::NotFound("Account not found".to_string()));
        store.gateway().resume();
        let settled = assert_ready!(pending.poll());
        assert_eq!(settled, Settled::Rejected("Not found: Account not found".to_string()));
        assert_eq!(
            store.snapshot().error.as_deref(),
            Some("Not found: Account not found")
        );
    }

    #[tokio::test]
    async fn test_subscribers_observe_pending_then_settled() {
        let store = seeded_store(&[1, 2]);
        let mut receiver = store.subscribe();
        store.gateway().pause();

        let list = store.list();
        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().loading);

        store.gateway().resume();
        list.await;

        receiver.changed().await.unwrap();
        let snapshot = receiver.borrow_and_update().clone();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_operations_all_apply() {
        let store = seeded_store(&[1, 2]);
        store.list().await;

        let data = CreateAccountData::new(AccountType::Checking, Decimal::ONE, 4);
        let (created, deleted) = tokio::join!(store.create(data), store.delete(1));

        assert!(created.is_fulfilled());
        assert!(deleted.is_fulfilled());
        let snapshot = store.snapshot();
        let ids: Vec<i64> = snapshot.accounts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!snapshot.loading);
    }

    #[test]
    fn test_dropped_operation_ends_loading() {
        let store = seeded_store(&[1]);
        tokio_test::block_on(store.list());
        let before = store.snapshot();

        let never_polled = store.list();
        assert!(store.snapshot().loading);
        drop(never_polled);
        assert_eq!(store.snapshot(), before);

        store.gateway().pause();
        let mut in_flight = task::spawn(store.get_by_id(1));
        assert_pending!(in_flight.poll());
        assert!(store.snapshot().loading);
        drop(in_flight);

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.selected_account.is_none());
        assert_eq!(snapshot.accounts, before.accounts);
    }

    #[tokio::test]
    async fn test_local_resets() {
        let store = seeded_store(&[1]);
        store.get_by_id(1).await;
        store.get_by_id(5).await;
        let snapshot = store.snapshot();
        assert!(snapshot.error.is_some());
        assert!(snapshot.selected_account.is_some());

        store.clear_error();
        assert!(store.snapshot().error.is_none());
        assert!(store.snapshot().selected_account.is_some());

        store.clear_selected_account();
        assert!(store.snapshot().selected_account.is_none());
    }
}
