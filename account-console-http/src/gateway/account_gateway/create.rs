use account_console_api::{Account, CreateAccountData, GatewayError, GatewayResult};
use account_console_store::{AccountOperation, Create};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::repo_impl::AccountGatewayImpl;
use crate::utils::{decode, ensure_success, transport_error};

impl AccountGatewayImpl {
    #[instrument(
        level = "debug",
        name = "AccountGatewayImpl::create",
        skip(self, data),
        fields(account_type = %data.account_type, customer_id = data.customer_id)
    )]
    pub(super) async fn create_impl(&self, data: CreateAccountData) -> GatewayResult<Account> {
        let context = AccountOperation::Create.fallback_message();
        let response = self
            .client
            .post(self.collection_url())
            .json(&data)
            .send()
            .await
            .map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), "POST /accounts");

        let response = ensure_success(context, response, |_, message| {
            GatewayError::ValidationError(message)
        })
        .await?;
        decode(context, response).await
    }
}

#[async_trait]
impl Create<CreateAccountData, Account> for AccountGatewayImpl {
    async fn create(&self, data: CreateAccountData) -> GatewayResult<Account> {
        Self::create_impl(self, data).await
    }
}
