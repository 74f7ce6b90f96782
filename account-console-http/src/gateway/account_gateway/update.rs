use account_console_api::{Account, GatewayError, GatewayResult, UpdateAccountData};
use account_console_store::{AccountOperation, Update};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use super::repo_impl::AccountGatewayImpl;
use crate::utils::{decode, ensure_success, transport_error};

impl AccountGatewayImpl {
    #[instrument(level = "debug", name = "AccountGatewayImpl::update", skip(self, data))]
    pub(super) async fn update_impl(
        &self,
        id: i64,
        data: UpdateAccountData,
    ) -> GatewayResult<Account> {
        let context = AccountOperation::Update.fallback_message();
        let response = self
            .client
            .put(self.item_url(id))
            .json(&data)
            .send()
            .await
            .map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), "PUT /accounts/{id}");

        let response = ensure_success(context, response, |status, message| {
            if status == StatusCode::NOT_FOUND {
                GatewayError::NotFound(message)
            } else {
                GatewayError::ValidationError(message)
            }
        })
        .await?;
        decode(context, response).await
    }
}

#[async_trait]
impl Update<UpdateAccountData, Account> for AccountGatewayImpl {
    async fn update(&self, id: i64, data: UpdateAccountData) -> GatewayResult<Account> {
        Self::update_impl(self, id, data).await
    }
}
