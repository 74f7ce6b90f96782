use account_console_api::{Account, GatewayError, GatewayResult};
use account_console_store::{AccountOperation, Load};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::repo_impl::AccountGatewayImpl;
use crate::utils::{decode, ensure_success, transport_error};

impl AccountGatewayImpl {
    #[instrument(level = "debug", name = "AccountGatewayImpl::load", skip(self))]
    pub(super) async fn load_impl(&self, id: i64) -> GatewayResult<Account> {
        let context = AccountOperation::GetById.fallback_message();
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), "GET /accounts/{id}");

        let response = ensure_success(context, response, |_, message| {
            GatewayError::NotFound(message)
        })
        .await?;
        decode(context, response).await
    }
}

#[async_trait]
impl Load<Account> for AccountGatewayImpl {
    async fn load(&self, id: i64) -> GatewayResult<Account> {
        Self::load_impl(self, id).await
    }
}
