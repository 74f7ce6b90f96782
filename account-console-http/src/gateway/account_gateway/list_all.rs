use account_console_api::{Account, GatewayError, GatewayResult};
use account_console_store::{AccountOperation, ListAll};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::repo_impl::AccountGatewayImpl;
use crate::utils::{decode, ensure_success, transport_error};

impl AccountGatewayImpl {
    #[instrument(level = "debug", name = "AccountGatewayImpl::list_all", skip(self))]
    pub(super) async fn list_all_impl(&self) -> GatewayResult<Vec<Account>> {
        let context = AccountOperation::List.fallback_message();
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), "GET /accounts");

        let response = ensure_success(context, response, |_, message| {
            GatewayError::TransportError(message)
        })
        .await?;
        decode(context, response).await
    }
}

#[async_trait]
impl ListAll<Account> for AccountGatewayImpl {
    async fn list_all(&self) -> GatewayResult<Vec<Account>> {
        Self::list_all_impl(self).await
    }
}
