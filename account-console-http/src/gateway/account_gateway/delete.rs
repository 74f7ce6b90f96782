use account_console_api::{GatewayError, GatewayResult};
use account_console_store::{AccountOperation, Delete};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::repo_impl::AccountGatewayImpl;
use crate::utils::{ensure_success, transport_error};

impl AccountGatewayImpl {
    #[instrument(level = "debug", name = "AccountGatewayImpl::delete", skip(self))]
    pub(super) async fn delete_impl(&self, id: i64) -> GatewayResult<()> {
        let context = AccountOperation::Delete.fallback_message();
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| transport_error(context, e))?;
        debug!(status = %response.status(), "DELETE /accounts/{id}");

        // Any 2xx counts; the service answers 204 with no body.
        ensure_success(context, response, |_, message| GatewayError::NotFound(message)).await?;
        Ok(())
    }
}

#[async_trait]
impl Delete for AccountGatewayImpl {
    async fn delete(&self, id: i64) -> GatewayResult<()> {
        Self::delete_impl(self, id).await
    }
}
