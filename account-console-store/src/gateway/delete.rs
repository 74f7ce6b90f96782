use account_console_api::GatewayResult;
use async_trait::async_trait;

/// Gateway trait for deleting a record by its ID
///
/// # Example
/// ```ignore
/// impl Delete for AccountGatewayImpl {
///     async fn delete(&self, id: i64) -> GatewayResult<()> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Delete: Send + Sync {
    /// Delete a record by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The identifier of the record to delete
    ///
    /// # Returns
    /// * `Ok(())` - The record no longer exists remotely
    /// * `Err(GatewayError::NotFound)` - The record was already absent
    async fn delete(&self, id: i64) -> GatewayResult<()>;
}
