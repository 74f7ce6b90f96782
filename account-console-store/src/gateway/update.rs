use account_console_api::GatewayResult;
use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Gateway trait for partially updating a record
///
/// Fields absent from the projection are left unchanged by the service.
///
/// # Type Parameters
/// * `D` - The partial projection sent to the service
/// * `T` - The record type returned after the update
///
/// # Example
/// ```ignore
/// impl Update<UpdateAccountData, Account> for AccountGatewayImpl {
///     async fn update(&self, id: i64, data: UpdateAccountData) -> GatewayResult<Account> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Update<D, T: Identifiable>: Send + Sync {
    /// Update a record by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The identifier of the record to change
    /// * `data` - The fields to change
    ///
    /// # Returns
    /// * `Ok(T)` - The record as stored after the update
    /// * `Err(GatewayError::NotFound)` - No record has this identifier
    /// * `Err(GatewayError::ValidationError)` - The service rejected the new values
    async fn update(&self, id: i64, data: D) -> GatewayResult<T>;
}
