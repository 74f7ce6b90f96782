use account_console_api::GatewayResult;
use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Gateway trait for creating a record from an input projection
///
/// The remote service assigns identity, timestamps and any other server-owned
/// fields, and is the only authority on whether the payload is acceptable.
///
/// # Type Parameters
/// * `D` - The input projection sent to the service
/// * `T` - The record type returned once created
///
/// # Example
/// ```ignore
/// impl Create<CreateAccountData, Account> for AccountGatewayImpl {
///     async fn create(&self, data: CreateAccountData) -> GatewayResult<Account> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<D, T: Identifiable>: Send + Sync {
    /// Create a record
    ///
    /// # Arguments
    /// * `data` - The fields the client is allowed to choose
    ///
    /// # Returns
    /// * `Ok(T)` - The created record with all server-assigned fields populated
    /// * `Err(GatewayError::ValidationError)` - The service rejected the payload
    async fn create(&self, data: D) -> GatewayResult<T>;
}
