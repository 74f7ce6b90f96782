use account_console_api::GatewayResult;
use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Gateway trait for fetching a single record by its ID
///
/// # Type Parameters
/// * `T` - The record type, identified by `Identifiable`
///
/// # Example
/// ```ignore
/// impl Load<Account> for AccountGatewayImpl {
///     async fn load(&self, id: i64) -> GatewayResult<Account> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Fetch a record by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The server-assigned identifier
    ///
    /// # Returns
    /// * `Ok(T)` - The record
    /// * `Err(GatewayError::NotFound)` - No record has this identifier
    async fn load(&self, id: i64) -> GatewayResult<T>;
}
