use account_console_api::GatewayResult;
use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Gateway trait for fetching the complete set of records
///
/// The remote service returns every record in one response: there is no
/// paging and no filtering. The order of the result is the order the
/// service chose.
///
/// # Type Parameters
/// * `T` - The record type, identified by `Identifiable`
///
/// # Example
/// ```ignore
/// impl ListAll<Account> for AccountGatewayImpl {
///     async fn list_all(&self) -> GatewayResult<Vec<Account>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ListAll<T: Identifiable>: Send + Sync {
    /// Fetch all records
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Every record, in service order
    /// * `Err(GatewayError::TransportError)` - The service was unreachable or answered non-2xx
    async fn list_all(&self) -> GatewayResult<Vec<T>>;
}
