//! Test helper module for isolated HTTP gateway tests
//!
//! Every test gets its own mock accounts service, so expectations mounted
//! in one test never leak into another.

use crate::config::GatewayConfig;
use crate::gateway::account_gateway::AccountGatewayImpl;
use crate::http_gateways::HttpGateways;
use account_console_store::AccountStore;
use wiremock::MockServer;

/// Test context holding a mock accounts service and gateways pointed at it
///
/// Mocks are verified (including `expect` counts) when the context is dropped.
pub struct TestContext {
    pub server: MockServer,
    pub gateways: HttpGateways,
}

impl TestContext {
    pub fn account_gateway(&self) -> AccountGatewayImpl {
        self.gateways.account_gateway()
    }

    pub fn account_store(&self) -> AccountStore<AccountGatewayImpl> {
        self.gateways.account_store()
    }
}

/// Setup a test context backed by a fresh mock server
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     Mock::given(method("GET")).and(path("/accounts"))
///         .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
///         .mount(&ctx.server)
///         .await;
///
///     let accounts = ctx.account_gateway().list_all().await?;
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let server = MockServer::start().await;
    let gateways = HttpGateways::new(GatewayConfig::new(server.uri()))?;

    Ok(TestContext { server, gateways })
}
