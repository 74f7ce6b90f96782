use account_console_store::AccountStore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::info;

use crate::config::{ConfigError, GatewayConfig};
use crate::gateway::account_gateway::AccountGatewayImpl;

const USER_AGENT: &str = concat!("account-console/", env!("CARGO_PKG_VERSION"));

/// Builds gateways that share one HTTP client and connection pool.
pub struct HttpGateways {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateways {
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        info!(base_url = %config.base_url, "accounts service gateway configured");
        Ok(Self { client, config })
    }

    /// Gateways for the service named by the environment (see [`GatewayConfig::from_env`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn account_gateway(&self) -> AccountGatewayImpl {
        AccountGatewayImpl::new(self.client.clone(), self.config.base_url.clone())
    }

    /// A fresh, empty store for one application session.
    pub fn account_store(&self) -> AccountStore<AccountGatewayImpl> {
        AccountStore::new(self.account_gateway())
    }
}
