pub mod config;
pub mod gateway;
pub mod http_gateways;
pub mod utils;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::account_gateway::AccountGatewayImpl;
pub use http_gateways::HttpGateways;

#[cfg(test)]
pub mod test_helper;
