pub mod account_gateway;
