pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;
pub mod list_all;
pub mod load;
pub mod create;
pub mod update;
pub mod delete;

pub use repo_impl::AccountGatewayImpl;
