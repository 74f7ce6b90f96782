pub mod gateway;
pub mod models;
pub mod store;

pub use gateway::*;
pub use models::*;
pub use store::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
