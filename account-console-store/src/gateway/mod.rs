pub mod account_gateway;
pub mod create;
pub mod delete;
pub mod list_all;
pub mod load;
pub mod update;

// Re-exports
pub use account_gateway::*;
pub use create::*;
pub use delete::*;
pub use list_all::*;
pub use load::*;
pub use update::*;
