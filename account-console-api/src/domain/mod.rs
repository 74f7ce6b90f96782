pub mod account;
pub mod account_type;
pub mod create_account;
pub mod update_account;

pub use account::*;
pub use account_type::*;
pub use create_account::*;
pub use update_account::*;
