pub mod account_store;
pub mod operation;
pub mod settled;
pub mod snapshot;

pub use account_store::*;
pub use operation::*;
pub use settled::*;
pub use snapshot::*;
