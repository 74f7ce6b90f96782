pub mod domain;
pub mod error;
pub mod summary;

pub use error::*;
pub use domain::*;
pub use summary::*;
