pub mod identifiable;

pub use identifiable::*;
