/// Outcome of a store operation once its remote call has resolved.
///
/// A rejection carries the same message the store recorded in its
/// snapshot's `error` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    Fulfilled(T),
    Rejected(String),
}

impl<T> Settled<T> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settled::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Settled::Rejected(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Settled::Fulfilled(value) => Some(value),
            Settled::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Settled::Fulfilled(_) => None,
            Settled::Rejected(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Settled::Fulfilled(value) => Ok(value),
            Settled::Rejected(message) => Err(message),
        }
    }
}
