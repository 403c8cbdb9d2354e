use thiserror::Error;

/// Errors produced by [`Greeter`](crate::Greeter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    /// The caller supplied an empty name.
    #[error("empty name")]
    EmptyName,
}
