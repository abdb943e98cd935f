//! Error types for the curry engine.
//!
//! The engine itself never fails while merging arguments. Errors only arise
//! from misuse of its Rust surface: a negative arity at construction, or an
//! attempt to keep calling a chain that has already invoked its target.
//! Failures of the wrapped function are never wrapped in these types.

/// Represents errors that can occur when building or driving a curried chain.
///
/// # Examples
///
/// ```rust
/// use slotted::curry::{Curried, CurryError, Invocation};
///
/// let error = Curried::try_new(|_: Invocation<i32>| 0, -1).unwrap_err();
/// assert_eq!(error, CurryError::NegativeArity { arity: -1 });
/// assert_eq!(format!("{error}"), "invalid arity -1: arity must be non-negative");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurryError {
    /// The requested arity was negative.
    NegativeArity {
        /// The rejected arity.
        arity: isize,
    },
    /// The chain already invoked its target and cannot accept more arguments.
    AlreadyInvoked,
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeArity { arity } => write!(
                formatter,
                "invalid arity {arity}: arity must be non-negative"
            ),
            Self::AlreadyInvoked => write!(
                formatter,
                "curried function already invoked: start a new chain from the entry point"
            ),
        }
    }
}

impl std::error::Error for CurryError {}
