//! # slotted
//!
//! Placeholder-aware partial application for fixed-arity functions.
//!
//! ## Overview
//!
//! The centerpiece of this library is the curry engine: it turns a function of
//! known arity into a chain that can be fed its arguments over several calls,
//! in any grouping, and out of order through placeholder slots. Alongside it
//! live a few small, independent helpers:
//!
//! - **Curry engine**: [`curry::curry`], [`curry::Curried`], the `args!` macro
//!   and the `__` placeholder
//! - **`curry!` macro**: derives the arity of a closure at compile time
//! - **Simple curry**: value-only accumulation without placeholders
//! - **Flatten**: depth-limited flattening of nested lists
//! - **Throttle**: time-windowed call-rate limiting
//!
//! ## Feature Flags
//!
//! - `curry`: The curry engine
//! - `derive`: The `curry!` procedural macro
//! - `simple`: Simple (placeholder-free) curry
//! - `flatten`: Nested list flattening
//! - `throttle`: Call-rate limiter
//! - `arc`: Thread-shareable chains (`Arc` instead of `Rc`)
//! - `serde`: Serialization of argument lists and nested lists
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use slotted::args;
//! use slotted::curry::{Invocation, curry};
//!
//! let label = curry(
//!     |invocation: Invocation<i32>| {
//!         let values = invocation.required();
//!         format!("{}_{}_{}", values[0], values[1], values[2])
//!     },
//!     3,
//! );
//!
//! let result = label
//!     .call(args![__, __, 3, 4])
//!     .call(args![1, __])
//!     .and_then(|application| application.call(args![2, 5]))
//!     .map(|application| application.complete());
//!
//! assert_eq!(result, Ok(Some("1_2_3".to_string())));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the types of every enabled module.
///
/// # Usage
///
/// ```rust
/// use slotted::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "simple")]
    pub use crate::simple::*;

    #[cfg(feature = "flatten")]
    pub use crate::flatten::*;

    #[cfg(feature = "throttle")]
    pub use crate::throttle::*;
}

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "simple")]
pub mod simple;

#[cfg(feature = "flatten")]
pub mod flatten;

#[cfg(feature = "throttle")]
pub mod throttle;

#[cfg(feature = "derive")]
pub use slotted_derive::curry;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, so chains can
/// be sent to and shared between threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(all(feature = "arc", any(feature = "curry", feature = "simple")))]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(all(not(feature = "arc"), any(feature = "curry", feature = "simple")))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Thread-safety requirement placed on wrapped functions.
///
/// With the `arc` feature this is `Send + Sync`; otherwise every type
/// satisfies it.
#[cfg(all(feature = "arc", any(feature = "curry", feature = "simple")))]
pub trait Shareable: Send + Sync {}

#[cfg(all(feature = "arc", any(feature = "curry", feature = "simple")))]
impl<X: Send + Sync + ?Sized> Shareable for X {}

/// Thread-safety requirement placed on wrapped functions.
///
/// With the `arc` feature this is `Send + Sync`; otherwise every type
/// satisfies it.
#[cfg(all(not(feature = "arc"), any(feature = "curry", feature = "simple")))]
pub trait Shareable {}

#[cfg(all(not(feature = "arc"), any(feature = "curry", feature = "simple")))]
impl<X: ?Sized> Shareable for X {}
