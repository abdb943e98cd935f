//! Procedural macros for slotted.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Wraps a closure or function in a placeholder-aware curried
//!   chain, counting its arity at compile time
//!
//! # Example
//!
//! ```rust,ignore
//! use slotted::{args, curry};
//!
//! let label = curry!(|a: i32, b: i32, c: i32| format!("{a}_{b}_{c}"));
//!
//! let partial = label.call(args![__, 2]).partial().unwrap();
//! assert_eq!(partial.call(args![1, 3]).complete(), Some("1_2_3".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Wraps a closure or function in a `slotted::curry::Curried` chain.
///
/// The arity is fixed at compile time: for a closure it is the number of
/// parameters, for a function path it is the integer literal given after it.
/// The resulting chain accepts its arguments over any number of calls, with
/// `__` placeholders reserving positions to be filled later.
///
/// # Usage
///
/// ```rust,ignore
/// use slotted::{args, curry};
///
/// // With a closure
/// let add = curry!(|a: i32, b: i32| a + b);
/// assert_eq!(add.call(args![5, 3]).complete(), Some(8));
///
/// // Partial application, filling the second slot first
/// let subtract = curry!(|a: i32, b: i32| a - b);
/// let minus_one = subtract.call(args![__, 1]).partial().unwrap();
/// assert_eq!(minus_one.call(args![10]).complete(), Some(9));
/// ```
///
/// # Wrapping existing functions
///
/// ```rust,ignore
/// use slotted::{args, curry};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// assert_eq!(curried.call(args![2]).call(args![3, 4]).unwrap().complete(), Some(24));
/// ```
///
/// # Type constraints
///
/// - All parameters share one type, which must implement `Clone`
/// - Closure parameters need type annotations unless the surrounding code
///   pins the argument type
/// - Values supplied beyond the arity are not passed to the wrapped function
///
/// # Errors
///
/// Fails to compile when the arity is not an integer literal, when the
/// function is not a path, or when the macro receives anything other than a
/// closure or a `function, arity` pair.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
