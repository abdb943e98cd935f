//! Placeholder-aware currying.
//!
//! This module turns a function of fixed arity into a *partial-application
//! chain*. Every call into the chain either invokes the wrapped function or
//! returns a new [`Curried`] continuation that remembers everything supplied
//! so far.
//!
//! # Overview
//!
//! - [`curry`] / [`Curried::new`]: build the entry point of a chain
//! - [`Curried::call`]: feed arguments, get an [`Application`] back
//! - [`Argument`]: one slot, a value or the placeholder
//! - [`args!`](crate::args): build an [`Arguments`] list, `__` marks a skipped slot
//! - [`Invocation`]: what the wrapped function receives once the chain is ready
//!
//! # Placeholder substitution
//!
//! Each call merges the new arguments into the pending list:
//!
//! 1. Placeholder slots of the pending list are filled left to right with the
//!    new arguments, in the order they were supplied. A placeholder supplied
//!    in the new call is used as an ordinary filler, so the slot stays open.
//! 2. Unused new arguments are appended.
//! 3. The chain is ready once the first `arity` slots all hold values. Slots
//!    past the arity are never inspected and are forwarded as they are.
//!
//! ```text
//! arity 3:  [__, __, 3, 4] <- (1, __)  =>  [1, __, 3, 4]
//!           [1, __, 3, 4]  <- (2, 5)   =>  [1, 2, 3, 4, 5]  => invoke
//! ```
//!
//! # Examples
//!
//! ```
//! use slotted::args;
//! use slotted::curry::{Invocation, curry};
//!
//! fn sum(invocation: Invocation<i32>) -> i32 {
//!     invocation.required().iter().sum()
//! }
//!
//! let curried = curry(sum, 3);
//!
//! assert_eq!(curried.call(args![1, 2, 3]).complete(), Some(6));
//!
//! let waiting = curried.call(args![1]).call(args![2]).unwrap();
//! assert_eq!(waiting.call(args![3]).unwrap().complete(), Some(6));
//! ```
//!
//! # Laws
//!
//! - **Full application**: `curry(f, n).call(a1..an) == f(a1..an)`
//! - **Grouping independence**: any split of `a1..an` over consecutive calls
//!   yields the same result as a single call
//! - **Persistence**: calling a continuation never changes it

mod argument;
mod curried;
mod error;
mod invocation;

pub use argument::{__, Argument, Arguments, PLACEHOLDER, Placeholder};
pub use curried::{Application, Curried, curry};
pub use error::CurryError;
pub use invocation::Invocation;

pub use crate::Shareable;
