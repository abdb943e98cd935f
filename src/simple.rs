//! Simple currying without placeholders.
//!
//! [`SimpleCurried`] collects plain values over any number of calls and runs
//! the wrapped function as soon as at least `arity` values have arrived. There
//! is no way to skip a position: values land in the order they are supplied.
//! Use [`crate::curry`] when slots need to be filled out of order.
//!
//! # Examples
//!
//! ```
//! use slotted::simple::{Step, simple_curry};
//!
//! let volume = simple_curry(|values: Vec<u32>| values.iter().product::<u32>(), 3);
//!
//! let with_width = volume.call([2]).more().unwrap();
//! let with_height = with_width.call([3]).more().unwrap();
//!
//! assert_eq!(with_height.call([4]), Step::Done(24));
//! assert_eq!(volume.call([2, 3, 4]), Step::Done(24));
//! ```

use std::fmt;

use tracing::debug;

use crate::{ReferenceCounter, Shareable};

#[cfg(feature = "arc")]
type SharedFunction<T, R> = ReferenceCounter<dyn Fn(Vec<T>) -> R + Send + Sync>;

#[cfg(not(feature = "arc"))]
type SharedFunction<T, R> = ReferenceCounter<dyn Fn(Vec<T>) -> R>;

/// The outcome of a call to a [`SimpleCurried`] chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<C, R> {
    /// The wrapped function ran and produced this result.
    Done(R),
    /// More values are needed.
    More(C),
}

impl<C, R> Step<C, R> {
    /// Returns the result, if the wrapped function ran.
    pub fn done(self) -> Option<R> {
        match self {
            Self::Done(result) => Some(result),
            Self::More(_) => None,
        }
    }

    /// Returns the continuation, if more values are needed.
    pub fn more(self) -> Option<C> {
        match self {
            Self::Done(_) => None,
            Self::More(continuation) => Some(continuation),
        }
    }
}

/// A curried function that accumulates plain values.
///
/// Every call appends the supplied values to those collected so far. When the
/// total reaches `arity`, the wrapped function receives all of them, extras
/// included.
///
/// With the `arc` feature the chain is `Send + Sync` when `T` is, like
/// [`crate::curry::Curried`].
pub struct SimpleCurried<T, R> {
    function: SharedFunction<T, R>,
    arity: usize,
    collected: ReferenceCounter<[T]>,
}

/// Creates a [`SimpleCurried`] chain with nothing collected yet.
pub fn simple_curry<T, R, F>(function: F, arity: usize) -> SimpleCurried<T, R>
where
    T: Clone,
    F: Fn(Vec<T>) -> R + Shareable + 'static,
{
    SimpleCurried {
        function: ReferenceCounter::new(function),
        arity,
        collected: ReferenceCounter::from(Vec::new()),
    }
}

impl<T: Clone, R> SimpleCurried<T, R> {
    /// Appends `values` and runs the function if enough have been collected.
    pub fn call<I>(&self, values: I) -> Step<Self, R>
    where
        I: IntoIterator<Item = T>,
    {
        let collected: Vec<T> = self.collected.iter().cloned().chain(values).collect();

        if collected.len() >= self.arity {
            debug!(
                arity = self.arity,
                supplied = collected.len(),
                "invoking simple curried function"
            );
            Step::Done((self.function)(collected))
        } else {
            Step::More(Self {
                function: ReferenceCounter::clone(&self.function),
                arity: self.arity,
                collected: ReferenceCounter::from(collected),
            })
        }
    }

    /// Returns the values collected so far.
    pub fn collected(&self) -> &[T] {
        &self.collected
    }

    /// Returns the arity of the wrapped function.
    pub const fn arity(&self) -> usize {
        self.arity
    }
}

impl<T, R> Clone for SimpleCurried<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            arity: self.arity,
            collected: ReferenceCounter::clone(&self.collected),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SimpleCurried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SimpleCurried")
            .field("arity", &self.arity)
            .field("collected", &&*self.collected)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq, R> PartialEq for SimpleCurried<T, R> {
    /// Chains are equal when they wrap the same function with the same state.
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.function, &other.function)
            && self.arity == other.arity
            && self.collected == other.collected
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SimpleCurried<i32, i32>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SimpleCurried<i32, i32>: Send, Sync);
