//! The partial-application chain.

use std::fmt;

use tracing::{debug, trace};

use super::argument::{Argument, Arguments};
use super::error::CurryError;
use super::invocation::Invocation;
use crate::{ReferenceCounter, Shareable};

#[cfg(feature = "arc")]
type SharedFunction<T, R> = ReferenceCounter<dyn Fn(Invocation<T>) -> R + Send + Sync>;

#[cfg(not(feature = "arc"))]
type SharedFunction<T, R> = ReferenceCounter<dyn Fn(Invocation<T>) -> R>;

/// A continuation of a partial-application chain.
///
/// `Curried<T, R>` pairs a wrapped function of fixed arity with the argument
/// slots accumulated so far. Calling it merges new arguments into those slots
/// and either invokes the function or hands back a new continuation. The
/// continuation itself is never modified, so it can be called any number of
/// times and cloned freely.
///
/// # Type Parameters
///
/// * `T` - The argument value type
/// * `R` - The result type of the wrapped function
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::{Curried, Invocation};
///
/// let subtract = Curried::new(
///     |invocation: Invocation<i32>| invocation.required()[0] - invocation.required()[1],
///     2,
/// );
///
/// // Skip the first slot, supply the subtrahend first.
/// let minus_three = subtract.call(args![__, 3]).partial().unwrap();
///
/// assert_eq!(minus_three.call(args![10]).complete(), Some(7));
/// assert_eq!(minus_three.call(args![5]).complete(), Some(2));
/// ```
pub struct Curried<T, R> {
    function: SharedFunction<T, R>,
    arity: usize,
    pending: ReferenceCounter<[Argument<T>]>,
}

/// Creates the entry point of a partial-application chain.
///
/// `arity` is the number of leading arguments `function` requires before it
/// may run. The entry point starts with no pending arguments.
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::{Invocation, curry};
///
/// let sum = curry(|invocation: Invocation<i32>| invocation.required().iter().sum::<i32>(), 3);
///
/// assert_eq!(sum.call(args![1, 2, 3]).complete(), Some(6));
/// assert_eq!(
///     sum.call(args![1, 2]).call(args![3]).map(|application| application.complete()),
///     Ok(Some(6))
/// );
/// ```
pub fn curry<T, R, F>(function: F, arity: usize) -> Curried<T, R>
where
    T: Clone,
    F: Fn(Invocation<T>) -> R + Shareable + 'static,
{
    Curried::new(function, arity)
}

impl<T, R> Curried<T, R>
where
    T: Clone,
{
    /// Creates the entry point of a chain for `function` with the given arity.
    pub fn new<F>(function: F, arity: usize) -> Self
    where
        F: Fn(Invocation<T>) -> R + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
            arity,
            pending: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Creates the entry point of a chain from a signed arity.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::NegativeArity`] if `arity` is negative. No chain
    /// is created in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::curry::{Curried, CurryError, Invocation};
    ///
    /// let valid = Curried::try_new(|invocation: Invocation<u8>| invocation.len(), 2);
    /// assert_eq!(valid.map(|curried| curried.arity()), Ok(2));
    ///
    /// let invalid = Curried::try_new(|invocation: Invocation<u8>| invocation.len(), -1);
    /// assert_eq!(invalid.err(), Some(CurryError::NegativeArity { arity: -1 }));
    /// ```
    pub fn try_new<F>(function: F, arity: isize) -> Result<Self, CurryError>
    where
        F: Fn(Invocation<T>) -> R + Shareable + 'static,
    {
        let arity = usize::try_from(arity).map_err(|_| CurryError::NegativeArity { arity })?;
        Ok(Self::new(function, arity))
    }

    /// Supplies arguments to the chain.
    ///
    /// Placeholder slots already pending are filled left to right with the
    /// new arguments; leftover new arguments are appended. If the first
    /// `arity` slots then all hold values, the wrapped function is invoked
    /// with every accumulated slot and its result is returned as
    /// [`Application::Complete`]. Otherwise a new continuation is returned as
    /// [`Application::Partial`].
    ///
    /// A placeholder in `arguments` fills a pending placeholder slot with a
    /// placeholder, keeping it open for a later call.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::args;
    /// use slotted::curry::{Argument, Invocation, curry};
    ///
    /// let join = curry(
    ///     |invocation: Invocation<char>| invocation.required().iter().collect::<String>(),
    ///     3,
    /// );
    ///
    /// let waiting = join.call(args![__, __, 'c', 'd']).partial().unwrap();
    /// let waiting = waiting.call(args!['a', __]).partial().unwrap();
    /// assert_eq!(
    ///     waiting.pending(),
    ///     &[Argument::Value('a'), Argument::Placeholder, Argument::Value('c'), Argument::Value('d')]
    /// );
    ///
    /// assert_eq!(waiting.call(args!['b']).complete(), Some("abc".to_string()));
    /// ```
    pub fn call<A>(&self, arguments: A) -> Application<T, R>
    where
        A: Into<Arguments<T>>,
    {
        let combined = merge(&self.pending, arguments.into());

        match Invocation::from_combined(combined, self.arity) {
            Ok(invocation) => {
                debug!(
                    arity = self.arity,
                    supplied = invocation.len(),
                    "invoking curried function"
                );
                Application::Complete((self.function)(invocation))
            }
            Err(combined) => {
                trace!(
                    arity = self.arity,
                    pending = combined.len(),
                    open = combined.iter().filter(|slot| slot.is_placeholder()).count(),
                    "curried chain waiting for arguments"
                );
                Application::Partial(self.with_pending(combined))
            }
        }
    }

    /// Supplies plain values to the chain, without placeholders.
    ///
    /// Equivalent to `self.call(Arguments::values(values))`.
    pub fn call_with_values<I>(&self, values: I) -> Application<T, R>
    where
        I: IntoIterator<Item = T>,
    {
        self.call(Arguments::values(values))
    }

    fn with_pending(&self, pending: Vec<Argument<T>>) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            arity: self.arity,
            pending: ReferenceCounter::from(pending),
        }
    }
}

impl<T, R> Curried<T, R> {
    /// Returns the number of leading arguments required before invocation.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the slots accumulated so far.
    #[inline]
    pub fn pending(&self) -> &[Argument<T>] {
        &self.pending
    }

    /// Returns how many of the first `arity` slots are still open.
    ///
    /// Slots not yet supplied at all count as open.
    pub fn remaining(&self) -> usize {
        let window = self.pending.len().min(self.arity);
        let open = self.pending[..window]
            .iter()
            .filter(|slot| slot.is_placeholder())
            .count();
        open + (self.arity - window)
    }
}

impl<T, R> Curried<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    /// Post-composes `function` onto the wrapped function.
    ///
    /// The pending slots are kept; only the eventual result is transformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::args;
    /// use slotted::curry::{Invocation, curry};
    ///
    /// let add = curry(|invocation: Invocation<i32>| invocation.required().iter().sum::<i32>(), 2);
    /// let add_then_describe = add.map(|total| format!("total={total}"));
    ///
    /// assert_eq!(
    ///     add_then_describe.call(args![2, 3]).complete(),
    ///     Some("total=5".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn map<S, F>(self, function: F) -> Curried<T, S>
    where
        S: 'static,
        F: Fn(R) -> S + Shareable + 'static,
    {
        let inner = self.function;
        Curried {
            function: ReferenceCounter::new(move |invocation: Invocation<T>| {
                function(inner(invocation))
            }),
            arity: self.arity,
            pending: self.pending,
        }
    }
}

impl<T, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            arity: self.arity,
            pending: ReferenceCounter::clone(&self.pending),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("pending", &&*self.pending)
            .finish_non_exhaustive()
    }
}

/// Fills pending placeholders with `supplied` left to right, then appends
/// whatever `supplied` has left.
fn merge<T: Clone>(pending: &[Argument<T>], supplied: Arguments<T>) -> Vec<Argument<T>> {
    let mut supplied = supplied.into_iter();
    let mut combined = Vec::with_capacity(pending.len() + supplied.len());

    for slot in pending {
        let filled = match slot {
            Argument::Placeholder => supplied.next().unwrap_or(Argument::Placeholder),
            Argument::Value(value) => Argument::Value(value.clone()),
        };
        combined.push(filled);
    }
    combined.extend(supplied);

    combined
}

// =============================================================================
// Application
// =============================================================================

/// The outcome of supplying arguments to a [`Curried`] chain.
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::{Application, Invocation, curry};
///
/// let pair = curry(|invocation: Invocation<char>| invocation.required().to_vec(), 2);
///
/// match pair.call(args!['a']) {
///     Application::Partial(rest) => assert_eq!(rest.remaining(), 1),
///     Application::Complete(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug)]
pub enum Application<T, R> {
    /// The wrapped function ran and produced this result.
    Complete(R),
    /// The chain needs more arguments.
    Partial(Curried<T, R>),
}

impl<T, R> Application<T, R> {
    /// Returns `true` if the wrapped function was invoked.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` if the chain still waits for arguments.
    #[inline]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns the result, if the wrapped function was invoked.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the continuation, if the chain still waits for arguments.
    pub fn partial(self) -> Option<Curried<T, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Returns a reference to the result, if any.
    pub const fn as_complete(&self) -> Option<&R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Converts into a `Result`: the result on completion, the continuation
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns the continuation when the chain is not complete.
    pub fn into_result(self) -> Result<R, Curried<T, R>> {
        match self {
            Self::Complete(result) => Ok(result),
            Self::Partial(curried) => Err(curried),
        }
    }
}

impl<T, R> Application<T, R>
where
    T: Clone,
{
    /// Continues a partial chain with more arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyInvoked`] if the wrapped function already
    /// ran. The earlier result is not recoverable through this call.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::args;
    /// use slotted::curry::{CurryError, Invocation, curry};
    ///
    /// let double = curry(|invocation: Invocation<i32>| invocation.required()[0] * 2, 1);
    ///
    /// let done = double.call(args![4]);
    /// assert_eq!(done.as_complete(), Some(&8));
    /// assert_eq!(done.call(args![5]).err(), Some(CurryError::AlreadyInvoked));
    /// ```
    pub fn call<A>(self, arguments: A) -> Result<Self, CurryError>
    where
        A: Into<Arguments<T>>,
    {
        match self {
            Self::Partial(curried) => Ok(curried.call(arguments)),
            Self::Complete(_) => Err(CurryError::AlreadyInvoked),
        }
    }
}

impl<T, R> Application<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    /// Maps the result, now or on eventual completion.
    #[must_use]
    pub fn map<S, F>(self, function: F) -> Application<T, S>
    where
        S: 'static,
        F: Fn(R) -> S + Shareable + 'static,
    {
        match self {
            Self::Complete(result) => Application::Complete(function(result)),
            Self::Partial(curried) => Application::Partial(curried.map(function)),
        }
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Curried<i32, i32>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);
