//! The argument bundle handed to a wrapped function.

use super::argument::{Argument, Arguments};

/// The arguments a wrapped function receives once its chain is ready.
///
/// The first `arity` slots are guaranteed to hold values and are exposed as
/// plain `T`s through [`required`](Self::required). Anything supplied past
/// the arity is carried through untouched in [`trailing`](Self::trailing),
/// placeholders included.
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::{Invocation, curry};
///
/// let inspect = curry(
///     |invocation: Invocation<i32>| (invocation.required().to_vec(), invocation.trailing().len()),
///     2,
/// );
///
/// let (required, trailing) = inspect.call(args![5, 6, __]).complete().unwrap();
/// assert_eq!(required, vec![5, 6]);
/// assert_eq!(trailing, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation<T> {
    required: Vec<T>,
    trailing: Vec<Argument<T>>,
}

impl<T> Invocation<T> {
    /// Splits a combined argument list at `arity`, if it is ready.
    ///
    /// Returns the list unchanged when it is shorter than `arity` or any of
    /// its first `arity` slots is a placeholder.
    pub(crate) fn from_combined(
        mut combined: Vec<Argument<T>>,
        arity: usize,
    ) -> Result<Self, Vec<Argument<T>>> {
        let ready = combined.len() >= arity && combined[..arity].iter().all(Argument::is_value);
        if !ready {
            return Err(combined);
        }

        let trailing = combined.split_off(arity);
        let required = combined
            .into_iter()
            .filter_map(Argument::into_value)
            .collect();

        Ok(Self { required, trailing })
    }

    /// The values occupying the first `arity` positions.
    #[inline]
    pub fn required(&self) -> &[T] {
        &self.required
    }

    /// The slots supplied beyond the arity, in order.
    #[inline]
    pub fn trailing(&self) -> &[Argument<T>] {
        &self.trailing
    }

    /// The arity of the chain that produced this invocation.
    #[inline]
    pub fn arity(&self) -> usize {
        self.required.len()
    }

    /// Total number of slots, required and trailing.
    #[inline]
    pub fn len(&self) -> usize {
        self.required.len() + self.trailing.len()
    }

    /// Returns `true` if the invocation carries no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slot at `index` across the whole combined list.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::args;
    /// use slotted::curry::{Argument, Invocation, curry};
    ///
    /// let third = curry(|invocation: Invocation<i32>| invocation.get(2).map(Argument::copied), 2);
    ///
    /// assert_eq!(third.call(args![1, 2, 3]).complete(), Some(Some(Argument::Value(3))));
    /// assert_eq!(third.call(args![1, 2, __]).complete(), Some(Some(Argument::Placeholder)));
    /// assert_eq!(third.call(args![1, 2]).complete(), Some(None));
    /// ```
    pub fn get(&self, index: usize) -> Option<Argument<&T>> {
        self.required.get(index).map_or_else(
            || {
                self.trailing
                    .get(index - self.required.len())
                    .map(Argument::as_ref)
            },
            |value| Some(Argument::Value(value)),
        )
    }

    /// Consumes the invocation, returning the required values and the
    /// trailing slots.
    pub fn into_parts(self) -> (Vec<T>, Vec<Argument<T>>) {
        (self.required, self.trailing)
    }

    /// Consumes the invocation, returning the required values.
    pub fn into_required(self) -> Vec<T> {
        self.required
    }

    /// Converts the required values into a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns the invocation unchanged when its arity is not `N`.
    pub fn into_required_array<const N: usize>(self) -> Result<[T; N], Self> {
        let Self { required, trailing } = self;
        <[T; N]>::try_from(required).map_err(|required| Self { required, trailing })
    }

    /// Rebuilds the full combined argument list, exactly as accumulated.
    pub fn into_arguments(self) -> Arguments<T> {
        self.required
            .into_iter()
            .map(Argument::Value)
            .chain(self.trailing)
            .collect()
    }
}
