//! Argument slots and the placeholder sentinel.

use smallvec::SmallVec;

/// Number of argument slots stored inline before spilling to the heap.
const INLINE_SLOTS: usize = 4;

/// Placeholder marker for a positional slot that will be filled later.
///
/// The marker carries no data. Its only job is to become
/// [`Argument::Placeholder`], a dedicated enum case that no value of the
/// argument type can ever be confused with.
///
/// Inside [`args!`](crate::args) write `__` directly; outside the macro use
/// [`PLACEHOLDER`] (or the `__` constant) and convert with `into()`.
///
/// # Examples
///
/// ```
/// use slotted::curry::{Argument, PLACEHOLDER};
///
/// let slot: Argument<i32> = PLACEHOLDER.into();
/// assert!(slot.is_placeholder());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// The placeholder constant.
pub const PLACEHOLDER: Placeholder = Placeholder;

/// Short spelling of [`PLACEHOLDER`].
///
/// The [`args!`](crate::args) macro matches `__` as a literal token, so this
/// constant does not need to be imported to use it there.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// A single argument slot: either a real value or the placeholder.
///
/// # Examples
///
/// ```
/// use slotted::curry::Argument;
///
/// let filled = Argument::Value(42);
/// let open: Argument<i32> = Argument::Placeholder;
///
/// assert_eq!(filled.as_value(), Some(&42));
/// assert_eq!(open.as_value(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Argument<T> {
    /// A supplied value.
    Value(T),
    /// A slot to be filled by a later call.
    Placeholder,
}

impl<T> Argument<T> {
    /// Returns `true` if this slot is the placeholder.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns `true` if this slot holds a value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, if any.
    #[inline]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Consumes the slot and returns the value, if any.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Converts `&Argument<T>` into `Argument<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Argument<&T> {
        match self {
            Self::Value(value) => Argument::Value(value),
            Self::Placeholder => Argument::Placeholder,
        }
    }

    /// Applies `function` to the value, leaving placeholders untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotted::curry::Argument;
    ///
    /// assert_eq!(Argument::Value(2).map(|x| x * 10), Argument::Value(20));
    /// assert_eq!(Argument::<i32>::Placeholder.map(|x| x * 10), Argument::Placeholder);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Argument<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Argument::Value(function(value)),
            Self::Placeholder => Argument::Placeholder,
        }
    }
}

impl<T: Clone> Argument<&T> {
    /// Maps an `Argument<&T>` to an `Argument<T>` by cloning the value.
    #[inline]
    pub fn cloned(self) -> Argument<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Argument<&T> {
    /// Maps an `Argument<&T>` to an `Argument<T>` by copying the value.
    #[inline]
    pub fn copied(self) -> Argument<T> {
        self.map(|value| *value)
    }
}

impl<T> From<Placeholder> for Argument<T> {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

// =============================================================================
// Arguments
// =============================================================================

/// An ordered list of argument slots supplied in one call.
///
/// Short lists are stored inline. Build one with the [`args!`](crate::args)
/// macro, from plain values with [`Arguments::values`], or collect it from an
/// iterator of [`Argument`]s.
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::{Argument, Arguments};
///
/// let arguments: Arguments<i32> = args![1, __, 3];
/// assert_eq!(arguments.len(), 3);
/// assert_eq!(arguments.placeholder_count(), 1);
///
/// let plain = Arguments::values([1, 2]);
/// assert_eq!(plain.as_slice(), &[Argument::Value(1), Argument::Value(2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arguments<T> {
    slots: SmallVec<[Argument<T>; INLINE_SLOTS]>,
}

impl<T> Arguments<T> {
    /// Creates an empty argument list.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    /// Creates an argument list of plain values, without placeholders.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Argument::Value).collect()
    }

    /// Creates an argument list from a fixed array of slots.
    ///
    /// Used by the [`args!`](crate::args) macro.
    pub fn from_slots<const N: usize>(slots: [Argument<T>; N]) -> Self {
        slots.into_iter().collect()
    }

    /// Appends a slot, returning the extended list.
    #[must_use]
    pub fn with(mut self, argument: impl Into<Argument<T>>) -> Self {
        self.slots.push(argument.into());
        self
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of placeholder slots.
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }

    /// Returns the slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Argument<T>] {
        &self.slots
    }

    /// Returns an iterator over the slots.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Argument<T>> {
        self.slots.iter()
    }

    /// Converts the list into a `Vec`.
    pub fn into_vec(self) -> Vec<Argument<T>> {
        self.slots.into_vec()
    }
}

impl<T> Default for Arguments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Argument<T>> for Arguments<T> {
    fn from_iter<I: IntoIterator<Item = Argument<T>>>(iterator: I) -> Self {
        Self {
            slots: iterator.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<Argument<T>>> for Arguments<T> {
    fn from(slots: Vec<Argument<T>>) -> Self {
        Self {
            slots: SmallVec::from_vec(slots),
        }
    }
}

impl<T, const N: usize> From<[Argument<T>; N]> for Arguments<T> {
    fn from(slots: [Argument<T>; N]) -> Self {
        Self::from_slots(slots)
    }
}

impl<T> IntoIterator for Arguments<T> {
    type Item = Argument<T>;
    type IntoIter = smallvec::IntoIter<[Argument<T>; INLINE_SLOTS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Arguments<T> {
    type Item = &'a Argument<T>;
    type IntoIter = std::slice::Iter<'a, Argument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Arguments<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.slots.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Arguments<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Argument<T>> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// args! macro
// =============================================================================

/// Builds an [`Arguments`](crate::curry::Arguments) list.
///
/// Every expression becomes [`Argument::Value`](crate::curry::Argument::Value);
/// the bare token `__` becomes the placeholder.
///
/// **Important**: `__` is matched as a literal token. It does not need to be
/// imported, and an expression that merely evaluates to the placeholder
/// constant is treated as a value of type `Placeholder`, not as a skipped
/// slot.
///
/// # Examples
///
/// ```
/// use slotted::args;
/// use slotted::curry::Argument;
///
/// let arguments = args![1, __, 3];
/// assert_eq!(
///     arguments.as_slice(),
///     &[Argument::Value(1), Argument::Placeholder, Argument::Value(3)]
/// );
///
/// let empty: slotted::curry::Arguments<i32> = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    (@collect [$($slot:expr),*]) => {
        $crate::curry::Arguments::from_slots([$($slot),*])
    };

    (@collect [$($slot:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($slot,)* $crate::curry::Argument::Placeholder] $($($rest)*)?)
    };

    (@collect [$($slot:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($slot,)* $crate::curry::Argument::Value($value)] $($($rest)*)?)
    };

    ($($input:tt)*) => {
        $crate::args!(@collect [] $($input)*)
    };
}
