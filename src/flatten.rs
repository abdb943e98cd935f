//! Depth-limited flattening of nested lists.
//!
//! [`Nested`] models an arbitrarily nested list. [`flatten`] splices inner
//! lists into their parent up to a given depth, and [`flatten_all`] removes
//! every level. Both walk the structure with an explicit stack, so deeply
//! nested input does not grow the call stack.
//!
//! # Examples
//!
//! ```
//! use slotted::nested;
//! use slotted::flatten::{flatten, flatten_all};
//!
//! let items = nested![1, [2, [3, [4]]]];
//!
//! assert_eq!(flatten(items.clone(), 1), nested![1, 2, [3, [4]]]);
//! assert_eq!(flatten(items.clone(), 2), nested![1, 2, 3, [4]]);
//! assert_eq!(flatten_all(items), vec![1, 2, 3, 4]);
//! ```

/// An element of a nested list: a single item or a further list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Nested<T> {
    /// A leaf value.
    Item(T),
    /// A nested list.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a value.
    #[inline]
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Wraps a list of elements.
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::List(elements.into_iter().collect())
    }

    /// Returns `true` for a leaf value.
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` for a nested list.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns how many list levels sit below this element.
    ///
    /// A leaf has depth 0, a list of leaves depth 1, and so on. An empty list
    /// has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];

        while let Some((element, level)) = stack.pop() {
            if let Self::List(children) = element {
                deepest = deepest.max(level + 1);
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
        }

        deepest
    }
}

impl<T> From<Vec<Self>> for Nested<T> {
    fn from(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }
}

/// Flattens `items` by up to `depth` levels.
///
/// Lists nested deeper than `depth` are kept as lists. A depth of 0 returns
/// the input unchanged. Element order is preserved.
///
/// # Examples
///
/// ```
/// use slotted::nested;
/// use slotted::flatten::flatten;
///
/// assert_eq!(flatten(nested![[1], [[2]]], 0), nested![[1], [[2]]]);
/// assert_eq!(flatten(nested![[1], [[2]]], 1), nested![1, [2]]);
/// assert_eq!(flatten::<i32>(nested![[], [[]]], 1), nested![[]]);
/// ```
pub fn flatten<T>(items: Vec<Nested<T>>, depth: usize) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(items.len());
    let mut stack = vec![(items.into_iter(), depth)];

    while let Some((elements, remaining)) = stack.last_mut() {
        let remaining = *remaining;
        match elements.next() {
            Some(Nested::List(children)) if remaining > 0 => {
                stack.push((children.into_iter(), remaining - 1));
            }
            Some(element) => flattened.push(element),
            None => {
                stack.pop();
            }
        }
    }

    flattened
}

/// Flattens every level of `items`, keeping only the leaf values.
pub fn flatten_all<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut flattened = Vec::with_capacity(items.len());
    let mut stack = vec![items.into_iter()];

    while let Some(elements) = stack.last_mut() {
        match elements.next() {
            Some(Nested::Item(value)) => flattened.push(value),
            Some(Nested::List(children)) => stack.push(children.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    flattened
}

/// Builds a `Vec<Nested<T>>`.
///
/// A bracketed group becomes [`Nested::List`](crate::flatten::Nested::List),
/// any other expression becomes [`Nested::Item`](crate::flatten::Nested::Item).
///
/// # Examples
///
/// ```
/// use slotted::nested;
/// use slotted::flatten::Nested;
///
/// assert_eq!(
///     nested![1, [2]],
///     vec![Nested::Item(1), Nested::List(vec![Nested::Item(2)])]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@collect [$($element:expr),*]) => {
        ::std::vec![$($element),*]
    };

    (@collect [$($element:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @collect [$($element,)* $crate::flatten::Nested::List($crate::nested![$($inner)*])]
            $($($rest)*)?
        )
    };

    (@collect [$($element:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@collect [$($element,)* $crate::flatten::Nested::Item($value)] $($($rest)*)?)
    };

    ($($input:tt)*) => {
        $crate::nested!(@collect [] $($input)*)
    };
}
