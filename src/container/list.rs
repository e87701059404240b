//! List container - zero or more ordered values with flattening bind.
//!
//! `List<A>` wraps the native ordered sequence. Its `bind` applies a
//! list-producing transform to every element and concatenates the results
//! in order (flattening exactly one level); `plus` is concatenation and the
//! empty list is the zero element.
//!
//! Construction from a single value always produces a single-element list
//! containing that value — there is no pre-sized-sequence constructor to
//! conflate it with, and the invariant is pinned by tests regardless.

use std::fmt;

use crate::typeclass::{Monad, MonadPlus, TypeConstructor};

/// An ordered container of zero or more values.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let flattened = list![5, 7, 11].bind(|x| list![x + 3]);
/// assert_eq!(flattened, list![8, 10, 14]);
///
/// let combined = list![1, 2].plus(list![3]);
/// assert_eq!(combined, list![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<A>(Vec<A>);

/// Constructs a [`List`] from explicit elements.
///
/// `list![]` is the empty list; `list![a, b, c]` contains exactly those
/// elements in order. A single argument produces a single-element list
/// containing that value, never a pre-sized sequence.
///
/// # Examples
///
/// ```rust
/// use monadic::prelude::*;
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
///
/// assert_eq!(list![3].len(), 1);
/// assert_eq!(list![5, 7, 11].len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::container::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::container::List::from_vec(::std::vec![$($value),+])
    };
}

/// Conversion into a list operand for [`List::lift2`]: plain values become
/// single-element lists, lists pass through unchanged.
pub trait IntoList<A> {
    /// Converts `self` into a `List<A>`.
    fn into_list(self) -> List<A>;
}

impl<A> IntoList<A> for A {
    #[inline]
    fn into_list(self) -> List<A> {
        List(vec![self])
    }
}

impl<A> IntoList<A> for List<A> {
    #[inline]
    fn into_list(self) -> List<A> {
        self
    }
}

impl<A> List<A> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a list from a vector of elements, preserving order.
    ///
    /// This is what the [`list!`] macro expands to.
    #[inline]
    #[must_use]
    pub fn from_vec(elements: Vec<A>) -> Self {
        Self(elements)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.0.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        self.0.as_slice()
    }

    /// Applies a list-producing transform to every element and flattens
    /// one level, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let expanded = list![1, 2, 3].bind(|n| list![n, n * 10]);
    /// assert_eq!(expanded, list![1, 10, 2, 20, 3, 30]);
    ///
    /// // A transform may drop elements by producing the empty list
    /// let filtered = list![1, -2, 3].bind(|n| {
    ///     if n > 0 { list![n] } else { list![] }
    /// });
    /// assert_eq!(filtered, list![1, 3]);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, mut transform: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
    {
        List(
            self.0
                .into_iter()
                .flat_map(|value| transform(value).0)
                .collect(),
        )
    }

    /// Concatenates any number of lists in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    /// use monadic::container::List;
    ///
    /// let combined = List::concat([list![1], list![2, 3], list![]]);
    /// assert_eq!(combined, list![1, 2, 3]);
    /// ```
    pub fn concat<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self(
            sequences
                .into_iter()
                .flat_map(|sequence| sequence.0)
                .collect(),
        )
    }

    /// Wraps a plain transform into one that produces a single-element
    /// list of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = List::lift(|x: i32| x + 3);
    /// assert_eq!(lifted(5), list![8]);
    /// ```
    pub fn lift<B, F>(transform: F) -> impl Fn(A) -> List<B>
    where
        F: Fn(A) -> B,
    {
        move |value| List(vec![transform(value)])
    }

    /// Wraps a binary transform into one that joins two operands — raw
    /// values or lists, interchangeably — applying the transform to every
    /// pairing in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::prelude::*;
    ///
    /// let lifted = List::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(5, 3), list![8]);
    ///
    /// let lifted = List::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(lifted(list![1, 2], list![10, 20]), list![11, 21, 12, 22]);
    /// ```
    pub fn lift2<B, C, MA, MB, F>(mut transform: F) -> impl FnOnce(MA, MB) -> List<C>
    where
        A: Clone,
        B: Clone,
        MA: IntoList<A>,
        MB: IntoList<B>,
        F: FnMut(A, B) -> C,
    {
        move |first, second| {
            let first = first.into_list();
            let second = second.into_list();
            let capacity = first.len().saturating_mul(second.len());
            let mut joined = Vec::with_capacity(capacity);
            for a in first.iter() {
                for b in second.iter() {
                    joined.push(transform(a.clone(), b.clone()));
                }
            }
            List(joined)
        }
    }
}

impl<A> TypeConstructor for List<A> {
    type Inner = A;
    type WithType<B> = List<B>;
}

impl<A> Monad for List<A> {
    #[inline]
    fn unit<B>(value: B) -> List<B> {
        List(vec![value])
    }

    #[inline]
    fn bind<B, F>(self, mut transform: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
    {
        List(
            self.0
                .into_iter()
                .flat_map(|value| transform(value).0)
                .collect(),
        )
    }
}

impl<A> MonadPlus for List<A> {
    #[inline]
    fn zero() -> Self {
        Self(Vec::new())
    }

    /// Concatenation, preserving the order of both operands.
    #[inline]
    fn plus(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(elements: Vec<A>) -> Self {
        Self(elements)
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(elements: I) -> Self {
        Self(elements.into_iter().collect())
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.0.iter();
        if let Some(first) = elements.next() {
            fmt::Display::fmt(first, formatter)?;
            for element in elements {
                formatter.write_str(",")?;
                fmt::Display::fmt(element, formatter)?;
            }
        }
        Ok(())
    }
}

// Continuation bridging is deliberately absent: a list of results is a
// value, not a pending computation, and must not pose as one.
static_assertions::assert_not_impl_any!(List<i32>: std::future::IntoFuture);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn macro_with_no_elements_is_empty() {
        let empty: List<i32> = list![];
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[rstest]
    fn macro_with_elements_preserves_order() {
        let values = list![5, 7, 11];
        assert_eq!(values.as_slice(), &[5, 7, 11]);
    }

    #[rstest]
    fn single_argument_builds_single_element_list() {
        // A lone numeric argument is an element, never a length
        let values = list![3];
        assert_eq!(values.len(), 1);
        assert_eq!(values.as_slice(), &[3]);

        let converted = 3.into_list();
        assert_eq!(converted, list![3]);
    }

    #[rstest]
    fn from_vec_preserves_elements() {
        assert_eq!(List::from(vec![5, 7]), list![5, 7]);
        assert_eq!(List::from_vec(vec![5, 7]), list![5, 7]);
    }

    #[rstest]
    fn collects_from_iterator() {
        let values: List<i32> = (1..=3).collect();
        assert_eq!(values, list![1, 2, 3]);
    }

    // =========================================================================
    // bind
    // =========================================================================

    #[rstest]
    fn bind_flattens_one_level() {
        let result = list![5, 7, 11].bind(|x| list![x + 3]);
        assert_eq!(result, list![8, 10, 14]);
    }

    #[rstest]
    fn bind_expands_elements_in_order() {
        let result = list![1, 2, 3].bind(|n| list![n, n * 10]);
        assert_eq!(result, list![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn bind_on_empty_list_is_empty() {
        let empty: List<i32> = list![];
        assert!(empty.bind(|n| list![n + 3]).is_empty());
    }

    #[rstest]
    fn bind_can_drop_elements() {
        let result = list![1, -2, 3].bind(|n| if n > 0 { list![n] } else { list![] });
        assert_eq!(result, list![1, 3]);
    }

    #[rstest]
    fn bind_with_lifted_transform() {
        let result = list![5].bind(List::lift(|x: i32| x + 3));
        assert_eq!(result, list![8]);
    }

    // =========================================================================
    // lift / lift2
    // =========================================================================

    #[rstest]
    fn lift_produces_single_element_lists() {
        let lifted = List::lift(|x: i32| x + 3);
        assert_eq!(lifted(5), list![8]);
    }

    #[rstest]
    fn lift2_joins_raw_values() {
        let lifted = List::lift2(|x: i32, y: i32| x + y);
        assert_eq!(lifted(5, 3), list![8]);
    }

    #[rstest]
    fn lift2_joins_wrapped_values() {
        let lifted = List::lift2(|x: i32, y: i32| x + y);
        assert_eq!(lifted(list![5], list![3]), list![8]);
    }

    #[rstest]
    fn lift2_pairs_every_combination_in_order() {
        let lifted = List::lift2(|x: i32, y: i32| x + y);
        assert_eq!(lifted(list![1, 2], list![10, 20]), list![11, 21, 12, 22]);
    }

    // =========================================================================
    // concat and iteration
    // =========================================================================

    #[rstest]
    fn concat_joins_many_lists() {
        let combined = List::concat([list![1], list![], list![2, 3]]);
        assert_eq!(combined, list![1, 2, 3]);
    }

    #[rstest]
    fn iterates_by_reference_and_by_value() {
        let values = list![1, 2, 3];
        let doubled: Vec<i32> = values.iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);

        let owned: Vec<i32> = values.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[rstest]
    fn display_joins_elements_with_commas() {
        assert_eq!(list![5, 7].to_string(), "5,7");
        assert_eq!(list![5].to_string(), "5");
        assert_eq!(List::<i32>::new().to_string(), "");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::typeclass::MonadPlus;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bind_with_singleton_transform_is_map(
            elements in prop::collection::vec(any::<i32>(), 0..10)
        ) {
            let expected: Vec<i32> = elements.iter().map(|n| n.wrapping_add(3)).collect();
            let result = List::from(elements).bind(|n| list![n.wrapping_add(3)]);
            prop_assert_eq!(result.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_plus_concatenates(
            first in prop::collection::vec(any::<i32>(), 0..10),
            second in prop::collection::vec(any::<i32>(), 0..10)
        ) {
            let mut expected = first.clone();
            expected.extend(second.iter().copied());
            let combined = List::from(first).plus(List::from(second));
            prop_assert_eq!(combined.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_zero_is_plus_identity(
            elements in prop::collection::vec(any::<i32>(), 0..10)
        ) {
            let values = List::from(elements);
            prop_assert_eq!(List::zero().plus(values.clone()), values.clone());
            prop_assert_eq!(values.clone().plus(List::zero()), values);
        }
    }
}
