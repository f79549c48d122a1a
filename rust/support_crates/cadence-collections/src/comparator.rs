use std::cmp::Ordering;

/// Ordering rule applied to the values of an [`OrderedTree`](crate::OrderedTree).
///
/// The tree never stores a comparator; every ordered operation receives one. Any
/// `Fn(&T, &T) -> Ordering` closure or function is a comparator, which covers most
/// call sites. Named comparator types are useful when the comparator must be stored
/// in a struct field.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` against `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Natural ordering of `Ord` values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Reversed ordering of an inner comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}
