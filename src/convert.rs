//! Conversions between three-way comparators and less predicates.
//!
//! A comparator returns an [`Ordering`] for two values, a less predicate
//! returns `true` exactly when the first value comes strictly before the
//! second. Neither conversion checks that its input is a consistent ordering.

use std::cmp::Ordering;

/// Converts a three-way comparator into a less predicate.
///
/// The returned predicate reports whether `a` is strictly less than `b`, i.e.
/// whether `cmp(a, b)` is [`Ordering::Less`].
pub fn into_less<T, F>(cmp: F) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(a, b) == Ordering::Less
}

/// Converts a less predicate into a three-way comparator.
///
/// `less` should be a strict weak ordering. Values where neither
/// `less(a, b)` nor `less(b, a)` holds are reported as equal.
pub fn into_cmp<T, F>(less: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    move |a: &T, b: &T| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Converts a comparator into one using the integer convention, returning
/// `-1`, `0` or `1`.
pub fn into_signed<T, F>(cmp: F) -> impl Fn(&T, &T) -> i32
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(a, b) as i32
}

/// Converts an integer comparator into a three-way comparator. Any negative
/// number is less, any positive number is greater.
pub fn from_signed<T, F>(cmp: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    move |a: &T, b: &T| cmp(a, b).cmp(&0)
}
