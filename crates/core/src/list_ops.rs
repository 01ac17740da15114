//! List operations for Knowhere
//!
//! Higher-order combinators over slices. Every operation takes a short
//! caller-supplied function; none of them mutate their input except
//! [`sort_by`] and [`sort`], which sort in place.
//!
//! # Examples
//!
//! ```
//! use knowhere_core::list_ops::{filter, map, reduce};
//!
//! let precincts = [1244, 2021, 2157];
//!
//! // Map: double each element
//! let projected = map(&precincts, |p| p * 2);
//!
//! // Filter: keep the big ones
//! let big = filter(&projected, |p| *p > 4000);
//!
//! // Reduce: sum them
//! let total = reduce(&big, 0, |acc, p| acc + p);
//! assert_eq!(total, 8356);
//! ```

use std::cmp::Ordering;

/// Turn a "should `a` precede `b`" comparator into an `Ordering`
///
/// Elements neither of which precedes the other compare `Equal`.
fn precedence<T, F>(precedes: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if precedes(a, b) {
        Ordering::Less
    } else if precedes(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Comparator for smallest-first order
pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Comparator for largest-first order
pub fn descending<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

/// Sort a list in place
///
/// `precedes(a, b)` returns true when `a` belongs before `b`. It must be a
/// strict weak ordering. The sort is stable: elements that compare equal
/// keep their relative order.
///
/// # Panics
/// May panic if `precedes` is not a strict weak ordering.
pub fn sort_by<T, F>(list: &mut [T], mut precedes: F)
where
    F: FnMut(&T, &T) -> bool,
{
    list.sort_by(|a, b| precedence(&mut precedes, a, b));
}

/// Return a sorted copy of a list, leaving the input untouched
///
/// Same ordering contract as [`sort_by`].
pub fn sorted_by<T, F>(list: &[T], precedes: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = list.to_vec();
    sort_by(&mut result, precedes);
    result
}

/// Sort a list in place, smallest first
pub fn sort<T: PartialOrd>(list: &mut [T]) {
    sort_by(list, ascending);
}

/// Sorted copy of a list, smallest first
pub fn sorted<T: Clone + PartialOrd>(list: &[T]) -> Vec<T> {
    sorted_by(list, ascending)
}

/// Transform each element, producing a new list of the same length
pub fn map<T, U, F>(list: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    list.iter().map(transform).collect()
}

/// Keep the elements for which `predicate` returns true, in original order
pub fn filter<T, F>(list: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    list.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Fold a list left to right, starting from `seed`
///
/// `combine` receives the accumulator and the next element. An empty list
/// returns `seed` unchanged.
pub fn reduce<T, A, F>(list: &[T], seed: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    list.iter().fold(seed, combine)
}

/// Visit each element in order
pub fn each<T, F>(list: &[T], action: F)
where
    F: FnMut(&T),
{
    list.iter().for_each(action);
}

/// Sum of all elements; `reduce` with `+` and a zero seed
pub fn sum(list: &[i64]) -> i64 {
    reduce(list, 0, |acc, x| acc + x)
}
