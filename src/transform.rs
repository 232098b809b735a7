//! Order preserving map and filter.
//!
//! Both invoke the supplied function exactly once per element, in index order, and never touch
//! their input.

/// Returns `f` applied to every element, `output[i] == f(&input[i])`.
///
/// ```
/// let squares = sort_kit::map(&[1, 5, 2, 7, 4], |x| x * x);
/// assert_eq!(squares, [1, 25, 4, 49, 16]);
/// ```
pub fn map<T, U, F>(input: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    input.iter().map(f).collect()
}

/// Consuming version of [`map`], works with any iterable.
pub fn map_into<I, U, F>(input: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    input.into_iter().map(f).collect()
}

/// Returns the elements for which `predicate` is true, in their original order.
///
/// ```
/// let small = sort_kit::filter(&[17.3, 11.1, 9.9, 4.3, 12.6], |&x| x <= 10.0);
/// assert_eq!(small, [9.9, 4.3]);
/// ```
pub fn filter<T, F>(input: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    input.iter().filter(|val| predicate(val)).cloned().collect()
}

/// Consuming version of [`filter`], works with any iterable and doesn't require `Clone`.
pub fn filter_into<I, F>(input: I, predicate: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    input.into_iter().filter(predicate).collect()
}
