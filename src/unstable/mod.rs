//! Unstable introsort over [`Sortable`].

use crate::sortable::{LessBy, OrderedSlice, Sortable, TotalOrd, TotalOrdSlice};
use crate::SMALL_SORT_THRESHOLD;

mod heapsort;
mod pivot;
mod quicksort;
pub(crate) mod smallsort;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [78, 64, 45];
/// sort_kit::unstable::sort(&mut v);
/// assert_eq!(v, [45, 64, 78]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_sortable(&mut OrderedSlice::new(v));
}

/// Sorts the slice with a less-than predicate, but might not preserve the order of equal
/// elements.
///
/// `is_less(a, b)` must return true if `a` should be placed before `b`. The predicate must define
/// a strict weak ordering. If it doesn't, the order of the elements is unspecified, but the slice
/// still holds every original element. The same is true if `is_less` panics.
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// sort_kit::unstable::sort_by_less(&mut v, |a, b| a > b);
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_sortable(&mut LessBy::new(v, is_less));
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_less(v, |a, b| f(a).lt(&f(b)));
}

/// Sorts `f32` or `f64` values by their IEEE 754 total order. `-0.0` sorts before `+0.0` and
/// positive NaNs sort last.
#[inline]
pub fn sort_floats<T>(v: &mut [T])
where
    T: TotalOrd,
{
    sort_sortable(&mut TotalOrdSlice::new(v));
}

/// Sorts anything that implements [`Sortable`], only ever going through its three primitives.
pub fn sort_sortable<S>(data: &mut S)
where
    S: Sortable + ?Sized,
{
    let len = data.len();

    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        smallsort::insertion_sort_shift_left(data, 0, len, 1);
        return;
    }

    let (streak_end, was_reversed) = find_streak(data, 0, len);
    if streak_end == len {
        if was_reversed {
            reverse(data, 0, len);
        }
        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();

    quicksort::quicksort(data, 0, len, None, limit);
}

/// Finds a streak of presorted elements starting at `lo`. Returns the first index that is not
/// part of said streak, and whether the streak was strictly descending.
pub(crate) fn find_streak<S>(data: &mut S, lo: usize, hi: usize) -> (usize, bool)
where
    S: Sortable + ?Sized,
{
    if hi - lo < 2 {
        return (hi, false);
    }

    let mut end = lo + 2;

    if data.is_less(lo + 1, lo) {
        while end < hi && data.is_less(end, end - 1) {
            end += 1;
        }
        (end, true)
    } else {
        while end < hi && !data.is_less(end, end - 1) {
            end += 1;
        }
        (end, false)
    }
}

/// Reverses `data[lo..hi]` with `(hi - lo) / 2` swaps.
pub(crate) fn reverse<S>(data: &mut S, lo: usize, hi: usize)
where
    S: Sortable + ?Sized,
{
    let (mut i, mut j) = (lo, hi);
    while i + 1 < j {
        j -= 1;
        data.swap(i, j);
        i += 1;
    }
}
