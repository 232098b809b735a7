//! Stable, allocation free merge sort over [`Sortable`].
//!
//! Short blocks are insertion sorted, then merged pairwise with a rotation based in-place merge.
//! This is *O*(*n* \* log(*n*)^2) comparisons and swaps, in exchange it needs nothing but the three
//! [`Sortable`] primitives.

use crate::sortable::{LessBy, OrderedSlice, Sortable};
use crate::unstable::smallsort::insertion_sort_shift_left;
use crate::unstable::{find_streak, reverse};
use crate::SMALL_SORT_THRESHOLD;

mod merge;

/// Sorts the slice, preserving the initial order of equal elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_sortable(&mut OrderedSlice::new(v));
}

/// Sorts the slice with a less-than predicate, preserving the initial order of equal elements.
///
/// See [`crate::unstable::sort_by_less`] for the requirements on `is_less`.
///
/// ```
/// let mut v = [("b", 2), ("a", 1), ("c", 1)];
/// sort_kit::stable::sort_by_less(&mut v, |a, b| a.1 < b.1);
/// assert_eq!(v, [("a", 1), ("c", 1), ("b", 2)]);
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

pub fn sort_sortable<S>(data: &mut S)
where
    S: Sortable + ?Sized,
{
    let len = data.len();

    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        insertion_sort_shift_left(data, 0, len, 1);
        return;
    }

    // A strictly descending streak has no equal neighbours, so reversing it is stable.
    let (streak_end, was_reversed) = find_streak(data, 0, len);
    if streak_end == len {
        if was_reversed {
            reverse(data, 0, len);
        }
        return;
    }

    let mut start = 0;
    while start < len {
        let end = (start + SMALL_SORT_THRESHOLD).min(len);
        if end - start >= 2 {
            insertion_sort_shift_left(data, start, end, 1);
        }
        start = end;
    }

    let mut width = SMALL_SORT_THRESHOLD;
    while width < len {
        let mut lo = 0;
        while len - lo > width {
            let mid = lo + width;
            let hi = mid + width.min(len - mid);
            merge::merge_in_place(data, lo, mid, hi);
            lo = hi;
        }
        width = width.saturating_mul(2);
    }
}
