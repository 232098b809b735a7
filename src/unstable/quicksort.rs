use crate::sortable::Sortable;
use crate::SMALL_SORT_THRESHOLD;

use super::heapsort::heapsort;
use super::pivot::choose_pivot;
use super::smallsort::insertion_sort_shift_left;

/// Sorts `data[lo..hi]` recursively.
///
/// If the range had a predecessor pivot in the original array, its position is specified as
/// `ancestor_pivot`. It always lies outside of `lo..hi` and is never moved while this range is
/// being sorted.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort.
pub(crate) fn quicksort<S>(
    data: &mut S,
    mut lo: usize,
    hi: usize,
    mut ancestor_pivot: Option<usize>,
    mut limit: u32,
) where
    S: Sortable + ?Sized,
{
    loop {
        let len = hi - lo;

        if len <= SMALL_SORT_THRESHOLD {
            if len >= 2 {
                insertion_sort_shift_left(data, lo, hi, 1);
            }
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort(data, lo, hi);
            return;
        }

        limit -= 1;

        let pivot_pos = choose_pivot(data, lo, hi);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // range. Partition the range into elements equal to and elements greater than the pivot.
        // This case is usually hit when the range contains many duplicate elements.
        if let Some(ancestor) = ancestor_pivot {
            if !data.is_less(ancestor, pivot_pos) {
                let mid = partition(data, lo, hi, pivot_pos, PartitionKind::LessOrEqual);

                // Continue sorting elements greater than the pivot. We know that mid contains the
                // pivot. So we can continue after mid.
                lo = mid + 1;
                ancestor_pivot = None;
                continue;
            }
        }

        let mid = partition(data, lo, hi, pivot_pos, PartitionKind::Less);

        // Recurse into the left side. We have a fixed recursion limit, so the depth is bounded
        // by `limit` regardless of which side is shorter.
        quicksort(data, lo, mid, ancestor_pivot, limit);

        // Continue with the right side.
        lo = mid + 1;
        ancestor_pivot = Some(mid);
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum PartitionKind {
    /// Left side holds elements with `is_less(elem, pivot)`.
    Less,
    /// Left side holds elements with `!is_less(pivot, elem)`.
    LessOrEqual,
}

/// Re-arranges `data[lo..hi]` such that all elements that belong left of the pivot (see
/// [`PartitionKind`]) come first, followed by the pivot itself, followed by the rest.
///
/// Returns the final position of the pivot.
///
/// If `is_less` does not implement a strict weak order the resulting order and return value are
/// unspecified, but the range still holds the same elements and the return value is in bounds.
fn partition<S>(data: &mut S, lo: usize, hi: usize, pivot_pos: usize, kind: PartitionKind) -> usize
where
    S: Sortable + ?Sized,
{
    debug_assert!(lo < hi && (lo..hi).contains(&pivot_pos));

    // Place the pivot at the beginning of the range.
    data.swap(lo, pivot_pos);

    // Lomuto partition. `data[lo + 1..=last_left]` belongs left, `lo` holds the pivot and is
    // never touched until the end.
    let mut last_left = lo;
    for r in (lo + 1)..hi {
        let goes_left = match kind {
            PartitionKind::Less => data.is_less(r, lo),
            PartitionKind::LessOrEqual => !data.is_less(lo, r),
        };

        if goes_left {
            last_left += 1;
            data.swap(last_left, r);
        }
    }

    // Place the pivot between the two partitions.
    data.swap(lo, last_left);

    last_left
}
