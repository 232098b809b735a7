use crate::sortable::Sortable;

/// Sorts `data[lo..hi]` assuming `data[lo..lo + offset]` is already sorted.
///
/// Only ever swaps neighbours and moves an element left while it is strictly less than its
/// predecessor, so equal elements keep their relative order.
pub(crate) fn insertion_sort_shift_left<S>(data: &mut S, lo: usize, hi: usize, offset: usize)
where
    S: Sortable + ?Sized,
{
    // This would be a logic bug.
    assert!(offset != 0 && offset <= hi - lo);

    // Shift each element of the unsorted region data[lo + offset..hi] as far left as is needed to
    // make data[lo..hi] sorted.
    for i in (lo + offset)..hi {
        insert_tail(data, lo, i);
    }
}

/// Moves the element at `tail` left into the sorted run `data[lo..tail]`.
#[inline]
fn insert_tail<S>(data: &mut S, lo: usize, tail: usize)
where
    S: Sortable + ?Sized,
{
    let mut hole = tail;
    while hole > lo && data.is_less(hole, hole - 1) {
        data.swap(hole, hole - 1);
        hole -= 1;
    }
}
