use crate::sortable::Sortable;
use crate::unstable::reverse;

/// Merges the sorted runs `data[lo..mid]` and `data[mid..hi]` in place.
///
/// Splits the longer run in half, finds the matching cut in the other run by binary search and
/// rotates the middle part into place, then recurses into both halves. Equal elements from the
/// left run always end up before those from the right run.
pub(crate) fn merge_in_place<S>(data: &mut S, lo: usize, mid: usize, hi: usize)
where
    S: Sortable + ?Sized,
{
    let len_left = mid - lo;
    let len_right = hi - mid;

    if len_left == 0 || len_right == 0 {
        return;
    }

    // Already in order, nothing to do.
    if !data.is_less(mid, mid - 1) {
        return;
    }

    if len_left + len_right == 2 {
        data.swap(lo, mid);
        return;
    }

    let (cut_left, cut_right) = if len_left >= len_right {
        let cut_left = lo + len_left / 2;
        (cut_left, lower_bound(data, mid, hi, cut_left))
    } else {
        let cut_right = mid + len_right / 2;
        (upper_bound(data, lo, mid, cut_right), cut_right)
    };

    rotate(data, cut_left, mid, cut_right);
    let new_mid = cut_left + (cut_right - mid);

    merge_in_place(data, lo, cut_left, new_mid);
    merge_in_place(data, new_mid, cut_right, hi);
}

/// First position in `lo..hi` whose element is not less than the element at `key`.
fn lower_bound<S>(data: &mut S, mut lo: usize, mut hi: usize, key: usize) -> usize
where
    S: Sortable + ?Sized,
{
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data.is_less(mid, key) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First position in `lo..hi` whose element is greater than the element at `key`.
fn upper_bound<S>(data: &mut S, mut lo: usize, mut hi: usize, key: usize) -> usize
where
    S: Sortable + ?Sized,
{
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data.is_less(key, mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Rotates `data[lo..hi]` so that `data[mid]` ends up at `lo`.
fn rotate<S>(data: &mut S, lo: usize, mid: usize, hi: usize)
where
    S: Sortable + ?Sized,
{
    if lo == mid || mid == hi {
        return;
    }

    reverse(data, lo, mid);
    reverse(data, mid, hi);
    reverse(data, lo, hi);
}
