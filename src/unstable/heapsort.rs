use crate::sortable::Sortable;

/// Sorts `data[lo..hi]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn heapsort<S>(data: &mut S, lo: usize, hi: usize)
where
    S: Sortable + ?Sized,
{
    let len = hi - lo;

    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for i in (0..len / 2).rev() {
        sift_down(data, lo, i, len);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        data.swap(lo, lo + end);
        sift_down(data, lo, 0, end);
    }
}

// This binary heap respects the invariant `parent >= child`. Positions are relative to `base`,
// the heap occupies `base..base + len`.
fn sift_down<S>(data: &mut S, base: usize, mut node: usize, len: usize)
where
    S: Sortable + ?Sized,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && data.is_less(base + child, base + child + 1) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !data.is_less(base + node, base + child) {
            break;
        }

        data.swap(base + node, base + child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sortable::OrderedSlice;

    #[test]
    fn sorts_sub_range() {
        let mut v = [100, 7, 3, 9, 1, 3, 8, -1];
        heapsort(&mut OrderedSlice::new(&mut v), 1, 7);

        assert_eq!(v, [100, 1, 3, 3, 7, 8, 9, -1]);
    }
}
