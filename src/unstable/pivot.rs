use crate::sortable::Sortable;

// Recursively select a pseudo-median if above this threshold.
const PSEUDO_MEDIAN_REC_THRESHOLD: usize = 64;

/// Selects a pivot from `data[lo..hi]`. Algorithm taken from glidesort by Orson Peters.
///
/// This chooses a pivot by sampling an adaptive amount of points, approximating the quality of a
/// median of sqrt(n) elements.
pub(crate) fn choose_pivot<S>(data: &mut S, lo: usize, hi: usize) -> usize
where
    S: Sortable + ?Sized,
{
    let len = hi - lo;

    // Callers only reach this with ranges longer than the small-sort threshold.
    debug_assert!(len >= 8);

    let len_div_8 = len / 8;

    let a = lo;
    let b = lo + len_div_8 * 4;
    let c = lo + len_div_8 * 7;

    if len < PSEUDO_MEDIAN_REC_THRESHOLD {
        median3(data, a, b, c)
    } else {
        median3_rec(data, a, b, c, len_div_8)
    }
}

/// Calculates an approximate median of 3 elements from sections a, b, c, or recursively from an
/// approximation of each, if they're large enough. By dividing the size of each section by 8 when
/// recursing we have logarithmic recursion depth and overall sample from f(n) = 3*f(n/8) ->
/// f(n) = O(n^(log(3)/log(8))) ~= O(n^0.528) elements.
fn median3_rec<S>(data: &mut S, mut a: usize, mut b: usize, mut c: usize, n: usize) -> usize
where
    S: Sortable + ?Sized,
{
    if n * 8 >= PSEUDO_MEDIAN_REC_THRESHOLD {
        let n8 = n / 8;
        a = median3_rec(data, a, a + n8 * 4, a + n8 * 7, n8);
        b = median3_rec(data, b, b + n8 * 4, b + n8 * 7, n8);
        c = median3_rec(data, c, c + n8 * 4, c + n8 * 7, n8);
    }
    median3(data, a, b, c)
}

/// Calculates the median of 3 elements.
#[inline]
fn median3<S>(data: &mut S, a: usize, b: usize, c: usize) -> usize
where
    S: Sortable + ?Sized,
{
    // Compiler tends to make this branchless when sensible, and avoids the
    // third comparison when not.
    let x = data.is_less(a, b);
    let y = data.is_less(a, c);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = data.is_less(b, c);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}
