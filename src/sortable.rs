use std::cmp::Ordering;

/// The three primitives a comparison sort needs: a length, a less-than between two positions and
/// a swap of two positions.
///
/// Implementations must accept any pair of in-bounds indices, including `a == b`. The sort
/// algorithms in this crate never call either method with an index `>= len()`.
pub trait Sortable {
    fn len(&self) -> usize;

    /// Returns true if the element at `a` must sort before the element at `b`.
    fn is_less(&mut self, a: usize, b: usize) -> bool;

    fn swap(&mut self, a: usize, b: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Sortable + ?Sized> Sortable for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        (**self).is_less(a, b)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        (**self).swap(a, b)
    }
}

/// Sorts by the natural order of `T`.
pub struct OrderedSlice<'a, T> {
    v: &'a mut [T],
}

impl<'a, T: Ord> OrderedSlice<'a, T> {
    pub fn new(v: &'a mut [T]) -> Self {
        Self { v }
    }

    pub fn into_inner(self) -> &'a mut [T] {
        self.v
    }
}

impl<T: Ord> Sortable for OrderedSlice<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self.v[a].lt(&self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

/// Sorts with a caller supplied less-than predicate.
///
/// The predicate should define a strict weak ordering. If it doesn't, the resulting order is
/// unspecified, but every original element stays in the slice.
pub struct LessBy<'a, T, F> {
    v: &'a mut [T],
    is_less: F,
}

impl<'a, T, F> LessBy<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(v: &'a mut [T], is_less: F) -> Self {
        Self { v, is_less }
    }

    pub fn into_inner(self) -> &'a mut [T] {
        self.v
    }
}

/// Builds a [`LessBy`] from a three-way comparison, treating only `Ordering::Less` as less.
pub fn less_by_compare<T, C>(
    v: &mut [T],
    mut compare: C,
) -> LessBy<'_, T, impl FnMut(&T, &T) -> bool>
where
    C: FnMut(&T, &T) -> Ordering,
{
    LessBy::new(v, move |a: &T, b: &T| compare(a, b) == Ordering::Less)
}

impl<T, F> Sortable for LessBy<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        (self.is_less)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

/// Inverts the order of the wrapped [`Sortable`].
pub struct Reverse<S> {
    inner: S,
}

impl<S: Sortable> Reverse<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sortable> Sortable for Reverse<S> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self.inner.is_less(b, a)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a, b);
    }
}

/// Returns true if no element is less than its predecessor.
pub fn is_sorted<S: Sortable + ?Sized>(data: &mut S) -> bool {
    (1..data.len()).all(|i| !data.is_less(i, i - 1))
}

/// Floating point types ordered by IEEE 754 `totalOrder`, see [`crate::unstable::sort_floats`].
pub trait TotalOrd: Copy {
    fn total_lt(&self, other: &Self) -> bool;
}

macro_rules! total_ord_float_impl {
    ($($t:ty),*) => {
        $(
            impl TotalOrd for $t {
                #[inline]
                fn total_lt(&self, other: &Self) -> bool {
                    self.total_cmp(other) == Ordering::Less
                }
            }
        )*
    };
}

total_ord_float_impl!(f32, f64);

/// Sorts floats by their IEEE 754 total order.
pub struct TotalOrdSlice<'a, T> {
    v: &'a mut [T],
}

impl<'a, T: TotalOrd> TotalOrdSlice<'a, T> {
    pub fn new(v: &'a mut [T]) -> Self {
        Self { v }
    }
}

impl<T: TotalOrd> Sortable for TotalOrdSlice<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self.v[a].total_lt(&self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}
