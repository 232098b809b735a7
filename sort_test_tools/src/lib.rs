/// A sort implementation under test.
///
/// `sort_by_less` takes the same kind of less-than predicate the implementations are built on,
/// tests that think in `Ordering` convert with `compare(a, b) == Ordering::Less`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by_less<T, F>(arr: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
