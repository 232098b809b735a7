//! Generic sorting, mapping and filtering utilities, plus a small fan-out worker harness.
//!
//! Sorting comes in two flavours, [`unstable`] and [`stable`]. Both operate on anything that
//! implements [`Sortable`], the slice functions are thin wrappers that build the matching adapter.

pub mod record;
pub mod sortable;
pub mod stable;
pub mod transform;
pub mod unstable;
pub mod workers;

pub use sortable::{is_sorted, less_by_compare, LessBy, OrderedSlice, Reverse, Sortable};
pub use transform::{filter, map};
pub use unstable::{sort, sort_by_less};

/// Inputs up to this length are always sorted with insertion sort. Longer inputs use insertion
/// sort for sub-ranges of at most this length.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 20;
