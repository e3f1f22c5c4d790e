use num_traits::{PrimInt, Unsigned};

pub use gitargets_core::models::Interval;

/// A static collection of intervals on one coordinate axis (one chromosome)
/// that answers range queries.
///
/// Queries are half-open: an interval is reported when
/// `interval.start < end && interval.end > start`. Zero-width intervals can
/// match without sharing a base, so callers that need a minimum overlap
/// filter on [`Interval::overlap_width`].
pub trait Overlapper<I, T>: Send + Sync
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized;

    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
