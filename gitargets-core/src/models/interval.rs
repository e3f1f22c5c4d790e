use num_traits::{PrimInt, Unsigned, identities::zero};
use std::cmp::Ordering;

/// A half-open range `[start, end)` carrying a payload.
///
/// Intervals order and compare by coordinates only; the payload is ignored.
#[derive(Eq, Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Number of bases shared with `[start, end)`; zero when disjoint.
    #[inline]
    pub fn overlap_width(&self, start: I, end: I) -> I {
        std::cmp::min(self.end, end)
            .checked_sub(&std::cmp::max(self.start, start))
            .unwrap_or_else(zero::<I>)
    }
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn iv(start: u32, end: u32) -> Interval<u32, ()> {
        Interval { start, end, val: () }
    }

    #[rstest]
    #[case(100, 150, 50)]
    #[case(150, 250, 50)]
    #[case(200, 300, 0)]
    #[case(0, 100, 0)]
    #[case(120, 130, 10)]
    fn test_overlap_width(#[case] start: u32, #[case] end: u32, #[case] expected: u32) {
        assert_eq!(iv(100, 200).overlap_width(start, end), expected);
    }
}
