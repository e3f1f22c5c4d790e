use std::mem::swap;

use num_traits::{PrimInt, Unsigned};

use super::Overlapper;
use gitargets_core::models::Interval;

/// Intervals that cover more than this many of their next `2 * MIN_COVERAGE`
/// neighbours get pushed down into the next sublist.
const MIN_COVERAGE: usize = 10;

/// An Augmented Interval List for genomic interval overlap queries.
///
/// From the following article: <https://academic.oup.com/bioinformatics/article/35/23/4907/5509521>
///
/// Intervals are sorted by start and split into sublists so that long,
/// high-coverage intervals do not defeat the running `max_end` early exit.
///
/// # Examples
///
/// ```
/// use gitargets_overlaprs::{AIList, Overlapper, Interval};
///
/// let promoters = vec![
///     Interval { start: 100u32, end: 150, val: 0usize },
///     Interval { start: 120, end: 170, val: 1 },
///     Interval { start: 850, end: 950, val: 2 },
/// ];
///
/// let ailist = AIList::build(promoters);
///
/// let hits = ailist.find(100, 200);
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    sublists: Vec<Sublist<I, T>>,
    len: usize,
}

/// One decomposition level: intervals sorted by start with a running maximum
/// of their ends.
#[derive(Debug, Clone)]
struct Sublist<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    starts: Vec<I>,
    max_ends: Vec<I>,
    intervals: Vec<Interval<I, T>>,
}

impl<I, T> Sublist<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    ///
    /// Split `intervals` (sorted by start) into the ones kept at this level
    /// and the ones left over for the next level.
    ///
    fn decompose(intervals: &[Interval<I, T>], leftover: &mut Vec<Interval<I, T>>) -> Self {
        let mut kept: Vec<Interval<I, T>> = Vec::with_capacity(intervals.len());

        for (index, interval) in intervals.iter().enumerate() {
            let covered = intervals
                .iter()
                .skip(index + 1)
                .take(MIN_COVERAGE * 2 - 1)
                .filter(|next| interval.end > next.end)
                .count();

            if covered >= MIN_COVERAGE {
                leftover.push(interval.clone());
            } else {
                kept.push(interval.clone());
            }
        }

        let starts = kept.iter().map(|iv| iv.start).collect();
        let max_ends = kept
            .iter()
            .scan(I::zero(), |max, iv| {
                *max = (*max).max(iv.end);
                Some(*max)
            })
            .collect();

        Sublist {
            starts,
            max_ends,
            intervals: kept,
        }
    }

    /// Walk left from the last interval starting before `end` until no
    /// earlier interval can reach past `start`.
    fn scan(&self, start: I, end: I) -> impl Iterator<Item = &Interval<I, T>> {
        let upper = self.starts.partition_point(|&s| s < end);
        (0..upper)
            .rev()
            .take_while(move |&i| self.max_ends[i] > start)
            .map(move |i| &self.intervals[i])
            .filter(move |iv| iv.end > start)
    }
}

impl<I, T> Overlapper<I, T> for AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    ///
    /// Create a new AIList struct
    ///
    /// # Arguments
    /// - intervals: list of intervals to create from
    ///
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        let len = intervals.len();
        let mut remaining = intervals;
        remaining.sort_by_key(|iv| iv.start);

        let mut sublists = Vec::new();
        let mut leftover = Vec::new();

        while !remaining.is_empty() {
            sublists.push(Sublist::decompose(&remaining, &mut leftover));
            remaining.clear();
            swap(&mut remaining, &mut leftover);
        }

        AIList { sublists, len }
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(
            self.sublists
                .iter()
                .flat_map(move |sublist| sublist.scan(start, end)),
        )
    }

    fn len(&self) -> usize {
        self.len
    }
}
