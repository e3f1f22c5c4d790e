//! Genome-wide interval index.
//!
//! [`GenomeIndex`] keeps one [`AIList`] per chromosome for overlap queries,
//! plus the same targets sorted by start and by end for nearest-neighbour
//! queries. Values stored in the index are the target positions in the
//! [`RegionSet`] it was built from.
//!
//! ```
//! use gitargets_core::models::{Region, RegionSet};
//! use gitargets_overlaprs::genome_index::IntoGenomeIndex;
//!
//! let promoters = RegionSet::from(vec![
//!     Region::try_new("chr1", 100, 150).unwrap(),
//!     Region::try_new("chr2", 850, 950).unwrap(),
//! ]);
//! let index = promoters.into_genome_index();
//!
//! let anchor = Region::try_new("chr1", 100, 200).unwrap();
//! assert_eq!(index.overlaps(&anchor, 1), vec![0]);
//! assert_eq!(index.nearest(&Region::try_new("chr2", 1000, 1200).unwrap()), Some((1, 50)));
//! ```
use std::cmp::Ordering;
use std::collections::HashMap;

use gitargets_core::models::{Interval, Region, RegionSet};

use crate::{AIList, Overlapper};

/// A target as kept in the sorted nearest-neighbour arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Target {
    start: u32,
    end: u32,
    idx: usize,
}

/// A nearest-neighbour candidate. Candidates order by distance, then true
/// overlaps before zero-distance neighbours, then start, end and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    distance: u32,
    shares_bases: bool,
    target: Target,
}

impl Candidate {
    fn key(&self) -> (u32, bool, u32, u32, usize) {
        (
            self.distance,
            !self.shares_bases,
            self.target.start,
            self.target.end,
            self.target.idx,
        )
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct ChromIndex {
    overlapper: Box<dyn Overlapper<u32, usize>>,
    /// sorted by (start, end, idx)
    by_start: Vec<Target>,
    /// sorted by (end, start, idx)
    by_end: Vec<Target>,
}

impl ChromIndex {
    fn build(targets: Vec<Target>) -> Self {
        let intervals: Vec<Interval<u32, usize>> = targets
            .iter()
            .map(|t| Interval {
                start: t.start,
                end: t.end,
                val: t.idx,
            })
            .collect();

        let mut by_start = targets.clone();
        by_start.sort_by_key(|t| (t.start, t.end, t.idx));
        let mut by_end = targets;
        by_end.sort_by_key(|t| (t.end, t.start, t.idx));

        ChromIndex {
            overlapper: Box::new(AIList::build(intervals)),
            by_start,
            by_end,
        }
    }

    /// Closest target ending at or before `start`.
    fn left_of(&self, start: u32) -> Option<Target> {
        let upper = self.by_end.partition_point(|t| t.end <= start);
        let last = self.by_end.get(upper.checked_sub(1)?)?;
        // first target of the run sharing the largest end has the lowest (start, idx)
        let run_start = self.by_end.partition_point(|t| t.end < last.end);
        self.by_end.get(run_start).copied()
    }

    /// Closest target starting at or after `end`.
    fn right_of(&self, end: u32) -> Option<Target> {
        let lower = self.by_start.partition_point(|t| t.start < end);
        self.by_start.get(lower).copied()
    }
}

///
/// Per-chromosome index over a set of target regions.
///
pub struct GenomeIndex {
    chroms: HashMap<String, ChromIndex>,
    len: usize,
}

impl GenomeIndex {
    ///
    /// Indices of the targets sharing at least `min_overlap` bases with
    /// `region`, ascending. A `min_overlap` of zero is treated as one.
    ///
    pub fn overlaps(&self, region: &Region, min_overlap: u32) -> Vec<usize> {
        let min_overlap = min_overlap.max(1);
        let Some(chrom) = self.chroms.get(&region.chr) else {
            return Vec::new();
        };

        let mut hits: Vec<usize> = chrom
            .overlapper
            .find_iter(region.start, region.end)
            .filter(|iv| iv.overlap_width(region.start, region.end) >= min_overlap)
            .map(|iv| iv.val)
            .collect();
        hits.sort_unstable();
        hits
    }

    ///
    /// The single nearest target to `region` and its distance in bases.
    ///
    /// Overlapping and adjacent targets are at distance 0. Ties go to a
    /// target that shares bases with `region`, then to the lowest start, the
    /// lowest end and finally the lowest target index. `None` when the
    /// chromosome has no targets.
    ///
    pub fn nearest(&self, region: &Region) -> Option<(usize, u32)> {
        let chrom = self.chroms.get(&region.chr)?;

        let inside = chrom
            .overlapper
            .find_iter(region.start, region.end)
            .map(|iv| Candidate {
                distance: 0,
                shares_bases: iv.overlap_width(region.start, region.end) > 0,
                target: Target {
                    start: iv.start,
                    end: iv.end,
                    idx: iv.val,
                },
            })
            .min();

        let left = chrom.left_of(region.start).map(|t| Candidate {
            distance: region.start - t.end,
            shares_bases: false,
            target: t,
        });
        let right = chrom.right_of(region.end).map(|t| Candidate {
            distance: t.start - region.end,
            shares_bases: false,
            target: t,
        });

        [inside, left, right]
            .into_iter()
            .flatten()
            .min()
            .map(|c| (c.target.idx, c.distance))
    }

    /// Number of indexed targets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

///
/// Build a [GenomeIndex] from a collection of regions.
///
pub trait IntoGenomeIndex {
    fn into_genome_index(self) -> GenomeIndex;
}

impl IntoGenomeIndex for &RegionSet {
    fn into_genome_index(self) -> GenomeIndex {
        // STEP 1: group targets by chromosome, keeping their positions
        let mut grouped: HashMap<String, Vec<Target>> = HashMap::new();
        for (idx, region) in self.regions.iter().enumerate() {
            grouped.entry(region.chr.clone()).or_default().push(Target {
                start: region.start,
                end: region.end,
                idx,
            });
        }

        // STEP 2: build one index per chromosome
        let chroms: HashMap<String, ChromIndex> = grouped
            .into_iter()
            .map(|(chr, targets)| (chr, ChromIndex::build(targets)))
            .collect();

        log::debug!(
            "indexed {} targets on {} chromosomes",
            self.len(),
            chroms.len()
        );

        GenomeIndex {
            chroms,
            len: self.len(),
        }
    }
}

impl IntoGenomeIndex for RegionSet {
    fn into_genome_index(self) -> GenomeIndex {
        (&self).into_genome_index()
    }
}
