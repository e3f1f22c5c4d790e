use rayon::prelude::*;

use gitargets_core::models::RegionSet;

use crate::genome_index::{GenomeIndex, IntoGenomeIndex};

/// A query/target pair sharing enough bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlapHit {
    pub query: usize,
    pub target: usize,
}

/// The nearest target of one query and the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NearestHit {
    pub query: usize,
    pub target: usize,
    pub distance: u32,
}

///
/// Every (query, target) pair on the same chromosome that shares at least
/// `min_overlap` bases. Thresholds below one base count as one.
///
/// The result is complete and sorted by query index, then target index.
///
/// # Arguments
/// - queries: regions to look up
/// - targets: regions to search in
/// - min_overlap: minimum number of shared bases
///
pub fn find_overlaps(queries: &RegionSet, targets: &RegionSet, min_overlap: u32) -> Vec<OverlapHit> {
    find_overlaps_in(queries, &targets.into_genome_index(), min_overlap)
}

///
/// Same as [find_overlaps], against a prebuilt index.
///
pub fn find_overlaps_in(
    queries: &RegionSet,
    index: &GenomeIndex,
    min_overlap: u32,
) -> Vec<OverlapHit> {
    let per_query: Vec<Vec<OverlapHit>> = queries
        .regions
        .par_iter()
        .enumerate()
        .map(|(query, region)| {
            index
                .overlaps(region, min_overlap)
                .into_iter()
                .map(|target| OverlapHit { query, target })
                .collect()
        })
        .collect();

    per_query.into_iter().flatten().collect()
}

///
/// The single nearest same-chromosome target of every query, in query order.
/// Queries on chromosomes without targets get no hit.
///
/// Overlapping and adjacent regions are at distance 0. See
/// [GenomeIndex::nearest] for how ties are broken.
///
pub fn distance_to_nearest(queries: &RegionSet, targets: &RegionSet) -> Vec<NearestHit> {
    distance_to_nearest_in(queries, &targets.into_genome_index())
}

///
/// Same as [distance_to_nearest], against a prebuilt index.
///
pub fn distance_to_nearest_in(queries: &RegionSet, index: &GenomeIndex) -> Vec<NearestHit> {
    queries
        .regions
        .par_iter()
        .enumerate()
        .filter_map(|(query, region)| {
            index
                .nearest(region)
                .map(|(target, distance)| NearestHit {
                    query,
                    target,
                    distance,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use gitargets_core::models::Region;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn region(chr: &str, start: u32, end: u32) -> Region {
        Region::try_new(chr, start, end).unwrap()
    }

    #[fixture]
    fn targets() -> RegionSet {
        RegionSet::from(vec![
            region("chr1", 100, 150),
            region("chr1", 120, 170),
            region("chr2", 850, 950),
            region("chr1", 60100, 60150),
        ])
    }

    #[rstest]
    fn test_find_overlaps_is_complete_and_sorted(targets: RegionSet) {
        let queries = RegionSet::from(vec![
            region("chr2", 800, 900),
            region("chr1", 100, 200),
            region("chr1", 20000, 20100),
            region("chr1", 60000, 60200),
        ]);

        let hits = find_overlaps(&queries, &targets, 0);
        assert_eq!(
            hits,
            vec![
                OverlapHit { query: 0, target: 2 },
                OverlapHit { query: 1, target: 0 },
                OverlapHit { query: 1, target: 1 },
                OverlapHit { query: 3, target: 3 },
            ]
        );
    }

    #[rstest]
    fn test_find_overlaps_min_overlap(targets: RegionSet) {
        let queries = RegionSet::from(vec![region("chr1", 140, 200)]);

        // 10 bases with target 0, 30 bases with target 1
        assert_eq!(find_overlaps(&queries, &targets, 10).len(), 2);
        assert_eq!(
            find_overlaps(&queries, &targets, 11),
            vec![OverlapHit { query: 0, target: 1 }]
        );
        assert!(find_overlaps(&queries, &targets, 31).is_empty());
    }

    #[rstest]
    fn test_never_crosses_chromosomes(targets: RegionSet) {
        let queries = RegionSet::from(vec![region("chr3", 100, 150), region("1", 100, 150)]);

        assert!(find_overlaps(&queries, &targets, 1).is_empty());
        assert!(distance_to_nearest(&queries, &targets).is_empty());
    }

    #[rstest]
    fn test_distance_to_nearest(targets: RegionSet) {
        let queries = RegionSet::from(vec![
            region("chr1", 5000, 5100),
            region("chrX", 1, 2),
            region("chr2", 1000, 1200),
            region("chr1", 110, 115),
        ]);

        let hits = distance_to_nearest(&queries, &targets);
        assert_eq!(
            hits,
            vec![
                NearestHit { query: 0, target: 1, distance: 4830 },
                NearestHit { query: 2, target: 2, distance: 50 },
                NearestHit { query: 3, target: 0, distance: 0 },
            ]
        );
    }

    #[rstest]
    fn test_empty_inputs(targets: RegionSet) {
        let empty = RegionSet::from(Vec::<Region>::new());
        assert!(find_overlaps(&empty, &targets, 1).is_empty());
        assert!(distance_to_nearest(&targets, &empty).is_empty());
    }
}
