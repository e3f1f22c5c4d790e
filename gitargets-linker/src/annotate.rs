use gitargets_core::models::{AnnotatedRegion, GeneSet, RegionSet, TaggedRegionSet};
use gitargets_overlaprs::{IntoGenomeIndex, find_overlaps_in};

use crate::errors::LinkerResult;
use crate::utils::ensure_same_seqlevels_style;

///
/// Annotate every query with the union of the genes of all tagged regions it
/// overlaps by at least one base.
///
/// The output has one entry per query, in query order. Queries without any
/// overlap get an empty gene set.
///
pub fn annotate_regions(
    queries: &RegionSet,
    targets: &TaggedRegionSet,
) -> LinkerResult<Vec<AnnotatedRegion>> {
    let target_regions = targets.to_region_set();
    ensure_same_seqlevels_style(&[("query", queries), ("targets", &target_regions)])?;

    let index = target_regions.into_genome_index();
    let mut genes: Vec<GeneSet> = vec![GeneSet::new(); queries.len()];
    for hit in find_overlaps_in(queries, &index, 1) {
        genes[hit.query].extend_from(&targets.regions[hit.target].genes);
    }

    let annotated: Vec<AnnotatedRegion> = queries
        .regions
        .iter()
        .zip(genes)
        .map(|(region, genes)| AnnotatedRegion {
            region: region.clone(),
            genes,
        })
        .collect();

    log::info!(
        "annotated {} of {} query regions",
        annotated.iter().filter(|a| !a.genes.is_empty()).count(),
        annotated.len()
    );

    Ok(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    use gitargets_core::models::{Region, TaggedRegion};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use crate::errors::LinkerError;

    fn region(chr: &str, start: u32, end: u32) -> Region {
        Region::try_new(chr, start, end).unwrap()
    }

    fn tagged(chr: &str, start: u32, end: u32, genes: &[&str]) -> TaggedRegion {
        TaggedRegion::try_new(region(chr, start, end), genes.iter().copied().collect()).unwrap()
    }

    #[fixture]
    fn targets() -> TaggedRegionSet {
        TaggedRegionSet::new(vec![
            tagged("chr1", 5000, 5100, &["GENEX"]),
            tagged("chr1", 7000, 7100, &["A", "B"]),
            tagged("chr1", 7050, 7200, &["B", "C"]),
        ])
    }

    #[rstest]
    fn test_hit_and_miss(targets: TaggedRegionSet) {
        let queries = RegionSet::from(vec![region("chr1", 5050, 5060), region("chr1", 1, 50)]);

        let annotated = annotate_regions(&queries, &targets).unwrap();

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].genes.to_string(), "GENEX");
        assert!(annotated[1].genes.is_empty());
    }

    #[rstest]
    fn test_union_of_overlapping_regions(targets: TaggedRegionSet) {
        let queries = RegionSet::from(vec![region("chr1", 7060, 7070)]);

        let annotated = annotate_regions(&queries, &targets).unwrap();

        let expected: GeneSet = ["A", "B", "C"].into_iter().collect();
        assert_eq!(annotated[0].genes, expected);
    }

    #[rstest]
    fn test_preserves_query_order(targets: TaggedRegionSet) {
        let queries = RegionSet::from(vec![
            region("chr1", 7150, 7160),
            region("chr2", 1, 2),
            region("chr1", 5000, 5001),
            region("chr1", 1, 50),
            region("chr1", 5000, 5001),
        ]);

        let annotated = annotate_regions(&queries, &targets).unwrap();

        let regions: Vec<Region> = annotated.iter().map(|a| a.region.clone()).collect();
        assert_eq!(regions, queries.regions);
        let genes: Vec<String> = annotated.iter().map(|a| a.genes.to_string()).collect();
        assert_eq!(genes, vec!["B,C", ".", "GENEX", ".", "GENEX"]);
    }

    #[rstest]
    fn test_adjacent_query_is_not_annotated(targets: TaggedRegionSet) {
        let queries = RegionSet::from(vec![region("chr1", 5100, 5200)]);

        let annotated = annotate_regions(&queries, &targets).unwrap();

        assert!(annotated[0].genes.is_empty());
    }

    #[rstest]
    fn test_empty_targets() {
        let queries = RegionSet::from(vec![region("chr1", 1, 50)]);

        let annotated = annotate_regions(&queries, &TaggedRegionSet::default()).unwrap();

        assert_eq!(annotated.len(), 1);
        assert!(annotated[0].genes.is_empty());
    }

    #[rstest]
    fn test_seqlevels_mismatch(targets: TaggedRegionSet) {
        let queries = RegionSet::from(vec![region("1", 5050, 5060)]);

        let result = annotate_regions(&queries, &targets);

        assert!(matches!(
            result,
            Err(LinkerError::SeqlevelsStyleMismatch { .. })
        ));
    }
}
