use std::path::{Path, PathBuf};

use rstest::*;

use gitargets::core::models::{InteractionSet, RegionSet, TaggedRegionSet, write_annotated_bed};
use gitargets::linker::config::LinkerConfig;
use gitargets::linker::errors::LinkerError;
use gitargets::linker::promoters::{GeneAnnotation, PromoterSet, PromoterSource};
use gitargets::linker::{Linkage, annotate_regions, gi2targets};

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from("../tests/data")
}

#[fixture]
fn interactions(path_to_data: PathBuf) -> InteractionSet {
    InteractionSet::try_from(path_to_data.join("interactions.tsv").as_path()).unwrap()
}

fn lines(linkage: &Linkage) -> Vec<String> {
    linkage
        .regions
        .regions
        .iter()
        .map(|t| t.as_string())
        .collect()
}

fn link_with_bed(interactions: &InteractionSet, promoters: &Path, max_dist: i64) -> Linkage {
    let promoters = PromoterSet::from_bed(promoters).unwrap();
    gi2targets(interactions, promoters.into(), max_dist).unwrap()
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_link_overlap(path_to_data: PathBuf, interactions: InteractionSet) {
        let linkage = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), 0);

        assert_eq!(
            lines(&linkage),
            vec![
                "chr1\t5000\t5100\tGENEX",
                "chr1\t90000\t90100\tGENEW,GENEZ",
                "chr2\t1000\t1200\tGENEX,GENEY",
            ]
        );
        assert_eq!(linkage.stats.interactions, 6);
        assert_eq!(linkage.stats.promoters, 5);
        assert_eq!(linkage.stats.promoters_dropped, 1);
        assert_eq!(linkage.stats.anchor1_promoter_hits, 2);
        assert_eq!(linkage.stats.anchor2_promoter_hits, 2);
        assert_eq!(linkage.stats.regions, 3);
    }

    #[rstest]
    fn test_link_gzipped_inputs_match_plain(path_to_data: PathBuf, interactions: InteractionSet) {
        let gz_interactions =
            InteractionSet::try_from(path_to_data.join("interactions.tsv.gz").as_path()).unwrap();

        let plain = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), 0);
        let gz = link_with_bed(&gz_interactions, &path_to_data.join("promoters.bed.gz"), 0);

        assert_eq!(lines(&plain), lines(&gz));
    }

    #[rstest]
    fn test_link_nearest(path_to_data: PathBuf, interactions: InteractionSet) {
        let linkage = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), 1000);

        assert_eq!(
            lines(&linkage),
            vec![
                "chr1\t100\t200\tGENEY",
                "chr1\t5000\t5100\tGENEX",
                "chr1\t90000\t90100\tGENEZ",
                "chr2\t800\t900\tGENEY",
                "chr2\t1000\t1200\tGENEX,GENEY",
            ]
        );
    }

    #[rstest]
    #[case(-50, 3)]
    #[case(-51, 0)]
    fn test_link_minimum_overlap(
        path_to_data: PathBuf,
        interactions: InteractionSet,
        #[case] max_dist: i64,
        #[case] expected: usize,
    ) {
        // every anchor-promoter overlap in the fixtures is exactly 50 bases
        let linkage = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), max_dist);
        assert_eq!(linkage.regions.len(), expected);
    }

    #[rstest]
    fn test_link_from_gtf(path_to_data: PathBuf, interactions: InteractionSet) {
        let annotation = GeneAnnotation::from_gtf(&path_to_data.join("genes.gtf"), true).unwrap();
        let linkage = gi2targets(&interactions, annotation.into(), 0).unwrap();

        assert_eq!(
            lines(&linkage),
            vec!["chr1\t5000\t5100\tGENEX", "chr2\t1000\t1200\tGENEX"]
        );
    }

    #[rstest]
    fn test_link_ensembl_gtf_without_conversion_is_an_error(
        path_to_data: PathBuf,
        interactions: InteractionSet,
    ) {
        let annotation =
            GeneAnnotation::from_gtf(&path_to_data.join("genes.gtf"), false).unwrap();
        let result = gi2targets(&interactions, annotation.into(), 0);

        assert!(matches!(
            result,
            Err(LinkerError::SeqlevelsStyleMismatch { .. })
        ));
    }

    #[rstest]
    fn test_link_with_config(path_to_data: PathBuf) {
        let config = LinkerConfig::try_from(path_to_data.join("linker.toml").as_path()).unwrap();

        let interactions = InteractionSet::from_path(
            &path_to_data.join("interactions_malformed.tsv"),
            config.interactions.lenient,
        )
        .unwrap();
        let source =
            PromoterSource::from_config(&path_to_data.join("promoters.bed"), &config.promoters)
                .unwrap();
        let linkage = gi2targets(&interactions, source, config.max_dist).unwrap();

        assert_eq!(linkage.stats.interactions, 2);
        assert_eq!(linkage.stats.interactions_skipped, 2);
        assert_eq!(
            lines(&linkage),
            vec![
                "chr1\t5000\t5100\tGENEX",
                "chr2\t800\t900\tGENEY",
                "chr2\t1000\t1200\tGENEY",
            ]
        );
    }

    #[rstest]
    fn test_targets_survive_a_bed_round_trip(path_to_data: PathBuf, interactions: InteractionSet) {
        let linkage = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), 0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.bed");
        linkage.regions.to_bed(&path).unwrap();

        let reread = TaggedRegionSet::try_from(path.as_path()).unwrap();
        assert_eq!(reread.regions, linkage.regions.regions);
    }

    #[rstest]
    fn test_annotate_peaks(path_to_data: PathBuf, interactions: InteractionSet) {
        let linkage = link_with_bed(&interactions, &path_to_data.join("promoters.bed"), 0);
        let peaks = RegionSet::try_from(path_to_data.join("peaks.bed")).unwrap();

        let annotated = annotate_regions(&peaks, &linkage.regions).unwrap();

        let mut out: Vec<u8> = Vec::new();
        write_annotated_bed(&annotated, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t5050\t5060\tGENEX\n\
             chr1\t1\t50\t.\n\
             chr1\t5080\t5200\tGENEX\n\
             chr2\t300\t400\t.\n"
        );
    }
}
