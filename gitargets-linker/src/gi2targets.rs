//! Anchor-to-target linking.
//!
//! An interaction whose anchor sits on a promoter of gene G links its mate
//! anchor to G: the mate becomes a distal region tagged with G. Both anchor
//! sides are searched against the promoters independently, and only then
//! crossed over, so a gene found at `anchor1` is only ever attached to
//! `anchor2` of the same interaction and vice versa.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gitargets_core::models::{GeneSet, InteractionSet, RegionSet, TaggedRegion, TaggedRegionSet};
use gitargets_overlaprs::{GenomeIndex, IntoGenomeIndex, distance_to_nearest_in, find_overlaps_in};

use crate::errors::LinkerResult;
use crate::promoters::{PromoterSet, PromoterSource};
use crate::utils::ensure_same_seqlevels_style;

///
/// How an anchor has to relate to a promoter to count as a hit.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPolicy {
    /// share at least this many bases (0 is treated as 1)
    Overlap { min_overlap: u32 },
    /// the anchor's nearest promoter, if at most this many bases away
    Nearest { max_dist: u32 },
}

impl HitPolicy {
    ///
    /// `max_dist <= 0` selects overlap search with `|max_dist|` as the minimum
    /// overlap; `max_dist > 0` selects nearest search within `max_dist`.
    ///
    pub fn from_max_dist(max_dist: i64) -> Self {
        let magnitude = u32::try_from(max_dist.unsigned_abs()).unwrap_or(u32::MAX);
        match max_dist > 0 {
            true => HitPolicy::Nearest {
                max_dist: magnitude,
            },
            false => HitPolicy::Overlap {
                min_overlap: magnitude,
            },
        }
    }
}

/// Counters for one linker run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub interactions: usize,
    pub interactions_skipped: usize,
    pub promoters: usize,
    pub promoters_dropped: usize,
    /// first anchors with at least one promoter hit
    pub anchor1_promoter_hits: usize,
    /// second anchors with at least one promoter hit
    pub anchor2_promoter_hits: usize,
    /// distinct tagged regions in the output
    pub regions: usize,
}

/// Result of [gi2targets].
#[derive(Debug, Clone, PartialEq)]
pub struct Linkage {
    pub regions: TaggedRegionSet,
    pub stats: LinkStats,
}

///
/// Genes hit by each anchor, keyed by anchor index. Anchors without hits are
/// absent, so every gene set in the result is non-empty. A gene reached
/// through several promoter records of the same anchor appears once.
///
pub fn anchor_gene_hits(
    anchors: &RegionSet,
    promoters: &PromoterSet,
    index: &GenomeIndex,
    policy: HitPolicy,
) -> BTreeMap<usize, GeneSet> {
    let pairs: Vec<(usize, usize)> = match policy {
        HitPolicy::Overlap { min_overlap } => find_overlaps_in(anchors, index, min_overlap)
            .into_iter()
            .map(|hit| (hit.query, hit.target))
            .collect(),
        HitPolicy::Nearest { max_dist } => distance_to_nearest_in(anchors, index)
            .into_iter()
            .filter(|hit| hit.distance <= max_dist)
            .map(|hit| (hit.query, hit.target))
            .collect(),
    };

    let mut genes: BTreeMap<usize, GeneSet> = BTreeMap::new();
    for (anchor, promoter) in pairs {
        genes
            .entry(anchor)
            .or_default()
            .insert(promoters.promoters[promoter].gene_name.as_str());
    }
    genes
}

///
/// Link distal anchors to target genes.
///
/// # Arguments
/// - interactions: paired anchors
/// - source: where promoters come from
/// - max_dist: `<= 0` requires an overlap of at least `|max_dist|` bases
///   (any overlap at 0); `> 0` accepts the nearest promoter within `max_dist` bases
///
/// # Returns
/// The tagged distal regions, one per distinct anchor interval, sorted by
/// chromosome and position, together with run counters.
///
/// # Errors
/// [LinkerError::SeqlevelsStyleMismatch](crate::errors::LinkerError::SeqlevelsStyleMismatch)
/// when anchors and promoters name chromosomes differently.
///
pub fn gi2targets(
    interactions: &InteractionSet,
    source: PromoterSource,
    max_dist: i64,
) -> LinkerResult<Linkage> {
    let promoters = source.into_promoters();
    let policy = HitPolicy::from_max_dist(max_dist);

    let anchor1s = interactions.anchor1s();
    let anchor2s = interactions.anchor2s();
    let promoter_regions = promoters.to_region_set();

    ensure_same_seqlevels_style(&[
        ("anchor1", &anchor1s),
        ("anchor2", &anchor2s),
        ("promoters", &promoter_regions),
    ])?;

    log::debug!(
        "linking {} interactions against {} promoters ({:?})",
        interactions.len(),
        promoters.len(),
        policy
    );

    let index = promoter_regions.into_genome_index();
    let genes_at_anchor1 = anchor_gene_hits(&anchor1s, &promoters, &index, policy);
    let genes_at_anchor2 = anchor_gene_hits(&anchor2s, &promoters, &index, policy);

    // cross-link: each anchor takes the genes found at its mate
    let mut tagged: Vec<TaggedRegion> =
        Vec::with_capacity(genes_at_anchor1.len() + genes_at_anchor2.len());
    for (i, genes) in genes_at_anchor2.iter() {
        tagged.push(TaggedRegion::try_new(
            anchor1s.regions[*i].clone(),
            genes.clone(),
        )?);
    }
    for (j, genes) in genes_at_anchor1.iter() {
        tagged.push(TaggedRegion::try_new(
            anchor2s.regions[*j].clone(),
            genes.clone(),
        )?);
    }

    let regions = TaggedRegionSet::new(tagged);

    let stats = LinkStats {
        interactions: interactions.len(),
        interactions_skipped: interactions.skipped,
        promoters: promoters.len(),
        promoters_dropped: promoters.dropped,
        anchor1_promoter_hits: genes_at_anchor1.len(),
        anchor2_promoter_hits: genes_at_anchor2.len(),
        regions: regions.len(),
    };
    log::info!(
        "linked {} distal regions ({} anchor1 and {} anchor2 promoter hits over {} interactions)",
        stats.regions,
        stats.anchor1_promoter_hits,
        stats.anchor2_promoter_hits,
        stats.interactions
    );

    Ok(Linkage { regions, stats })
}
