//! Link distal regulatory regions to their target genes.
//!
//! Chromatin interactions (Hi-C contacts) pair two genomic anchors. When one
//! anchor sits on a gene promoter, the other anchor is taken to be a distal
//! element regulating that gene. This crate provides:
//!
//! - [`gi2targets`]: interactions + promoters → distal regions tagged with gene sets
//! - [`annotate_regions`]: query regions (e.g. peaks) → the genes of the tagged regions they overlap
//! - [`promoters`]: promoter sources, either a ready BED file or a GTF annotation
//! - [`config::LinkerConfig`]: TOML run configuration
//!
//! # Example
//!
//! ```
//! use gitargets_core::models::{Interaction, InteractionSet, Region, RegionSet};
//! use gitargets_linker::promoters::{Promoter, PromoterSet};
//! use gitargets_linker::{annotate_regions, gi2targets};
//!
//! let interactions = InteractionSet::from(vec![Interaction::new(
//!     Region::try_new("chr1", 100, 200).unwrap(),
//!     Region::try_new("chr1", 5000, 5100).unwrap(),
//!     12.0,
//! )]);
//! let promoters = PromoterSet::from(vec![Promoter {
//!     region: Region::try_new("chr1", 100, 150).unwrap(),
//!     gene_name: "GENEX".to_string(),
//! }]);
//!
//! let linkage = gi2targets(&interactions, promoters.into(), 0).unwrap();
//! assert_eq!(linkage.regions.regions[0].to_string(), "chr1\t5000\t5100\tGENEX");
//!
//! let peaks = RegionSet::from(vec![Region::try_new("chr1", 5050, 5060).unwrap()]);
//! let annotated = annotate_regions(&peaks, &linkage.regions).unwrap();
//! assert!(annotated[0].genes.contains("GENEX"));
//! ```

pub mod annotate;
pub mod config;
pub mod errors;
pub mod gi2targets;
pub mod promoters;
pub mod utils;

// re-exports
pub use annotate::annotate_regions;
pub use gi2targets::{HitPolicy, LinkStats, Linkage, gi2targets};
pub use promoters::{GeneAnnotation, PromoterSet, PromoterSource};
