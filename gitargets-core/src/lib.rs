//! Core data models for gitargets.
//!
//! This crate holds the types every other gitargets crate works on:
//!
//! - [`models::Region`] and [`models::RegionSet`]: BED intervals, `[start, end)`, 0-based
//! - [`models::Interaction`] and [`models::InteractionSet`]: paired anchors from a contact table
//! - [`models::GeneSet`]: an ordered, duplicate-free set of gene names
//! - [`models::TaggedRegionSet`] and [`models::AnnotatedRegion`]: regions carrying gene sets
//!
//! plus plain/gzipped file readers, karyotypic chromosome ordering and
//! chromosome naming style detection in [`seqlevels`].
//!
//! ## Quick Start
//!
//! ```rust
//! use gitargets_core::models::{GeneSet, Region, TaggedRegion, TaggedRegionSet};
//!
//! let region = Region::try_new("chr1", 5000, 5100).unwrap();
//! let genes: GeneSet = ["GENEX"].into_iter().collect();
//! let set = TaggedRegionSet::new(vec![TaggedRegion::try_new(region, genes).unwrap()]);
//!
//! assert_eq!(set.regions[0].to_string(), "chr1\t5000\t5100\tGENEX");
//! ```
pub mod errors;
pub mod models;
pub mod seqlevels;
pub mod utils;
