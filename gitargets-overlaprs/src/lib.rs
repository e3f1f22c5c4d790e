//! Overlap and nearest-neighbour queries over genomic intervals.
//!
//! This crate is the interval store of gitargets. Everything that compares
//! intervals against each other goes through it; the linker and the
//! annotator never compare coordinates themselves.
//!
//! ## Features
//!
//! - **Complete overlap enumeration**: [`find_overlaps`] returns every query/target pair
//!   sharing at least `min_overlap` bases
//! - **Nearest target**: [`distance_to_nearest`] returns one deterministic nearest target
//!   per query
//! - **Per-chromosome parallelism**: queries are answered in parallel with rayon; pairs on
//!   different chromosomes are never compared
//!
//! ## Quick Start
//!
//! ```rust
//! use gitargets_core::models::{Region, RegionSet};
//! use gitargets_overlaprs::{OverlapHit, find_overlaps, distance_to_nearest};
//!
//! let promoters = RegionSet::from(vec![
//!     Region::try_new("chr1", 100, 150).unwrap(),
//!     Region::try_new("chr1", 9000, 9100).unwrap(),
//! ]);
//! let anchors = RegionSet::from(vec![
//!     Region::try_new("chr1", 100, 200).unwrap(),
//!     Region::try_new("chr1", 5000, 5100).unwrap(),
//! ]);
//!
//! let hits = find_overlaps(&anchors, &promoters, 1);
//! assert_eq!(hits, vec![OverlapHit { query: 0, target: 0 }]);
//!
//! let nearest = distance_to_nearest(&anchors, &promoters);
//! assert_eq!(nearest[1].target, 1);
//! assert_eq!(nearest[1].distance, 3900);
//! ```
//!
//! ## Single chromosome
//!
//! ```rust
//! use gitargets_overlaprs::{AIList, Overlapper, Interval};
//!
//! let genes = vec![
//!     Interval { start: 1000u32, end: 2000, val: "GENEX" },
//!     Interval { start: 3000, end: 4000, val: "GENEY" },
//! ];
//! let index = AIList::build(genes);
//!
//! let found: Vec<&str> = index.find_iter(1500, 3500).map(|iv| iv.val).collect();
//! assert_eq!(found.len(), 2);
//! ```

/// Augmented Interval List implementation.
///
/// See [`AIList`] for details.
pub mod ailist;

/// Genome-wide interval indexing.
pub mod genome_index;

pub mod search;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::ailist::AIList;
pub use self::genome_index::{GenomeIndex, IntoGenomeIndex};
pub use self::search::{
    NearestHit, OverlapHit, distance_to_nearest, distance_to_nearest_in, find_overlaps,
    find_overlaps_in,
};
pub use self::traits::{Interval, Overlapper};
