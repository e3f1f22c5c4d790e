//! gitargets links distal regulatory regions to their target genes.
//!
//! Chromatin interactions pair two anchors; an anchor that sits on a gene
//! promoter tags its mate anchor with that gene. The resulting tagged
//! regions can then be used to annotate any set of query regions, such as
//! ATAC-seq or ChIP-seq peaks.
//!
//! The functionality lives in feature-gated crates, re-exported here:
//!
//! - `core`: regions, interactions, gene sets and file readers
//! - `overlaprs`: interval indexes with overlap and nearest search
//! - `linker`: promoter sources, the linker and the peak annotator

#[cfg(feature = "core")]
#[doc(inline)]
pub use gitargets_core as core;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use gitargets_overlaprs as overlaprs;

#[cfg(feature = "linker")]
#[doc(inline)]
pub use gitargets_linker as linker;
