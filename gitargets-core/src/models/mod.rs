pub mod gene_set;
pub mod interaction;
pub mod interval;
pub mod region;
pub mod region_set;
pub mod tagged_region;

// re-export for cleaner imports
pub use self::gene_set::GeneSet;
pub use self::interaction::{Interaction, InteractionSet};
pub use self::interval::Interval;
pub use self::region::Region;
pub use self::region_set::RegionSet;
pub use self::tagged_region::{AnnotatedRegion, TaggedRegion, TaggedRegionSet, write_annotated_bed};
