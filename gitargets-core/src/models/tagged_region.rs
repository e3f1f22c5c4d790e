use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::{GeneSet, Region, RegionSet};
use crate::utils::{chrom_karyotype_key, get_dynamic_reader, is_comment_line, parse_bed_line};

///
/// A distal region linked to one or more target genes.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRegion {
    pub region: Region,
    pub genes: GeneSet,
}

impl TaggedRegion {
    ///
    /// Tag a region with genes. A tagged region always has at least one gene.
    ///
    pub fn try_new(region: Region, genes: GeneSet) -> Result<Self, RegionSetError> {
        if genes.is_empty() {
            return Err(RegionSetError::EmptyGeneSet(region.locus()));
        }
        Ok(TaggedRegion { region, genes })
    }

    /// BED4 line: `chr start end genes`
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.region.chr, self.region.start, self.region.end, self.genes
        )
    }
}

impl Display for TaggedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Sorted store of tagged regions, one entry per distinct interval.
///
/// Construction merges entries with identical coordinates by taking the
/// union of their genes, then orders them by karyotypic chromosome, start
/// and end.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaggedRegionSet {
    pub regions: Vec<TaggedRegion>,
    pub path: Option<PathBuf>,
}

impl TaggedRegionSet {
    pub fn new(tagged: Vec<TaggedRegion>) -> Self {
        let mut merged: BTreeMap<((u8, u32, String), String, u32, u32), GeneSet> = BTreeMap::new();

        for entry in tagged {
            let key = (
                chrom_karyotype_key(&entry.region.chr),
                entry.region.chr,
                entry.region.start,
                entry.region.end,
            );
            merged.entry(key).or_default().extend_from(&entry.genes);
        }

        let regions = merged
            .into_iter()
            .map(|((_, chr, start, end), genes)| TaggedRegion {
                region: Region {
                    chr,
                    start,
                    end,
                    rest: None,
                },
                genes,
            })
            .collect();

        TaggedRegionSet {
            regions,
            path: None,
        }
    }

    /// Plain intervals, index-aligned with `regions`.
    pub fn to_region_set(&self) -> RegionSet {
        RegionSet::from(
            self.regions
                .iter()
                .map(|t| t.region.clone())
                .collect::<Vec<Region>>(),
        )
    }

    pub fn write_bed<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for tagged in &self.regions {
            writeln!(writer, "{}", tagged.as_string())?;
        }
        Ok(())
    }

    ///
    /// Save as a BED4 file with comma-joined gene names in column 4.
    ///
    pub fn to_bed<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = BufWriter::new(File::create(path)?);
        self.write_bed(&mut file)?;
        file.flush()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl TryFrom<&Path> for TaggedRegionSet {
    type Error = RegionSetError;

    ///
    /// Read a BED4 file of tagged regions, as written by [TaggedRegionSet::to_bed].
    ///
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)?;
        let mut tagged: Vec<TaggedRegion> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if is_comment_line(&line) {
                continue;
            }
            let mut region = parse_bed_line(&line)?;
            let genes = region.name().map(GeneSet::parse).ok_or_else(|| {
                RegionSetError::RegionParseError(format!("missing gene column: {line:?}"))
            })?;
            region.rest = None;
            tagged.push(TaggedRegion::try_new(region, genes)?);
        }

        let mut set = TaggedRegionSet::new(tagged);
        set.path = Some(value.to_owned());
        Ok(set)
    }
}

///
/// A query region with the genes collected from every tagged region it
/// overlaps. `genes` is empty when nothing overlapped.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRegion {
    pub region: Region,
    pub genes: GeneSet,
}

impl AnnotatedRegion {
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.region.chr, self.region.start, self.region.end, self.genes
        )
    }
}

impl Display for AnnotatedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Write annotated regions as BED4, in the order given.
///
pub fn write_annotated_bed<W: Write>(
    annotated: &[AnnotatedRegion],
    writer: &mut W,
) -> std::io::Result<()> {
    for entry in annotated {
        writeln!(writer, "{}", entry.as_string())?;
    }
    Ok(())
}
