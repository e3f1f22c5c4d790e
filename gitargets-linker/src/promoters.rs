//! Promoter sources.
//!
//! The linker needs promoter intervals that each carry a non-empty gene name.
//! They come either ready-made from a BED file (gene name in column 4) or are
//! derived from a GTF gene annotation by placing a window around every
//! transcription start site.
use std::ffi::OsStr;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use gitargets_core::models::{GeneSet, Region, RegionSet};
use gitargets_core::seqlevels::SeqlevelsStyle;
use gitargets_core::utils::{get_dynamic_reader, is_comment_line, parse_bed_line};

use crate::config::{DEFAULT_DOWNSTREAM, DEFAULT_UPSTREAM, PromoterConfig};
use crate::errors::{LinkerError, LinkerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Plus,
    Minus,
    Unstranded,
}

impl Strand {
    pub fn from_char(c: char) -> Strand {
        match c {
            '+' => Strand::Plus,
            '-' => Strand::Minus,
            _ => Strand::Unstranded,
        }
    }
}

/// A promoter interval and the gene it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promoter {
    pub region: Region,
    pub gene_name: String,
}

/// Names that cannot tag a region: empty, `.`, or containing a `,`.
fn is_unusable_name(name: &str) -> bool {
    let name = name.trim();
    name == "." || !GeneSet::is_valid_name(name)
}

///
/// Promoters with usable gene names, index-aligned with
/// [PromoterSet::to_region_set].
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoterSet {
    pub promoters: Vec<Promoter>,
    /// promoters dropped at construction because they had no gene name
    pub dropped: usize,
    pub path: Option<PathBuf>,
}

impl PromoterSet {
    ///
    /// Read promoters from a BED file with the gene name in column 4.
    ///
    /// Rows whose name is empty, `.` or holds a `,` are dropped and counted. A row with
    /// only three columns is an error.
    ///
    pub fn from_bed(path: &Path) -> LinkerResult<Self> {
        let reader = get_dynamic_reader(path)?;
        let mut promoters: Vec<Promoter> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if is_comment_line(&line) {
                continue;
            }

            // an absent column is an error; an empty one is a missing name
            if line.split('\t').count() < 4 {
                return Err(LinkerError::MissingRequiredField {
                    input: path.display().to_string(),
                    field: "name".to_string(),
                    line: idx + 1,
                });
            }

            let mut region = parse_bed_line(&line)?;
            let gene_name = region.name().unwrap_or_default().to_string();
            region.rest = None;
            promoters.push(Promoter { region, gene_name });
        }

        let mut set = PromoterSet::from(promoters);
        set.path = Some(path.to_owned());
        Ok(set)
    }

    /// Promoter intervals, index-aligned with `promoters`.
    pub fn to_region_set(&self) -> RegionSet {
        RegionSet::from(
            self.promoters
                .iter()
                .map(|p| p.region.clone())
                .collect::<Vec<Region>>(),
        )
    }

    pub fn len(&self) -> usize {
        self.promoters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promoters.is_empty()
    }
}

impl From<Vec<Promoter>> for PromoterSet {
    fn from(value: Vec<Promoter>) -> Self {
        let total = value.len();
        let promoters: Vec<Promoter> = value
            .into_iter()
            .filter(|p| !is_unusable_name(&p.gene_name))
            .collect();
        let dropped = total - promoters.len();
        if dropped > 0 {
            log::warn!("dropped {} promoters without a usable gene name", dropped);
        }

        PromoterSet {
            promoters,
            dropped,
            path: None,
        }
    }
}

/// One transcript (or gene) record from a GTF annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub region: Region,
    pub strand: Strand,
    pub gene_name: String,
}

impl Transcript {
    ///
    /// The window `[tss - upstream, tss + downstream)` in transcription
    /// direction. The TSS is `start` on the plus strand and `end` on the minus
    /// strand; unstranded records are treated as plus. Clamped at 0.
    ///
    pub fn promoter(&self, upstream: u32, downstream: u32) -> Region {
        let (start, end) = match self.strand {
            Strand::Minus => (
                self.region.end.saturating_sub(downstream),
                self.region.end.saturating_add(upstream),
            ),
            Strand::Plus | Strand::Unstranded => (
                self.region.start.saturating_sub(upstream),
                self.region.start.saturating_add(downstream),
            ),
        };
        Region {
            chr: self.region.chr.clone(),
            start,
            end,
            rest: None,
        }
    }
}

///
/// Transcript models read from a GTF file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GeneAnnotation {
    pub transcripts: Vec<Transcript>,
    pub path: Option<PathBuf>,
}

impl GeneAnnotation {
    ///
    /// Read `transcript` records from a GTF (plain or gzipped). Files without
    /// transcript records fall back to their `gene` records.
    ///
    /// The gene name is the `gene_name` attribute, or `gene_id` when there is
    /// none. GTF coordinates are converted to 0-based half-open.
    ///
    /// # Arguments
    /// - path: path to the GTF file
    /// - convert_ensembl_ucsc: rename chromosomes to UCSC style (`1` → `chr1`, `MT` → `chrM`)
    ///
    pub fn from_gtf(path: &Path, convert_ensembl_ucsc: bool) -> LinkerResult<Self> {
        let reader = get_dynamic_reader(path)?;

        let mut transcripts: Vec<Transcript> = Vec::new();
        let mut genes: Vec<Transcript> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            if line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 9 {
                continue;
            }

            let feature_type = fields[2];
            if !matches!(feature_type, "transcript" | "gene") {
                continue;
            }

            let chr = match convert_ensembl_ucsc {
                true => SeqlevelsStyle::Ucsc.convert(fields[0]),
                false => fields[0].to_string(),
            };

            // GTF is 1-based inclusive; BED is 0-based half-open
            let start: u32 = fields[3]
                .parse::<u32>()
                .map_err(|e| LinkerError::GtfParseError {
                    line: line_number,
                    reason: format!("start: {}", e),
                })?
                .saturating_sub(1);
            let end: u32 = fields[4]
                .parse::<u32>()
                .map_err(|e| LinkerError::GtfParseError {
                    line: line_number,
                    reason: format!("end: {}", e),
                })?;

            let attrs = fields[8];
            let gene_name = extract_gtf_attribute(attrs, "gene_name")
                .or_else(|| extract_gtf_attribute(attrs, "gene_id"))
                .ok_or_else(|| LinkerError::MissingRequiredField {
                    input: path.display().to_string(),
                    field: "gene_name".to_string(),
                    line: line_number,
                })?;

            let record = Transcript {
                region: Region::try_new(&chr, start, end)?,
                strand: Strand::from_char(fields[6].chars().next().unwrap_or('.')),
                gene_name,
            };

            match feature_type {
                "transcript" => transcripts.push(record),
                _ => genes.push(record),
            }
        }

        if transcripts.is_empty() {
            log::info!(
                "{} has no transcript records, using {} gene records",
                path.display(),
                genes.len()
            );
            transcripts = genes;
        }
        log::debug!(
            "read {} transcripts from {}",
            transcripts.len(),
            path.display()
        );

        Ok(GeneAnnotation {
            transcripts,
            path: Some(path.to_owned()),
        })
    }

    /// Promoter windows of every transcript, with nameless ones dropped.
    pub fn promoters(&self, upstream: u32, downstream: u32) -> PromoterSet {
        let mut set = PromoterSet::from(
            self.transcripts
                .iter()
                .map(|t| Promoter {
                    region: t.promoter(upstream, downstream),
                    gene_name: t.gene_name.clone(),
                })
                .collect::<Vec<Promoter>>(),
        );
        set.path = self.path.clone();
        set
    }
}

/// Extract `key` from a GTF attributes string (column 9), `key "VALUE";`.
fn extract_gtf_attribute(attrs: &str, key: &str) -> Option<String> {
    attrs.split(';').find_map(|attr| {
        let (name, value) = attr.trim().split_once(' ')?;
        (name == key).then(|| value.trim().trim_matches('"').to_string())
    })
}

#[derive(Debug, PartialEq)]
pub enum PromoterFileType {
    Bed,
    BedGz,
    Gtf,
    GtfGz,
}

impl PromoterFileType {
    ///
    /// Determine the type of a promoter source file from its extension.
    ///
    pub fn from_path(path: &Path) -> LinkerResult<Self> {
        let invalid = |kind: &str| LinkerError::InvalidInputKind {
            path: path.display().to_string(),
            kind: kind.to_string(),
        };

        match path.extension().and_then(OsStr::to_str) {
            Some("gz") => {
                let inner = path
                    .file_stem()
                    .map(Path::new)
                    .and_then(Path::extension)
                    .and_then(OsStr::to_str);
                match inner {
                    Some("bed") => Ok(PromoterFileType::BedGz),
                    Some("gtf") => Ok(PromoterFileType::GtfGz),
                    Some(other) => Err(invalid(&format!("{other}.gz"))),
                    None => Err(invalid("gz")),
                }
            }
            Some("bed") => Ok(PromoterFileType::Bed),
            Some("gtf") => Ok(PromoterFileType::Gtf),
            Some(other) => Err(invalid(other)),
            None => Err(invalid("no extension")),
        }
    }
}

///
/// Where the linker gets its promoters from.
///
#[derive(Debug, Clone)]
pub enum PromoterSource {
    /// ready-made promoters
    Promoters(PromoterSet),
    /// promoters derived from a gene annotation around each TSS
    Annotation {
        annotation: GeneAnnotation,
        upstream: u32,
        downstream: u32,
    },
}

impl PromoterSource {
    ///
    /// Open a promoter source, dispatching on the file extension.
    /// GTF chromosome names are converted to UCSC style.
    ///
    pub fn from_path(path: &Path, upstream: u32, downstream: u32) -> LinkerResult<Self> {
        PromoterSource::from_config(
            path,
            &PromoterConfig {
                upstream,
                downstream,
                convert_ensembl_ucsc: true,
            },
        )
    }

    pub fn from_config(path: &Path, config: &PromoterConfig) -> LinkerResult<Self> {
        match PromoterFileType::from_path(path)? {
            PromoterFileType::Bed | PromoterFileType::BedGz => {
                Ok(PromoterSource::Promoters(PromoterSet::from_bed(path)?))
            }
            PromoterFileType::Gtf | PromoterFileType::GtfGz => Ok(PromoterSource::Annotation {
                annotation: GeneAnnotation::from_gtf(path, config.convert_ensembl_ucsc)?,
                upstream: config.upstream,
                downstream: config.downstream,
            }),
        }
    }

    /// The final promoter set.
    pub fn into_promoters(self) -> PromoterSet {
        match self {
            PromoterSource::Promoters(set) => set,
            PromoterSource::Annotation {
                annotation,
                upstream,
                downstream,
            } => annotation.promoters(upstream, downstream),
        }
    }
}

impl From<PromoterSet> for PromoterSource {
    fn from(value: PromoterSet) -> Self {
        PromoterSource::Promoters(value)
    }
}

impl From<GeneAnnotation> for PromoterSource {
    fn from(value: GeneAnnotation) -> Self {
        PromoterSource::Annotation {
            annotation: value,
            upstream: DEFAULT_UPSTREAM,
            downstream: DEFAULT_DOWNSTREAM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn get_test_path(file_name: &str) -> PathBuf {
        PathBuf::from("../tests/data").join(file_name)
    }

    #[rstest]
    fn test_promoters_from_bed_drop_unnamed() {
        let set = PromoterSet::from_bed(&get_test_path("promoters.bed")).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.dropped, 1);
        assert!(set.promoters.iter().all(|p| !p.gene_name.is_empty()));
        assert_eq!(set.promoters[0].region.locus(), "chr1:100-150");
        assert_eq!(set.promoters[0].gene_name, "GENEX");
    }

    #[rstest]
    fn test_promoters_from_bed3_is_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bed3.bed");
        std::fs::write(&path, "chr1\t100\t150\tGENEX\nchr1\t200\t250\n").unwrap();

        match PromoterSet::from_bed(&path) {
            Err(LinkerError::MissingRequiredField { field, line, .. }) => {
                assert_eq!(field, "name");
                assert_eq!(line, 2);
            }
            other => panic!("expected MissingRequiredField, got {:?}", other),
        }
    }

    #[rstest]
    fn test_promoters_from_bed_empty_name_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_name.bed");
        std::fs::write(&path, "chr1\t100\t150\tGENEX\nchr1\t300\t350\t\nchr1\t400\t450\t\t0\t+\n")
            .unwrap();

        let set = PromoterSet::from_bed(&path).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.dropped, 2);
        assert_eq!(set.promoters[0].gene_name, "GENEX");
    }

    #[rstest]
    fn test_from_vec_drops_empty_and_dot_names() {
        let promoter = |name: &str| Promoter {
            region: Region::try_new("chr1", 1, 10).unwrap(),
            gene_name: name.to_string(),
        };
        let set = PromoterSet::from(vec![
            promoter("A"),
            promoter(""),
            promoter("."),
            promoter("B,C"),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.dropped, 3);
    }

    #[rstest]
    fn test_gene_annotation_from_gtf() {
        let annotation = GeneAnnotation::from_gtf(&get_test_path("genes.gtf"), true).unwrap();
        assert_eq!(annotation.transcripts.len(), 4);

        let first = &annotation.transcripts[0];
        assert_eq!(first.region.locus(), "chr1:1100-1500");
        assert_eq!(first.strand, Strand::Plus);
        assert_eq!(first.gene_name, "GENEX");

        // no gene_name attribute, falls back to gene_id
        assert_eq!(annotation.transcripts[3].gene_name, "ENSG3");
    }

    #[rstest]
    fn test_gene_annotation_keeps_ensembl_names() {
        let annotation = GeneAnnotation::from_gtf(&get_test_path("genes.gtf"), false).unwrap();
        assert_eq!(annotation.transcripts[0].region.chr, "1");
    }

    #[rstest]
    fn test_gene_annotation_falls_back_to_genes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes_only.gtf");
        std::fs::write(
            &path,
            "1\ttest\tgene\t101\t200\t.\t+\t.\tgene_id \"G1\"; gene_name \"ONLYGENE\";\n",
        )
        .unwrap();

        let annotation = GeneAnnotation::from_gtf(&path, true).unwrap();
        assert_eq!(annotation.transcripts.len(), 1);
        assert_eq!(annotation.transcripts[0].gene_name, "ONLYGENE");
    }

    #[rstest]
    fn test_strand_aware_promoters() {
        let annotation = GeneAnnotation::from_gtf(&get_test_path("genes.gtf"), true).unwrap();
        let promoters = annotation.promoters(100, 50);

        let loci: Vec<(String, &str)> = promoters
            .promoters
            .iter()
            .map(|p| (p.region.locus(), p.gene_name.as_str()))
            .collect();
        assert_eq!(
            loci,
            vec![
                ("chr1:1000-1150".to_string(), "GENEX"),
                ("chr1:1100-1250".to_string(), "GENEX"),
                ("chr2:3950-4100".to_string(), "GENEY"),
                ("chr1:8900-9050".to_string(), "ENSG3"),
            ]
        );
    }

    #[rstest]
    fn test_promoter_window_clamps_at_zero() {
        let transcript = Transcript {
            region: Region::try_new("chr1", 10, 500).unwrap(),
            strand: Strand::Plus,
            gene_name: "A".to_string(),
        };
        assert_eq!(transcript.promoter(2500, 2500).locus(), "chr1:0-2510");
    }

    #[rstest]
    #[case("promoters.bed", PromoterFileType::Bed)]
    #[case("promoters.bed.gz", PromoterFileType::BedGz)]
    #[case("genes.gtf", PromoterFileType::Gtf)]
    #[case("genes.gtf.gz", PromoterFileType::GtfGz)]
    fn test_file_type(#[case] name: &str, #[case] expected: PromoterFileType) {
        assert_eq!(PromoterFileType::from_path(Path::new(name)).unwrap(), expected);
    }

    #[rstest]
    #[case("promoters.csv", "csv")]
    #[case("promoters.txt.gz", "txt.gz")]
    #[case("promoters", "no extension")]
    fn test_invalid_input_kind(#[case] name: &str, #[case] expected_kind: &str) {
        match PromoterSource::from_path(Path::new(name), 2500, 2500) {
            Err(LinkerError::InvalidInputKind { kind, .. }) => assert_eq!(kind, expected_kind),
            other => panic!("expected InvalidInputKind, got {:?}", other),
        }
    }

    #[rstest]
    fn test_source_from_gtf_uses_window() {
        let source = PromoterSource::from_path(&get_test_path("genes.gtf"), 100, 50).unwrap();
        let promoters = source.into_promoters();
        assert_eq!(promoters.len(), 4);
        assert_eq!(promoters.promoters[0].region.locus(), "chr1:1000-1150");
    }
}
