use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::Region;
use crate::utils::{get_dynamic_reader, is_comment_line, parse_bed_line};

///
/// RegionSet struct, the representation of the interval region set file,
/// such as bed file.
///
/// Regions keep the order they were read in, so per-region results line up
/// with the input file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from a bed file.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk, optionally gzipped.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)?;

        let mut regions: Vec<Region> = Vec::new();
        let mut header: String = String::new();
        let mut first_line: bool = true;

        for line in reader.lines() {
            let line = line?;

            if is_comment_line(&line) {
                if !line.trim().is_empty() {
                    header.push_str(&line);
                }
                continue;
            }

            // column headers like `chr start end` without a leading #
            if first_line {
                first_line = false;
                let fields: Vec<&str> = line.split('\t').collect();
                if fields.len() >= 3
                    && fields[1..3].iter().all(|s| s.trim().parse::<u32>().is_err())
                {
                    header.push_str(&line);
                    continue;
                }
            }

            regions.push(parse_bed_line(&line)?);
        }

        if regions.is_empty() {
            return Err(RegionSetError::EmptyRegionSet(value.display().to_string()));
        }

        log::debug!("read {} regions from {}", regions.len(), value.display());

        Ok(RegionSet {
            regions,
            header: Some(header).filter(|h| !h.is_empty()),
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            header: None,
            path: None,
        }
    }
}

impl RegionSet {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    ///
    /// Get number of regions in RegionSet
    ///
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    fn test_open_from_path() {
        let region_set = RegionSet::try_from(get_test_path("peaks.bed").as_path()).unwrap();
        assert_eq!(region_set.len(), 4);
        assert!(region_set.header.is_some());
    }

    #[rstest]
    fn test_read_keeps_file_order() {
        let region_set = RegionSet::try_from(get_test_path("peaks.bed")).unwrap();
        let starts: Vec<u32> = region_set.regions.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![5050, 1, 5080, 300]);
    }

    #[rstest]
    fn test_open_missing_file() {
        let result = RegionSet::try_from("../tests/data/nope.bed");
        assert!(matches!(result, Err(RegionSetError::FileReadError(_))));
    }

    #[rstest]
    #[case("chrom\tstart\tend\nchr1\t1\t5\n", Ok(1))]
    #[case("chr1\tl0\t20\nchr1\t1\t5\n", Err(()))]
    fn test_column_header_line(#[case] content: &str, #[case] expected: Result<usize, ()>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.bed");
        std::fs::write(&path, content).unwrap();

        let result = RegionSet::try_from(path.as_path()).map(|r| r.len()).map_err(|_| ());
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_open_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bed");
        std::fs::write(&path, "track name=empty\n").unwrap();

        let result = RegionSet::try_from(path.as_path());
        assert!(matches!(result, Err(RegionSetError::EmptyRegionSet(_))));
    }
}
