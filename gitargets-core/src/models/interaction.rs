use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::{Region, RegionSet};
use crate::utils::{get_dynamic_reader, is_comment_line, parse_coordinate};

///
/// One chromatin contact between two anchors.
///
/// `observed` is the contact strength. It is carried along as metadata and
/// never takes part in any interval comparison.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub anchor1: Region,
    pub anchor2: Region,
    pub observed: f64,
}

impl Interaction {
    pub fn new(anchor1: Region, anchor2: Region, observed: f64) -> Self {
        Interaction {
            anchor1,
            anchor2,
            observed,
        }
    }

    ///
    /// Parse one `chr1 start1 end1 chr2 start2 end2 observed` record.
    /// Columns past the seventh are ignored.
    ///
    pub fn from_line(line: &str) -> Result<Self, RegionSetError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 7 {
            return Err(RegionSetError::RegionParseError(format!(
                "expected 7 columns, found {}",
                fields.len()
            )));
        }

        let anchor1 = Region::try_new(
            fields[0],
            parse_coordinate(Some(fields[1]), "start1", line)?,
            parse_coordinate(Some(fields[2]), "end1", line)?,
        )?;
        let anchor2 = Region::try_new(
            fields[3],
            parse_coordinate(Some(fields[4]), "start2", line)?,
            parse_coordinate(Some(fields[5]), "end2", line)?,
        )?;
        let observed = fields[6].trim().parse::<f64>().map_err(|_| {
            RegionSetError::RegionParseError(format!("observed is not a number: {:?}", fields[6]))
        })?;

        Ok(Interaction::new(anchor1, anchor2, observed))
    }
}

///
/// A column header such as `chr1 start1 end1 chr2 start2 end2 observed`: none
/// of the four coordinate columns is a number. Anything else is a record.
///
fn is_column_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split('\t').collect();
    fields.len() >= 6
        && [1, 2, 4, 5]
            .iter()
            .all(|&i| fields[i].trim().parse::<u32>().is_err())
}

///
/// InteractionSet struct, a table of paired anchors.
///
/// `skipped` counts malformed records dropped while reading in lenient mode.
///
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSet {
    pub interactions: Vec<Interaction>,
    pub skipped: usize,
    pub path: Option<PathBuf>,
}

impl InteractionSet {
    ///
    /// Read an interaction table, plain or gzipped.
    ///
    /// # Arguments
    /// - path: path to the tab-separated table
    /// - lenient: skip (and count) malformed records instead of failing on the first one
    ///
    pub fn from_path(path: &Path, lenient: bool) -> Result<Self, RegionSetError> {
        let reader = get_dynamic_reader(path)?;

        let mut interactions: Vec<Interaction> = Vec::new();
        let mut skipped: usize = 0;
        let mut first_line = true;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;

            if is_comment_line(&line) {
                continue;
            }

            if first_line {
                first_line = false;
                if is_column_header(&line) {
                    continue;
                }
            }

            match Interaction::from_line(&line) {
                Ok(interaction) => interactions.push(interaction),
                Err(e) if lenient => {
                    log::warn!(
                        "{}:{}: skipping malformed interaction ({})",
                        path.display(),
                        line_number,
                        e
                    );
                    skipped += 1;
                }
                Err(e) => {
                    return Err(RegionSetError::InteractionParseError {
                        line: line_number,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if skipped > 0 {
            log::warn!(
                "{}: skipped {} malformed interaction records",
                path.display(),
                skipped
            );
        }
        log::debug!(
            "read {} interactions from {}",
            interactions.len(),
            path.display()
        );

        Ok(InteractionSet {
            interactions,
            skipped,
            path: Some(path.to_owned()),
        })
    }

    /// First anchors, in interaction order.
    pub fn anchor1s(&self) -> RegionSet {
        RegionSet::from(
            self.interactions
                .iter()
                .map(|i| i.anchor1.clone())
                .collect::<Vec<Region>>(),
        )
    }

    /// Second anchors, in interaction order.
    pub fn anchor2s(&self) -> RegionSet {
        RegionSet::from(
            self.interactions
                .iter()
                .map(|i| i.anchor2.clone())
                .collect::<Vec<Region>>(),
        )
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}

impl TryFrom<&Path> for InteractionSet {
    type Error = RegionSetError;

    /// Strict read: the first malformed record is an error.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        InteractionSet::from_path(value, false)
    }
}

impl TryFrom<&str> for InteractionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        InteractionSet::from_path(Path::new(value), false)
    }
}

impl From<Vec<Interaction>> for InteractionSet {
    fn from(interactions: Vec<Interaction>) -> Self {
        InteractionSet {
            interactions,
            skipped: 0,
            path: None,
        }
    }
}
