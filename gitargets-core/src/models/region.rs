use std::fmt::{self, Display};

use crate::errors::RegionSetError;

///
/// Region struct, representation of one genomic interval: `chr:[start, end)`.
///
/// `rest` holds any columns after the third one, tab-joined and untouched.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub rest: Option<String>,
}

impl Region {
    ///
    /// Build a region, rejecting empty chromosome names and `start > end`.
    ///
    pub fn try_new(chr: &str, start: u32, end: u32) -> Result<Self, RegionSetError> {
        if chr.is_empty() {
            return Err(RegionSetError::RegionParseError(format!(
                "empty chromosome name for {}-{}",
                start, end
            )));
        }
        if start > end {
            return Err(RegionSetError::RegionParseError(format!(
                "start is after end: {}:{}-{}",
                chr, start, end
            )));
        }
        Ok(Region {
            chr: chr.to_string(),
            start,
            end,
            rest: None,
        })
    }

    ///
    /// The BED `name` column, i.e. the first field of `rest`
    ///
    pub fn name(&self) -> Option<&str> {
        self.rest
            .as_deref()
            .and_then(|rest| rest.split('\t').next())
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }

    /// UCSC-like locus string, `chr1:100-200`.
    pub fn locus(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
