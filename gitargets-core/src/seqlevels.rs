//!
//! Chromosome naming ("seqlevels") styles.
//!
//! Two inputs that name chromosomes differently (`chr1` vs `1`) share no
//! chromosome, so every overlap between them is silently empty. The helpers
//! here detect the style of an input and convert names between styles.
//!
use std::fmt::{self, Display};

use crate::errors::SeqlevelsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqlevelsStyle {
    /// `chr1`, `chrX`, `chrM`
    Ucsc,
    /// `1`, `X`, `MT`
    Ensembl,
}

impl SeqlevelsStyle {
    pub fn of(chr: &str) -> SeqlevelsStyle {
        match chr.starts_with("chr") {
            true => SeqlevelsStyle::Ucsc,
            false => SeqlevelsStyle::Ensembl,
        }
    }

    ///
    /// Detect the style shared by every name in `chroms`.
    ///
    /// Returns `Ok(None)` for an empty input, and an error naming one
    /// example of each style when the input mixes them.
    ///
    /// # Arguments
    /// - input: label of the input, used in the error message
    /// - chroms: chromosome names of the input
    ///
    pub fn detect<'a, I>(input: &str, chroms: I) -> Result<Option<SeqlevelsStyle>, SeqlevelsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ucsc: Option<&str> = None;
        let mut ensembl: Option<&str> = None;

        for chr in chroms {
            match SeqlevelsStyle::of(chr) {
                SeqlevelsStyle::Ucsc => ucsc = ucsc.or(Some(chr)),
                SeqlevelsStyle::Ensembl => ensembl = ensembl.or(Some(chr)),
            }
            if let (Some(u), Some(e)) = (ucsc, ensembl) {
                return Err(SeqlevelsError::MixedSeqlevelsStyle {
                    input: input.to_string(),
                    ucsc: u.to_string(),
                    ensembl: e.to_string(),
                });
            }
        }

        Ok(match (ucsc, ensembl) {
            (Some(_), None) => Some(SeqlevelsStyle::Ucsc),
            (None, Some(_)) => Some(SeqlevelsStyle::Ensembl),
            _ => None,
        })
    }

    ///
    /// Rename a chromosome into this style. The mitochondrial chromosome
    /// maps between `chrM` and `MT`.
    ///
    pub fn convert(&self, chr: &str) -> String {
        match self {
            SeqlevelsStyle::Ucsc => match chr {
                _ if chr.starts_with("chr") => chr.to_string(),
                "MT" => "chrM".to_string(),
                _ => format!("chr{}", chr),
            },
            SeqlevelsStyle::Ensembl => match chr.strip_prefix("chr") {
                Some("M") => "MT".to_string(),
                Some(bare) => bare.to_string(),
                None => chr.to_string(),
            },
        }
    }
}

impl Display for SeqlevelsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqlevelsStyle::Ucsc => write!(f, "UCSC"),
            SeqlevelsStyle::Ensembl => write!(f, "Ensembl"),
        }
    }
}
