use thiserror::Error;

use gitargets_core::errors::{RegionSetError, SeqlevelsError};
use gitargets_core::seqlevels::SeqlevelsStyle;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error(
        "Unsupported promoter source '{path}' (type: {kind}). It must be `bed`, `bed.gz`, `gtf` or `gtf.gz`"
    )]
    InvalidInputKind { path: String, kind: String },

    #[error("{input}, line {line}: missing required field `{field}`")]
    MissingRequiredField {
        input: String,
        field: String,
        line: usize,
    },

    #[error(
        "Chromosome naming mismatch: {left} uses {left_style} names but {right} uses {right_style} names"
    )]
    SeqlevelsStyleMismatch {
        left: String,
        left_style: SeqlevelsStyle,
        right: String,
        right_style: SeqlevelsStyle,
    },

    #[error("Error parsing GTF line {line}: {reason}")]
    GtfParseError { line: usize, reason: String },

    #[error(transparent)]
    Seqlevels(#[from] SeqlevelsError),

    #[error(transparent)]
    RegionSet(#[from] RegionSetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type LinkerResult<T> = std::result::Result<T, LinkerError>;
