use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error("Error parsing interaction on line {line}: {reason}")]
    InteractionParseError { line: usize, reason: String },

    #[error("Corrupted file. 0 regions found in the file: {0}")]
    EmptyRegionSet(String),

    #[error("A tagged region needs at least one gene name: {0}")]
    EmptyGeneSet(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum SeqlevelsError {
    #[error("{input} mixes chromosome naming styles: found both '{ucsc}' and '{ensembl}'")]
    MixedSeqlevelsStyle {
        input: String,
        ucsc: String,
        ensembl: String,
    },
}
