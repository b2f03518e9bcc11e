//! Error type definition.

use thiserror::Error;

/// Error type for effect prediction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("sequence operation failed")]
    SequenceOperationFailed(#[from] crate::sequences::Error),
    #[error("problem accessing data")]
    DataError(#[from] crate::data::Error),
    #[error("problem computing effect")]
    EffectError(#[from] crate::effects::Error),
    #[error("variant {0} is not on contig {2} of transcript {1}")]
    ContigMismatch(String, String, String),
    #[error("variant {0} does not overlap transcript {1}")]
    VariantOutsideTranscript(String, String),
    #[error("transcript {0} has no protein sequence")]
    MissingProteinSequence(String),
    #[error("transcript {0} has no coding sequence")]
    MissingCodingSequence(String),
    #[error("coding sequence of transcript {0} has length {1}, not a multiple of 3")]
    IncompleteCodons(String, usize),
    #[error("reference allele {1} of variant {0} does not match {2} in transcript {3}")]
    ReferenceMismatch(String, String, String, String),
    #[error("edit {1}..{2} of variant {0} is outside of the coding sequence")]
    EditOutsideCodingSequence(String, usize, usize),
    #[error("edit of variant {0} has neither reference nor alternative bases")]
    EmptyEdit(String),
    #[error("edit of variant {0} is not in frame")]
    NotInFrame(String),
    #[error("edit of variant {0} does not shift the reading frame")]
    NotFrameShift(String),
    #[error(
        "frameshift of variant {0} at codon {2} is not between start and stop codon \
        (at codon {3}) of transcript {1}"
    )]
    FrameShiftOutsideCodingRegion(String, String, usize, usize),
}
