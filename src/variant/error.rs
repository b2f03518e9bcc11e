//! Error type definition.

use thiserror::Error;

/// Error type for malformed variant input data.
///
/// These errors are recoverable by the caller, e.g., by skipping the record or
/// aborting the load.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid nucleotide {0:?} in allele {1}")]
    InvalidNucleotide(char, String),
    #[error("reference and alternate allele are identical at {0}:{1}")]
    NoOpVariant(String, u64),
    #[error("position must be >= 1 at {0}")]
    InvalidPosition(String),
    #[error("both tumor alleles agree with reference {2} at {0}:{1}")]
    TumorAllelesMatchReference(String, u64, String),
    #[error("empty variant collection")]
    EmptyCollection,
    #[error("no reference genome build given for variant collection")]
    MissingReferenceBuild,
    #[error("unknown reference genome build: {0}")]
    UnknownReferenceBuild(String),
    #[error("multiple reference genome builds in one collection: {0:?}")]
    MultipleReferenceBuilds(Vec<String>),
}
