//! Error type definition.

use thiserror::Error;

/// Error type for data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("could not open transcript JSON file: {0}")]
    JsonOpen(String),
    #[error("could not parse transcript JSON: {0}")]
    JsonParse(String),
    #[error("no transcript found for {0}")]
    NoTranscriptFound(String),
    #[error("duplicate transcript {0}")]
    DuplicateTranscript(String),
    #[error("transcript {0} has no exons")]
    NoExons(String),
    #[error("exon {1} of transcript {0} has start > end")]
    InvalidExon(String, String),
    #[error("exons of transcript {0} are not in transcript order or overlap")]
    ExonsOutOfOrder(String),
    #[error("coding sequence of transcript {0} extends beyond its exons")]
    CodingSequenceOutOfBounds(String),
}
