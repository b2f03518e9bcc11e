//! Error type definition.

use thiserror::Error;

/// Error type for querying effects.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("cannot determine the protein sequence of {0}")]
    NotComputable(String),
    #[error("transcript {0} has no protein sequence")]
    MissingProteinSequence(String),
    #[error("amino acid span {1}..{2} is outside of the protein of {0}")]
    SpanOutsideProtein(String, usize, usize),
}
