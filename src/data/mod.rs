//! Datatypes, interfaces, and data access for transcripts.

pub mod error;
pub mod interface;
pub mod json;

pub use error::Error;
