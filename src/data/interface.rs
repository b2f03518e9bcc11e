//! Definition of the transcript model and the interface for accessing transcripts.

use serde::{Deserialize, Serialize};

use crate::data::error::Error;

/// Strand of a transcript on its contig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

/// Transcript biotype, as far as effect prediction is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biotype {
    ProteinCoding,
    NonCoding,
}

/// An exon in genomic coordinates (1-based, inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exon {
    pub id: String,
    pub start: u64,
    pub end: u64,
}

impl Exon {
    /// Number of bases, 0 for an exon with `end < start`.
    pub fn len(&self) -> u64 {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, pos: u64) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// A transcript as consumed by the effect prediction.
///
/// ```text
/// id                   | ENST00000288602
/// name                 | BRAF-001
/// gene_name            | BRAF
/// contig               | 7
/// strand               | -
/// biotype              | protein_coding
/// complete             | true
/// cds_start_offset     | 62
/// ```
///
/// Exons are given in transcript order, i.e., descending genomic position for
/// transcripts on the minus strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gene_name: String,
    pub contig: String,
    pub strand: Strand,
    pub biotype: Biotype,
    /// Whether the transcript has annotated start and stop codons.
    pub complete: bool,
    pub exons: Vec<Exon>,
    /// 0-based offset of the first start codon base in the spliced transcript.
    #[serde(default)]
    pub cds_start_offset: Option<usize>,
    /// Coding sequence from the start codon up to and including the stop codon.
    #[serde(default)]
    pub coding_sequence: String,
    /// Protein sequence; a terminal `*` is allowed.
    #[serde(default)]
    pub protein_sequence: Option<String>,
    /// Spliced sequence following the stop codon, if known.
    #[serde(default)]
    pub three_prime_utr_sequence: String,
}

impl Transcript {
    pub fn is_protein_coding(&self) -> bool {
        self.biotype == Biotype::ProteinCoding
    }

    /// Smallest genomic position covered by an exon.
    pub fn start(&self) -> u64 {
        self.exons.iter().map(|exon| exon.start).min().unwrap_or(0)
    }

    /// Largest genomic position covered by an exon.
    pub fn end(&self) -> u64 {
        self.exons.iter().map(|exon| exon.end).max().unwrap_or(0)
    }

    /// Whether the transcript touches the 1-based closed interval on `contig`.
    pub fn overlaps(&self, contig: &str, start: u64, end: u64) -> bool {
        self.contig == contig && self.start() <= end && start <= self.end()
    }

    /// Length of the spliced transcript.
    pub fn spliced_length(&self) -> usize {
        self.exons.iter().map(|exon| exon.len() as usize).sum()
    }

    /// Index of the exon containing the genomic position.
    pub fn exon_index_containing(&self, pos: u64) -> Option<usize> {
        self.exons.iter().position(|exon| exon.contains(pos))
    }

    /// 0-based offset of a genomic position in the spliced transcript.
    ///
    /// Returns `None` for positions outside of exons.
    pub fn spliced_offset(&self, pos: u64) -> Option<usize> {
        let mut offset = 0;
        for exon in &self.exons {
            if exon.contains(pos) {
                let within = match self.strand {
                    Strand::Plus => pos - exon.start,
                    Strand::Minus => exon.end - pos,
                };
                return Some(offset + within as usize);
            }
            offset += exon.len() as usize;
        }
        None
    }

    /// Spliced offset of the last coding base (last base of the stop codon).
    pub fn cds_end_offset(&self) -> Option<usize> {
        self.cds_start_offset
            .filter(|_| !self.coding_sequence.is_empty())
            .map(|start| start + self.coding_sequence.len() - 1)
    }

    /// Protein sequence without a terminal stop symbol.
    pub fn protein_sequence(&self) -> Option<&str> {
        self.protein_sequence
            .as_deref()
            .map(|seq| seq.strip_suffix('*').unwrap_or(seq))
    }

    /// Codon index of the stop codon, equal to the protein length.
    pub fn stop_codon_index(&self) -> Option<usize> {
        self.protein_sequence().map(str::len)
    }

    /// Check the internal consistency of the transcript model.
    pub fn validate(&self) -> Result<(), Error> {
        if self.exons.is_empty() {
            return Err(Error::NoExons(self.id.clone()));
        }
        if let Some(exon) = self.exons.iter().find(|exon| exon.is_empty()) {
            return Err(Error::InvalidExon(self.id.clone(), exon.id.clone()));
        }
        let ordered = self.exons.windows(2).all(|pair| match self.strand {
            Strand::Plus => pair[0].end < pair[1].start,
            Strand::Minus => pair[1].end < pair[0].start,
        });
        if !ordered {
            return Err(Error::ExonsOutOfOrder(self.id.clone()));
        }
        if let Some(cds_end) = self.cds_end_offset() {
            if cds_end >= self.spliced_length() {
                return Err(Error::CodingSequenceOutOfBounds(self.id.clone()));
            }
        }
        Ok(())
    }
}

/// Interface for transcript data providers.
pub trait Provider {
    /// Return the transcript with the given identifier.
    ///
    /// # Arguments
    ///
    /// * `tx_id` -- transcript identifier, e.g., `ENST00000288602`
    fn get_transcript(&self, tx_id: &str) -> Result<&Transcript, Error>;

    /// Return the transcripts overlapping the given region.
    ///
    /// # Arguments
    ///
    /// * `contig` -- contig name without `chr` prefix
    /// * `start` -- 1-based start position
    /// * `end` -- 1-based end position (inclusive)
    fn get_transcripts_for_region(&self, contig: &str, start: u64, end: u64) -> Vec<&Transcript>;
}
