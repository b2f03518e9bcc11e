//! Genomic variants and collections thereof.

mod collection;
mod error;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub use crate::variant::collection::VariantCollection;
pub use crate::variant::error::Error;
use crate::sequences::{trim_common_prefixes, trim_common_suffixes};

/// A normalized genomic variant.
///
/// Alleles are stored upper case with their shared prefix and suffix removed.
/// Positions are 1-based; for deletions and substitutions `start..=end` covers the
/// reference bases.  Insertions have an empty reference allele and `start == end`
/// is the base immediately before the inserted bases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variant {
    contig: String,
    start: u64,
    end: u64,
    reference: String,
    alternative: String,
}

/// Upper-case an allele and check its alphabet; `-` and `.` denote the empty allele.
fn normalize_allele(allele: &str) -> Result<String, Error> {
    let allele = allele.trim();
    if allele == "-" || allele == "." {
        return Ok(String::new());
    }
    let allele = allele.to_ascii_uppercase();
    if let Some(c) = allele.chars().find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T' | 'N')) {
        return Err(Error::InvalidNucleotide(c, allele));
    }
    Ok(allele)
}

/// Normalize contig names, e.g. `chr1` to `1` and `chrM` to `MT`.
pub fn normalize_contig(contig: &str) -> String {
    let contig = contig.trim();
    let stripped = if contig.len() > 3 && contig[..3].eq_ignore_ascii_case("chr") {
        &contig[3..]
    } else {
        contig
    };
    if stripped.eq_ignore_ascii_case("M") {
        "MT".to_string()
    } else {
        stripped.to_string()
    }
}

impl Variant {
    /// Construct a new variant from a VCF-style record.
    ///
    /// `position` is the 1-based position of the first reference base.  For an empty
    /// reference allele (MAF-style insertion, `-`) it is the base before the
    /// insertion.
    pub fn new(contig: &str, position: u64, reference: &str, alternative: &str) -> Result<Self, Error> {
        let contig = normalize_contig(contig);
        if position == 0 {
            return Err(Error::InvalidPosition(contig));
        }
        let reference = normalize_allele(reference)?;
        let alternative = normalize_allele(alternative)?;
        if reference == alternative {
            return Err(Error::NoOpVariant(contig, position));
        }

        let (prefix_len, reference, alternative) = trim_common_prefixes(&reference, &alternative);
        let (_, reference, alternative) = trim_common_suffixes(reference, alternative);

        let (start, end) = if reference.is_empty() {
            let before = if prefix_len > 0 {
                position + prefix_len as u64 - 1
            } else {
                position
            };
            (before, before)
        } else {
            let start = position + prefix_len as u64;
            (start, start + reference.len() as u64 - 1)
        };

        Ok(Self {
            contig,
            start,
            end,
            reference: reference.to_string(),
            alternative: alternative.to_string(),
        })
    }

    /// Construct from a tumor/normal record with two tumor alleles (MAF style).
    ///
    /// The first tumor allele differing from the reference becomes the alternate
    /// allele.
    pub fn from_tumor_alleles(
        contig: &str,
        position: u64,
        reference: &str,
        tumor_allele1: &str,
        tumor_allele2: &str,
    ) -> Result<Self, Error> {
        let normalized_ref = normalize_allele(reference)?;
        let alternative = if normalize_allele(tumor_allele1)? != normalized_ref {
            tumor_allele1
        } else if normalize_allele(tumor_allele2)? != normalized_ref {
            tumor_allele2
        } else {
            return Err(Error::TumorAllelesMatchReference(
                normalize_contig(contig),
                position,
                normalized_ref,
            ));
        };
        Self::new(contig, position, reference, alternative)
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// 1-based start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// 1-based end position (inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    pub fn is_insertion(&self) -> bool {
        self.reference.is_empty()
    }

    pub fn is_deletion(&self) -> bool {
        self.alternative.is_empty()
    }

    pub fn is_snv(&self) -> bool {
        self.reference.len() == 1 && self.alternative.len() == 1
    }

    pub fn is_indel(&self) -> bool {
        self.reference.len() != self.alternative.len()
    }

    /// Whether the variant touches the 1-based closed interval on `contig`.
    pub fn overlaps(&self, contig: &str, start: u64, end: u64) -> bool {
        self.contig == contig && self.start <= end && start <= self.end
    }

    /// Short genomic description, e.g., `chr7 g.140453136A>T`.
    pub fn short_description(&self) -> String {
        format!("chr{} g.{}", self.contig, self.edit_description())
    }

    fn edit_description(&self) -> String {
        let (r, a) = (&self.reference, &self.alternative);
        match (r.len(), a.len()) {
            (0, _) => format!("{}_{}ins{}", self.start, self.start + 1, a),
            (1, 0) => format!("{}del{}", self.start, r),
            (_, 0) => format!("{}_{}del{}", self.start, self.end, r),
            (1, 1) => format!("{}{}>{}", self.start, r, a),
            (1, _) => format!("{}delins{}", self.start, a),
            (_, _) => format!("{}_{}delins{}", self.start, self.end, a),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_description())
    }
}
