//! Utility code for working with nucleotide and amino acid sequences.
//!
//! Provides the translation primitive used by the effect prediction as well as
//! allele trimming and amino acid letter conversion.

pub use crate::sequences::error::Error;

mod error {
    /// Error type for sequence operations.
    #[derive(thiserror::Error, Debug, PartialEq, Eq)]
    pub enum Error {
        #[error("invalid 1-letter aminoacid: {0} at {1}")]
        InvalidOneLetterAminoAcid(String, usize),
        #[error("invalid 3-letter aminoacid: {0} at {1}")]
        InvalidThreeLetterAminoAcid(String, usize),
        #[error("3-letter amino acid sequence length is not multiple of three: {0}")]
        InvalidThreeLetterAminoAcidLength(usize),
        #[error("codon is undefined in codon table: {0}")]
        UndefinedCodon(String),
    }
}

/// Amino acids of the standard code in NCBI order (`TCAG` for each codon position).
const STANDARD_AAS: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
/// Standard code with `TGA` read through as selenocysteine.
const SELENOCYSTEINE_AAS: &[u8; 64] =
    b"FFLLSSSSYY**CCUWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
/// Vertebrate mitochondrial code (NCBI table 2).
const VERTEBRATE_MITOCHONDRIAL_AAS: &[u8; 64] =
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG";

const STANDARD_STARTS: &[&[u8; 3]] = &[b"TTG", b"CTG", b"ATG"];
const VERTEBRATE_MITOCHONDRIAL_STARTS: &[&[u8; 3]] = &[b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"];

/// 1-letter/3-letter amino acid codes.
const AA1_AA3: &[(u8, &str)] = &[
    (b'A', "Ala"),
    (b'R', "Arg"),
    (b'N', "Asn"),
    (b'D', "Asp"),
    (b'C', "Cys"),
    (b'Q', "Gln"),
    (b'E', "Glu"),
    (b'G', "Gly"),
    (b'H', "His"),
    (b'I', "Ile"),
    (b'L', "Leu"),
    (b'K', "Lys"),
    (b'M', "Met"),
    (b'F', "Phe"),
    (b'P', "Pro"),
    (b'S', "Ser"),
    (b'T', "Thr"),
    (b'W', "Trp"),
    (b'Y', "Tyr"),
    (b'V', "Val"),
    (b'X', "Xaa"),
    (b'*', "Ter"),
    (b'U', "Sec"),
];

/// Allow selection of translation table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TranslationTable {
    #[default]
    Standard,
    Selenocysteine,
    VertebrateMitochondrial,
}

impl TranslationTable {
    fn amino_acids(&self) -> &'static [u8; 64] {
        match self {
            TranslationTable::Standard => STANDARD_AAS,
            TranslationTable::Selenocysteine => SELENOCYSTEINE_AAS,
            TranslationTable::VertebrateMitochondrial => VERTEBRATE_MITOCHONDRIAL_AAS,
        }
    }

    fn start_codons(&self) -> &'static [&'static [u8; 3]] {
        match self {
            TranslationTable::Standard | TranslationTable::Selenocysteine => STANDARD_STARTS,
            TranslationTable::VertebrateMitochondrial => VERTEBRATE_MITOCHONDRIAL_STARTS,
        }
    }

    /// Whether `codon` (already normalized) may serve as a start codon.
    pub fn is_start_codon(&self, codon: &[u8]) -> bool {
        self.start_codons().iter().any(|start| start.as_slice() == codon)
    }
}

/// Normalize a nucleotide to upper case DNA.
fn normalize_base(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'U' => b'T',
        other => other,
    }
}

/// Index of an unambiguous base in the `TCAG` ordering.
fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Expansion of IUPAC ambiguity codes to the bases they stand for.
fn expand_iupac(base: u8) -> Option<&'static [u8]> {
    Some(match base {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'S' => b"CG",
        b'W' => b"AT",
        b'K' => b"GT",
        b'M' => b"AC",
        b'B' => b"CGT",
        b'D' => b"AGT",
        b'H' => b"ACT",
        b'V' => b"ACG",
        b'N' => b"ACGT",
        _ => return None,
    })
}

/// Translates single codons to 1-letter amino acids using a `TranslationTable`.
struct CodonTranslator {
    amino_acids: &'static [u8; 64],
}

impl CodonTranslator {
    fn new(table: TranslationTable) -> Self {
        Self {
            amino_acids: table.amino_acids(),
        }
    }

    fn lookup(&self, codon: &[u8; 3]) -> Option<u8> {
        let mut idx = 0;
        for base in codon {
            idx = idx * 4 + base_index(*base)?;
        }
        Some(self.amino_acids[idx])
    }

    /// Translate the given (normalized) codon.
    ///
    /// Codons with ambiguity codes are resolved when all expansions agree and are
    /// translated to `X` otherwise.
    fn translate(&self, codon: &[u8; 3]) -> Result<u8, Error> {
        if let Some(aa) = self.lookup(codon) {
            return Ok(aa);
        }

        let undefined = || Error::UndefinedCodon(String::from_utf8_lossy(codon).into_owned());
        let first = expand_iupac(codon[0]).ok_or_else(undefined)?;
        let second = expand_iupac(codon[1]).ok_or_else(undefined)?;
        let third = expand_iupac(codon[2]).ok_or_else(undefined)?;

        let mut resolved = None;
        for a in first {
            for b in second {
                for c in third {
                    let aa = self.lookup(&[*a, *b, *c]).ok_or_else(undefined)?;
                    match resolved {
                        None => resolved = Some(aa),
                        Some(prev) if prev != aa => return Ok(b'X'),
                        Some(_) => (),
                    }
                }
            }
        }
        resolved.ok_or_else(undefined)
    }
}

/// Translates a nucleotide sequence into a 1-letter amino acid sequence.
///
/// Translation starts at offset 0 and works on complete codons only, trailing
/// bases are ignored.
///
/// # Args
///
/// * `seq` -- A DNA or RNA sequence, case is ignored.
/// * `first_codon_is_start` -- Translate the first codon to `M` if it is a start codon
///   of the table (e.g., `CTG` in the standard code).
/// * `to_stop` -- Stop at the first stop codon; the stop is not part of the result.
/// * `table` -- Codon table to use.
pub fn translate(
    seq: &str,
    first_codon_is_start: bool,
    to_stop: bool,
    table: TranslationTable,
) -> Result<String, Error> {
    let translator = CodonTranslator::new(table);
    let mut result = String::with_capacity(seq.len() / 3);

    for (i, chunk) in seq.as_bytes().chunks_exact(3).enumerate() {
        let codon = [
            normalize_base(chunk[0]),
            normalize_base(chunk[1]),
            normalize_base(chunk[2]),
        ];
        let aa = if i == 0 && first_codon_is_start && table.is_start_codon(&codon) {
            b'M'
        } else {
            translator.translate(&codon)?
        };
        if to_stop && aa == b'*' {
            break;
        }
        result.push(char::from(aa));
    }

    Ok(result)
}

/// Converts string of 1-letter amino acids to 3-letter amino acids.
pub fn aa1_to_aa3(seq: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(seq.len() * 3);

    for (i, aa1) in seq.bytes().enumerate() {
        let (_, aa3) = AA1_AA3
            .iter()
            .find(|(code, _)| *code == aa1.to_ascii_uppercase())
            .ok_or_else(|| Error::InvalidOneLetterAminoAcid(char::from(aa1).to_string(), i + 1))?;
        result.push_str(aa3);
    }

    Ok(result)
}

/// Converts string of 3-letter amino acids to 1-letter amino acids.
pub fn aa3_to_aa1(seq: &str) -> Result<String, Error> {
    if seq.len() % 3 != 0 || !seq.is_ascii() {
        return Err(Error::InvalidThreeLetterAminoAcidLength(seq.len()));
    }

    let mut result = String::with_capacity(seq.len() / 3);

    for (i, aa3) in seq.as_bytes().chunks(3).enumerate() {
        let (aa1, _) = AA1_AA3
            .iter()
            .find(|(_, name)| name.as_bytes().eq_ignore_ascii_case(aa3))
            .ok_or_else(|| {
                Error::InvalidThreeLetterAminoAcid(String::from_utf8_lossy(aa3).into_owned(), i + 1)
            })?;
        result.push(char::from(*aa1));
    }

    Ok(result)
}

/// Removes the longest common prefix of the two ASCII strings.
///
/// Returns the number of trimmed characters and the remainders.
pub fn trim_common_prefixes<'a>(reference: &'a str, alternative: &'a str) -> (usize, &'a str, &'a str) {
    let trim = reference
        .bytes()
        .zip(alternative.bytes())
        .take_while(|(r, a)| r == a)
        .count();
    (trim, &reference[trim..], &alternative[trim..])
}

/// Removes the longest common suffix of the two ASCII strings.
///
/// Returns the number of trimmed characters and the remainders.
pub fn trim_common_suffixes<'a>(reference: &'a str, alternative: &'a str) -> (usize, &'a str, &'a str) {
    let trim = reference
        .bytes()
        .rev()
        .zip(alternative.bytes().rev())
        .take_while(|(r, a)| r == a)
        .count();
    (
        trim,
        &reference[..reference.len() - trim],
        &alternative[..alternative.len() - trim],
    )
}

/// Reverse complementing shortcut.
pub fn revcomp(seq: &str) -> String {
    String::from_utf8_lossy(&bio::alphabets::dna::revcomp(seq.as_bytes())).into_owned()
}


// <LICENSE>
// Copyright 2026 tx-effects Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// </LICENSE>
