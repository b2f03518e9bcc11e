//! Taxonomy of the effects a variant can have on a transcript.
//!
//! Each effect is a `MutationEffect` that couples the variant and the transcript with
//! an `EffectKind`.  Coding kinds share their amino acid payloads (`CodingChange`,
//! `AaChange`) and the mutant protein sequence is derived from these payloads on
//! first access.

mod collection;
mod display;
mod error;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use crate::effects::collection::EffectCollection;
pub use crate::effects::display::ThreeLetter;
pub use crate::effects::error::Error;
use crate::{data::interface::Transcript, variant::Variant};

/// Position of a changed amino acid and the wild-type residue(s) found there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodingChange {
    /// 0-based position of the first changed amino acid.
    pub aa_pos: usize,
    /// Wild-type amino acids at `aa_pos`.
    pub aa_ref: String,
}

/// Replacement of the amino acid span `aa_ref` at `aa_pos` by `aa_alt`.
///
/// Either of `aa_ref` and `aa_alt` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AaChange {
    pub aa_pos: usize,
    pub aa_ref: String,
    pub aa_alt: String,
}

/// Location of an intronic variant relative to the closest exon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntronLocation {
    /// Index of the nearest exon in transcript order.
    pub exon_index: usize,
    /// Number of bases between the variant and that exon, 1 for the first intron base.
    pub distance_to_exon: u64,
}

/// The closed set of effect categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    NoncodingTranscript,
    IncompleteTranscript,
    FivePrimeUtr,
    ThreePrimeUtr,
    Intronic(IntronLocation),
    IntronicSpliceSite(IntronLocation),
    /// First bases of the intron.
    SpliceDonor(IntronLocation),
    /// Last bases of the intron.
    SpliceAcceptor(IntronLocation),
    /// Last bases of an exon before an intron or first base after an intron.
    ExonicSpliceSite {
        exon_index: usize,
    },
    Silent(CodingChange),
    Substitution(AaChange),
    ComplexSubstitution(AaChange),
    Insertion(AaChange),
    Deletion(AaChange),
    /// `aa_alt` ends with the new stop `*`, preceded by any changed residues.
    PrematureStop(AaChange),
    StartLoss(AaChange),
    StopLoss(AaChange),
    FrameShift {
        change: CodingChange,
        shifted_sequence: String,
    },
    FrameShiftTruncation(CodingChange),
}

impl EffectKind {
    /// Name of the effect category.
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::NoncodingTranscript => "NoncodingTranscript",
            EffectKind::IncompleteTranscript => "IncompleteTranscript",
            EffectKind::FivePrimeUtr => "FivePrimeUTR",
            EffectKind::ThreePrimeUtr => "ThreePrimeUTR",
            EffectKind::Intronic(_) => "Intronic",
            EffectKind::IntronicSpliceSite(_) => "IntronicSpliceSite",
            EffectKind::SpliceDonor(_) => "SpliceDonor",
            EffectKind::SpliceAcceptor(_) => "SpliceAcceptor",
            EffectKind::ExonicSpliceSite { .. } => "ExonicSpliceSite",
            EffectKind::Silent(_) => "Silent",
            EffectKind::Substitution(_) => "Substitution",
            EffectKind::ComplexSubstitution(_) => "ComplexSubstitution",
            EffectKind::Insertion(_) => "Insertion",
            EffectKind::Deletion(_) => "Deletion",
            EffectKind::PrematureStop(_) => "PrematureStop",
            EffectKind::StartLoss(_) => "StartLoss",
            EffectKind::StopLoss(_) => "StopLoss",
            EffectKind::FrameShift { .. } => "FrameShift",
            EffectKind::FrameShiftTruncation(_) => "FrameShiftTruncation",
        }
    }

    /// Sequence Ontology term of the category.
    pub fn so_term(&self) -> &'static str {
        match self {
            EffectKind::NoncodingTranscript => "non_coding_transcript_variant",
            EffectKind::IncompleteTranscript => "transcript_variant",
            EffectKind::FivePrimeUtr => "5_prime_UTR_variant",
            EffectKind::ThreePrimeUtr => "3_prime_UTR_variant",
            EffectKind::Intronic(_) => "intron_variant",
            EffectKind::IntronicSpliceSite(_) | EffectKind::ExonicSpliceSite { .. } => {
                "splice_region_variant"
            }
            EffectKind::SpliceDonor(_) => "splice_donor_variant",
            EffectKind::SpliceAcceptor(_) => "splice_acceptor_variant",
            EffectKind::Silent(_) => "synonymous_variant",
            EffectKind::Substitution(_) => "missense_variant",
            EffectKind::ComplexSubstitution(_) => "protein_altering_variant",
            EffectKind::Insertion(_) => "inframe_insertion",
            EffectKind::Deletion(_) => "inframe_deletion",
            EffectKind::PrematureStop(_) => "stop_gained",
            EffectKind::StartLoss(_) => "start_lost",
            EffectKind::StopLoss(_) => "stop_lost",
            EffectKind::FrameShift { .. } | EffectKind::FrameShiftTruncation(_) => {
                "frameshift_variant"
            }
        }
    }

    /// Rank used for picking the most severe effect, higher is more severe.
    pub fn priority(&self) -> u8 {
        match self {
            EffectKind::IncompleteTranscript => 0,
            EffectKind::NoncodingTranscript => 1,
            EffectKind::ThreePrimeUtr => 2,
            EffectKind::FivePrimeUtr => 3,
            EffectKind::Intronic(_) => 4,
            EffectKind::Silent(_) => 5,
            EffectKind::IntronicSpliceSite(_) => 6,
            EffectKind::Substitution(_) => 7,
            EffectKind::Insertion(_) => 8,
            EffectKind::Deletion(_) => 9,
            EffectKind::ComplexSubstitution(_) => 10,
            EffectKind::ExonicSpliceSite { .. } => 11,
            EffectKind::SpliceAcceptor(_) => 12,
            EffectKind::SpliceDonor(_) => 13,
            EffectKind::StartLoss(_) => 14,
            EffectKind::StopLoss(_) => 15,
            EffectKind::PrematureStop(_) => 16,
            EffectKind::FrameShift { .. } => 17,
            EffectKind::FrameShiftTruncation(_) => 18,
        }
    }

    /// Whether the effect changes, or may change, the coding sequence.
    pub fn is_coding(&self) -> bool {
        self.coding_change().is_some()
    }

    pub fn is_splice_site(&self) -> bool {
        matches!(
            self,
            EffectKind::IntronicSpliceSite(_)
                | EffectKind::SpliceDonor(_)
                | EffectKind::SpliceAcceptor(_)
                | EffectKind::ExonicSpliceSite { .. }
        )
    }

    /// Whether the protein level outcome cannot be predicted from sequence alone.
    pub fn is_unpredictable(&self) -> bool {
        self.is_splice_site()
            || matches!(self, EffectKind::StartLoss(_) | EffectKind::StopLoss(_))
    }

    /// Shared `(aa_pos, aa_ref)` payload of coding kinds.
    pub fn coding_change(&self) -> Option<(usize, &str)> {
        match self {
            EffectKind::Silent(change)
            | EffectKind::FrameShift { change, .. }
            | EffectKind::FrameShiftTruncation(change) => Some((change.aa_pos, &change.aa_ref)),
            EffectKind::Substitution(change)
            | EffectKind::ComplexSubstitution(change)
            | EffectKind::Insertion(change)
            | EffectKind::Deletion(change)
            | EffectKind::PrematureStop(change)
            | EffectKind::StartLoss(change)
            | EffectKind::StopLoss(change) => Some((change.aa_pos, &change.aa_ref)),
            _ => None,
        }
    }

    /// Alternative amino acids of span replacing kinds.
    pub fn aa_alt(&self) -> Option<&str> {
        match self {
            EffectKind::Substitution(change)
            | EffectKind::ComplexSubstitution(change)
            | EffectKind::Insertion(change)
            | EffectKind::Deletion(change)
            | EffectKind::PrematureStop(change)
            | EffectKind::StartLoss(change)
            | EffectKind::StopLoss(change) => Some(&change.aa_alt),
            _ => None,
        }
    }

    pub fn shifted_sequence(&self) -> Option<&str> {
        match self {
            EffectKind::FrameShift {
                shifted_sequence, ..
            } => Some(shifted_sequence),
            _ => None,
        }
    }

    pub fn intron_location(&self) -> Option<IntronLocation> {
        match self {
            EffectKind::Intronic(location)
            | EffectKind::IntronicSpliceSite(location)
            | EffectKind::SpliceDonor(location)
            | EffectKind::SpliceAcceptor(location) => Some(*location),
            _ => None,
        }
    }
}

/// The effect of one variant on one transcript.
///
/// Never changed after construction; the mutant protein sequence is computed on first
/// access and cached.
#[derive(Debug, Clone)]
pub struct MutationEffect<'a> {
    variant: &'a Variant,
    transcript: &'a Transcript,
    kind: EffectKind,
    mutant_protein_sequence: OnceLock<String>,
}

impl PartialEq for MutationEffect<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
            && self.transcript.id == other.transcript.id
            && self.kind == other.kind
    }
}

impl Eq for MutationEffect<'_> {}

impl<'a> MutationEffect<'a> {
    pub fn new(variant: &'a Variant, transcript: &'a Transcript, kind: EffectKind) -> Self {
        Self {
            variant,
            transcript,
            kind,
            mutant_protein_sequence: OnceLock::new(),
        }
    }

    pub fn variant(&self) -> &'a Variant {
        self.variant
    }

    pub fn transcript(&self) -> &'a Transcript {
        self.transcript
    }

    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    pub fn into_kind(self) -> EffectKind {
        self.kind
    }

    pub fn is_coding(&self) -> bool {
        self.kind.is_coding()
    }

    pub fn aa_pos(&self) -> Option<usize> {
        self.kind.coding_change().map(|(aa_pos, _)| aa_pos)
    }

    pub fn aa_ref(&self) -> Option<&str> {
        self.kind.coding_change().map(|(_, aa_ref)| aa_ref)
    }

    /// Protein of the transcript without the terminal stop.
    pub fn original_protein_sequence(&self) -> Result<&'a str, Error> {
        self.transcript
            .protein_sequence()
            .ok_or_else(|| Error::MissingProteinSequence(self.transcript.id.clone()))
    }

    /// Protein sequence after applying the variant.
    ///
    /// Fails with `Error::NotComputable` for effects whose protein level outcome is
    /// unknown, i.e., everything but silent, in-frame, premature stop, and frameshift
    /// effects.
    pub fn mutant_protein_sequence(&self) -> Result<&str, Error> {
        if let Some(seq) = self.mutant_protein_sequence.get() {
            return Ok(seq);
        }
        let seq = self.compute_mutant_protein_sequence()?;
        Ok(self.mutant_protein_sequence.get_or_init(|| seq))
    }

    fn compute_mutant_protein_sequence(&self) -> Result<String, Error> {
        match &self.kind {
            EffectKind::Silent(_) => Ok(self.original_protein_sequence()?.to_string()),
            EffectKind::Substitution(change)
            | EffectKind::ComplexSubstitution(change)
            | EffectKind::Insertion(change)
            | EffectKind::Deletion(change) => {
                let original = self.original_protein_sequence()?;
                let end = change.aa_pos + change.aa_ref.len();
                let (prefix, suffix) = original
                    .get(..change.aa_pos)
                    .zip(original.get(end..))
                    .ok_or_else(|| self.span_outside_protein(change.aa_pos, end))?;
                Ok(format!("{prefix}{}{suffix}", change.aa_alt))
            }
            EffectKind::PrematureStop(change) => {
                let prefix = self.protein_prefix(change.aa_pos)?;
                let before_stop = change.aa_alt.split('*').next().unwrap_or_default();
                Ok(format!("{prefix}{before_stop}"))
            }
            EffectKind::FrameShift {
                change,
                shifted_sequence,
            } => Ok(format!(
                "{}{shifted_sequence}",
                self.protein_prefix(change.aa_pos)?
            )),
            EffectKind::FrameShiftTruncation(change) => {
                Ok(self.protein_prefix(change.aa_pos)?.to_string())
            }
            _ => Err(Error::NotComputable(self.to_string())),
        }
    }

    fn protein_prefix(&self, aa_pos: usize) -> Result<&'a str, Error> {
        self.original_protein_sequence()?
            .get(..aa_pos)
            .ok_or_else(|| self.span_outside_protein(0, aa_pos))
    }

    fn span_outside_protein(&self, start: usize, end: usize) -> Error {
        Error::SpanOutsideProtein(self.transcript.id.clone(), start, end)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{AaChange, CodingChange, EffectKind, IntronLocation, MutationEffect};
    use crate::{data::interface::test_helpers::plus_strand, variant::Variant};

    fn span(aa_pos: usize, aa_ref: &str, aa_alt: &str) -> AaChange {
        AaChange {
            aa_pos,
            aa_ref: aa_ref.to_string(),
            aa_alt: aa_alt.to_string(),
        }
    }

    fn coding(aa_pos: usize, aa_ref: &str) -> CodingChange {
        CodingChange {
            aa_pos,
            aa_ref: aa_ref.to_string(),
        }
    }

    // protein of the test transcript is MSTVKLPEGR
    #[rstest]
    #[case(EffectKind::Silent(coding(1, "S")), "MSTVKLPEGR")]
    #[case(EffectKind::Substitution(span(1, "S", "P")), "MPTVKLPEGR")]
    #[case(EffectKind::ComplexSubstitution(span(1, "ST", "QQQ")), "MQQQVKLPEGR")]
    #[case(EffectKind::Insertion(span(2, "", "AA")), "MSAATVKLPEGR")]
    #[case(EffectKind::Deletion(span(3, "VK", "")), "MSTLPEGR")]
    #[case(EffectKind::PrematureStop(span(2, "T", "*")), "MS")]
    #[case(EffectKind::PrematureStop(span(2, "T", "W*")), "MSW")]
    #[case(
        EffectKind::FrameShift { change: coding(2, "S"), shifted_sequence: "KL".to_string() },
        "MSKL"
    )]
    #[case(EffectKind::FrameShiftTruncation(coding(4, "V")), "MSTV")]
    fn mutant_protein_sequence(#[case] kind: EffectKind, #[case] expected: &str) -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", 1009, "T", "C")?;
        let effect = MutationEffect::new(&variant, &tx, kind);

        assert_eq!(effect.mutant_protein_sequence()?, expected);
        // cached value is returned on second access
        assert_eq!(effect.mutant_protein_sequence()?, expected);
        assert_eq!(effect.original_protein_sequence()?, "MSTVKLPEGR");

        Ok(())
    }

    #[rstest]
    #[case(EffectKind::StartLoss(span(0, "M", "I")))]
    #[case(EffectKind::StopLoss(span(10, "*", "Q")))]
    #[case(EffectKind::SpliceDonor(IntronLocation { exon_index: 0, distance_to_exon: 1 }))]
    #[case(EffectKind::ExonicSpliceSite { exon_index: 0 })]
    #[case(EffectKind::FivePrimeUtr)]
    #[case(EffectKind::NoncodingTranscript)]
    fn mutant_protein_not_computable(#[case] kind: EffectKind) -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", 1009, "T", "C")?;
        let effect = MutationEffect::new(&variant, &tx, kind);

        assert!(matches!(
            effect.mutant_protein_sequence(),
            Err(super::Error::NotComputable(_))
        ));

        Ok(())
    }

    #[test]
    fn span_outside_protein() -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", 1009, "T", "C")?;
        let effect = MutationEffect::new(&variant, &tx, EffectKind::Deletion(span(9, "RX", "")));

        assert_eq!(
            effect.mutant_protein_sequence(),
            Err(super::Error::SpanOutsideProtein("TX1".to_string(), 9, 11))
        );

        Ok(())
    }

    #[test]
    fn missing_protein() -> Result<(), Error> {
        let mut tx = plus_strand();
        tx.protein_sequence = None;
        let variant = Variant::new("1", 1009, "T", "C")?;
        let effect = MutationEffect::new(&variant, &tx, EffectKind::Silent(coding(1, "S")));

        assert_eq!(
            effect.mutant_protein_sequence(),
            Err(super::Error::MissingProteinSequence("TX1".to_string()))
        );

        Ok(())
    }

    #[test]
    fn kind_properties() {
        let fs = EffectKind::FrameShift {
            change: coding(2, "S"),
            shifted_sequence: "KL".to_string(),
        };
        assert!(fs.is_coding());
        assert!(!fs.is_unpredictable());
        assert_eq!(fs.coding_change(), Some((2, "S")));
        assert_eq!(fs.shifted_sequence(), Some("KL"));
        assert_eq!(fs.so_term(), "frameshift_variant");

        let donor = EffectKind::SpliceDonor(IntronLocation {
            exon_index: 0,
            distance_to_exon: 2,
        });
        assert!(donor.is_splice_site());
        assert!(donor.is_unpredictable());
        assert!(!donor.is_coding());
        assert_eq!(donor.intron_location().map(|l| l.distance_to_exon), Some(2));

        let stop_loss = EffectKind::StopLoss(span(10, "*", "Q"));
        assert!(stop_loss.is_coding());
        assert!(stop_loss.is_unpredictable());
        assert!(stop_loss.priority() > EffectKind::Substitution(span(1, "S", "P")).priority());
        assert_eq!(stop_loss.aa_alt(), Some("Q"));
    }
}

// <LICENSE>
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
