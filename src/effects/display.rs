//! Implementation of short descriptions and the `Display` trait.
//!
//! Protein changes are rendered with 1-letter amino acid codes by default.  The
//! `ThreeLetter` newtype renders the same description with 3-letter codes.

use std::fmt::Display;

use crate::{
    effects::{AaChange, EffectKind, MutationEffect},
    sequences::aa1_to_aa3,
};

/// Newtype for rendering protein changes with 3-letter amino acid codes.
pub struct ThreeLetter<'a, T>(pub &'a T);

impl<T> ThreeLetter<'_, T> {
    pub fn inner(&self) -> &T {
        match self {
            ThreeLetter(value) => value,
        }
    }
}

/// Amino acid codes are passed through unchanged if they cannot be converted.
fn to_aa3(seq: &str) -> String {
    aa1_to_aa3(seq).unwrap_or_else(|_| seq.to_string())
}

fn describe<F>(kind: &EffectKind, aa: F) -> String
where
    F: Fn(&str) -> String,
{
    let stop = aa("*");
    match kind {
        EffectKind::NoncodingTranscript => "non-coding-transcript".to_string(),
        EffectKind::IncompleteTranscript => "incomplete".to_string(),
        EffectKind::FivePrimeUtr => "5' UTR".to_string(),
        EffectKind::ThreePrimeUtr => "3' UTR".to_string(),
        EffectKind::Intronic(_) => "intronic".to_string(),
        EffectKind::IntronicSpliceSite(_) => "intronic-splice-site".to_string(),
        EffectKind::SpliceDonor(_) => "splice-donor".to_string(),
        EffectKind::SpliceAcceptor(_) => "splice-acceptor".to_string(),
        EffectKind::ExonicSpliceSite { .. } => "exonic-splice-site".to_string(),
        EffectKind::Silent(_) => "silent".to_string(),
        EffectKind::Substitution(change)
        | EffectKind::ComplexSubstitution(change)
        | EffectKind::Insertion(change)
        | EffectKind::Deletion(change) => describe_span(change, &aa),
        EffectKind::PrematureStop(change) if change.aa_alt == "*" => {
            format!("p.{}{}{stop}", aa(&change.aa_ref), change.aa_pos + 1)
        }
        EffectKind::PrematureStop(change) => describe_span(change, &aa),
        EffectKind::StartLoss(change) => {
            let first = change.aa_ref.get(..1).unwrap_or("M");
            format!("p.{}1?", aa(first))
        }
        EffectKind::StopLoss(change) => format!(
            "p.{}{}{}ext{stop}?",
            aa(&change.aa_ref),
            change.aa_pos + 1,
            aa(&change.aa_alt)
        ),
        EffectKind::FrameShift { change, .. } => {
            format!("p.{}{}fs", aa(&change.aa_ref), change.aa_pos + 1)
        }
        EffectKind::FrameShiftTruncation(change) => {
            format!("p.{}{}fs{stop}", aa(&change.aa_ref), change.aa_pos + 1)
        }
    }
}

/// Insertions are positioned at the residue before the inserted ones, deletions at
/// the residue before the deleted ones.
fn describe_span<F>(change: &AaChange, aa: &F) -> String
where
    F: Fn(&str) -> String,
{
    if change.aa_ref.is_empty() {
        format!("p.{}ins{}", change.aa_pos, aa(&change.aa_alt))
    } else if change.aa_alt.is_empty() {
        format!("p.{}{}del", aa(&change.aa_ref), change.aa_pos)
    } else {
        format!(
            "p.{}{}{}",
            aa(&change.aa_ref),
            change.aa_pos + 1,
            aa(&change.aa_alt)
        )
    }
}

impl EffectKind {
    /// Short description with 1-letter amino acid codes, e.g., `p.V600E`.
    pub fn short_description(&self) -> String {
        describe(self, str::to_string)
    }
}

impl MutationEffect<'_> {
    /// Short description with 1-letter amino acid codes, e.g., `p.V600E`.
    pub fn short_description(&self) -> String {
        self.kind.short_description()
    }
}

impl Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_description())
    }
}

impl Display for ThreeLetter<'_, EffectKind> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", describe(self.inner(), to_aa3))
    }
}

impl Display for MutationEffect<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(variant={}, transcript={}, effect_description={})",
            self.kind.name(),
            self.variant.short_description(),
            self.transcript.name,
            self.kind
        )
    }
}

impl Display for ThreeLetter<'_, MutationEffect<'_>> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ThreeLetter(self.inner().kind()))
    }
}
