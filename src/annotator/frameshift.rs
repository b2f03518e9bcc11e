//! Effects of coding edits that shift the reading frame.
//!
//! The codons before the edit are kept, the edited sequence is spliced in, and the
//! sequence from the first disrupted codon onwards is translated up to the first stop
//! codon in the new frame.  Translation may run into the 3' UTR, so the sequence
//! passed in is the coding sequence followed by the 3' UTR.

use log::trace;

use crate::{
    annotator::Error,
    data::interface::Transcript,
    effects::{CodingChange, EffectKind, MutationEffect},
    sequences::{translate, TranslationTable},
    variant::Variant,
};

/// Index of the last codon that an insertion after `cds_offset_before_insertion`
/// leaves intact.
///
/// An insertion after the 3rd base of a codon keeps that codon, an insertion after
/// its 1st or 2nd base disrupts it.  Returns `None` if the start codon is disrupted.
pub fn codon_index_before_insertion(cds_offset_before_insertion: usize) -> Option<usize> {
    if cds_offset_before_insertion % 3 == 2 {
        Some(cds_offset_before_insertion / 3)
    } else {
        (cds_offset_before_insertion / 3).checked_sub(1)
    }
}

/// Frameshift caused by inserting `inserted_nucleotides` after the coding sequence
/// offset `cds_offset_before_insertion`.
pub fn frameshift_coding_insertion_effect<'a>(
    cds_offset_before_insertion: usize,
    inserted_nucleotides: &str,
    sequence_from_start_codon: &str,
    variant: &'a Variant,
    transcript: &'a Transcript,
    table: TranslationTable,
) -> Result<MutationEffect<'a>, Error> {
    if inserted_nucleotides.len() % 3 == 0 {
        return Err(Error::NotFrameShift(variant.to_string()));
    }
    let mutated_codon = codon_index_before_insertion(cds_offset_before_insertion)
        .map(|idx| idx + 1)
        .unwrap_or_default();
    let protein = protein_around(mutated_codon, variant, transcript)?;

    let insertion_point = cds_offset_before_insertion + 1;
    let (codon_prefix, downstream) = sequence_from_start_codon
        .get(mutated_codon * 3..insertion_point)
        .zip(sequence_from_start_codon.get(insertion_point..))
        .ok_or_else(|| {
            Error::EditOutsideCodingSequence(
                variant.to_string(),
                insertion_point,
                insertion_point,
            )
        })?;
    let tail = format!("{codon_prefix}{inserted_nucleotides}{downstream}");

    resolve_frame(mutated_codon, protein, &tail, variant, transcript, table)
}

/// Frameshift caused by replacing `reference` at `cds_offset` by `alternative`.
///
/// For insertions, i.e., an empty `reference`, `cds_offset` is the offset of the base
/// before the inserted bases.
pub fn frameshift_coding_effect<'a>(
    reference: &str,
    alternative: &str,
    cds_offset: usize,
    sequence_from_start_codon: &str,
    variant: &'a Variant,
    transcript: &'a Transcript,
    table: TranslationTable,
) -> Result<MutationEffect<'a>, Error> {
    if reference.is_empty() {
        return frameshift_coding_insertion_effect(
            cds_offset,
            alternative,
            sequence_from_start_codon,
            variant,
            transcript,
            table,
        );
    }
    if reference.len().abs_diff(alternative.len()) % 3 == 0 {
        return Err(Error::NotFrameShift(variant.to_string()));
    }

    let mutated_codon = cds_offset / 3;
    let protein = protein_around(mutated_codon, variant, transcript)?;

    let edit_end = cds_offset + reference.len();
    let (codon_prefix, downstream) = sequence_from_start_codon
        .get(mutated_codon * 3..cds_offset)
        .zip(sequence_from_start_codon.get(edit_end..))
        .ok_or_else(|| {
            Error::EditOutsideCodingSequence(variant.to_string(), cds_offset, edit_end)
        })?;
    let tail = format!("{codon_prefix}{alternative}{downstream}");

    resolve_frame(mutated_codon, protein, &tail, variant, transcript, table)
}

/// Return the protein, checking that `mutated_codon` lies strictly between the start
/// and the stop codon.
fn protein_around<'a>(
    mutated_codon: usize,
    variant: &Variant,
    transcript: &'a Transcript,
) -> Result<&'a str, Error> {
    let protein = transcript
        .protein_sequence()
        .ok_or_else(|| Error::MissingProteinSequence(transcript.id.clone()))?;
    if mutated_codon == 0 || mutated_codon >= protein.len() {
        return Err(Error::FrameShiftOutsideCodingRegion(
            variant.to_string(),
            transcript.id.clone(),
            mutated_codon,
            protein.len(),
        ));
    }
    Ok(protein)
}

/// Translate the sequence from the first disrupted codon onwards in the new frame.
fn resolve_frame<'a>(
    mutated_codon: usize,
    protein: &str,
    tail: &str,
    variant: &'a Variant,
    transcript: &'a Transcript,
    table: TranslationTable,
) -> Result<MutationEffect<'a>, Error> {
    let shifted_sequence = translate(tail, false, true, table)?;
    trace!(
        "frameshift of {} on {} at codon {}: {:?} translates to {:?}",
        variant,
        transcript.id,
        mutated_codon,
        tail,
        shifted_sequence
    );

    let aa_ref = protein
        .get(mutated_codon - 1..mutated_codon)
        .ok_or_else(|| {
            Error::FrameShiftOutsideCodingRegion(
                variant.to_string(),
                transcript.id.clone(),
                mutated_codon,
                protein.len(),
            )
        })?
        .to_string();
    let change = CodingChange {
        aa_pos: mutated_codon,
        aa_ref,
    };

    let kind = if shifted_sequence.is_empty() {
        EffectKind::FrameShiftTruncation(change)
    } else {
        EffectKind::FrameShift {
            change,
            shifted_sequence,
        }
    };
    Ok(MutationEffect::new(variant, transcript, kind))
}
