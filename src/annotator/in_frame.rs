//! Effects of coding edits that keep the reading frame.

use log::trace;

use crate::{
    annotator::Error,
    data::interface::Transcript,
    effects::{AaChange, CodingChange, EffectKind, MutationEffect},
    sequences::{translate, trim_common_prefixes, trim_common_suffixes, TranslationTable},
    variant::Variant,
};

/// Effect of replacing `reference` at `cds_offset` by `alternative` where the length
/// difference is a multiple of 3.
///
/// For insertions, i.e., an empty `reference`, `cds_offset` is the offset of the base
/// before the inserted bases.  The codons touched by the edit are translated before
/// and after the edit and the amino acids shared at either end are trimmed.
pub fn in_frame_coding_effect<'a>(
    reference: &str,
    alternative: &str,
    cds_offset: usize,
    coding_sequence: &str,
    variant: &'a Variant,
    transcript: &'a Transcript,
    table: TranslationTable,
) -> Result<MutationEffect<'a>, Error> {
    if reference.is_empty() && alternative.is_empty() {
        return Err(Error::EmptyEdit(variant.to_string()));
    }
    if reference.len().abs_diff(alternative.len()) % 3 != 0 {
        return Err(Error::NotInFrame(variant.to_string()));
    }

    let edit_start = if reference.is_empty() {
        cds_offset + 1
    } else {
        cds_offset
    };
    let edit_end = edit_start + reference.len();
    let first_codon = edit_start / 3;
    let codons_end = edit_end.div_ceil(3) * 3;

    let outside = || Error::EditOutsideCodingSequence(variant.to_string(), edit_start, edit_end);
    if edit_start >= coding_sequence.len() {
        return Err(outside());
    }
    let ref_codons = coding_sequence
        .get(first_codon * 3..codons_end)
        .ok_or_else(outside)?;
    let (before, after) = coding_sequence
        .get(first_codon * 3..edit_start)
        .zip(coding_sequence.get(edit_end..codons_end))
        .ok_or_else(outside)?;
    let alt_codons = format!("{before}{alternative}{after}");

    let ref_aas = translate(ref_codons, false, false, table)?;
    let alt_aas = translate(&alt_codons, false, false, table)?;
    trace!(
        "in-frame edit of {} on {}: {} ({}) -> {} ({})",
        variant,
        transcript.id,
        ref_codons,
        ref_aas,
        alt_codons,
        alt_aas
    );

    let (prefix_len, aa_ref, aa_alt) = trim_common_prefixes(&ref_aas, &alt_aas);
    let (_, aa_ref, aa_alt) = trim_common_suffixes(aa_ref, aa_alt);
    let aa_pos = first_codon + prefix_len;
    // nothing behind a stop codon kept in place is translated
    let stop_kept = ref_aas
        .get(..prefix_len)
        .is_some_and(|prefix| prefix.contains('*'));

    let change = |aa_ref: &str, aa_alt: &str| AaChange {
        aa_pos,
        aa_ref: aa_ref.to_string(),
        aa_alt: aa_alt.to_string(),
    };
    let kind = if stop_kept || (aa_ref.is_empty() && aa_alt.is_empty()) {
        EffectKind::Silent(CodingChange {
            aa_pos: first_codon,
            aa_ref: ref_aas.clone(),
        })
    } else if aa_pos == 0 {
        EffectKind::StartLoss(change(aa_ref, aa_alt))
    } else if aa_ref.contains('*') {
        EffectKind::StopLoss(change(aa_ref, aa_alt))
    } else if let Some(stop) = aa_alt.find('*') {
        // residues behind the new stop are never translated
        let aa_alt = &aa_alt[..=stop];
        let aa_ref = if aa_ref.is_empty() {
            transcript
                .protein_sequence()
                .and_then(|protein| protein.get(aa_pos..aa_pos + 1))
                .ok_or_else(|| Error::MissingProteinSequence(transcript.id.clone()))?
        } else {
            aa_ref
        };
        EffectKind::PrematureStop(change(aa_ref, aa_alt))
    } else if aa_ref.is_empty() {
        EffectKind::Insertion(change(aa_ref, aa_alt))
    } else if aa_alt.is_empty() {
        EffectKind::Deletion(change(aa_ref, aa_alt))
    } else if aa_ref.len() == 1 && aa_alt.len() == 1 {
        EffectKind::Substitution(change(aa_ref, aa_alt))
    } else {
        EffectKind::ComplexSubstitution(change(aa_ref, aa_alt))
    };

    Ok(MutationEffect::new(variant, transcript, kind))
}
