//! Prediction of the effect of variants on transcripts.
//!
//! The `EffectPredictor` locates a variant in the structure of a transcript (UTR,
//! intron, splice site, or coding exon) and hands coding edits to the in-frame or the
//! frameshift code path.

pub mod error;
pub mod frameshift;
pub mod in_frame;

use log::{debug, warn};

pub use crate::annotator::error::Error;
use crate::{
    data::interface::{Provider, Strand, Transcript},
    effects::{AaChange, EffectCollection, EffectKind, IntronLocation, MutationEffect},
    sequences::{revcomp, TranslationTable},
    variant::Variant,
};

/// Configuration for the `EffectPredictor`.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// Number of intron bases after an exon forming the splice donor site.
    pub splice_donor_bases: u64,
    /// Number of intron bases before an exon forming the splice acceptor site.
    pub splice_acceptor_bases: u64,
    /// Intron bases within this distance of an exon are in the splice region.
    pub intronic_splice_window: u64,
    /// Number of exon bases before an intron in the splice region.
    pub exonic_splice_bases_before_intron: u64,
    /// Number of exon bases after an intron in the splice region.
    pub exonic_splice_bases_after_intron: u64,
    pub translation_table: TranslationTable,
    /// Fail instead of warning if the reference allele does not match the transcript.
    pub strict_reference_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splice_donor_bases: 2,
            splice_acceptor_bases: 2,
            intronic_splice_window: 6,
            exonic_splice_bases_before_intron: 3,
            exonic_splice_bases_after_intron: 1,
            translation_table: TranslationTable::Standard,
            strict_reference_check: false,
        }
    }
}

/// Where the bases touched by a variant are located within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// Between exons `exon_index` and `exon_index + 1` (transcript order), with the
    /// distances to both.
    Intron {
        exon_index: usize,
        upstream_distance: u64,
        downstream_distance: u64,
    },
    /// Crosses the 3' end of the exon into the following intron.
    AcrossDonor { exon_index: usize },
    /// Crosses the 5' end of the exon into the preceding intron.
    AcrossAcceptor { exon_index: usize },
    Exon { exon_index: usize },
}

/// Predicts `MutationEffect`s of variants on transcripts.
#[derive(Debug, Default, Clone)]
pub struct EffectPredictor {
    config: Config,
}

impl EffectPredictor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Predict the effect of `variant` on `transcript`.
    ///
    /// Variants that do not overlap the transcript are rejected, as are transcripts
    /// failing `Transcript::validate`.
    pub fn predict<'a>(
        &self,
        variant: &'a Variant,
        transcript: &'a Transcript,
    ) -> Result<MutationEffect<'a>, Error> {
        transcript.validate()?;
        if variant.contig() != transcript.contig {
            return Err(Error::ContigMismatch(
                variant.to_string(),
                transcript.id.clone(),
                transcript.contig.clone(),
            ));
        }
        if !transcript.overlaps(variant.contig(), variant.start(), variant.end()) {
            return Err(Error::VariantOutsideTranscript(
                variant.to_string(),
                transcript.id.clone(),
            ));
        }

        let effect = |kind: EffectKind| -> Result<MutationEffect<'a>, Error> {
            Ok(MutationEffect::new(variant, transcript, kind))
        };
        if !transcript.is_protein_coding() {
            return effect(EffectKind::NoncodingTranscript);
        }
        if !transcript.complete {
            return effect(EffectKind::IncompleteTranscript);
        }

        // insertions touch the bases on both sides
        let lo = variant.start().max(transcript.start());
        let hi = if variant.is_insertion() {
            variant.start() + 1
        } else {
            variant.end()
        }
        .min(transcript.end());

        let location = locate(transcript, lo, hi).ok_or_else(|| {
            Error::VariantOutsideTranscript(variant.to_string(), transcript.id.clone())
        })?;
        debug!("{} is located at {:?} of {}", variant, location, transcript.id);

        match location {
            Location::Intron {
                exon_index,
                upstream_distance,
                downstream_distance,
            } => effect(self.intronic_kind(exon_index, upstream_distance, downstream_distance)),
            Location::AcrossDonor { exon_index } => effect(EffectKind::SpliceDonor(IntronLocation {
                exon_index,
                distance_to_exon: 1,
            })),
            Location::AcrossAcceptor { exon_index } => {
                effect(EffectKind::SpliceAcceptor(IntronLocation {
                    exon_index,
                    distance_to_exon: 1,
                }))
            }
            Location::Exon { exon_index } => {
                self.exonic_effect(variant, transcript, exon_index, lo, hi)
            }
        }
    }

    /// Predict the effects of `variant` on all transcripts overlapping it.
    pub fn predict_all<'a>(
        &self,
        variant: &'a Variant,
        provider: &'a dyn Provider,
    ) -> Result<EffectCollection<'a>, Error> {
        provider
            .get_transcripts_for_region(variant.contig(), variant.start(), variant.end())
            .into_iter()
            .map(|transcript| self.predict(variant, transcript))
            .collect()
    }

    /// Predict the effects of many variants on one transcript, in input order.
    pub fn predict_batch<'a>(
        &self,
        variants: &'a [Variant],
        transcript: &'a Transcript,
    ) -> Vec<Result<MutationEffect<'a>, Error>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            variants
                .par_iter()
                .map(|variant| self.predict(variant, transcript))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            variants
                .iter()
                .map(|variant| self.predict(variant, transcript))
                .collect()
        }
    }

    fn intronic_kind(
        &self,
        exon_index: usize,
        upstream_distance: u64,
        downstream_distance: u64,
    ) -> EffectKind {
        if upstream_distance <= self.config.splice_donor_bases {
            return EffectKind::SpliceDonor(IntronLocation {
                exon_index,
                distance_to_exon: upstream_distance,
            });
        }
        if downstream_distance <= self.config.splice_acceptor_bases {
            return EffectKind::SpliceAcceptor(IntronLocation {
                exon_index: exon_index + 1,
                distance_to_exon: downstream_distance,
            });
        }

        let nearest = if upstream_distance <= downstream_distance {
            IntronLocation {
                exon_index,
                distance_to_exon: upstream_distance,
            }
        } else {
            IntronLocation {
                exon_index: exon_index + 1,
                distance_to_exon: downstream_distance,
            }
        };
        if nearest.distance_to_exon <= self.config.intronic_splice_window {
            EffectKind::IntronicSpliceSite(nearest)
        } else {
            EffectKind::Intronic(nearest)
        }
    }

    /// Effect of a variant whose bases `lo..=hi` all lie in exon `exon_index`.
    fn exonic_effect<'a>(
        &self,
        variant: &'a Variant,
        transcript: &'a Transcript,
        exon_index: usize,
        lo: u64,
        hi: u64,
    ) -> Result<MutationEffect<'a>, Error> {
        let effect = |kind: EffectKind| -> Result<MutationEffect<'a>, Error> {
            Ok(MutationEffect::new(variant, transcript, kind))
        };
        let (cds_start, cds_end) = transcript
            .cds_start_offset
            .zip(transcript.cds_end_offset())
            .ok_or_else(|| Error::MissingCodingSequence(transcript.id.clone()))?;
        let offset = |pos| {
            transcript.spliced_offset(pos).ok_or_else(|| {
                Error::VariantOutsideTranscript(variant.to_string(), transcript.id.clone())
            })
        };

        // Bases of the edit are `first..=last` in transcript order, for insertions the
        // inserted bases go right before `first` and `last` is unused.
        let (first, last) = if variant.is_insertion() {
            let first = match transcript.strand {
                Strand::Plus => offset(variant.start())? + 1,
                Strand::Minus => offset(variant.start())?,
            };
            if first <= cds_start {
                return effect(EffectKind::FivePrimeUtr);
            }
            if first > cds_end {
                return effect(EffectKind::ThreePrimeUtr);
            }
            (first, first)
        } else {
            let (a, b) = (offset(lo)?, offset(hi)?);
            let (first, last) = (a.min(b), a.max(b));
            if last < cds_start {
                return effect(EffectKind::FivePrimeUtr);
            }
            if first > cds_end {
                return effect(EffectKind::ThreePrimeUtr);
            }
            (first, last)
        };

        if self.in_exonic_splice_region(transcript, exon_index, lo, hi) {
            return effect(EffectKind::ExonicSpliceSite { exon_index });
        }

        let protein = transcript
            .protein_sequence()
            .ok_or_else(|| Error::MissingProteinSequence(transcript.id.clone()))?;
        if first < cds_start {
            return effect(start_loss(protein));
        }
        if last > cds_end {
            return effect(stop_loss(protein));
        }

        self.coding_effect(variant, transcript, protein, first - cds_start)
    }

    /// Whether exon bases within `lo..=hi` are close to an intron.
    fn in_exonic_splice_region(
        &self,
        transcript: &Transcript,
        exon_index: usize,
        lo: u64,
        hi: u64,
    ) -> bool {
        let Some(exon) = transcript.exons.get(exon_index) else {
            return false;
        };
        // positions within the exon in transcript order
        let (w_lo, w_hi) = match transcript.strand {
            Strand::Plus => (lo - exon.start, hi - exon.start),
            Strand::Minus => (exon.end - hi, exon.end - lo),
        };
        let intron_before = exon_index > 0;
        let intron_after = exon_index + 1 < transcript.exons.len();

        (intron_before && w_lo < self.config.exonic_splice_bases_after_intron)
            || (intron_after
                && w_hi + self.config.exonic_splice_bases_before_intron >= exon.len())
    }

    /// Effect of an edit at `cds_offset` (for insertions the offset of the first base
    /// after the inserted ones).
    fn coding_effect<'a>(
        &self,
        variant: &'a Variant,
        transcript: &'a Transcript,
        protein: &str,
        cds_offset: usize,
    ) -> Result<MutationEffect<'a>, Error> {
        let cds = &transcript.coding_sequence;
        if cds.len() % 3 != 0 {
            return Err(Error::IncompleteCodons(transcript.id.clone(), cds.len()));
        }

        let (reference, alternative) = match transcript.strand {
            Strand::Plus => (
                variant.reference().to_string(),
                variant.alternative().to_string(),
            ),
            Strand::Minus => (revcomp(variant.reference()), revcomp(variant.alternative())),
        };
        self.check_reference(variant, transcript, &reference, cds_offset)?;

        let table = self.config.translation_table;
        let frame_shift = reference.len().abs_diff(alternative.len()) % 3 != 0;
        if !frame_shift {
            // insertions are addressed by the base before
            let cds_offset = if reference.is_empty() {
                cds_offset - 1
            } else {
                cds_offset
            };
            return in_frame::in_frame_coding_effect(
                &reference,
                &alternative,
                cds_offset,
                cds,
                variant,
                transcript,
                table,
            );
        }

        // frameshifts disrupting the start or the stop codon have no predictable protein
        let mutated_codon = cds_offset / 3;
        if mutated_codon == 0 {
            return Ok(MutationEffect::new(variant, transcript, start_loss(protein)));
        }
        if mutated_codon >= protein.len() {
            return Ok(MutationEffect::new(variant, transcript, stop_loss(protein)));
        }

        let sequence_from_start_codon = format!("{cds}{}", transcript.three_prime_utr_sequence);
        let cds_offset = if reference.is_empty() {
            cds_offset - 1
        } else {
            cds_offset
        };
        frameshift::frameshift_coding_effect(
            &reference,
            &alternative,
            cds_offset,
            &sequence_from_start_codon,
            variant,
            transcript,
            table,
        )
    }

    fn check_reference(
        &self,
        variant: &Variant,
        transcript: &Transcript,
        reference: &str,
        cds_offset: usize,
    ) -> Result<(), Error> {
        let found = transcript
            .coding_sequence
            .get(cds_offset..cds_offset + reference.len())
            .unwrap_or_default();
        if found.eq_ignore_ascii_case(reference) {
            return Ok(());
        }
        if self.config.strict_reference_check {
            Err(Error::ReferenceMismatch(
                variant.to_string(),
                reference.to_string(),
                found.to_string(),
                transcript.id.clone(),
            ))
        } else {
            warn!(
                "reference allele {} of {} does not match {} in transcript {}",
                reference, variant, found, transcript.id
            );
            Ok(())
        }
    }
}

fn start_loss(protein: &str) -> EffectKind {
    EffectKind::StartLoss(AaChange {
        aa_pos: 0,
        aa_ref: protein.get(..1).unwrap_or_default().to_string(),
        aa_alt: String::new(),
    })
}

fn stop_loss(protein: &str) -> EffectKind {
    EffectKind::StopLoss(AaChange {
        aa_pos: protein.len(),
        aa_ref: "*".to_string(),
        aa_alt: String::new(),
    })
}

/// Locate the genomic positions `lo..=hi` within the exon structure of `transcript`.
///
/// Returns `None` if the positions are outside of the transcript.
fn locate(transcript: &Transcript, lo: u64, hi: u64) -> Option<Location> {
    let exons = &transcript.exons;
    let overlapping = exons
        .iter()
        .enumerate()
        .filter(|(_, exon)| exon.start <= hi && lo <= exon.end)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    if let Some(&exon_index) = overlapping.first() {
        if overlapping.len() > 1 {
            return Some(Location::AcrossDonor { exon_index });
        }
        let exon = &exons[exon_index];
        let (past_three_prime, past_five_prime) = match transcript.strand {
            Strand::Plus => (hi > exon.end, lo < exon.start),
            Strand::Minus => (lo < exon.start, hi > exon.end),
        };
        return Some(if past_three_prime {
            Location::AcrossDonor { exon_index }
        } else if past_five_prime {
            Location::AcrossAcceptor { exon_index }
        } else {
            Location::Exon { exon_index }
        });
    }

    exons.windows(2).enumerate().find_map(|(exon_index, pair)| {
        let (upstream, downstream) = (&pair[0], &pair[1]);
        match transcript.strand {
            Strand::Plus if upstream.end < lo && hi < downstream.start => Some(Location::Intron {
                exon_index,
                upstream_distance: lo - upstream.end,
                downstream_distance: downstream.start - hi,
            }),
            Strand::Minus if downstream.end < lo && hi < upstream.start => Some(Location::Intron {
                exon_index,
                upstream_distance: upstream.start - hi,
                downstream_distance: lo - downstream.end,
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod test {
    use anyhow::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Config, EffectPredictor};
    use crate::{
        annotator::Error as AnnotatorError,
        data::{
            Error as DataError,
            interface::{
                test_helpers::{minus_strand, plus_strand},
                Biotype,
            },
            json::JsonProvider,
        },
        effects::{EffectKind, IntronLocation},
        variant::Variant,
    };

    fn intron(exon_index: usize, distance_to_exon: u64) -> IntronLocation {
        IntronLocation {
            exon_index,
            distance_to_exon,
        }
    }

    #[rstest]
    #[case::substitution(1009, "T", "C", "p.S2P")]
    #[case::silent(1011, "T", "C", "silent")]
    #[case::frameshift(1010, "C", "CGGGG", "p.M2fs")]
    #[case::frameshift_truncation(1011, "T", "TTA", "p.S3fs*")]
    #[case::premature_stop(1107, "G", "T", "p.E8*")]
    #[case::deletion(1103, "GCCA", "G", "p.P6del")]
    #[case::insertion(1106, "A", "AGGC", "p.7insG")]
    #[case::start_loss(1008, "G", "A", "p.M1?")]
    #[case::start_loss_frameshift(1006, "AT", "A", "p.M1?")]
    #[case::start_loss_partial(1004, "GGA", "G", "p.M1?")]
    #[case::stop_loss(1117, "A", "C", "p.*11Sext*?")]
    #[case::insertion_in_stop_codon(1117, "A", "AGGC", "silent")]
    #[case::lysine_in_stop_codon(1117, "A", "AAAA", "silent")]
    #[case::exonic_splice_site_donor(1018, "A", "G", "exonic-splice-site")]
    #[case::exonic_splice_site_acceptor(1101, "C", "T", "exonic-splice-site")]
    #[case::before_exonic_splice_site(1017, "A", "G", "silent")]
    #[case::five_prime_utr(1003, "G", "A", "5' UTR")]
    #[case::three_prime_utr(1125, "A", "G", "3' UTR")]
    #[case::insertion_before_start_codon(1005, "G", "GA", "5' UTR")]
    #[case::insertion_after_stop_codon(1118, "A", "AC", "3' UTR")]
    #[case::donor(1021, "G", "A", "splice-donor")]
    #[case::acceptor(1100, "G", "A", "splice-acceptor")]
    #[case::intronic_splice_site(1024, "G", "A", "intronic-splice-site")]
    #[case::intronic(1050, "G", "A", "intronic")]
    #[case::across_donor(1019, "AAGT", "A", "splice-donor")]
    fn predict_plus_strand(
        #[case] position: u64,
        #[case] reference: &str,
        #[case] alternative: &str,
        #[case] expected: &str,
    ) -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", position, reference, alternative)?;
        let effect = EffectPredictor::default().predict(&variant, &tx)?;

        assert_eq!(effect.short_description(), expected);

        Ok(())
    }

    #[rstest]
    #[case::substitution(2092, "A", "G", "p.S2P")]
    #[case::silent(2090, "A", "G", "silent")]
    #[case::frameshift(2090, "A", "ACCCC", "p.M2fs")]
    #[case::premature_stop(1974, "C", "A", "p.E8*")]
    #[case::stop_loss(1964, "T", "G", "p.*11Sext*?")]
    #[case::exonic_splice_site_donor(2083, "T", "C", "exonic-splice-site")]
    #[case::exonic_splice_site_acceptor(1980, "G", "A", "exonic-splice-site")]
    #[case::five_prime_utr(2098, "G", "A", "5' UTR")]
    #[case::three_prime_utr(1950, "G", "A", "3' UTR")]
    #[case::donor(2080, "G", "A", "splice-donor")]
    #[case::acceptor(1981, "G", "A", "splice-acceptor")]
    #[case::intronic(2030, "G", "A", "intronic")]
    fn predict_minus_strand(
        #[case] position: u64,
        #[case] reference: &str,
        #[case] alternative: &str,
        #[case] expected: &str,
    ) -> Result<(), Error> {
        let tx = minus_strand();
        let variant = Variant::new("1", position, reference, alternative)?;
        let effect = EffectPredictor::default().predict(&variant, &tx)?;

        assert_eq!(effect.short_description(), expected);

        Ok(())
    }

    #[test_log::test]
    fn frameshift_on_both_strands() -> Result<(), Error> {
        let predictor = EffectPredictor::default();
        let (plus, minus) = (plus_strand(), minus_strand());
        let on_plus = Variant::new("1", 1010, "C", "CGGGG")?;
        let on_minus = Variant::new("1", 2090, "A", "ACCCC")?;

        for (variant, tx) in [(&on_plus, &plus), (&on_minus, &minus)] {
            let effect = predictor.predict(variant, tx)?;
            assert_eq!(
                effect.kind().shifted_sequence(),
                Some("SGYSKTARRTLRAQIW")
            );
            assert_eq!(effect.mutant_protein_sequence()?, "MSGYSKTARRTLRAQIW");
        }

        Ok(())
    }

    #[rstest]
    #[case(1021, intron(0, 1), "SpliceDonor")]
    #[case(1022, intron(0, 2), "SpliceDonor")]
    #[case(1023, intron(0, 3), "IntronicSpliceSite")]
    #[case(1026, intron(0, 6), "IntronicSpliceSite")]
    #[case(1027, intron(0, 7), "Intronic")]
    #[case(1050, intron(0, 30), "Intronic")]
    #[case(1070, intron(1, 31), "Intronic")]
    #[case(1095, intron(1, 6), "IntronicSpliceSite")]
    #[case(1099, intron(1, 2), "SpliceAcceptor")]
    #[case(1100, intron(1, 1), "SpliceAcceptor")]
    fn intron_locations(
        #[case] position: u64,
        #[case] location: IntronLocation,
        #[case] name: &str,
    ) -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", position, "G", "A")?;
        let effect = EffectPredictor::default().predict(&variant, &tx)?;

        assert_eq!(effect.kind().name(), name);
        assert_eq!(effect.kind().intron_location(), Some(location));

        Ok(())
    }

    #[test_log::test]
    fn intronic_splice_window_is_configurable() -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", 1026, "G", "A")?;
        let predictor = EffectPredictor::new(Config {
            intronic_splice_window: 3,
            ..Default::default()
        });

        assert_eq!(
            predictor.predict(&variant, &tx)?.into_kind(),
            EffectKind::Intronic(intron(0, 6))
        );

        Ok(())
    }

    #[test_log::test]
    fn transcript_level_effects() -> Result<(), Error> {
        let variant = Variant::new("1", 1009, "T", "C")?;
        let predictor = EffectPredictor::default();

        let mut tx = plus_strand();
        tx.biotype = Biotype::NonCoding;
        tx.complete = false;
        assert_eq!(
            predictor.predict(&variant, &tx)?.into_kind(),
            EffectKind::NoncodingTranscript
        );

        let mut tx = plus_strand();
        tx.complete = false;
        assert_eq!(
            predictor.predict(&variant, &tx)?.into_kind(),
            EffectKind::IncompleteTranscript
        );

        Ok(())
    }

    #[test_log::test]
    fn reference_mismatch() -> Result<(), Error> {
        let tx = plus_strand();
        let variant = Variant::new("1", 1009, "A", "C")?;

        // logged only by default
        let effect = EffectPredictor::default().predict(&variant, &tx)?;
        assert_eq!(effect.short_description(), "p.S2P");

        let strict = EffectPredictor::new(Config {
            strict_reference_check: true,
            ..Default::default()
        });
        assert_eq!(
            strict.predict(&variant, &tx),
            Err(AnnotatorError::ReferenceMismatch(
                variant.to_string(),
                "A".to_string(),
                "T".to_string(),
                "TX1".to_string()
            ))
        );

        Ok(())
    }

    #[test_log::test]
    fn invalid_inputs() -> Result<(), Error> {
        let predictor = EffectPredictor::default();
        let tx = plus_strand();

        let other_contig = Variant::new("2", 1009, "T", "C")?;
        assert!(matches!(
            predictor.predict(&other_contig, &tx),
            Err(AnnotatorError::ContigMismatch(..))
        ));

        let outside = Variant::new("1", 5000, "T", "C")?;
        assert!(matches!(
            predictor.predict(&outside, &tx),
            Err(AnnotatorError::VariantOutsideTranscript(..))
        ));

        let coding = Variant::new("1", 1009, "T", "C")?;
        let mut tx = plus_strand();
        tx.protein_sequence = None;
        assert_eq!(
            predictor.predict(&coding, &tx),
            Err(AnnotatorError::MissingProteinSequence("TX1".to_string()))
        );
        // no protein is needed outside of the coding sequence
        let utr = Variant::new("1", 1003, "G", "A")?;
        assert_eq!(
            predictor.predict(&utr, &tx)?.into_kind(),
            EffectKind::FivePrimeUtr
        );

        let mut tx = plus_strand();
        tx.exons[1].end = 1000;
        assert_eq!(
            predictor.predict(&coding, &tx),
            Err(AnnotatorError::DataError(DataError::InvalidExon(
                "TX1".to_string(),
                "E2".to_string()
            )))
        );

        let mut tx = plus_strand();
        tx.coding_sequence.push('A');
        tx.cds_start_offset = Some(4);
        assert_eq!(
            predictor.predict(&coding, &tx),
            Err(AnnotatorError::IncompleteCodons("TX1".to_string(), 34))
        );

        Ok(())
    }

    #[test_log::test]
    fn predict_twice() -> Result<(), Error> {
        let predictor = EffectPredictor::default();
        let tx = plus_strand();

        for (position, reference, alternative) in [
            (1009, "T", "C"),
            (1010, "C", "CGGGG"),
            (1011, "T", "TTA"),
            (1103, "GCCA", "G"),
        ] {
            let variant = Variant::new("1", position, reference, alternative)?;
            let first = predictor.predict(&variant, &tx)?;
            let second = predictor.predict(&variant, &tx)?;
            assert_eq!(first.short_description(), second.short_description());
            assert_eq!(
                first.mutant_protein_sequence()?,
                second.mutant_protein_sequence()?
            );
            assert_eq!(first, second);
        }

        Ok(())
    }

    #[test_log::test]
    fn frameshifts_are_frameshifts() -> Result<(), Error> {
        let predictor = EffectPredictor::default();
        let tx = plus_strand();

        for (position, reference, alternative) in [
            (1010, "C", "CG"),
            (1010, "C", "CGG"),
            (1012, "A", "AGGGGG"),
            (1103, "GC", "G"),
            (1103, "GCC", "G"),
            (1104, "CCAGA", "C"),
            (1105, "CA", "CAT"),
        ] {
            let variant = Variant::new("1", position, reference, alternative)?;
            let effect = predictor.predict(&variant, &tx)?;
            assert!(
                matches!(
                    effect.kind(),
                    EffectKind::FrameShift { .. } | EffectKind::FrameShiftTruncation(_)
                ),
                "{effect}"
            );
        }

        Ok(())
    }

    #[test_log::test]
    fn predict_all_and_batch() -> Result<(), Error> {
        let provider = JsonProvider::from_transcripts(vec![plus_strand(), minus_strand()])?;
        let predictor = EffectPredictor::default();

        let variant = Variant::new("1", 1009, "T", "C")?;
        let effects = predictor.predict_all(&variant, &provider)?;
        assert_eq!(effects.len(), 1);
        assert_eq!(
            effects.top_priority_effect().map(|e| e.short_description()),
            Some("p.S2P".to_string())
        );

        let intergenic = Variant::new("1", 1500, "T", "C")?;
        assert!(predictor.predict_all(&intergenic, &provider)?.is_empty());

        let variants = vec![
            Variant::new("1", 1009, "T", "C")?,
            Variant::new("1", 1050, "G", "A")?,
            Variant::new("1", 5000, "G", "A")?,
            Variant::new("1", 1107, "G", "T")?,
        ];
        let tx = plus_strand();
        let descriptions = predictor
            .predict_batch(&variants, &tx)
            .into_iter()
            .map(|res| res.map(|e| e.short_description()).unwrap_or_else(|e| e.to_string()))
            .collect::<Vec<_>>();
        insta::assert_snapshot!(descriptions.join("\n"), @r"
        p.S2P
        intronic
        variant chr1 g.5000G>A does not overlap transcript TX1
        p.E8*
        ");

        Ok(())
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
