//! Collections of effects of one variant on several transcripts.

use crate::effects::{EffectKind, MutationEffect};

/// Effects of a variant on the transcripts it overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectCollection<'a> {
    effects: Vec<MutationEffect<'a>>,
}

impl<'a> EffectCollection<'a> {
    pub fn new(effects: Vec<MutationEffect<'a>>) -> Self {
        Self { effects }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MutationEffect<'a>> {
        self.effects.iter()
    }

    /// The most severe effect.
    ///
    /// Ties are broken in favor of protein coding transcripts, then of longer coding
    /// sequences, then of the transcript listed first.
    pub fn top_priority_effect(&self) -> Option<&MutationEffect<'a>> {
        self.effects.iter().rev().max_by_key(|effect| {
            let tx = effect.transcript();
            (
                effect.kind().priority(),
                tx.is_protein_coding(),
                tx.coding_sequence.len(),
            )
        })
    }

    /// Drop silent effects and effects outside of coding sequences.
    pub fn drop_silent_and_noncoding(self) -> Self {
        self.filter(|effect| {
            effect.is_coding() && !matches!(effect.kind(), EffectKind::Silent(_))
        })
    }

    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&MutationEffect<'a>) -> bool,
    {
        Self {
            effects: self
                .effects
                .into_iter()
                .filter(|effect| predicate(effect))
                .collect(),
        }
    }

    pub fn into_inner(self) -> Vec<MutationEffect<'a>> {
        self.effects
    }
}

impl<'a> FromIterator<MutationEffect<'a>> for EffectCollection<'a> {
    fn from_iter<I: IntoIterator<Item = MutationEffect<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, 'b> IntoIterator for &'b EffectCollection<'a> {
    type Item = &'b MutationEffect<'a>;
    type IntoIter = std::slice::Iter<'b, MutationEffect<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use anyhow::Error;
    use pretty_assertions::assert_eq;

    use super::EffectCollection;
    use crate::{
        data::interface::test_helpers::{minus_strand, plus_strand},
        effects::{AaChange, CodingChange, EffectKind, MutationEffect},
        variant::Variant,
    };

    #[test]
    fn top_priority() -> Result<(), Error> {
        let tx1 = plus_strand();
        let tx2 = minus_strand();
        let variant = Variant::new("1", 1009, "T", "C")?;

        let collection: EffectCollection = [
            MutationEffect::new(
                &variant,
                &tx1,
                EffectKind::Silent(CodingChange {
                    aa_pos: 1,
                    aa_ref: "S".to_string(),
                }),
            ),
            MutationEffect::new(
                &variant,
                &tx2,
                EffectKind::Substitution(AaChange {
                    aa_pos: 1,
                    aa_ref: "S".to_string(),
                    aa_alt: "P".to_string(),
                }),
            ),
            MutationEffect::new(&variant, &tx1, EffectKind::ThreePrimeUtr),
        ]
        .into_iter()
        .collect();

        assert_eq!(collection.len(), 3);
        let top = collection.top_priority_effect().map(|e| e.short_description());
        assert_eq!(top.as_deref(), Some("p.S2P"));

        let coding = collection.drop_silent_and_noncoding();
        assert_eq!(coding.len(), 1);
        assert_eq!(coding.iter().next().map(|e| e.transcript().id.as_str()), Some("TX2"));

        Ok(())
    }

    #[test]
    fn ties_prefer_first_listed() -> Result<(), Error> {
        let tx1 = plus_strand();
        let tx2 = minus_strand();
        let variant = Variant::new("1", 1009, "T", "C")?;

        let collection = EffectCollection::new(vec![
            MutationEffect::new(&variant, &tx2, EffectKind::FivePrimeUtr),
            MutationEffect::new(&variant, &tx1, EffectKind::FivePrimeUtr),
        ]);
        let top = collection.top_priority_effect().map(|e| e.transcript().id.as_str());
        assert_eq!(top, Some("TX2"));

        assert!(EffectCollection::default().top_priority_effect().is_none());

        Ok(())
    }
}
