//! Collections of variants called against a single reference build.

use indexmap::IndexSet;
use log::debug;

use super::{Error, Variant};
use crate::static_data::Assembly;

/// Variants loaded from one input, sharing one reference genome build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCollection {
    assembly: Assembly,
    variants: Vec<Variant>,
}

impl VariantCollection {
    /// Construct a collection, inferring the reference build.
    ///
    /// # Args
    ///
    /// * `variants` -- The loaded variants, must not be empty.
    /// * `raw_reference_names` -- Build names as found in the input, e.g., the VCF
    ///   `##reference` header or the MAF `NCBI_Build` column of each record.
    pub fn new<I, S>(variants: Vec<Variant>, raw_reference_names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if variants.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let raw_names: IndexSet<String> = raw_reference_names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if raw_names.is_empty() {
            return Err(Error::MissingReferenceBuild);
        }

        let mut assemblies = IndexSet::new();
        for name in &raw_names {
            assemblies.insert(name.parse::<Assembly>()?);
        }
        if assemblies.len() > 1 {
            return Err(Error::MultipleReferenceBuilds(raw_names.into_iter().collect()));
        }
        let assembly = assemblies[0];
        debug!(
            "loaded {} variants against {} (from {:?})",
            variants.len(),
            assembly,
            raw_names
        );

        Ok(Self { assembly, variants })
    }

    pub fn assembly(&self) -> Assembly {
        self.assembly
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl<'a> IntoIterator for &'a VariantCollection {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
