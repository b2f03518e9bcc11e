//! Static data about reference genome assemblies.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Reference genome assemblies that variants may be called against.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Assembly {
    Ncbi36,
    Grch37,
    Grch38,
}

/// Names under which the assemblies appear in VCF headers and MAF `NCBI_Build` columns.
///
/// Matching is case insensitive and ignores patch suffixes such as `.p13`.
const ASSEMBLY_ALIASES: &[(Assembly, &[&str])] = &[
    (Assembly::Ncbi36, &["ncbi36", "hg18", "b36", "36", "grch36"]),
    (
        Assembly::Grch37,
        &["grch37", "hg19", "b37", "37", "hs37d5", "human_g1k_v37", "ncbi37"],
    ),
    (Assembly::Grch38, &["grch38", "hg38", "b38", "38", "hs38dh", "ncbi38"]),
];

impl Assembly {
    /// Canonical name of the assembly.
    pub fn name(&self) -> &'static str {
        match self {
            Assembly::Ncbi36 => "NCBI36",
            Assembly::Grch37 => "GRCh37",
            Assembly::Grch38 => "GRCh38",
        }
    }

    /// Infer the assembly from a raw reference name.
    ///
    /// Raw names are often paths to FASTA files (`/data/ref/hg19.fasta`), so the
    /// file stem is considered as well.
    pub fn infer(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        let base = raw
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&raw)
            .trim_end_matches(".gz")
            .trim_end_matches(".fasta")
            .trim_end_matches(".fa");
        // drop patch level, e.g. `grch37.p13`
        let base = base.split(".p").next().unwrap_or(base);

        ASSEMBLY_ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&base))
            .map(|(assembly, _)| *assembly)
    }
}

impl Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Assembly {
    type Err = crate::variant::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::infer(s).ok_or_else(|| crate::variant::Error::UnknownReferenceBuild(s.to_string()))
    }
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
