//! Predict effects for the case table in `tests/data/effects.tsv`.

use std::path::Path;

use anyhow::Error;
use pretty_assertions::assert_eq;
use test_log::test;

use tx_effects::{
    annotator::EffectPredictor,
    data::{interface::Provider, json::JsonProvider},
    effects::ThreeLetter,
    variant::{Variant, VariantCollection},
};

#[derive(Debug, serde::Deserialize)]
struct Record {
    contig: String,
    position: u64,
    reference: String,
    alternative: String,
    transcript: String,
    effect: String,
    description: String,
    mutant_protein: Option<String>,
}

fn load_records(path: &Path) -> Result<Vec<Record>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .comment(Some(b'#'))
        .from_path(path)?;
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[test]
fn case_table() -> Result<(), Error> {
    let provider = JsonProvider::from_path("tests/data/transcripts.json")?;
    let predictor = EffectPredictor::default();
    let records = load_records(Path::new("tests/data/effects.tsv"))?;
    assert!(!records.is_empty());

    for record in &records {
        let variant = Variant::new(
            &record.contig,
            record.position,
            &record.reference,
            &record.alternative,
        )?;
        let tx = provider.get_transcript(&record.transcript)?;
        let effect = predictor.predict(&variant, tx)?;

        assert_eq!(effect.kind().name(), record.effect, "{record:?}");
        assert_eq!(effect.short_description(), record.description, "{record:?}");
        assert_eq!(
            effect.mutant_protein_sequence().ok().map(str::to_string),
            record.mutant_protein,
            "{record:?}"
        );
    }

    Ok(())
}

#[test]
fn gzip_and_plain_json_agree() -> Result<(), Error> {
    let plain = JsonProvider::from_path("tests/data/transcripts.json")?;
    let gzipped = JsonProvider::from_path("tests/data/transcripts.json.gz")?;

    assert_eq!(plain.len(), 4);
    assert_eq!(
        plain.transcripts().collect::<Vec<_>>(),
        gzipped.transcripts().collect::<Vec<_>>()
    );

    Ok(())
}

#[test]
fn collection_of_variants() -> Result<(), Error> {
    let provider = JsonProvider::from_path("tests/data/transcripts.json.gz")?;
    let predictor = EffectPredictor::default();
    let collection = VariantCollection::new(
        vec![
            Variant::new("chr1", 1009, "T", "C")?,
            Variant::from_tumor_alleles("chr1", 2090, "-", "-", "CCCC")?,
            Variant::new("chr2", 600, "G", "A")?,
            Variant::new("chr1", 1500, "G", "A")?,
        ],
        ["GRCh37", "hg19", "GRCh37"],
    )?;

    let mut lines = Vec::new();
    for variant in &collection {
        let effects = predictor.predict_all(variant, &provider)?;
        let top = effects
            .top_priority_effect()
            .map(|effect| {
                format!(
                    "{} {}",
                    effect.transcript().id,
                    ThreeLetter(effect.kind())
                )
            })
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("{variant} | {} | {top}", effects.len()));
    }

    insta::assert_snapshot!(lines.join("\n"), @r"
    chr1 g.1009T>C | 1 | TX1 p.Ser2Pro
    chr1 g.2090_2091insCCCC | 1 | TX2 p.Met2fs
    chr2 g.600G>A | 2 | TX3 non-coding-transcript
    chr1 g.1500G>A | 0 | -
    ");

    Ok(())
}
