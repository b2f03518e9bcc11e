//! Access to transcripts stored in local JSON files.
//!
//! The file contains a single object with a `transcripts` array of
//! `interface::Transcript` records and may be gzip compressed.

use std::{collections::HashMap, io::Read, path::Path, time::Instant};

use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{
    error::Error,
    interface::{Provider, Transcript},
};

/// Top-level JSON container.
#[derive(Debug, Serialize, Deserialize)]
pub struct Container {
    pub transcripts: Vec<Transcript>,
}

/// Type alias for interval trees, the payload is the index into the transcripts map.
type IntervalTree = ArrayBackedIntervalTree<u64, usize>;

/// Transcript provider backed by JSON data held in memory.
pub struct JsonProvider {
    /// Transcripts by ID, in file order.
    transcripts: IndexMap<String, Transcript>,
    /// Interval tree for each contig.
    interval_trees: HashMap<String, IntervalTree>,
}

impl JsonProvider {
    /// Load transcripts from a JSON file; paths ending in `.gz` are decompressed.
    pub fn from_path<P: AsRef<Path>>(json_path: P) -> Result<Self, Error> {
        let json_path = json_path.as_ref();
        let path_str = json_path.display().to_string();
        log::debug!("Loading transcripts from {:?}", json_path);
        let start = Instant::now();

        let file = std::io::BufReader::new(
            std::fs::File::open(json_path).map_err(|_e| Error::JsonOpen(path_str.clone()))?,
        );
        let container: Container = if path_str.ends_with(".gz") {
            serde_json::from_reader(flate2::bufread::GzDecoder::new(file))
        } else {
            serde_json::from_reader(file)
        }
        .map_err(|e| Error::JsonParse(format!("{path_str}: {e}")))?;

        log::debug!(
            "loading / deserializing {} transcripts took {:?}",
            container.transcripts.len(),
            start.elapsed()
        );
        Self::from_transcripts(container.transcripts)
    }

    /// Load transcripts from a reader yielding uncompressed JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let container: Container =
            serde_json::from_reader(reader).map_err(|e| Error::JsonParse(e.to_string()))?;
        Self::from_transcripts(container.transcripts)
    }

    /// Build the provider from already constructed transcripts.
    pub fn from_transcripts(transcripts: Vec<Transcript>) -> Result<Self, Error> {
        let mut by_id = IndexMap::with_capacity(transcripts.len());
        for tx in transcripts {
            tx.validate()?;
            if by_id.contains_key(&tx.id) {
                return Err(Error::DuplicateTranscript(tx.id));
            }
            by_id.insert(tx.id.clone(), tx);
        }
        let interval_trees = Self::build_interval_trees(&by_id);

        Ok(Self {
            transcripts: by_id,
            interval_trees,
        })
    }

    fn build_interval_trees(
        transcripts: &IndexMap<String, Transcript>,
    ) -> HashMap<String, IntervalTree> {
        let mut result: HashMap<String, IntervalTree> = HashMap::new();
        for (idx, tx) in transcripts.values().enumerate() {
            // half-open 0-based interval
            result
                .entry(tx.contig.clone())
                .or_insert_with(IntervalTree::new)
                .insert((tx.start() - 1)..tx.end(), idx);
        }
        for tree in result.values_mut() {
            tree.index();
        }
        result
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    pub fn transcripts(&self) -> impl Iterator<Item = &Transcript> {
        self.transcripts.values()
    }
}

impl Provider for JsonProvider {
    fn get_transcript(&self, tx_id: &str) -> Result<&Transcript, Error> {
        self.transcripts
            .get(tx_id)
            .ok_or_else(|| Error::NoTranscriptFound(tx_id.to_string()))
    }

    fn get_transcripts_for_region(&self, contig: &str, start: u64, end: u64) -> Vec<&Transcript> {
        let Some(tree) = self.interval_trees.get(contig) else {
            return Vec::new();
        };
        let mut idxs = tree
            .find((start.saturating_sub(1))..end)
            .into_iter()
            .map(|entry| *entry.data())
            .collect::<Vec<_>>();
        idxs.sort_unstable();
        idxs.into_iter()
            .filter_map(|idx| self.transcripts.get_index(idx).map(|(_, tx)| tx))
            .collect()
    }
}
