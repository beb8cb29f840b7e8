use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use chatlens_schema::{DatasetSummary, TranscriptRecord};
use chrono::{DateTime, Utc};

/// Read-only index over the transcript corpus, built once at startup.
///
/// A corpus that fails to read or parse yields an empty index with the
/// failure recorded in `load_error`, so the process keeps serving and the
/// condition stays observable through the health surface.
pub struct DatasetIndex {
    transcripts: HashMap<String, TranscriptRecord>,
    /// Transcript ids in sorted order, for deterministic debug output.
    ids: Vec<String>,
    load_error: Option<String>,
    loaded_at: DateTime<Utc>,
}

impl DatasetIndex {
    /// Load the corpus from a JSON document keyed by transcript id.
    /// Never fails: any error degrades to an empty index.
    pub fn load(path: &Path) -> Self {
        match read_corpus(path) {
            Ok(transcripts) => {
                tracing::info!(
                    path = %path.display(),
                    transcripts = transcripts.len(),
                    "dataset loaded"
                );
                Self::from_transcripts(transcripts)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "dataset load failed");
                Self {
                    transcripts: HashMap::new(),
                    ids: Vec::new(),
                    load_error: Some(format!("{e:#}")),
                    loaded_at: Utc::now(),
                }
            }
        }
    }

    /// Build an index from already-parsed records. Test seam and the
    /// success path of `load`.
    pub fn from_transcripts(transcripts: HashMap<String, TranscriptRecord>) -> Self {
        let mut ids: Vec<String> = transcripts.keys().cloned().collect();
        ids.sort();
        Self {
            transcripts,
            ids,
            load_error: None,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::from_transcripts(HashMap::new())
    }

    pub fn lookup(&self, id: &str) -> Option<&TranscriptRecord> {
        self.transcripts.get(id)
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// First `n` transcript ids in sorted order.
    pub fn first_ids(&self, n: usize) -> Vec<String> {
        self.ids.iter().take(n).cloned().collect()
    }

    /// Distinct agent identifiers observed across the whole corpus.
    pub fn unique_agents(&self) -> Vec<String> {
        let agents: BTreeSet<&str> = self
            .transcripts
            .values()
            .flat_map(|record| record.content.iter())
            .map(|msg| msg.agent.as_str())
            .collect();
        agents.into_iter().map(String::from).collect()
    }

    /// First `n` records keyed by id, in sorted id order.
    pub fn samples(&self, n: usize) -> BTreeMap<String, TranscriptRecord> {
        self.ids
            .iter()
            .take(n)
            .filter_map(|id| {
                self.transcripts
                    .get(id)
                    .map(|record| (id.clone(), record.clone()))
            })
            .collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let unique_agents = self.unique_agents();
        DatasetSummary {
            total_transcripts: self.len(),
            unique_agents_count: unique_agents.len(),
            unique_agents,
            sample_transcripts: self.samples(2),
        }
    }
}

fn read_corpus(path: &Path) -> Result<HashMap<String, TranscriptRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset file: {}", path.display()))
}
