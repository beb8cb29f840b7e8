use std::sync::Arc;

use chatlens_schema::AnalysisReport;
use thiserror::Error;
use uuid::Uuid;

use crate::aggregate::aggregate;
use crate::dataset::DatasetIndex;
use crate::render::render_conversation;
use crate::summarize::Summarizer;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("transcript {transcript_id} not found")]
    TranscriptNotFound { transcript_id: String },
}

/// Per-request control flow: lookup, aggregate, render, summarize,
/// assemble. Only the lookup can fail; the summarizer call is the sole
/// await point.
pub struct Analyzer {
    index: Arc<DatasetIndex>,
    summarizer: Summarizer,
}

impl Analyzer {
    pub fn new(index: Arc<DatasetIndex>, summarizer: Summarizer) -> Self {
        Self { index, summarizer }
    }

    pub async fn analyze(&self, transcript_id: &str) -> Result<AnalysisReport, AnalyzeError> {
        let trace_id = Uuid::new_v4();

        let record = self.index.lookup(transcript_id).ok_or_else(|| {
            tracing::debug!(%trace_id, transcript_id, "transcript not found");
            AnalyzeError::TranscriptNotFound {
                transcript_id: transcript_id.to_string(),
            }
        })?;

        let stats = aggregate(record);
        let conversation = render_conversation(&record.content);

        let summary = self.summarizer.summarize(&conversation).await;
        tracing::info!(
            %trace_id,
            transcript_id,
            messages = record.content.len(),
            agents = stats.agent_message_counts.len(),
            degraded = summary.is_degraded(),
            "transcript analyzed"
        );

        Ok(AnalysisReport {
            article_url: stats.article_url,
            agent_message_counts: stats.agent_message_counts,
            agent_sentiments: stats.agent_sentiments,
            summary: summary.into_text(),
        })
    }
}
