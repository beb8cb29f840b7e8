use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One turn of a recorded support conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub agent: String,
    /// Absent for turns that carried no text; such turns still count
    /// toward the agent's message total.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub knowledge_source: Vec<String>,
    #[serde(default)]
    pub turn_rating: Option<String>,
}

/// One corpus entry. The transcript id is the key of the top-level corpus
/// document, not a field of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRecord {
    #[serde(default)]
    pub article_url: Option<String>,
    /// Conversation turns in original order. Never reordered after load.
    #[serde(default)]
    pub content: Vec<ChatMessage>,
    /// Participant id -> free-form sentiment label.
    #[serde(default)]
    pub conversation_rating: HashMap<String, String>,
}

impl TranscriptRecord {
    /// Top-level field names of the record schema, for the debug surface.
    pub fn field_names() -> &'static [&'static str] {
        &["article_url", "content", "conversation_rating"]
    }
}

/// Response body of a transcript analysis. `summary` is never null: a
/// degraded marker string is substituted when summarization fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub article_url: String,
    pub agent_message_counts: BTreeMap<String, u64>,
    pub agent_sentiments: BTreeMap<String, String>,
    pub summary: String,
}

/// Corpus-wide figures served by `/dataset-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_transcripts: usize,
    pub unique_agents_count: usize,
    pub unique_agents: Vec<String>,
    pub sample_transcripts: BTreeMap<String, TranscriptRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_minimal_fields() {
        let msg: ChatMessage = serde_json::from_value(serde_json::json!({
            "agent": "agent_1"
        }))
        .unwrap();
        assert_eq!(msg.agent, "agent_1");
        assert!(msg.message.is_none());
        assert!(msg.sentiment.is_none());
        assert!(msg.knowledge_source.is_empty());
    }

    #[test]
    fn chat_message_full_fields() {
        let msg: ChatMessage = serde_json::from_value(serde_json::json!({
            "agent": "agent_2",
            "message": "hello there",
            "sentiment": "Curious to dive deeper",
            "knowledge_source": ["FS1"],
            "turn_rating": "Good"
        }))
        .unwrap();
        assert_eq!(msg.message.as_deref(), Some("hello there"));
        assert_eq!(msg.turn_rating.as_deref(), Some("Good"));
    }

    #[test]
    fn transcript_record_missing_article_url() {
        let record: TranscriptRecord = serde_json::from_value(serde_json::json!({
            "content": [{"agent": "agent_1", "message": "hi"}],
            "conversation_rating": {"agent_1": "Positive"}
        }))
        .unwrap();
        assert!(record.article_url.is_none());
        assert_eq!(record.content.len(), 1);
        assert_eq!(
            record.conversation_rating.get("agent_1").map(String::as_str),
            Some("Positive")
        );
    }

    #[test]
    fn transcript_record_empty_document() {
        let record: TranscriptRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(record.content.is_empty());
        assert!(record.conversation_rating.is_empty());
    }

    #[test]
    fn content_order_is_preserved() {
        let record: TranscriptRecord = serde_json::from_value(serde_json::json!({
            "content": [
                {"agent": "a", "message": "first"},
                {"agent": "b", "message": "second"},
                {"agent": "a", "message": "third"}
            ]
        }))
        .unwrap();
        let texts: Vec<_> = record
            .content
            .iter()
            .filter_map(|m| m.message.as_deref())
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn analysis_report_serializes_counts_in_key_order() {
        let report = AnalysisReport {
            article_url: "Unknown".into(),
            agent_message_counts: BTreeMap::from([("agent_1".into(), 2), ("agent_2".into(), 1)]),
            agent_sentiments: BTreeMap::from([
                ("agent_1".into(), "Positive".into()),
                ("agent_2".into(), "Unknown".into()),
            ]),
            summary: "short summary".into(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["agent_message_counts"]["agent_1"], 2);
        assert_eq!(json["agent_sentiments"]["agent_2"], "Unknown");
        assert_eq!(json["article_url"], "Unknown");
    }
}
