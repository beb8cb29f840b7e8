use std::collections::BTreeMap;

use chatlens_schema::TranscriptRecord;

/// Default label for an absent article url or sentiment rating. Public
/// contract: the API serves this literal, not null.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptStats {
    pub article_url: String,
    pub agent_message_counts: BTreeMap<String, u64>,
    pub agent_sentiments: BTreeMap<String, String>,
}

/// Compute per-transcript structural statistics. Pure and deterministic:
/// no I/O, no mutation of the record.
///
/// Counts cover every agent observed in `content`, however many there are;
/// agents never observed get no entry. Sum of counts equals the number of
/// messages, including textless ones.
pub fn aggregate(record: &TranscriptRecord) -> TranscriptStats {
    let mut agent_message_counts: BTreeMap<String, u64> = BTreeMap::new();
    for msg in &record.content {
        *agent_message_counts.entry(msg.agent.clone()).or_insert(0) += 1;
    }

    let agent_sentiments = agent_message_counts
        .keys()
        .map(|agent| {
            let sentiment = record
                .conversation_rating
                .get(agent)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            (agent.clone(), sentiment)
        })
        .collect();

    TranscriptStats {
        article_url: record
            .article_url
            .clone()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        agent_message_counts,
        agent_sentiments,
    }
}
