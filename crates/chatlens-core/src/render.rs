use chatlens_schema::ChatMessage;

/// Flatten a conversation into one `"<agent>: <text>"` line per message
/// with non-empty text, newline-joined, original order.
///
/// Textless messages contribute no line here but still count in the
/// aggregation; the asymmetry is intentional.
pub fn render_conversation(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .filter_map(|msg| {
            let text = msg.message.as_deref()?;
            if text.is_empty() {
                return None;
            }
            Some(format!("{}: {}", msg.agent, text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(agent: &str, text: Option<&str>) -> ChatMessage {
        ChatMessage {
            agent: agent.into(),
            message: text.map(String::from),
            sentiment: None,
            knowledge_source: Vec::new(),
            turn_rating: None,
        }
    }

    #[test]
    fn renders_one_line_per_message_with_text() {
        let rendered = render_conversation(&[
            msg("a", Some("hi")),
            msg("b", Some("hello")),
            msg("a", None),
        ]);
        assert_eq!(rendered, "a: hi\nb: hello");
    }

    #[test]
    fn empty_conversation_renders_empty_string() {
        assert_eq!(render_conversation(&[]), "");
    }

    #[test]
    fn all_textless_messages_render_empty_string() {
        let rendered = render_conversation(&[msg("a", None), msg("b", None)]);
        assert_eq!(rendered, "");
    }

    #[test]
    fn empty_string_text_is_skipped_like_absent_text() {
        let rendered = render_conversation(&[msg("a", Some("")), msg("b", Some("real"))]);
        assert_eq!(rendered, "b: real");
    }

    #[test]
    fn line_count_matches_messages_with_text() {
        let messages = vec![
            msg("a", Some("1")),
            msg("b", None),
            msg("c", Some("3")),
            msg("a", Some("4")),
        ];
        let rendered = render_conversation(&messages);
        let with_text = messages
            .iter()
            .filter(|m| m.message.as_deref().is_some_and(|t| !t.is_empty()))
            .count();
        assert_eq!(rendered.lines().count(), with_text);
    }

    #[test]
    fn order_is_preserved() {
        let rendered = render_conversation(&[
            msg("z", Some("first")),
            msg("a", Some("second")),
            msg("m", Some("third")),
        ]);
        assert_eq!(rendered, "z: first\na: second\nm: third");
    }
}
