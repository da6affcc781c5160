//! Reply extraction.
//!
//! Upstream generation APIs do not agree on where the generated text lives.
//! The extractor checks the known shapes in a fixed order and takes the first
//! one present, falling back to a truncated dump of the whole document.

use serde_json::Value;

use crate::utils::{is_truthy, render_text};

/// Reply sent when nothing usable came back.
pub const DEFAULT_REPLY: &str = "Sorry, I couldn't think of a response right now.";

/// Upper bound, in characters, on the raw-document fallback.
pub const FALLBACK_MAX_CHARS: usize = 800;

/// Extract the reply text from an upstream response document.
pub fn extract_reply(data: &Value) -> String {
    let reply = locate_reply(data);
    if reply.is_empty() {
        DEFAULT_REPLY.to_string()
    } else {
        reply
    }
}

fn locate_reply(data: &Value) -> String {
    if let Some(content) = data
        .pointer("/candidates/0/content")
        .filter(|c| is_truthy(c))
    {
        return candidate_text(content);
    }

    if let Some(outputs) = data.get("output").and_then(Value::as_array) {
        return outputs
            .iter()
            .map(output_text)
            .collect::<Vec<_>>()
            .join("\n");
    }

    if let Some(content) = data
        .pointer("/choices/0/message/content")
        .filter(|c| is_truthy(c))
    {
        return render_text(content);
    }

    if let Some(text) = data.get("text").filter(|t| is_truthy(t)) {
        return render_text(text);
    }

    data.to_string().chars().take(FALLBACK_MAX_CHARS).collect()
}

/// Text of a candidate's `content`, either a bare list of parts or the
/// `{ "parts": [...] }` object Gemini returns.
fn candidate_text(content: &Value) -> String {
    match content {
        Value::Array(parts) => parts.iter().map(part_text).collect(),
        Value::Object(map) => map
            .get("parts")
            .and_then(Value::as_array)
            .map(|parts| parts.iter().map(part_text).collect())
            .unwrap_or_default(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

fn part_text(part: &Value) -> String {
    match part.get("text") {
        Some(text) if is_truthy(text) => render_text(text),
        // Bare scalars stand for themselves; objects and arrays without text are skipped.
        _ => match part {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => render_text(part),
            _ => String::new(),
        },
    }
}

fn output_text(output: &Value) -> String {
    match output.get("content").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|item| match item.get("text") {
                Some(text) if is_truthy(text) => render_text(text),
                _ => String::new(),
            })
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gemini_candidate_parts() {
        let data = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Head to the " }, { "text": "blue door!" }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 40 }
        });

        assert_eq!(extract_reply(&data), "Head to the blue door!");
    }

    #[test]
    fn test_candidate_content_as_part_list() {
        let data = json!({
            "candidates": [{ "content": [{ "text": "Hi " }, "there", { "inline": true }] }]
        });

        assert_eq!(extract_reply(&data), "Hi there");
    }

    #[test]
    fn test_candidate_part_list_renders_scalars() {
        let data = json!({
            "candidates": [{ "content": ["Level ", 5, " ", true, null, ["x"]] }]
        });

        assert_eq!(extract_reply(&data), "Level 5 true");
    }

    #[test]
    fn test_candidate_content_as_string() {
        let data = json!({ "candidates": [{ "content": "plain" }] });
        assert_eq!(extract_reply(&data), "plain");
    }

    #[test]
    fn test_output_entries_joined_by_newline() {
        let data = json!({
            "output": [
                { "content": [{ "text": "line " }, { "text": "one" }] },
                { "other": true },
                { "content": [{ "text": "line two" }, { "image": "x" }] }
            ]
        });

        assert_eq!(extract_reply(&data), "line one\n\nline two");
    }

    #[test]
    fn test_malformed_output_entries_contribute_nothing() {
        let data = json!({
            "output": [null, { "content": "not a list" }, { "content": [{ "text": "hi" }] }]
        });

        assert_eq!(extract_reply(&data), "\n\nhi");
    }

    #[test]
    fn test_openai_style_choices() {
        let data = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Welcome back!" } }]
        });

        assert_eq!(extract_reply(&data), "Welcome back!");
    }

    #[test]
    fn test_top_level_text() {
        assert_eq!(extract_reply(&json!({ "text": "gg" })), "gg");
    }

    #[test]
    fn test_candidates_take_priority_over_text() {
        let data = json!({
            "candidates": [{ "content": { "parts": [{ "text": "from candidate" }] } }],
            "text": "from text"
        });

        assert_eq!(extract_reply(&data), "from candidate");
    }

    #[test]
    fn test_empty_candidate_falls_back_to_default() {
        let data = json!({
            "candidates": [{ "content": { "parts": [] } }],
            "text": "ignored"
        });

        assert_eq!(extract_reply(&data), DEFAULT_REPLY);
    }

    #[test]
    fn test_empty_output_array_falls_back_to_default() {
        assert_eq!(extract_reply(&json!({ "output": [] })), DEFAULT_REPLY);
    }

    #[test]
    fn test_falsy_fields_are_skipped() {
        let data = json!({
            "candidates": [{ "content": null }],
            "choices": [{ "message": { "content": "" } }],
            "text": "last resort"
        });

        assert_eq!(extract_reply(&data), "last resort");
    }

    #[test]
    fn test_unknown_shape_dumps_document() {
        let data = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert_eq!(
            extract_reply(&data),
            r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#
        );
    }

    #[test]
    fn test_document_dump_keeps_upstream_key_order() {
        let data: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(extract_reply(&data), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_document_dump_is_truncated() {
        let data = json!({ "blob": "é".repeat(2000) });
        let reply = extract_reply(&data);

        assert_eq!(reply.chars().count(), FALLBACK_MAX_CHARS);
        assert!(reply.starts_with(r#"{"blob":"éé"#));
    }
}
