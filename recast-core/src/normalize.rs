//! Response normalization: raw model output text in, validated result out.
//!
//! Backends wrap their JSON in prose, markdown fences, or trailing
//! commentary even when asked not to. This module extracts the embedded
//! JSON object, flattens any composite `content` fields to text, and
//! deserializes into the fixed result shapes. Everything here is a pure
//! function over a string: calling it twice on the same input yields
//! identical results.

use serde_json::Value;

use crate::error::RecastError;
use crate::types::{IdeationResult, RepurposeOutcome, RevisionResult};

/// Extract the first JSON-shaped substring from raw model output.
///
/// The heuristic is a greedy bracket match: the slice from the first `{` to
/// the last `}`. Known failure mode: text containing multiple independent
/// JSON objects, or braces inside surrounding prose, produces an over-wide
/// match that then fails to parse. That is acceptable here since the prompt
/// contract asks for exactly one object.
pub fn extract_json_block(raw: &str) -> Result<&str, RecastError> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start <= end => Ok(&raw[start..=end]),
        _ => Err(RecastError::extraction("could not extract structured output")),
    }
}

/// Flatten composite `content` fields (objects and arrays) to their
/// pretty-printed JSON text, both at the top level and inside
/// `repurposing_ideas` entries.
///
/// Guards against a backend returning structured content where text was
/// requested, which would otherwise render as `[object Object]`-style
/// garbage downstream. Arrays count as composite: a tweet thread is
/// prone to coming back as a list of tweets.
fn coerce_content_fields(value: &mut Value) {
    if let Some(ideas) = value
        .get_mut("repurposing_ideas")
        .and_then(Value::as_array_mut)
    {
        for idea in ideas {
            coerce_one_content(idea);
        }
    }
    coerce_one_content(value);
}

fn coerce_one_content(entry: &mut Value) {
    let Some(content) = entry.get_mut("content") else {
        return;
    };
    if content.is_object() || content.is_array() {
        let flattened = serde_json::to_string_pretty(content)
            .unwrap_or_else(|_| content.to_string());
        *content = Value::String(flattened);
    }
}

fn parse_coerced(raw: &str) -> Result<Value, RecastError> {
    let block = extract_json_block(raw)?;
    let mut value: Value = serde_json::from_str(block)?;
    coerce_content_fields(&mut value);
    Ok(value)
}

/// Normalize raw output into a full ideation result
pub fn normalize_ideation(raw: &str) -> Result<IdeationResult, RecastError> {
    let value = parse_coerced(raw)?;
    Ok(serde_json::from_value(value)?)
}

/// Normalize raw output into a single-item revision result
pub fn normalize_revision(raw: &str) -> Result<RevisionResult, RecastError> {
    let value = parse_coerced(raw)?;
    Ok(serde_json::from_value(value)?)
}

/// Normalize raw output for the given request mode
pub fn normalize(raw: &str, revision: bool) -> Result<RepurposeOutcome, RecastError> {
    if revision {
        normalize_revision(raw).map(RepurposeOutcome::Revision)
    } else {
        normalize_ideation(raw).map(RepurposeOutcome::Ideation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_fenced_markdown() {
        let raw = "Here you go:\n```json\n{\"content\":\"hi\",\"hashtags\":[\"x\"]}\n```\nEnjoy!";
        assert_eq!(
            extract_json_block(raw).unwrap(),
            "{\"content\":\"hi\",\"hashtags\":[\"x\"]}"
        );

        let result = normalize_revision(raw).unwrap();
        assert_eq!(result.content, "hi");
        assert_eq!(result.hashtags, vec!["x".to_string()]);
    }

    #[test]
    fn no_braces_is_an_extraction_error() {
        let err = normalize_revision("I couldn't help with that.").unwrap_err();
        assert!(matches!(err, RecastError::Extraction(_)));
        assert!(err.to_string().contains("could not extract structured output"));
    }

    #[test]
    fn close_brace_before_open_brace_is_an_extraction_error() {
        let err = extract_json_block("} nothing here {").unwrap_err();
        assert!(matches!(err, RecastError::Extraction(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = normalize_revision("{\"content\": \"unterminated}").unwrap_err();
        assert!(matches!(err, RecastError::Parse(_)));
    }

    #[test]
    fn object_valued_content_is_flattened_to_text() {
        let raw = r#"{"content": {"hook": "h", "body": "b"}, "hashtags": ["a"]}"#;
        let result = normalize_revision(raw).unwrap();
        assert!(result.content.contains("\"hook\""));
        assert!(result.content.contains("\"body\""));
        // flattened content must itself be valid JSON text
        let reparsed: Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(reparsed["hook"], "h");
    }

    #[test]
    fn idea_contents_are_flattened_inside_the_collection() {
        let raw = r#"{
            "original_title": "T",
            "repurposing_ideas": [
                {"id": "1", "type": "Tweet Thread", "title": "a", "content": {"tweets": ["1/2", "2/2"]}, "hashtags": []},
                {"id": "2", "type": "LinkedIn Post", "title": "b", "content": "plain", "hashtags": ["x"]}
            ]
        }"#;
        let result = normalize_ideation(raw).unwrap();
        assert_eq!(result.ideas.len(), 2);
        assert!(result.ideas[0].content.contains("tweets"));
        assert_eq!(result.ideas[1].content, "plain");
    }

    #[test]
    fn array_valued_content_is_flattened_to_text() {
        let raw = r#"{"content": ["1/2 first", "2/2 second"], "hashtags": []}"#;
        let result = normalize_revision(raw).unwrap();
        let reparsed: Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(reparsed[0], "1/2 first");
        assert_eq!(reparsed[1], "2/2 second");
    }

    #[test]
    fn array_valued_idea_content_is_flattened_inside_the_collection() {
        let raw = r#"{
            "original_title": "T",
            "repurposing_ideas": [
                {"id": "1", "type": "Tweet Thread", "title": "a",
                 "content": ["1/2 first", "2/2 second"], "hashtags": []}
            ]
        }"#;
        let result = normalize_ideation(raw).unwrap();
        assert!(result.ideas[0].content.contains("1/2 first"));
        assert!(result.ideas[0].content.contains("2/2 second"));
    }

    #[test]
    fn missing_hashtags_default_to_empty() {
        let result = normalize_revision(r#"{"content": "hi"}"#).unwrap();
        assert!(result.hashtags.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let err = normalize_ideation(r#"{"repurposing_ideas": []}"#).unwrap_err();
        assert!(matches!(err, RecastError::Parse(_)));
    }

    #[test]
    fn normalization_is_idempotent_over_the_same_input() {
        let raw = r#"prefix {"content": "same", "hashtags": ["a", "b"]} suffix"#;
        let first = normalize_revision(raw).unwrap();
        let second = normalize_revision(raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn greedy_match_spans_to_the_last_close_brace() {
        // Two objects: the documented heuristic takes first `{` through
        // last `}`, which fails to parse rather than picking one of them.
        let raw = r#"{"content": "a"} {"content": "b"}"#;
        let err = normalize_revision(raw).unwrap_err();
        assert!(matches!(err, RecastError::Parse(_)));
    }
}
