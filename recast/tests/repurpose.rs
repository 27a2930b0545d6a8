//! End-to-end tests over the repurposing pipeline with a scripted provider.

use async_trait::async_trait;
use recast::layer::LoggingLayer;
use recast::prelude::*;
use recast::IDEA_CATEGORIES;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider that returns a canned raw output and counts invocations.
#[derive(Debug)]
struct ScriptedProvider {
    output: String,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(output: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            output: output.into(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn info(&self) -> Arc<recast::ProviderInfo> {
        Arc::new(recast::ProviderInfo {
            id: "scripted".to_string(),
            name: "Scripted".to_string(),
        })
    }

    async fn complete(&self, _prompt: CompletionPrompt) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

fn ideation_payload() -> String {
    let ideas: Vec<serde_json::Value> = IDEA_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            serde_json::json!({
                "id": (i + 1).to_string(),
                "type": category,
                "title": format!("Title {}", i + 1),
                "content": format!("Content {}", i + 1),
                "hashtags": ["ai", "content"]
            })
        })
        .collect();

    serde_json::json!({
        "original_title": "Running 70B models on consumer hardware",
        "repurposing_ideas": ideas
    })
    .to_string()
}

#[tokio::test]
async fn ideation_returns_exactly_four_ideas_across_the_fixed_categories() {
    let provider = ScriptedProvider::new(ideation_payload());
    let repurposer = Repurposer::builder(provider.clone())
        .layer(LoggingLayer::new())
        .finish();

    let outcome = repurposer
        .repurpose(&GenerationRequest::ideation("source content"))
        .await
        .unwrap();

    let ideation = outcome.as_ideation().expect("ideation outcome");
    assert_eq!(ideation.ideas.len(), 4);
    let categories: Vec<&str> = ideation.ideas.iter().map(|i| i.idea_type.as_str()).collect();
    assert_eq!(categories, IDEA_CATEGORIES);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn revision_returns_one_content_hashtags_pair() {
    let provider = ScriptedProvider::new(
        "Here you go:\n```json\n{\"content\":\"hi\",\"hashtags\":[\"x\"]}\n```\nEnjoy!",
    );
    let repurposer = Repurposer::builder(provider).finish();

    let outcome = repurposer
        .repurpose(&GenerationRequest::revision("src", "Tweet Thread", "draft"))
        .await
        .unwrap();

    let revision = outcome.as_revision().expect("revision outcome");
    assert_eq!(revision.content, "hi");
    assert_eq!(revision.hashtags, vec!["x".to_string()]);
    assert!(outcome.as_ideation().is_none());
}

#[tokio::test]
async fn object_valued_contents_come_back_as_text() {
    let provider = ScriptedProvider::new(
        serde_json::json!({
            "original_title": "T",
            "repurposing_ideas": [
                {"id": "1", "type": "Tweet Thread", "title": "a",
                 "content": {"tweets": ["1/2 first", "2/2 second"]}, "hashtags": []},
                {"id": "2", "type": "LinkedIn Post", "title": "b", "content": "plain", "hashtags": []},
                {"id": "3", "type": "Short-form Video Script", "title": "c",
                 "content": {"hook": "h", "body": "b", "cta": "c"}, "hashtags": []},
                {"id": "4", "type": "Blog Post Outline", "title": "d", "content": "outline", "hashtags": []}
            ]
        })
        .to_string(),
    );
    let repurposer = Repurposer::builder(provider).finish();

    let outcome = repurposer
        .repurpose(&GenerationRequest::ideation("source"))
        .await
        .unwrap();

    for idea in &outcome.as_ideation().unwrap().ideas {
        // every content field is textual; the flattened ones still carry
        // their payload as JSON text
        assert!(!idea.content.is_empty());
    }
    let first = &outcome.as_ideation().unwrap().ideas[0];
    let reparsed: serde_json::Value = serde_json::from_str(&first.content).unwrap();
    assert_eq!(reparsed["tweets"][0], "1/2 first");
}

#[tokio::test]
async fn output_without_braces_fails_with_an_extraction_error() {
    let provider = ScriptedProvider::new("Sorry, I cannot do that.");
    let repurposer = Repurposer::builder(provider).finish();

    let err = repurposer
        .repurpose(&GenerationRequest::ideation("source"))
        .await
        .unwrap_err();

    assert!(matches!(err, RecastError::Extraction(_)));
}

#[tokio::test]
async fn empty_source_content_never_reaches_the_provider() {
    let provider = ScriptedProvider::new(ideation_payload());
    let repurposer = Repurposer::builder(provider.clone()).finish();

    let err = repurposer
        .repurpose(&GenerationRequest::ideation(""))
        .await
        .unwrap_err();

    assert!(matches!(err, RecastError::Validation(_)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_api_key_is_rejected_before_any_call() {
    let config = ProviderConfig::new(ProviderKind::Anthropic, "");
    let err = recast::repurpose(&GenerationRequest::ideation("source"), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, RecastError::Configuration(_)));
    assert!(err.is_pre_network());
}

#[tokio::test]
async fn facade_validates_content_before_dispatching() {
    // Key is present, so dispatch succeeds; the empty content must still
    // fail before the adapter issues a network call.
    let config = ProviderConfig::new(ProviderKind::Groq, "test-key");
    let err = recast::repurpose(&GenerationRequest::ideation("   "), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, RecastError::Validation(_)));
}
