//! Ideation example using the recast meta crate.
//!
//! Reads `GROQ_API_KEY` from the environment, asks the default hosted
//! backend for four repurposing ideas, then regenerates the first one.
//!
//! ```sh
//! GROQ_API_KEY=... cargo run --example ideate
//! ```

use recast::layer::LoggingLayer;
use recast::prelude::*;

const SOURCE: &str = "I spent a weekend getting a 70B parameter model running on a \
single 24GB consumer GPU. The trick was 4-bit quantization plus paged attention; \
without paging, the KV cache alone blew past the VRAM budget at 8k context.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ProviderConfig::groq_from_env()?;
    let provider = from_config(&config)?;

    let repurposer = Repurposer::builder(provider)
        .layer(LoggingLayer::new())
        .finish();

    // Round one: four fresh ideas.
    let outcome = repurposer
        .repurpose(&GenerationRequest::ideation(SOURCE))
        .await?;

    let Some(ideation) = outcome.as_ideation() else {
        anyhow::bail!("expected an ideation outcome");
    };

    println!("Title: {}", ideation.original_title);
    for idea in &ideation.ideas {
        println!("\n== {} — {} ==", idea.idea_type, idea.title);
        println!("{}", idea.content);
        println!("tags: {}", idea.hashtags.join(", "));
    }

    // Round two: regenerate the first idea.
    if let Some(first) = ideation.ideas.first() {
        let revision = repurposer
            .repurpose(&GenerationRequest::revision(
                SOURCE,
                &first.idea_type,
                &first.content,
            ))
            .await?;

        if let Some(revised) = revision.as_revision() {
            println!("\n== Regenerated {} ==", first.idea_type);
            println!("{}", revised.content);
        }
    }

    Ok(())
}
