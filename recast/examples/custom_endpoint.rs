//! Repurposing through a self-hosted OpenAI-compatible endpoint.
//!
//! ```sh
//! LLM_API_KEY=... LLM_BASE_URL=http://localhost:8000/v1 LLM_MODEL=qwen2.5-32b \
//!     cargo run --example custom_endpoint
//! ```

use recast::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("LLM_API_KEY")?;
    let mut config = ProviderConfig::custom(api_key);
    if let Ok(base_url) = std::env::var("LLM_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(model) = std::env::var("LLM_MODEL") {
        config = config.with_model(model);
    }

    let source = std::io::read_to_string(std::io::stdin())?;
    let outcome = recast::repurpose(&GenerationRequest::ideation(source), &config).await?;

    match outcome {
        RepurposeOutcome::Ideation(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        RepurposeOutcome::Revision(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
