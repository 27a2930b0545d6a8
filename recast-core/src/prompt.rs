//! Prompt construction for the two request modes.
//!
//! Every backend receives the same two-part prompt: a fixed system
//! instruction enforcing the "valid JSON only" contract, and a user
//! instruction that is either the 4-way ideation request or a single-item
//! regeneration request. Only transport framing differs per backend.

use crate::types::GenerationRequest;

/// The four fixed idea categories, in the order the ideation prompt
/// requests them.
pub const IDEA_CATEGORIES: [&str; 4] = [
    "Tweet Thread",
    "LinkedIn Post",
    "Short-form Video Script",
    "Blog Post Outline",
];

const SYSTEM_PROMPT: &str = "\
You are a world-class content repurposing expert and technical strategist.
Your goal is to extract EXACT technical details, specific hardware specs, unique insights, and \"aha!\" moments from the source content.
NEVER use generic placeholder text. If the user mentions a specific problem (like a model size or hardware limitation), that MUST be the focal point of the repurposed content.
For Tweet Threads: Use double newlines between tweets (1/n, 2/n, etc.).
You MUST return ONLY valid JSON. No conversational text.";

/// A provider-agnostic two-part prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPrompt {
    pub system: String,
    pub user: String,
}

impl CompletionPrompt {
    /// System and user parts concatenated, for backends that take a single
    /// input string instead of role-separated messages
    pub fn concatenated(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

/// Build the prompt for a request, selecting the mode from
/// `revision_target`.
pub fn build_prompt(req: &GenerationRequest) -> CompletionPrompt {
    let user = match &req.revision_target {
        Some(target) => revision_user_prompt(
            &req.source_content,
            target,
            req.current_draft.as_deref().unwrap_or_default(),
        ),
        None => ideation_user_prompt(&req.source_content),
    };

    CompletionPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

fn ideation_user_prompt(source: &str) -> String {
    format!(
        "Analyze this long-form content: \"{source}\"\n\
         Create 4 distinct repurposing ideas:\n\
         1. Tweet Thread (5-7 tweets)\n\
         2. LinkedIn Post (Professional)\n\
         3. Short-form Video Script (Hook, Body, CTA)\n\
         4. Blog Post Outline (Detailed headings)\n\
         Return ONLY a JSON object: {{\n\
           \"original_title\": \"...\",\n\
           \"repurposing_ideas\": [\n\
             {{\"id\": \"1\", \"type\": \"Tweet Thread\", \"title\": \"...\", \"content\": \"...\", \"hashtags\": [...]}},\n\
             {{\"id\": \"2\", \"type\": \"LinkedIn Post\", \"title\": \"...\", \"content\": \"...\", \"hashtags\": [...]}},\n\
             {{\"id\": \"3\", \"type\": \"Short-form Video Script\", \"title\": \"...\", \"content\": \"...\", \"hashtags\": [...]}},\n\
             {{\"id\": \"4\", \"type\": \"Blog Post Outline\", \"title\": \"...\", \"content\": \"...\", \"hashtags\": [...]}}\n\
           ]\n\
         }}"
    )
}

fn revision_user_prompt(source: &str, target: &str, current_draft: &str) -> String {
    format!(
        "Original Source Content: \"{source}\"\n\
         Current Draft of {target}: \"{current_draft}\"\n\
         Task: Regenerate this {target} to be more engaging, high-impact, and professional.\n\
         Focus on deep insights and a \"high cognition\" approach.\n\
         Return ONLY a JSON object: {{\"content\": \"...\", \"hashtags\": [\"tag1\", \"tag2\"]}}"
    )
}
