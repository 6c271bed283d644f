use std::sync::Arc;

use tracing::debug;

use crate::model::ModelClient;

/// Longest title we will surface in the UI.
const MAX_TITLE_CHARS: usize = 30;
/// Characters kept before the ellipsis when a title is too long.
const TRUNCATED_TITLE_CHARS: usize = 27;
/// Longest slice of the user's message included in the prompt.
const MAX_MESSAGE_CHARS: usize = 200;

/// Generates a short display title for a conversation thread from its first
/// user message. Strictly best-effort: any model failure or empty output
/// yields `None` and the thread keeps its default title.
pub struct TitleGenerator {
    model: Arc<dyn ModelClient>,
}

impl TitleGenerator {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    pub async fn generate_title(&self, first_message: &str) -> Option<String> {
        let content: String = first_message.chars().take(MAX_MESSAGE_CHARS).collect();
        let prompt = format!(
            "Generate a concise title (3-5 words) for this conversation.\n\
             Return ONLY the title, nothing else.\n\n\
             User message: {content}\n\nTitle:"
        );

        let raw = match self.model.complete(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                debug!("title generation failed: {err}");
                return None;
            }
        };

        let title = clean_title(&raw);
        if title.is_empty() {
            return None;
        }
        Some(truncate_title(&title))
    }
}

/// Strip surrounding whitespace and stray quote characters from raw model
/// output.
fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let mut out: String = title.chars().take(TRUNCATED_TITLE_CHARS).collect();
    out.push_str("...");
    out
}
