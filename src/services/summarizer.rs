use scraper::Html;

use crate::errors::BriefsResult;

/// Maximum length, in characters, of persisted summary text.
pub const MAX_SUMMARY_CHARS: usize = 140;

/// Output-token ceiling for the generation call.
const SUMMARY_MAX_TOKENS: u32 = 100;

#[cfg_attr(test, mockall::automock)]
pub trait Summarizer: Send + Sync {
    /// Produce a short summary for one item, at most [`MAX_SUMMARY_CHARS`]
    /// characters. Errors are per-item: the caller logs and skips.
    fn summarize(&self, title: &str, description: &str, context: &str) -> BriefsResult<String>;
}

pub struct ClaudeSummarizer {
    client: anthropic_client::Client,
    model: String,
}

impl ClaudeSummarizer {
    pub fn new(client: anthropic_client::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

impl Summarizer for ClaudeSummarizer {
    fn summarize(&self, title: &str, description: &str, context: &str) -> BriefsResult<String> {
        let prompt = build_prompt(title, description, context);
        let request =
            anthropic_client::MessagesRequest::user_prompt(&self.model, SUMMARY_MAX_TOKENS, &prompt);

        let response = self.client.create_message(&request)?;

        Ok(truncate_to_char_boundary(
            response.text().trim(),
            MAX_SUMMARY_CHARS,
        ))
    }
}

/// Build the user prompt for one item. Non-empty context is prepended as
/// background the model is told not to repeat.
fn build_prompt(title: &str, description: &str, context: &str) -> String {
    let mut prompt = String::new();

    if !context.is_empty() {
        prompt.push_str("Background: ");
        prompt.push_str(context);
        prompt.push_str("\n\n");
    }

    prompt.push_str(
        "Write one short phrase, around 15 tokens, capturing what is distinctive \
         about this specific item. Do not repeat the background. Do not use hashtags. \
         Return only the phrase, nothing else.\n\n",
    );
    prompt.push_str(&item_content(title, description));

    prompt
}

/// "title. description" with markup stripped and trailing periods/whitespace trimmed
fn item_content(title: &str, description: &str) -> String {
    format!("{}. {}", title, strip_tags(description))
        .trim()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

/// Extract plain text from HTML markup, preserving word boundaries
fn strip_tags(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        // Space after block elements so adjacent words don't run together
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" => text.push(' '),
                _ => {}
            }
        }
    }

    // Collapse whitespace and trim
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate string to at most `max_chars` characters, respecting char boundaries
fn truncate_to_char_boundary(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_removes_markup() {
        let text = strip_tags("<p>The Rust team is <b>happy</b> to announce</p><p>a new version.</p>");
        assert_eq!(text, "The Rust team is happy to announce a new version.");
    }

    #[test]
    fn test_strip_tags_plain_text_passes_through() {
        assert_eq!(strip_tags("already plain"), "already plain");
    }

    #[test]
    fn test_item_content_trims_trailing_periods_and_whitespace() {
        assert_eq!(
            item_content("A Title", "A description."),
            "A Title. A description"
        );
        assert_eq!(item_content("A Title", ""), "A Title");
    }

    #[test]
    fn test_build_prompt_prepends_background() {
        let prompt = build_prompt("Title", "Description", "a blog about compilers");

        assert!(prompt.starts_with("Background: a blog about compilers\n\n"));
        assert!(prompt.contains("Do not repeat the background"));
        assert!(prompt.contains("Do not use hashtags"));
        assert!(prompt.ends_with("Title. Description"));
    }

    #[test]
    fn test_build_prompt_without_context_has_no_background() {
        let prompt = build_prompt("Title", "Description", "");
        assert!(!prompt.contains("Background:"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(200);
        let truncated = truncate_to_char_boundary(&long, MAX_SUMMARY_CHARS);

        assert_eq!(truncated.chars().count(), MAX_SUMMARY_CHARS);
    }

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_char_boundary("short", 140), "short");
    }
}
