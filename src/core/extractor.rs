use crate::core::prompts;
use crate::domain::ports::{CompletionClient, KeywordParser};
use regex::Regex;
use std::sync::Arc;

/// Splits the model's answer on the literal `", "` sequence. This mirrors the
/// loose contract the extraction prompt implies; entries are trimmed and
/// empty segments dropped so a blank answer cannot produce the empty keyword
/// (which would be a substring of every technique).
pub struct CommaSeparated;

impl KeywordParser for CommaSeparated {
    fn parse(&self, raw: &str) -> Vec<String> {
        raw.split(", ")
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect()
    }
}

/// Handles models that answer with a bulleted or numbered list layout:
/// splits on newlines as well as commas and strips leading list markers.
pub struct ListAware {
    marker: Regex,
}

impl ListAware {
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"^\s*(?:[-*•]\s+|\d+[.)]\s+)").expect("valid list marker pattern"),
        }
    }
}

impl Default for ListAware {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordParser for ListAware {
    fn parse(&self, raw: &str) -> Vec<String> {
        raw.lines()
            .flat_map(|line| line.split(','))
            .map(|part| self.marker.replace(part, "").trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    }
}

/// Keyword extraction stage: one completion round-trip plus parsing.
pub struct KeywordExtractor<C: CompletionClient> {
    client: Arc<C>,
    parser: Box<dyn KeywordParser>,
}

impl<C: CompletionClient> KeywordExtractor<C> {
    pub fn new(client: Arc<C>, parser: Box<dyn KeywordParser>) -> Self {
        Self { client, parser }
    }

    /// Returns the extracted keywords, or an empty list when the remote call
    /// fails. The caller proceeds with zero keywords and finds no matches.
    pub async fn extract(&self, description: &str) -> Vec<String> {
        let prompt = prompts::build_extraction_prompt(description);

        match self
            .client
            .complete(prompts::EXTRACTION_SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(response) => {
                let keywords = self.parser.parse(response.trim());
                tracing::debug!("Extracted {} keywords: {:?}", keywords.len(), keywords);
                keywords
            }
            Err(e) => {
                tracing::error!("Keyword extraction failed: {}", e);
                Vec::new()
            }
        }
    }
}
