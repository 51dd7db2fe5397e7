use std::collections::HashSet;

use log::{info, warn};
use thiserror::Error;

use crate::models::{Difficulty, GeneratedWord};
use crate::utils::{letter_count, normalize_word};

use super::model_client::GeminiClient;
use super::prompt::build_instruction;

/// Sequential attempts before generation is reported as failed. There is no
/// fallback word list; exhausting the budget is a hard error.
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no valid word after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Turns the free-text model into a guaranteed well-formed game word by
/// looping call -> extract -> normalize -> validate until a candidate
/// passes or the attempt budget runs out.
pub struct WordGenerator {
    client: GeminiClient,
}

impl WordGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// `avoid` must already hold normalized words (callers merge their own
    /// recency lists into it before the call).
    pub async fn generate(
        &self,
        difficulty: Difficulty,
        topic: &str,
        avoid: &HashSet<String>,
    ) -> Result<GeneratedWord, GenerateError> {
        let (min, max) = difficulty.letter_range();
        let avoid_list: Vec<String> = avoid.iter().cloned().collect();
        let instruction = build_instruction(min, max, topic, &avoid_list);

        for attempt in 1..=MAX_ATTEMPTS {
            let raw = match self.client.generate_text(&instruction).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Attempt {}/{}: model call failed: {}", attempt, MAX_ATTEMPTS, e);
                    continue;
                }
            };

            let Some(candidate) = extract_payload(&raw) else {
                warn!(
                    "Attempt {}/{}: reply carried no parsable word payload",
                    attempt, MAX_ATTEMPTS
                );
                continue;
            };

            let word = normalize_word(&candidate.word);
            if let Some(reason) = validate_word(&word, min, max, avoid) {
                warn!(
                    "Attempt {}/{}: rejected candidate '{}': {}",
                    attempt, MAX_ATTEMPTS, word, reason
                );
                continue;
            }

            info!(
                "Generated '{}' ({} letters, {} difficulty) on attempt {}/{}",
                word,
                letter_count(&word),
                difficulty.name(),
                attempt,
                MAX_ATTEMPTS
            );
            return Ok(GeneratedWord {
                word,
                hint: candidate.hint.trim().to_string(),
            });
        }

        Err(GenerateError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Pull the first JSON object out of a reply that may wrap it in prose or a
/// code fence. Anything that does not parse as a word/hint pair counts as a
/// failed attempt.
pub fn extract_payload(text: &str) -> Option<GeneratedWord> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Check a normalized candidate against the generation contract. Returns
/// the rejection reason, or `None` when the word is usable.
pub fn validate_word(
    word: &str,
    min: usize,
    max: usize,
    avoid: &HashSet<String>,
) -> Option<&'static str> {
    if word.is_empty() {
        return Some("empty after normalization");
    }
    let letters = letter_count(word);
    if letters < min {
        return Some("too few letters");
    }
    if letters > max {
        return Some("too many letters");
    }
    if avoid.contains(word) {
        return Some("recently used");
    }
    None
}
