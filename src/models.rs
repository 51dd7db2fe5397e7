use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::services::generator::WordGenerator;
use crate::services::recency::RecencyStore;

/// Application state shared across all handlers
pub struct AppState {
    pub generator: WordGenerator,
    pub recency: Mutex<RecencyStore>,
}

/// Requested game difficulty; selects the letter-count range of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Inclusive letter-count range, spaces excluded.
    pub fn letter_range(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (4, 7),
            Difficulty::Medium => (7, 10),
            Difficulty::Hard => (10, 14),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub topic: Option<String>,
    /// Comma-separated words the caller has seen recently.
    pub avoid: Option<String>,
}

/// A validated word/hint pair, as served to the client and as parsed from
/// the model reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWord {
    pub word: String,
    pub hint: String,
}

#[derive(Serialize)]
pub struct DifficultyInfo {
    pub name: String,
    pub min_letters: usize,
    pub max_letters: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" MEDIUM "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("nightmare"), None);
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn test_letter_ranges() {
        assert_eq!(Difficulty::Easy.letter_range(), (4, 7));
        assert_eq!(Difficulty::Medium.letter_range(), (7, 10));
        assert_eq!(Difficulty::Hard.letter_range(), (10, 14));
    }
}
