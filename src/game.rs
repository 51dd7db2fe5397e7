use std::collections::BTreeSet;

use crate::utils::{normalize_word, strip_spaces};

/// Combined budget for wrong letters and failed whole-word guesses.
pub const MAX_ERRORS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Playing,
    Won,
    Lost,
}

/// One hangman play session. Owns the secret word for its whole lifetime
/// and is only ever mutated through the guess operations below; terminal
/// states freeze the session until `start` seeds a new one.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    hint: String,
    guessed: BTreeSet<char>,
    extra_errors: usize,
    state: GameState,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            secret: String::new(),
            hint: String::new(),
            guessed: BTreeSet::new(),
            extra_errors: 0,
            state: GameState::Idle,
        }
    }

    /// Seed a fresh session from a successfully generated word. Clears all
    /// previous guesses and errors and moves to `Playing`.
    pub fn start(&mut self, word: &str, hint: &str) {
        self.secret = normalize_word(word);
        self.hint = hint.to_string();
        self.guessed.clear();
        self.extra_errors = 0;
        self.state = GameState::Playing;
    }

    /// Guess a single letter. Ignored outside `Playing`, on non-letters, and
    /// on repeats of an already guessed letter.
    pub fn guess_letter(&mut self, letter: char) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(letter) = normalize_word(&letter.to_string()).chars().next() else {
            return;
        };
        if !self.guessed.insert(letter) {
            return;
        }

        // Win is checked before loss: a correct final letter wins even with
        // the error budget already spent.
        if self.is_revealed() {
            self.state = GameState::Won;
        } else if self.error_count() >= MAX_ERRORS {
            self.state = GameState::Lost;
        }
    }

    /// Guess the whole word. Spaces and case are ignored in the comparison.
    /// A miss costs one error from the shared budget and reveals nothing;
    /// an empty or entirely non-letter guess is ignored outright.
    pub fn guess_word(&mut self, candidate: &str) {
        if self.state != GameState::Playing {
            return;
        }
        let guess = strip_spaces(&normalize_word(candidate));
        if guess.is_empty() {
            return;
        }

        if guess == strip_spaces(&self.secret) {
            self.state = GameState::Won;
            return;
        }

        self.extra_errors += 1;
        if self.error_count() >= MAX_ERRORS {
            self.state = GameState::Lost;
        }
    }

    /// The player-visible projection of the secret word: characters joined
    /// by single spaces, unguessed letters shown as '_', word spaces kept.
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .map(|c| {
                if c == ' ' || self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Guessed letters that appear nowhere in the secret word.
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret.contains(*c))
            .collect()
    }

    /// Wrong letters plus failed whole-word guesses.
    pub fn error_count(&self) -> usize {
        self.wrong_letters().len() + self.extra_errors
    }

    pub fn remaining_errors(&self) -> usize {
        MAX_ERRORS.saturating_sub(self.error_count())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    fn is_revealed(&self) -> bool {
        self.secret
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed.contains(&c))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
