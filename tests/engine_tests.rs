use std::collections::HashSet;

use forcad::game::{GameSession, GameState, MAX_ERRORS};
use forcad::models::Difficulty;
use forcad::services::generator::{extract_payload, validate_word};
use forcad::utils::normalize_word;

fn apply_guesses(session: &mut GameSession, guesses: &str) {
    for c in guesses.chars() {
        session.guess_letter(c);
    }
}

#[test]
fn test_full_game_won_with_mixed_guesses() {
    let mut session = GameSession::new();
    session.start("tucano", "big colorful beak");

    apply_guesses(&mut session, "xt");
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.masked(), "T _ _ _ _ _");
    assert_eq!(session.error_count(), 1);

    session.guess_word("pelicano"); // miss, one more error
    assert_eq!(session.error_count(), 2);

    apply_guesses(&mut session, "ucano");
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.masked(), "T U C A N O");
}

#[test]
fn test_full_game_lost_on_combined_budget() {
    let mut session = GameSession::new();
    session.start("GATO", "it purrs");

    apply_guesses(&mut session, "bcd"); // 3 wrong letters
    session.guess_word("RATO"); // 4
    session.guess_word("PATO"); // 5
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.remaining_errors(), 1);

    session.guess_letter('e'); // 6th error
    assert_eq!(session.state(), GameState::Lost);
}

#[test]
fn test_budget_boundary_is_exactly_max_errors() {
    let mut session = GameSession::new();
    session.start("GATO", "");

    let wrong = "BCDEF";
    assert_eq!(wrong.len(), MAX_ERRORS - 1);
    apply_guesses(&mut session, wrong);
    assert_eq!(session.state(), GameState::Playing);

    session.guess_letter('H');
    assert_eq!(session.state(), GameState::Lost);
}

#[test]
fn test_guessed_set_grows_monotonically() {
    let mut session = GameSession::new();
    session.start("GATO", "");

    let mut seen = 0;
    for c in "GXAYTZ".chars() {
        session.guess_letter(c);
        assert!(session.guessed_letters().len() >= seen);
        seen = session.guessed_letters().len();
    }
}

#[test]
fn test_accented_secret_plays_on_plain_letters() {
    let mut session = GameSession::new();
    session.start("avião", "flies between cities");
    assert_eq!(session.secret_word(), "AVIAO");

    apply_guesses(&mut session, "avio");
    assert_eq!(session.state(), GameState::Won);
}

#[test]
fn test_multi_word_secret_round_trip() {
    let mut session = GameSession::new();
    session.start("São Paulo", "largest city in Brazil");

    session.guess_word("sao paulo");
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.masked(), "_ _ _   _ _ _ _ _");
}

#[test]
fn test_session_reuse_across_games() {
    let mut session = GameSession::new();

    session.start("GATO", "");
    session.guess_word("GATO");
    assert_eq!(session.state(), GameState::Won);

    session.start("PATO", "");
    assert_eq!(session.state(), GameState::Playing);
    session.guess_word("GATO"); // last game's word is now just a miss
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.error_count(), 1);
}

#[test]
fn test_extracted_candidates_validate_against_difficulty_ranges() {
    let reply = "Here you go:\n{\"word\": \"Tamanduá\", \"hint\": \"eats ants\"}";
    let payload = extract_payload(reply).unwrap();
    let word = normalize_word(&payload.word);
    assert_eq!(word, "TAMANDUA");

    let avoid = HashSet::new();
    let (min, max) = Difficulty::Medium.letter_range();
    assert_eq!(validate_word(&word, min, max, &avoid), None);

    let (min, max) = Difficulty::Easy.letter_range();
    assert!(validate_word(&word, min, max, &avoid).is_some());
}

#[test]
fn test_avoid_set_comparison_uses_normalized_forms() {
    let avoid: HashSet<String> = ["GATO", "SAO PAULO"]
        .iter()
        .map(|w| normalize_word(w))
        .collect();

    let candidate = normalize_word("são paulo");
    let (min, max) = Difficulty::Medium.letter_range();
    assert_eq!(
        validate_word(&candidate, min, max, &avoid),
        Some("recently used")
    );
}
