use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Arg, Command};

use forcad::game::{GameSession, GameState};
use forcad::models::GeneratedWord;
use forcad::services::recency::RecencyStore;
use forcad::utils::letter_count;

fn recency_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forca")
        .join("recent_words.json")
}

async fn fetch_word(
    http: &reqwest::Client,
    server: &str,
    difficulty: &str,
    topic: &str,
    avoid: &[String],
) -> Result<GeneratedWord, String> {
    let url = format!("{}/generate/{}", server.trim_end_matches('/'), difficulty);
    let mut request = http.get(&url);
    if !topic.is_empty() {
        request = request.query(&[("topic", topic)]);
    }
    if !avoid.is_empty() {
        request = request.query(&[("avoid", avoid.join(","))]);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("server returned {status}: {body}"));
    }
    response
        .json::<GeneratedWord>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}

/// Fetch a fresh word and seed the session with it. On failure the session
/// is returned to idle; a placeholder word is never substituted.
async fn new_game(
    http: &reqwest::Client,
    server: &str,
    difficulty: &str,
    topic: &str,
    recency: &mut RecencyStore,
    session: &mut GameSession,
) {
    println!("Fetching a new {difficulty} word...");
    match fetch_word(http, server, difficulty, topic, &recency.words()).await {
        Ok(generated) => {
            recency.record(&generated.word);
            session.start(&generated.word, &generated.hint);
            println!(
                "New game: {} letters. Guess a letter or the whole word; !hint, !new and !exit also work.",
                letter_count(session.secret_word())
            );
        }
        Err(e) => {
            *session = GameSession::new();
            eprintln!("Could not get a word: {e}");
        }
    }
}

fn print_board(session: &GameSession) {
    if session.state() == GameState::Idle {
        return;
    }
    let wrong: Vec<String> = session.wrong_letters().iter().map(|c| c.to_string()).collect();
    println!();
    println!("  {}", session.masked());
    println!(
        "  wrong: [{}]  errors left: {}",
        wrong.join(" "),
        session.remaining_errors()
    );
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = Command::new("forca")
        .version("0.1")
        .about("Terminal hangman client for a forcad server")
        .arg(
            Arg::new("server")
                .long("server")
                .num_args(1)
                .default_value("http://127.0.0.1:4650")
                .help("Base URL of the forcad server"),
        )
        .arg(
            Arg::new("difficulty")
                .long("difficulty")
                .num_args(1)
                .default_value("medium")
                .help("Word difficulty: easy, medium or hard"),
        )
        .arg(
            Arg::new("topic")
                .long("topic")
                .num_args(1)
                .default_value("")
                .help("Topic tag or free-form theme for the word"),
        )
        .get_matches();

    let server = matches.get_one::<String>("server").unwrap();
    let difficulty = matches.get_one::<String>("difficulty").unwrap();
    let topic = matches.get_one::<String>("topic").unwrap();

    let http = reqwest::Client::new();
    let mut recency = RecencyStore::load(&recency_path());
    let mut session = GameSession::new();

    new_game(&http, server, difficulty, topic, &mut recency, &mut session).await;
    if session.state() == GameState::Idle {
        std::process::exit(1);
    }

    print_board(&session);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();

        match input {
            "" => {}
            "!exit" => break,
            "!hint" => println!("Hint: {}", session.hint()),
            "!new" => {
                new_game(&http, server, difficulty, topic, &mut recency, &mut session).await;
                print_board(&session);
            }
            guess => {
                let mut chars = guess.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => session.guess_letter(c),
                    _ => session.guess_word(guess),
                }
                print_board(&session);
                match session.state() {
                    GameState::Won => {
                        println!("You won! The word was {}.", session.secret_word());
                        println!("Type !new for another word or !exit to quit.");
                    }
                    GameState::Lost => {
                        println!("You lost. The word was {}.", session.secret_word());
                        println!("Type !new for another word or !exit to quit.");
                    }
                    _ => {}
                }
            }
        }
        prompt();
    }
}
