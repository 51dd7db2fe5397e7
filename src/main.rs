use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use log::{error, info};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use forcad::handlers::config::get_difficulties;
use forcad::handlers::generate::generate_word;
use forcad::models::AppState;
use forcad::services::generator::WordGenerator;
use forcad::services::model_client::{GeminiClient, DEFAULT_API_URL, DEFAULT_MODEL};
use forcad::services::recency::RecencyStore;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("forcad")
        .version("0.1")
        .about("LLM-backed secret word service for hangman games")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:4650")
                .help("Specify the listen address (e.g., 0.0.0.0:4650)"),
        )
        .arg(
            Arg::new("state-dir")
                .long("state-dir")
                .num_args(1)
                .default_value("./state")
                .help("Directory holding the persisted recency list"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .num_args(1)
                .default_value(DEFAULT_MODEL)
                .help("Generative model used to produce words"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .num_args(1)
                .default_value(DEFAULT_API_URL)
                .help("Base URL of the generative model API"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let state_dir = matches.get_one::<String>("state-dir").unwrap();
    let model = matches.get_one::<String>("model").unwrap();
    let api_url = matches.get_one::<String>("api-url").unwrap();
    let log_file = matches.get_one::<String>("log-file");

    init_logging(log_file);

    // The API key is required up front; without it no generation attempt
    // can ever succeed, so the service refuses to start.
    let client = match GeminiClient::from_env(model, api_url) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            eprintln!("forcad: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using model {} at {}", client.model(), api_url);

    let recency_path = Path::new(state_dir).join("recent_words.json");
    let recency = RecencyStore::load(&recency_path);
    info!(
        "Loaded {} recent words from {}",
        recency.len(),
        recency_path.display()
    );

    let state = web::Data::new(AppState {
        generator: WordGenerator::new(client),
        recency: Mutex::new(recency),
    });

    info!("Listening on {}", listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(get_difficulties)
            .service(generate_word)
    })
    .bind(&listen_host)?
    .run()
    .await
}
