use std::collections::HashSet;

use actix_web::{get, web, HttpResponse, Responder};
use log::{info, warn};

use crate::models::{AppState, Difficulty, ErrorResponse, GenerateQuery};
use crate::services::generator::GenerateError;
use crate::utils::normalize_word;

#[get("/generate/{difficulty}")]
pub async fn generate_word(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<GenerateQuery>,
) -> impl Responder {
    let raw_difficulty = path.into_inner();
    let difficulty = match Difficulty::parse(&raw_difficulty) {
        Some(d) => d,
        None => {
            return HttpResponse::BadRequest()
                .body(format!("Difficulty '{}' not supported", raw_difficulty))
        }
    };

    let topic = query.topic.clone().unwrap_or_default();

    // Union of the caller's avoid list and our own persisted recency list,
    // normalized the same way candidates are.
    let mut avoid: HashSet<String> = query
        .avoid
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();
    if let Ok(recency) = data.recency.lock() {
        avoid.extend(recency.words());
    }

    match data.generator.generate(difficulty, &topic, &avoid).await {
        Ok(generated) => {
            if let Ok(mut recency) = data.recency.lock() {
                recency.record(&generated.word);
            }
            info!(
                "Served {} word for topic '{}' ({} words avoided)",
                difficulty.name(),
                topic,
                avoid.len()
            );
            HttpResponse::Ok().json(generated)
        }
        Err(e @ GenerateError::Exhausted { .. }) => {
            warn!("Generation failed ({}, topic '{}'): {}", difficulty.name(), topic, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
