use actix_web::{get, HttpResponse, Responder};

use crate::models::{Difficulty, DifficultyInfo};

#[get("/difficulties")]
pub async fn get_difficulties() -> impl Responder {
    let infos: Vec<DifficultyInfo> = Difficulty::ALL
        .iter()
        .map(|d| {
            let (min_letters, max_letters) = d.letter_range();
            DifficultyInfo {
                name: d.name().to_string(),
                min_letters,
                max_letters,
            }
        })
        .collect();

    HttpResponse::Ok().json(infos)
}
