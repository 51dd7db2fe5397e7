/// Avoid-list entries presented to the model are capped to keep the
/// instruction compact; the validator still checks the full set.
pub const MAX_AVOID_IN_PROMPT: usize = 30;

/// Expand a known topic tag into the richer theme description the model is
/// prompted with. Unrecognized tags pass through as a free-form theme.
pub fn topic_description(topic: &str) -> String {
    match topic.trim().to_lowercase().as_str() {
        "" | "geral" | "general" => "any common everyday subject".to_string(),
        "animais" | "animals" => "animals (mammals, birds, fish, insects or reptiles)".to_string(),
        "comidas" | "food" => "food, dishes and ingredients".to_string(),
        "lugares" | "places" => "places (cities, countries, landmarks or regions)".to_string(),
        "objetos" | "objects" => "everyday objects found at home or work".to_string(),
        "profissoes" | "professions" => "professions and occupations".to_string(),
        "esportes" | "sports" => "sports and games".to_string(),
        "natureza" | "nature" => "nature (plants, weather, geography)".to_string(),
        other => other.to_string(),
    }
}

/// Build the single natural-language instruction sent to the model: target
/// length range, theme, the avoidance list, and the demanded reply shape.
pub fn build_instruction(min: usize, max: usize, topic: &str, avoid: &[String]) -> String {
    let mut instruction = format!(
        "Pick one secret word for a hangman game. Theme: {}. \
         The word must have between {} and {} letters; spaces are allowed \
         and do not count as letters. \
         Reply with exactly one JSON object of the form \
         {{\"word\": \"...\", \"hint\": \"...\"}}, where hint is one short \
         sentence that helps guess the word without containing it. \
         No other text.",
        topic_description(topic),
        min,
        max
    );

    if !avoid.is_empty() {
        let listed: Vec<&str> = avoid
            .iter()
            .take(MAX_AVOID_IN_PROMPT)
            .map(|s| s.as_str())
            .collect();
        instruction.push_str(&format!(" Do not pick any of these words: {}.", listed.join(", ")));
    }

    instruction
}
