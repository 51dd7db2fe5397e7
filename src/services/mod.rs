pub mod generator;
pub mod model_client;
pub mod prompt;
pub mod recency;
