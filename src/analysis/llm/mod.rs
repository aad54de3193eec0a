pub mod chat_completions;
pub mod model_provider;
pub mod models;
