pub mod data;
pub mod evaluation;
pub mod llm;
pub mod news;
pub mod prompts;
pub mod utils;
