pub mod brave;
pub mod cache;
pub mod duckduckgo;
pub mod models;
pub mod provider;
