pub mod language;
pub mod parser;

pub use language::Language;
pub use parser::{EvaluationParser, EvaluationResult};
