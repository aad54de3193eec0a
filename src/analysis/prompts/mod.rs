pub mod template;
pub mod translations;

pub use template::PromptTemplate;
pub use translations::{prompts_for, LanguagePrompts, UiTranslations};
