use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
  English,
  Hindi,
  Marathi,
}

/// Section/score vocabulary used to read an evaluation report written in one language.
pub struct LanguagePatterns {
  pub score_line: Regex,
  pub improvements_marker: Regex,
  pub section_end: Regex,
  pub accepts_devanagari_digits: bool,
}

const ENGLISH_IMPROVEMENTS: &str = r"IMPROVEMENT\s+AREAS";
const HINDI_IMPROVEMENTS: &str = r"सुधार\s+के\s+क्षेत्र";
const MARATHI_IMPROVEMENTS: &str = r"सुधारणा\s+क्षेत्रे";

// "<ordinal>. <metric-name> (1-10):" with optional markdown bold around the name
// or around the whole header.
fn score_line_pattern(digit: &str, one: &str, ten: &str, colon: &str) -> Regex {
  let pattern: String = format!(
    r"(?m)^[ \t]*\**[ \t]*{digit}+[.)][ \t]*\**[ \t]*(?P<name>[^*\n(]+?)[ \t]*\**[ \t]*\([ \t]*{one}[ \t]*[-–][ \t]*{ten}[ \t]*\)[ \t]*\**[ \t]*{colon}[ \t]*\**",
    digit = digit, one = one, ten = ten, colon = colon
  );
  Regex::new(&pattern).expect("score line pattern must compile")
}

fn marker_pattern(alternatives: &[&str]) -> Regex {
  let pattern: String = format!(r"(?i)\[\s*(?:{})\s*\]", alternatives.join("|"));
  Regex::new(&pattern).expect("section marker pattern must compile")
}

static SECTION_END: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?m)^[ \t*#]*\[").expect("section end pattern must compile")
});

static ENGLISH_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
  score_line: score_line_pattern("[0-9]", "1", "10", ":"),
  improvements_marker: marker_pattern(&[ENGLISH_IMPROVEMENTS]),
  section_end: SECTION_END.clone(),
  accepts_devanagari_digits: false,
});

static HINDI_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
  score_line: score_line_pattern("[0-9०-९]", "[1१]", "(?:10|१०)", "[:：]"),
  improvements_marker: marker_pattern(&[HINDI_IMPROVEMENTS, ENGLISH_IMPROVEMENTS]),
  section_end: SECTION_END.clone(),
  accepts_devanagari_digits: true,
});

static MARATHI_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
  score_line: score_line_pattern("[0-9०-९]", "[1१]", "(?:10|१०)", "[:：]"),
  improvements_marker: marker_pattern(&[MARATHI_IMPROVEMENTS, ENGLISH_IMPROVEMENTS]),
  section_end: SECTION_END.clone(),
  accepts_devanagari_digits: true,
});

impl Language {

  pub fn all() -> &'static [Language] {
    &[Language::English, Language::Hindi, Language::Marathi]
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Language::English => "English",
      Language::Hindi => "Hindi",
      Language::Marathi => "Marathi",
    }
  }

  /// ISO 639-1 code, used for news search and as an alternative tag.
  pub fn code(&self) -> &'static str {
    match self {
      Language::English => "en",
      Language::Hindi => "hi",
      Language::Marathi => "mr",
    }
  }

  /// Resolves a selector tag; anything unrecognised falls back to English.
  pub fn from_tag(tag: &str) -> Language {
    match Language::from_str(tag) {
      Ok(language) => language,
      Err(_) => {
        log::debug!("Unknown language tag {:?}, falling back to English", tag);
        Language::English
      }
    }
  }

  pub fn patterns(&self) -> &'static LanguagePatterns {
    match self {
      Language::English => &ENGLISH_PATTERNS,
      Language::Hindi => &HINDI_PATTERNS,
      Language::Marathi => &MARATHI_PATTERNS,
    }
  }
}

impl Default for Language {
  fn default() -> Self {
    Language::English
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Language {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "english" | "en" => Ok(Language::English),
      "hindi" | "hi" | "हिन्दी" | "हिंदी" => Ok(Language::Hindi),
      "marathi" | "mr" | "मराठी" => Ok(Language::Marathi),
      _ => Err(format!("Unknown language: {}", s)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_tag_is_case_insensitive() {
    assert_eq!(Language::from_tag("hindi"), Language::Hindi);
    assert_eq!(Language::from_tag(" MARATHI "), Language::Marathi);
    assert_eq!(Language::from_tag("en"), Language::English);
  }

  #[test]
  fn test_unknown_tag_falls_back_to_english() {
    assert_eq!(Language::from_tag("Klingon"), Language::English);
    assert_eq!(Language::from_tag(""), Language::English);
  }

  #[test]
  fn test_english_score_line_rejects_devanagari_ordinal() {
    let patterns = Language::English.patterns();
    assert!(patterns.score_line.is_match("1. Clarity Score (1-10): 7"));
    assert!(!patterns.score_line.is_match("१. Clarity Score (1-10): 7"));
  }

  #[test]
  fn test_hindi_score_line_accepts_devanagari_range() {
    let patterns = Language::Hindi.patterns();
    assert!(patterns.score_line.is_match("२. रणनीतिक गहराई स्कोर (१-१०)： ६"));
  }

  #[test]
  fn test_localized_markers_accept_english_header() {
    let patterns = Language::Marathi.patterns();
    assert!(patterns.improvements_marker.is_match("[सुधारणा क्षेत्रे]"));
    assert!(patterns.improvements_marker.is_match("[Improvement Areas]"));
  }
}
