use once_cell::sync::Lazy;
use regex::Regex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::evaluation::language::{Language, LanguagePatterns};

/// Number of characters after a score header that are searched for the value.
pub const SCORE_LOOKAHEAD_CHARS: usize = 10;

static LIST_MARKER_ONLY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[\s0-9०-९.)(\-–*•]*$").expect("list marker pattern must compile")
});

static LEADING_LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\s*(?:[0-9०-९]+[.)]|[-–*•])(?:\s+|$)").expect("leading marker pattern must compile")
});

/// Scores and improvement suggestions recovered from an LLM evaluation report.
/// Scores keep the order their headers appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
  pub scores: IndexMap<String, u8>,
  pub improvements: Vec<String>,
}

impl EvaluationResult {

  pub fn is_empty(&self) -> bool {
    self.scores.is_empty() && self.improvements.is_empty()
  }

  pub fn average_score(&self) -> Option<f64> {
    if self.scores.is_empty() {
      return None;
    }
    let total: u32 = self.scores.values().map(|score| *score as u32).sum();
    Some(total as f64 / self.scores.len() as f64)
  }

  /// Expected metric names the report did not score, in the order given.
  pub fn missing_metrics<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
    expected.iter().copied().filter(|name| !self.scores.contains_key(*name)).collect()
  }
}

/// Permissive reader for the semi-structured evaluation text a model returns.
///
/// Nothing about the input is trusted: a missing header, a missing value or an
/// unrecognisable document all degrade to an empty or partial result.
pub struct EvaluationParser;

impl EvaluationParser {

  /// Parses `text` using the pattern set selected by a language tag such as
  /// `"Hindi"`. Unknown tags use the English patterns.
  pub fn parse(text: &str, language: &str) -> EvaluationResult {
    Self::parse_for(text, Language::from_tag(language))
  }

  pub fn parse_for(text: &str, language: Language) -> EvaluationResult {
    let patterns: &LanguagePatterns = language.patterns();
    let scores = Self::extract_scores(text, patterns);
    let improvements = Self::extract_improvements(text, patterns);

    log::debug!("Parsed evaluation ({}): {} scores, {} improvements", language, scores.len(), improvements.len());

    EvaluationResult { scores, improvements }
  }

  fn extract_scores(text: &str, patterns: &LanguagePatterns) -> IndexMap<String, u8> {
    let mut scores: IndexMap<String, u8> = IndexMap::new();

    for captures in patterns.score_line.captures_iter(text) {
      let (header, name) = match (captures.get(0), captures.name("name")) {
        (Some(header), Some(name)) => (header, name),
        _ => continue,
      };

      let metric: String = name.as_str().trim().trim_matches('*').trim().to_string();
      if metric.is_empty() {
        continue;
      }

      let window: String = text[header.end()..]
        .chars()
        .take_while(|c| *c != '\n')
        .take(SCORE_LOOKAHEAD_CHARS)
        .collect();

      match first_integer(&window, patterns.accepts_devanagari_digits) {
        Some(value) if (1..=10).contains(&value) => {
          scores.insert(metric, value as u8);
        }
        Some(value) => log::debug!("Ignoring out-of-range score {} for {:?}", value, metric),
        None => log::debug!("No score found after header {:?}", metric),
      }
    }

    return scores;
  }

  fn extract_improvements(text: &str, patterns: &LanguagePatterns) -> Vec<String> {
    let marker = match patterns.improvements_marker.find(text) {
      Some(marker) => marker,
      None => return Vec::new(),
    };

    let rest: &str = &text[marker.end()..];
    let section: &str = match patterns.section_end.find(rest) {
      Some(end) => &rest[..end.start()],
      None => rest,
    };

    section
      .lines()
      .map(str::trim)
      .filter(|line| !LIST_MARKER_ONLY.is_match(line))
      .map(|line| LEADING_LIST_MARKER.replace(line, "").trim().to_string())
      .filter(|line| !line.is_empty())
      .collect()
  }
}

fn digit_value(c: char, devanagari: bool) -> Option<u64> {
  match c {
    '0'..='9' => Some(c as u64 - '0' as u64),
    '०'..='९' if devanagari => Some(c as u64 - '०' as u64),
    _ => None,
  }
}

/// First run of digits in `window`, read as a base-10 integer.
fn first_integer(window: &str, devanagari: bool) -> Option<u64> {
  let mut value: Option<u64> = None;

  for c in window.chars() {
    match (digit_value(c, devanagari), value) {
      (Some(digit), None) => value = Some(digit),
      (Some(digit), Some(current)) => value = Some(current.saturating_mul(10).saturating_add(digit)),
      (None, Some(_)) => break,
      (None, None) => {}
    }
  }

  return value;
}

#[cfg(test)]
mod tests {
  use super::*;

  const ENGLISH_REPORT: &str = r#"[REPORT EVALUATION]
1. Analytical Rigor Score (1-10): 7
2. **Strategic Depth Score** (1-10): 9/10
3. Risk Management Score (1-10):   5

[IMPROVEMENT AREAS]
1. Add more sources
2. Clarify risk assumptions

[VERIFICATION CHECKLIST]
- Data sources cited
"#;

  #[test]
  fn test_parse_empty_input() {
    let result = EvaluationParser::parse("", "English");
    assert!(result.scores.is_empty());
    assert!(result.improvements.is_empty());
    assert!(result.is_empty());
  }

  #[test]
  fn test_parse_well_formed_report() {
    let result = EvaluationParser::parse(ENGLISH_REPORT, "English");

    assert_eq!(result.scores.len(), 3);
    assert_eq!(result.scores.get("Analytical Rigor Score"), Some(&7));
    assert_eq!(result.scores.get("Strategic Depth Score"), Some(&9));
    assert_eq!(result.scores.get("Risk Management Score"), Some(&5));
    assert_eq!(result.scores.values().map(|s| *s as u32).sum::<u32>(), 21);
    assert_eq!(result.improvements, vec!["Add more sources", "Clarify risk assumptions"]);
  }

  #[test]
  fn test_improvements_between_markers() {
    let text = "[IMPROVEMENT AREAS]\n1. Add more sources\n2. Clarify risk assumptions\n[VERIFICATION CHECKLIST]";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.improvements, vec!["Add more sources", "Clarify risk assumptions"]);
  }

  #[test]
  fn test_improvements_skip_bare_markers_and_blank_lines() {
    let text = "[IMPROVEMENT AREAS]\n\n1.\n   \n3\n- Tighten the valuation range\n•\n* Cite filings\n";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.improvements, vec!["Tighten the valuation range", "Cite filings"]);
  }

  #[test]
  fn test_improvements_keep_leading_numbers_in_text() {
    let text = "[IMPROVEMENT AREAS]\n3.5% growth assumption is unsupported\n-5% margin scenario missing\n2) Cite the 10-K\n[END]";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.improvements, vec![
      "3.5% growth assumption is unsupported",
      "-5% margin scenario missing",
      "Cite the 10-K",
    ]);
  }

  #[test]
  fn test_improvements_run_to_end_of_text() {
    let text = "[Improvement Areas]\nUse peer multiples\nDiscuss FX exposure";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.improvements, vec!["Use peer multiples", "Discuss FX exposure"]);
  }

  #[test]
  fn test_whole_line_bold_header() {
    let text = "**1. Accuracy Score (1-10):** 8\n**2. Clarity Score (1-10)**: 6";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.scores.get("Accuracy Score"), Some(&8));
    assert_eq!(result.scores.get("Clarity Score"), Some(&6));
  }

  #[test]
  fn test_scores_keep_source_order() {
    let text = "1. Zeta Score (1-10): 4\n2. Alpha Score (1-10): 6\n3. Mid Score (1-10): 8\n4. Alpha Score (1-10): 7";
    let result = EvaluationParser::parse(text, "English");

    let names: Vec<&str> = result.scores.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Zeta Score", "Alpha Score", "Mid Score"]);
    assert_eq!(result.scores.get("Alpha Score"), Some(&7));

    let json = serde_json::to_string(&result.scores).unwrap();
    assert_eq!(json, r#"{"Zeta Score":4,"Alpha Score":7,"Mid Score":8}"#);
  }

  #[test]
  fn test_header_without_value_is_absent() {
    let text = "1. Accuracy Score (1-10): not rated\n2. Clarity Score (1-10): 6";
    let result = EvaluationParser::parse(text, "English");
    assert!(!result.scores.contains_key("Accuracy Score"));
    assert_eq!(result.scores.get("Clarity Score"), Some(&6));
  }

  #[test]
  fn test_value_on_next_line_is_not_borrowed() {
    let text = "1. Accuracy Score (1-10):\n2. Clarity Score (1-10): 6";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.scores.len(), 1);
    assert_eq!(result.scores.get("Clarity Score"), Some(&6));
  }

  #[test]
  fn test_digit_beyond_window_is_ignored() {
    let text = "1. Accuracy Score (1-10): (see notes) 8";
    let result = EvaluationParser::parse(text, "English");
    assert!(result.scores.is_empty());
  }

  #[test]
  fn test_out_of_range_score_is_dropped() {
    let text = "1. Accuracy Score (1-10): 85\n2. Clarity Score (1-10): 0\n3. Depth Score (1-10): 10";
    let result = EvaluationParser::parse(text, "English");
    assert_eq!(result.scores.len(), 1);
    assert_eq!(result.scores.get("Depth Score"), Some(&10));
  }

  #[test]
  fn test_hindi_localized_header() {
    let text = "1. **सटीकता स्कोर** (1-10): 8";
    let result = EvaluationParser::parse(text, "Hindi");
    assert_eq!(result.scores.get("सटीकता स्कोर"), Some(&8));
  }

  #[test]
  fn test_hindi_devanagari_digits_and_section() {
    let text = "[रिपोर्ट मूल्यांकन]\n१. नवाचार स्कोर (१-१०): ७\n\n[सुधार के क्षेत्र]\n१. अधिक स्रोत जोड़ें\n२.\n[सत्यापन चेकलिस्ट]";
    let result = EvaluationParser::parse(text, "Hindi");
    assert_eq!(result.scores.get("नवाचार स्कोर"), Some(&7));
    assert_eq!(result.improvements, vec!["अधिक स्रोत जोड़ें"]);
  }

  #[test]
  fn test_marathi_report_with_english_marker() {
    let text = "1. नवकल्पना स्कोर (1-10)： 6\n[IMPROVEMENT AREAS]\n- जोखीम स्पष्ट करा";
    let result = EvaluationParser::parse(text, "Marathi");
    assert_eq!(result.scores.get("नवकल्पना स्कोर"), Some(&6));
    assert_eq!(result.improvements, vec!["जोखीम स्पष्ट करा"]);
  }

  #[test]
  fn test_unknown_language_uses_english_patterns() {
    let by_unknown = EvaluationParser::parse(ENGLISH_REPORT, "Esperanto");
    let by_english = EvaluationParser::parse(ENGLISH_REPORT, "English");
    assert_eq!(by_unknown, by_english);
  }

  #[test]
  fn test_parse_is_idempotent() {
    let first = EvaluationParser::parse(ENGLISH_REPORT, "English");
    let second = EvaluationParser::parse(ENGLISH_REPORT, "English");
    assert_eq!(first, second);
  }

  #[test]
  fn test_provider_error_string_yields_empty_result() {
    let result = EvaluationParser::parse("Error message for connecting to GROQ", "English");
    assert!(result.is_empty());
  }

  #[test]
  fn test_average_and_missing_metrics() {
    let result = EvaluationParser::parse(ENGLISH_REPORT, "English");
    assert_eq!(result.average_score(), Some(7.0));
    assert_eq!(
      result.missing_metrics(&["Analytical Rigor Score", "Innovation Score"]),
      vec!["Innovation Score"]
    );
    assert_eq!(EvaluationResult::default().average_score(), None);
  }
}
