use anyhow::{anyhow, Result};
use std::collections::HashMap;

/// A prompt with `{name}` placeholders. `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
  template: &'static str,
}

enum Piece<'a> {
  Text(&'a str),
  Brace(char),
  Variable(&'a str),
}

impl PromptTemplate {

  pub const fn new(template: &'static str) -> Self {
    PromptTemplate { template }
  }

  /// Placeholder names in order of first appearance.
  #[cfg(test)]
  pub fn variables(&self) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for piece in pieces(self.template) {
      if let Piece::Variable(name) = piece {
        if !names.contains(&name) {
          names.push(name);
        }
      }
    }
    return names;
  }

  pub fn format(&self, variables: &HashMap<&str, String>) -> Result<String> {
    let mut output = String::with_capacity(self.template.len());

    for piece in pieces(self.template) {
      match piece {
        Piece::Text(text) => output.push_str(text),
        Piece::Brace(brace) => output.push(brace),
        Piece::Variable(name) => {
          let value = variables.get(name).ok_or_else(|| anyhow!("Missing prompt variable: {}", name))?;
          output.push_str(value);
        }
      }
    }

    Ok(output)
  }
}

fn is_identifier(name: &str) -> bool {
  !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn pieces(template: &str) -> Vec<Piece<'_>> {
  let mut pieces: Vec<Piece<'_>> = Vec::new();
  let mut rest: &str = template;

  while let Some(index) = rest.find(|c: char| c == '{' || c == '}') {
    if index > 0 {
      pieces.push(Piece::Text(&rest[..index]));
    }
    let tail: &str = &rest[index..];

    if tail.starts_with("{{") || tail.starts_with("}}") {
      pieces.push(Piece::Brace(tail.as_bytes()[0] as char));
      rest = &tail[2..];
      continue;
    }

    if tail.starts_with('{') {
      if let Some(close) = tail.find('}') {
        let name: &str = &tail[1..close];
        if is_identifier(name) {
          pieces.push(Piece::Variable(name));
          rest = &tail[close + 1..];
          continue;
        }
      }
    }

    // a lone brace that is not part of a placeholder is kept verbatim
    pieces.push(Piece::Text(&tail[..1]));
    rest = &tail[1..];
  }

  if !rest.is_empty() {
    pieces.push(Piece::Text(rest));
  }

  return pieces;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_variables_in_first_appearance_order() {
    let template = PromptTemplate::new("{company} in {industry}; again {company} over {timeframe}");
    assert_eq!(template.variables(), vec!["company", "industry", "timeframe"]);
  }

  #[test]
  fn test_format_substitutes_and_unescapes() {
    let template = PromptTemplate::new("Company: {company}\nJSON: {{\"k\": 1}}");
    let mut variables = HashMap::new();
    variables.insert("company", "Apple".to_string());

    assert_eq!(template.format(&variables).unwrap(), "Company: Apple\nJSON: {\"k\": 1}");
  }

  #[test]
  fn test_format_reports_missing_variable() {
    let template = PromptTemplate::new("{company} / {timeframe}");
    let mut variables = HashMap::new();
    variables.insert("company", "Apple".to_string());

    let error = template.format(&variables).unwrap_err();
    assert!(error.to_string().contains("timeframe"));
  }

  #[test]
  fn test_non_identifier_braces_are_literal() {
    let template = PromptTemplate::new("range {1-10} and } alone");
    assert!(template.variables().is_empty());
    assert_eq!(template.format(&HashMap::new()).unwrap(), "range {1-10} and } alone");
  }
}
