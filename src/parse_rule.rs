use regex::Regex;
/// Scanners for the pipeline's line-oriented rule formats
use std::str::FromStr;

use crate::error::{Result, WasplineError};
use crate::rules::{HieroRule, Token};

/// Field delimiter of the Hiero extractor's format.
pub const FIELD_DELIM: &str = "|||";

/// helper macro for initializing a regex with lazy_static!
macro_rules! regex_static {
  ($name:ident, $pattern:expr) => {
    lazy_static! {
      static ref $name: Regex = Regex::new($pattern).unwrap();
    }
  };
}

/// Splits a Hiero line into its `|||`-separated fields, trimmed.
pub fn split_fields(line: &str) -> Vec<&str> {
  line.split(FIELD_DELIM).map(str::trim).collect()
}

/// Tokenizes a pattern field: whitespace-separated words, with `[X,k]`
/// markers becoming indexed slots. A marker whose index doesn't parse
/// stays a literal.
pub fn tokenize(field: &str) -> Vec<Token> {
  regex_static!(SLOT, r"^\[X,([0-9]+)\]$");

  field
    .split_whitespace()
    .map(|word| {
      SLOT
        .captures(word)
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .map(Token::Slot)
        .unwrap_or_else(|| Token::literal(word))
    })
    .collect()
}

/// Parses one line of the Hiero grammar format:
/// `LHS ||| SOURCE ||| TARGET [||| extra fields ignored]`.
///
/// `lineno` is 1-based and only used for error reporting.
pub fn parse_hiero_rule(line: &str, lineno: usize) -> Result<HieroRule> {
  let fields = split_fields(line);
  if fields.len() < 3 {
    return Err(WasplineError::MalformedRule {
      line: lineno,
      found: fields.len(),
    });
  }

  Ok(HieroRule {
    lhs: fields[0].to_string(),
    source: tokenize(fields[1]),
    target: tokenize(fields[2]),
  })
}

impl FromStr for HieroRule {
  type Err = WasplineError;

  fn from_str(s: &str) -> Result<Self> {
    parse_hiero_rule(s, 1)
  }
}

/// Pulls the `({ NL })({ MR })` spans out of a WASP SCFG rule line,
/// returning them untrimmed. Used by the init-rule converter.
pub fn extract_scfg_spans(line: &str, lineno: usize) -> Result<(&str, &str)> {
  regex_static!(SPANS, r"\(\{(.*?)\}\)\(\{(.*?)\}\)");

  match SPANS.captures(line) {
    Some(caps) => {
      let nl = caps.get(1).unwrap().as_str();
      let mr = caps.get(2).unwrap().as_str();
      Ok((nl, mr))
    }
    None => Err(WasplineError::MalformedInitRule { line: lineno }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokenize_mixes_literals_and_slots() {
    let toks = tokenize("How many citizens [X,1]");
    assert_eq!(
      toks,
      vec![
        Token::literal("How"),
        Token::literal("many"),
        Token::literal("citizens"),
        Token::Slot(1),
      ]
    );
  }

  #[test]
  fn tokenize_accepts_indices_beyond_two() {
    assert_eq!(tokenize("[X,3]"), vec![Token::Slot(3)]);
  }

  #[test]
  fn tokenize_keeps_broken_markers_literal() {
    // not a well-formed marker, so it stays a word
    assert_eq!(tokenize("[X,]"), vec![Token::literal("[X,]")]);
  }

  #[test]
  fn tokenize_trims_field_whitespace() {
    assert_eq!(
      tokenize("  Arkansas . "),
      vec![Token::literal("Arkansas"), Token::literal(".")]
    );
  }

  #[test]
  fn parse_ignores_trailing_fields() {
    let rule: HieroRule =
      "[X] ||| borders [X,1] ||| next_to_1 [X,1] ||| 0 8.6 1 ||| 0-0 1-1"
        .parse()
        .unwrap();
    assert_eq!(rule.lhs, "[X]");
    assert_eq!(rule.source.len(), 2);
    assert_eq!(rule.target.len(), 2);
  }

  #[test]
  fn parse_rejects_short_lines() {
    let err = parse_hiero_rule("[X] ||| just two fields", 7).unwrap_err();
    match err {
      WasplineError::MalformedRule { line, found } => {
        assert_eq!(line, 7);
        assert_eq!(found, 2);
      }
      other => panic!("expected MalformedRule, got {}", other),
    }
  }

  #[test]
  fn extract_spans_finds_both_sides() {
    let line = "*n:X -> ({ wyoming })({ ' wyoming ' }) weight 0.0";
    let (nl, mr) = extract_scfg_spans(line, 1).unwrap();
    assert_eq!(nl.trim(), "wyoming");
    assert_eq!(mr.trim(), "' wyoming '");
  }

  #[test]
  fn extract_spans_rejects_bare_lines() {
    assert!(extract_scfg_spans("no spans here", 3).is_err());
  }
}
