//! Cleanup of raw decoder output into well-formed MR queries. Words the
//! decoder passed through untranslated are recognized by building the set
//! of words that only ever occur on the grammar's NL side; those are
//! dropped, and each line is wrapped in `answer(...)` with its parentheses
//! balanced.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;
use crate::parse_rule::parse_hiero_rule;
use crate::rules::Token;

/// Words appearing on the grammar's source side but never on its target
/// side (quote-stripped target words count as occurrences too, so `texas`
/// is not NL-only when the MR side has `'texas'`).
pub fn nl_only_vocabulary(grammar: impl BufRead) -> Result<HashSet<String>> {
  let mut nl = HashSet::new();
  let mut mr = HashSet::new();

  for (idx, line) in grammar.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }

    let rule = parse_hiero_rule(&line, idx + 1)?;
    for word in rule.source.iter().filter_map(Token::get_literal) {
      nl.insert(word.to_string());
    }
    for word in rule.target.iter().filter_map(Token::get_literal) {
      mr.insert(word.to_string());
      mr.insert(word.replace('\'', ""));
    }
  }

  Ok(&nl - &mr)
}

/// Drops NL-only words, wraps the line in `answer(...)`, and closes any
/// parentheses left open.
pub fn postprocess_line(line: &str, nl_only: &HashSet<String>) -> String {
  let kept: Vec<&str> = line
    .split_whitespace()
    .filter(|word| {
      let drop = nl_only.contains(*word);
      if drop {
        debug!(word, "dropping untranslated word");
      }
      !drop
    })
    .collect();

  let mut out = format!("answer({}", kept.join(" "));
  let open = out.matches('(').count();
  let close = out.matches(')').count();
  for _ in close..open {
    out.push(')');
  }
  out
}

#[derive(Debug, Clone)]
pub struct PostprocessConfig {
  pub grammar: PathBuf,
  pub input: PathBuf,
  pub output: PathBuf,
}

impl Default for PostprocessConfig {
  fn default() -> Self {
    Self {
      grammar: PathBuf::from("grammar"),
      input: PathBuf::from("output"),
      output: PathBuf::from("testMRRes.txt"),
    }
  }
}

/// Streams decoder output through [`postprocess_line`], one line each.
pub fn postprocess(
  grammar: impl BufRead,
  decoded: impl BufRead,
  writer: &mut impl Write,
) -> Result<usize> {
  let nl_only = nl_only_vocabulary(grammar)?;
  let mut written = 0;

  for line in decoded.lines() {
    let line = line?;
    writeln!(writer, "{}", postprocess_line(line.trim(), &nl_only))?;
    written += 1;
  }

  Ok(written)
}

/// File-to-file wrapper around [`postprocess`].
pub fn postprocess_file(config: &PostprocessConfig) -> Result<usize> {
  let grammar = BufReader::new(File::open(&config.grammar)?);
  let decoded = BufReader::new(File::open(&config.input)?);
  let mut writer = BufWriter::new(File::create(&config.output)?);

  let written = postprocess(grammar, decoded, &mut writer)?;
  writer.flush()?;

  info!(
    lines = written,
    input = %config.input.display(),
    output = %config.output.display(),
    "postprocessed decoder output"
  );
  Ok(written)
}
