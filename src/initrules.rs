//! The reverse direction: seeds a Hiero grammar from WASP's lexical SCFG
//! init rules, so the extractor and the parser can bootstrap each other.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::{Result, WasplineError};
use crate::parse_rule::extract_scfg_spans;

/// A lexical pairing of NL words with one MR term, pulled out of an SCFG
/// init rule's `({ NL })({ MR })` spans.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalEntry {
  pub nl: Vec<String>,
  pub mr: String,
}

impl LexicalEntry {
  /// Parses one init-rule line. MR spans come quote-padded from WASP
  /// (`' wyoming '`), so the quotes are snugged back onto the word.
  pub fn parse(line: &str, lineno: usize) -> Result<Self> {
    let (nl, mr) = extract_scfg_spans(line, lineno)?;

    let nl: Vec<String> = nl.split_whitespace().map(str::to_string).collect();
    if nl.is_empty() {
      return Err(WasplineError::MalformedInitRule { line: lineno });
    }

    let mr = mr.replace("' ", "'").replace(" '", "'").trim().to_string();
    Ok(Self { nl, mr })
  }
}

/// Renders the Hiero grammar line, with a monotone word alignment pair per
/// NL word.
impl fmt::Display for LexicalEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[X] ||| {} ||| {} ||| 5 5 5 5 0 0 |||", self.nl.join(" "), self.mr)?;
    for i in 0..self.nl.len() {
      write!(f, " {}-{}", i, i)?;
    }
    Ok(())
  }
}

/// Input/output locations for an init-rule conversion run.
#[derive(Debug, Clone)]
pub struct InitRulesConfig {
  pub input: PathBuf,
  pub output: PathBuf,
}

impl Default for InitRulesConfig {
  fn default() -> Self {
    Self {
      input: PathBuf::from("scfg-init-rules"),
      output: PathBuf::from("scfg-init-rules.txt"),
    }
  }
}

/// Streams init rules from `reader` and writes one Hiero grammar line per
/// non-empty input line. Fail-fast like [`crate::convert::convert`].
pub fn convert_init_rules(reader: impl BufRead, writer: &mut impl Write) -> Result<usize> {
  let mut converted = 0;

  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }

    let entry = LexicalEntry::parse(&line, idx + 1)?;
    writeln!(writer, "{}", entry)?;
    converted += 1;
  }

  Ok(converted)
}

/// File-to-file wrapper around [`convert_init_rules`].
pub fn convert_init_rules_file(config: &InitRulesConfig) -> Result<usize> {
  let reader = BufReader::new(File::open(&config.input)?);
  let mut writer = BufWriter::new(File::create(&config.output)?);

  let converted = convert_init_rules(reader, &mut writer)?;
  writer.flush()?;

  info!(
    rules = converted,
    input = %config.input.display(),
    output = %config.output.display(),
    "seeded grammar from init rules"
  );
  Ok(converted)
}
