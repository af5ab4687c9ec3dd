//! The core pass of the pipeline: rewrites a Hiero extractor grammar into
//! WASP's SCFG rule format, one line in, one line out, order preserved.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;
use crate::parse_rule::parse_hiero_rule;
use crate::rules::ScfgRule;

/// Input/output locations for a conversion run. Defaults are the file
/// names the pipeline has always used.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
  pub input: PathBuf,
  pub output: PathBuf,
}

impl Default for ConvertConfig {
  fn default() -> Self {
    Self {
      input: PathBuf::from("grammar"),
      output: PathBuf::from("newscfg.txt"),
    }
  }
}

/// Streams Hiero rules from `reader` and writes one WASP SCFG line per
/// non-empty input line to `writer`. Returns the number of rules written.
///
/// Fail-fast: the first malformed line aborts with its line number, leaving
/// whatever was already written in the output.
pub fn convert(reader: impl BufRead, writer: &mut impl Write) -> Result<usize> {
  let mut converted = 0;

  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      debug!(line = idx + 1, "skipping empty line");
      continue;
    }

    let rule = parse_hiero_rule(&line, idx + 1)?;
    writeln!(writer, "{}", ScfgRule::from(rule))?;
    converted += 1;
  }

  Ok(converted)
}

/// File-to-file wrapper around [`convert`].
pub fn convert_file(config: &ConvertConfig) -> Result<usize> {
  let reader = BufReader::new(File::open(&config.input)?);
  let mut writer = BufWriter::new(File::create(&config.output)?);

  let converted = convert(reader, &mut writer)?;
  writer.flush()?;

  info!(
    rules = converted,
    input = %config.input.display(),
    output = %config.output.display(),
    "converted grammar"
  );
  Ok(converted)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::WasplineError;

  fn convert_str(input: &str) -> Result<String> {
    let mut out = Vec::new();
    convert(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
  }

  #[test]
  fn lexical_rule() {
    let out = convert_str("[X] ||| Arkansas . ||| stateid 'arkansas' |||\n").unwrap();
    assert_eq!(
      out,
      "*n:X -> ({ Arkansas . })({ stateid 'arkansas' }) weight 0.0\n"
    );
  }

  #[test]
  fn augmented_rule() {
    let out = convert_str(
      "[X] ||| How many citizens [X,1] ||| answer population_1 [X,1] ||| 0 8.66167 1 1.00000 0 4.70953 ||| 0-0 2-1\n",
    )
    .unwrap();
    assert_eq!(
      out,
      "*n:Query -> ({ *t:Bound How many citizens *n:X#1 *t:Bound })({ answer population_1 *n:X#1 }) weight 0.0\n"
    );
  }

  #[test]
  fn order_and_count_preserved() {
    let input = "\
[X] ||| a ||| 'a' |||
[X] ||| b [X,1] ||| f [X,1] |||
[X] ||| c ||| 'c' |||
";
    let out = convert_str(input).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("*n:X -> ({ a }"));
    assert!(lines[1].starts_with("*n:Query -> "));
    assert!(lines[2].starts_with("*n:X -> ({ c }"));
  }

  #[test]
  fn empty_lines_are_skipped() {
    let out = convert_str("\n[X] ||| a ||| 'a' |||\n\n").unwrap();
    assert_eq!(out.lines().count(), 1);
  }

  #[test]
  fn malformed_line_aborts_with_partial_output() {
    let input = "\
[X] ||| a ||| 'a' |||
[X] ||| only two fields
[X] ||| c ||| 'c' |||
";
    let mut out = Vec::new();
    let err = convert(input.as_bytes(), &mut out).unwrap_err();

    match err {
      WasplineError::MalformedRule { line, found } => {
        assert_eq!(line, 2);
        assert_eq!(found, 2);
      }
      other => panic!("expected MalformedRule, got {}", other),
    }
    // the line before the failure was already written
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
  }
}
