//! Precision/recall/F-measure over a WASP evaluator log. The log marks
//! each test sentence with a `correct translation:` header, flags wrong
//! translations with a leading `*`, and lists every produced parse on a
//! line starting with `parse`.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WasplineError};

/// Raw counters from one pass over the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounts {
  /// Test sentences seen.
  pub sentences: usize,
  /// Sentences whose translation was wrong.
  pub wrong: usize,
  /// Parses produced by the decoder (a sentence may have several).
  pub parses: usize,
}

impl EvalCounts {
  pub fn scores(&self) -> Result<Scores> {
    if self.sentences == 0 {
      return Err(WasplineError::EmptyLog("test sentences"));
    }
    if self.parses == 0 {
      return Err(WasplineError::EmptyLog("parses"));
    }

    let correct = self.sentences.saturating_sub(self.wrong) as f64;
    let precision = correct / self.sentences as f64;
    let recall = correct / self.parses as f64;
    let f_measure = if precision + recall == 0.0 {
      0.0
    } else {
      2.0 * precision * recall / (precision + recall)
    };

    Ok(Scores {
      precision,
      recall,
      f_measure,
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
  pub precision: f64,
  pub recall: f64,
  pub f_measure: f64,
}

impl fmt::Display for Scores {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "precision: {}", self.precision)?;
    writeln!(f, "recall: {}", self.recall)?;
    write!(f, "f-measure: {}", self.f_measure)
  }
}

/// Single pass over the log, counting the three line kinds.
pub fn count_log(reader: impl BufRead) -> Result<EvalCounts> {
  let mut counts = EvalCounts::default();

  for line in reader.lines() {
    let line = line?;
    if line.starts_with("correct translation:") {
      counts.sentences += 1;
    }
    if line.starts_with('*') {
      counts.wrong += 1;
    }
    if line.starts_with("parse") {
      counts.parses += 1;
    }
  }

  debug!(
    sentences = counts.sentences,
    wrong = counts.wrong,
    parses = counts.parses,
    "counted evaluator log"
  );
  Ok(counts)
}

pub fn score_file(path: impl AsRef<Path>) -> Result<Scores> {
  let reader = BufReader::new(File::open(path)?);
  count_log(reader)?.scores()
}

#[cfg(test)]
mod tests {
  use super::*;

  const LOG: &str = "\
correct translation: answer(stateid('arkansas'))
parse 1: answer(stateid('arkansas'))
correct translation: answer(population_1(stateid('texas')))
parse 1: answer(population_1(stateid('texas')))
parse 2: answer(stateid('texas'))
* wrong translation
correct translation: answer(riverid('ohio'))
parse 1: answer(riverid('ohio'))
";

  #[test]
  fn counts_all_three_line_kinds() {
    let counts = count_log(LOG.as_bytes()).unwrap();
    assert_eq!(
      counts,
      EvalCounts {
        sentences: 3,
        wrong: 1,
        parses: 4
      }
    );
  }

  #[test]
  fn scores_from_counts() {
    let scores = EvalCounts {
      sentences: 4,
      wrong: 1,
      parses: 6,
    }
    .scores()
    .unwrap();

    assert_eq!(scores.precision, 0.75);
    assert_eq!(scores.recall, 0.5);
    let expected_f = 2.0 * 0.75 * 0.5 / 1.25;
    assert!((scores.f_measure - expected_f).abs() < 1e-12);
  }

  #[test]
  fn perfect_log_scores_one() {
    let scores = EvalCounts {
      sentences: 5,
      wrong: 0,
      parses: 5,
    }
    .scores()
    .unwrap();
    assert_eq!(scores.precision, 1.0);
    assert_eq!(scores.recall, 1.0);
    assert_eq!(scores.f_measure, 1.0);
  }

  #[test]
  fn all_wrong_gives_zero_f_without_dividing_by_zero() {
    let scores = EvalCounts {
      sentences: 2,
      wrong: 2,
      parses: 2,
    }
    .scores()
    .unwrap();
    assert_eq!(scores.precision, 0.0);
    assert_eq!(scores.f_measure, 0.0);
  }

  #[test]
  fn empty_log_is_an_error() {
    assert!(matches!(
      count_log("".as_bytes()).unwrap().scores().unwrap_err(),
      WasplineError::EmptyLog(_)
    ));
  }

  #[test]
  fn sentences_without_parses_are_an_error() {
    let counts = EvalCounts {
      sentences: 2,
      wrong: 0,
      parses: 0,
    };
    assert!(matches!(
      counts.scores().unwrap_err(),
      WasplineError::EmptyLog("parses")
    ));
  }
}
