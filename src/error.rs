use thiserror::Error;

/// Errors surfaced by the pipeline tools.
///
/// The conversion passes are fail-fast: the first malformed line aborts the
/// run with its 1-based line number. Output written before the failure is
/// left in place, but the caller sees the error and can flag the artifact
/// as incomplete.
#[derive(Error, Debug)]
pub enum WasplineError {
  #[error("line {line}: expected at least 3 `|||`-separated fields, found {found}")]
  MalformedRule { line: usize, found: usize },

  #[error("line {line}: no `({{ ... }})({{ ... }})` spans in init rule")]
  MalformedInitRule { line: usize },

  #[error("parallel corpus length mismatch: {nl} NL lines vs {mr} MR lines")]
  CorpusMismatch { nl: usize, mr: usize },

  #[error("split sizes {train}+{dev} exceed corpus size {total}")]
  SplitTooLarge { train: usize, dev: usize, total: usize },

  #[error("evaluator log has no {0}; cannot compute scores")]
  EmptyLog(&'static str),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WasplineError>;
