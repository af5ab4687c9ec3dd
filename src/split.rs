//! Random train/dev/test partition of a parallel NL/MR corpus. Both sides
//! are cut with the same shuffled index list, so sentence pairs stay
//! aligned across the output files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::error::{Result, WasplineError};
use crate::utils::write_indexed_lines;

#[derive(Debug, Clone)]
pub struct SplitConfig {
  pub nl_input: PathBuf,
  pub mr_input: PathBuf,
  pub out_dir: PathBuf,
  /// Number of training pairs.
  pub train: usize,
  /// Number of dev pairs; the remainder becomes the test set.
  pub dev: usize,
  /// Fixed seed for a reproducible split.
  pub seed: Option<u64>,
}

impl Default for SplitConfig {
  fn default() -> Self {
    Self {
      nl_input: PathBuf::from("nl.txt"),
      mr_input: PathBuf::from("MRL.txt"),
      out_dir: PathBuf::from("."),
      train: 550,
      dev: 50,
      seed: None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
  pub train: usize,
  pub dev: usize,
  pub test: usize,
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
  Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect())
}

/// Shuffles the corpus indices and writes the six split files plus a mask
/// file recording which original indices landed in the test set.
pub fn split_corpus(config: &SplitConfig) -> Result<SplitSummary> {
  let nl = read_lines(&config.nl_input)?;
  let mr = read_lines(&config.mr_input)?;

  if nl.len() != mr.len() {
    return Err(WasplineError::CorpusMismatch {
      nl: nl.len(),
      mr: mr.len(),
    });
  }
  if config.train + config.dev > nl.len() {
    return Err(WasplineError::SplitTooLarge {
      train: config.train,
      dev: config.dev,
      total: nl.len(),
    });
  }

  let mut indices: Vec<usize> = (0..nl.len()).collect();
  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  indices.shuffle(&mut rng);

  let (train_idx, rest) = indices.split_at(config.train);
  let (dev_idx, test_idx) = rest.split_at(config.dev);

  let out = |name: &str| config.out_dir.join(name);
  write_indexed_lines(out("training.nl-mr.nl"), &nl, train_idx)?;
  write_indexed_lines(out("training.nl-mr.mr"), &mr, train_idx)?;
  write_indexed_lines(out("dev.nl-mr.nl"), &nl, dev_idx)?;
  write_indexed_lines(out("dev.nl-mr.mr"), &mr, dev_idx)?;
  write_indexed_lines(out("devtest.nl-mr.nl"), &nl, test_idx)?;
  write_indexed_lines(out("devtest.nl-mr.mr"), &mr, test_idx)?;

  let mask = test_idx
    .iter()
    .map(|idx| idx.to_string())
    .collect::<Vec<_>>()
    .join(" ");
  let mut mask_file = fs::File::create(out("testMask.txt"))?;
  writeln!(mask_file, "{}", mask)?;

  let summary = SplitSummary {
    train: train_idx.len(),
    dev: dev_idx.len(),
    test: test_idx.len(),
  };
  info!(
    train = summary.train,
    dev = summary.dev,
    test = summary.test,
    "split corpus"
  );
  Ok(summary)
}
