use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use waspline::convert::{convert_file, ConvertConfig};
use waspline::initrules::{convert_init_rules_file, InitRulesConfig};
use waspline::postprocess::{postprocess_file, PostprocessConfig};
use waspline::score::score_file;
use waspline::split::{split_corpus, SplitConfig};
use waspline::Err;

fn usage(prog_name: &str) -> String {
  format!(
    r"Usage: {} COMMAND [args]

Commands:
  convert [GRAMMAR] [OUT]       Hiero grammar -> WASP SCFG
                                (defaults: grammar, newscfg.txt)
  init-rules [RULES] [OUT]      WASP init rules -> Hiero grammar
                                (defaults: scfg-init-rules, scfg-init-rules.txt)
  split [NL] [MR]               partition a parallel corpus into
                                train/dev/test (defaults: nl.txt, MRL.txt)
    --train N                   training pairs (default 550)
    --dev N                     dev pairs (default 50; the rest is test)
    --seed N                    fixed shuffle seed for a reproducible split
    --out-dir DIR               where the split files go (default .)
  score LOG                     precision/recall/F over an evaluator log
  postprocess [GRAMMAR] [IN] [OUT]
                                clean decoder output into answer(...) form
                                (defaults: grammar, output, testMRRes.txt)

Options:
  -h, --help    Print this message",
    prog_name
  )
}

enum Command {
  Convert(ConvertConfig),
  InitRules(InitRulesConfig),
  Split(SplitConfig),
  Score { log: PathBuf },
  Postprocess(PostprocessConfig),
}

struct Args {
  command: Command,
}

impl Args {
  fn make_error_message(msg: &str, prog_name: impl AsRef<str>) -> String {
    format!("argument error: {}.\n\n{}", msg, usage(prog_name.as_ref()))
  }

  fn parse(v: Vec<String>) -> Result<Self, String> {
    if v.is_empty() {
      return Err(Self::make_error_message("bad argument vector", "waspline"));
    }

    let mut iter = v.into_iter();
    let prog_name = iter.next().unwrap();

    let command = match iter.next().as_deref() {
      Some("-h") | Some("--help") => {
        println!("{}", usage(&prog_name));
        process::exit(0);
      }
      Some("convert") => {
        let mut config = ConvertConfig::default();
        Self::positional_paths(iter, &mut [&mut config.input, &mut config.output])
          .map_err(|e| Self::make_error_message(&e, &prog_name))?;
        Command::Convert(config)
      }
      Some("init-rules") => {
        let mut config = InitRulesConfig::default();
        Self::positional_paths(iter, &mut [&mut config.input, &mut config.output])
          .map_err(|e| Self::make_error_message(&e, &prog_name))?;
        Command::InitRules(config)
      }
      Some("split") => Command::Split(
        Self::parse_split(iter).map_err(|e| Self::make_error_message(&e, &prog_name))?,
      ),
      Some("score") => {
        let log = iter
          .next()
          .ok_or_else(|| Self::make_error_message("score needs a log file", &prog_name))?;
        if iter.next().is_some() {
          return Err(Self::make_error_message("too many arguments", &prog_name));
        }
        Command::Score {
          log: PathBuf::from(log),
        }
      }
      Some("postprocess") => {
        let mut config = PostprocessConfig::default();
        Self::positional_paths(
          iter,
          &mut [&mut config.grammar, &mut config.input, &mut config.output],
        )
        .map_err(|e| Self::make_error_message(&e, &prog_name))?;
        Command::Postprocess(config)
      }
      Some(other) => {
        return Err(Self::make_error_message(
          &format!("unknown command `{}`", other),
          &prog_name,
        ));
      }
      None => return Err(Self::make_error_message("missing command", &prog_name)),
    };

    Ok(Self { command })
  }

  /// Fills the given path slots, in order, from the remaining positional
  /// arguments. Missing slots keep their defaults.
  fn positional_paths(
    args: impl Iterator<Item = String>,
    slots: &mut [&mut PathBuf],
  ) -> Result<(), String> {
    let mut slot = 0;
    for arg in args {
      if slot >= slots.len() {
        return Err("too many arguments".to_string());
      }
      *slots[slot] = PathBuf::from(arg);
      slot += 1;
    }
    Ok(())
  }

  fn numeric_flag<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    value
      .ok_or_else(|| format!("{} needs a value", flag))?
      .parse()
      .map_err(|_| format!("{} needs a number", flag))
  }

  fn parse_split(mut args: impl Iterator<Item = String>) -> Result<SplitConfig, String> {
    let mut config = SplitConfig::default();
    let mut positionals: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
      match arg.as_str() {
        "--train" => config.train = Self::numeric_flag("--train", args.next())?,
        "--dev" => config.dev = Self::numeric_flag("--dev", args.next())?,
        "--seed" => config.seed = Some(Self::numeric_flag("--seed", args.next())?),
        "--out-dir" => {
          config.out_dir =
            PathBuf::from(args.next().ok_or_else(|| "--out-dir needs a value".to_string())?)
        }
        _ => positionals.push(arg),
      }
    }

    let mut paths = positionals.into_iter();
    if let Some(nl) = paths.next() {
      config.nl_input = PathBuf::from(nl);
    }
    if let Some(mr) = paths.next() {
      config.mr_input = PathBuf::from(mr);
    }
    if paths.next().is_some() {
      return Err("too many arguments".to_string());
    }
    Ok(config)
  }
}

fn run(command: Command) -> Result<(), Err> {
  match command {
    Command::Convert(config) => {
      let rules = convert_file(&config)?;
      println!("converted {} rule{}", rules, if rules == 1 { "" } else { "s" });
    }
    Command::InitRules(config) => {
      let rules = convert_init_rules_file(&config)?;
      println!("wrote {} grammar line{}", rules, if rules == 1 { "" } else { "s" });
    }
    Command::Split(config) => {
      let summary = split_corpus(&config)?;
      println!(
        "split corpus: {} train / {} dev / {} test",
        summary.train, summary.dev, summary.test
      );
    }
    Command::Score { log } => {
      println!("{}", score_file(log)?);
    }
    Command::Postprocess(config) => {
      let lines = postprocess_file(&config)?;
      println!("postprocessed {} line{}", lines, if lines == 1 { "" } else { "s" });
    }
  }
  Ok(())
}

fn main() -> Result<(), Err> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args = match Args::parse(env::args().collect()) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("{}", msg);
      process::exit(255);
    }
  };

  run(args.command)
}
