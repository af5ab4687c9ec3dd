use std::fmt;

/// One element of a rule pattern: either a literal word, kept verbatim, or
/// an indexed placeholder slot linking a source sub-span to a target
/// sub-span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Literal(String),
  Slot(usize),
}

impl Token {
  pub fn literal(s: impl Into<String>) -> Self {
    Self::Literal(s.into())
  }

  pub fn is_slot(&self) -> bool {
    match self {
      Self::Slot(_) => true,
      _ => false,
    }
  }

  pub fn get_literal(&self) -> Option<&str> {
    match self {
      Self::Literal(s) => Some(s),
      _ => None,
    }
  }
}

/// Display renders the WASP form: literals verbatim, slots as `*n:X#k`.
impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Literal(s) => write!(f, "{}", s),
      Self::Slot(idx) => write!(f, "*n:X#{}", idx),
    }
  }
}

/// A synchronous rule in the Hiero extractor's format: an LHS marker and a
/// source/target pattern pair sharing indexed slots. Slot indices appearing
/// on the target side are assumed to be bound on the source side; this is a
/// precondition of the input, not something we validate.
#[derive(Debug, Clone, PartialEq)]
pub struct HieroRule {
  pub lhs: String,
  pub source: Vec<Token>,
  pub target: Vec<Token>,
}

impl HieroRule {
  /// An augmented (linking) rule carries at least one placeholder slot in
  /// its source pattern. Lexical rules carry none.
  pub fn is_augmented(&self) -> bool {
    self.source.iter().any(Token::is_slot)
  }
}

impl fmt::Display for HieroRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} |||", self.lhs)?;
    for t in self.source.iter() {
      match t {
        Token::Literal(s) => write!(f, " {}", s)?,
        Token::Slot(idx) => write!(f, " [X,{}]", idx)?,
      }
    }
    write!(f, " |||")?;
    for t in self.target.iter() {
      match t {
        Token::Literal(s) => write!(f, " {}", s)?,
        Token::Slot(idx) => write!(f, " [X,{}]", idx)?,
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonterminalKind {
  /// Top-level rule with placeholder slots; gets `*t:Bound` markers.
  Query,
  /// Fully lexicalized rule.
  Generic,
}

impl fmt::Display for NonterminalKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Query => write!(f, "Query"),
      Self::Generic => write!(f, "X"),
    }
  }
}

/// A rule in WASP's SCFG format, ready for serialization. Built once from a
/// `HieroRule`, written out, and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ScfgRule {
  pub kind: NonterminalKind,
  pub source: Vec<Token>,
  pub target: Vec<Token>,
  pub weight: f64,
}

impl From<HieroRule> for ScfgRule {
  fn from(rule: HieroRule) -> Self {
    let kind = if rule.is_augmented() {
      NonterminalKind::Query
    } else {
      NonterminalKind::Generic
    };
    Self {
      kind,
      source: rule.source,
      target: rule.target,
      weight: 0.0,
    }
  }
}

impl fmt::Display for ScfgRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bound = match self.kind {
      NonterminalKind::Query => " *t:Bound",
      NonterminalKind::Generic => "",
    };

    write!(f, "*n:{} -> ({{{}", self.kind, bound)?;
    for t in self.source.iter() {
      write!(f, " {}", t)?;
    }
    write!(f, "{} }})({{", bound)?;
    for t in self.target.iter() {
      write!(f, " {}", t)?;
    }
    // {:?} keeps the fractional part that {} drops for round floats
    write!(f, " }}) weight {:?}", self.weight)
  }
}
