#[macro_use]
extern crate lazy_static;

pub mod convert;
pub mod error;
pub mod initrules;
pub mod parse_rule;
pub mod postprocess;
pub mod rules;
pub mod score;
pub mod split;
pub mod utils;

pub use crate::convert::{convert, convert_file, ConvertConfig};
pub use crate::error::{Result, WasplineError};
pub use crate::initrules::{convert_init_rules, convert_init_rules_file, InitRulesConfig};
pub use crate::rules::{HieroRule, NonterminalKind, ScfgRule, Token};
pub use crate::utils::Err;

#[test]
fn test_convert_round_trip_through_init_rules() {
  // seed a grammar from WASP init rules, then convert it back to SCFG
  let init = "\
*n:StateName -> ({ wyoming })({ ' wyoming ' }) weight 0.0
*n:X -> ({ great falls })({ cityid }) weight 0.0
";

  let mut hiero = Vec::new();
  convert_init_rules(init.as_bytes(), &mut hiero).unwrap();

  let mut scfg = Vec::new();
  convert(hiero.as_slice(), &mut scfg).unwrap();

  let scfg = String::from_utf8(scfg).unwrap();
  let lines: Vec<&str> = scfg.lines().collect();
  assert_eq!(
    lines,
    vec![
      "*n:X -> ({ wyoming })({ 'wyoming' }) weight 0.0",
      "*n:X -> ({ great falls })({ cityid }) weight 0.0",
    ]
  );
}
