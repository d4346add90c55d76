//! Champions whose icon filenames do not follow the generic naming convention.

use crate::icons::urls::basename;
use crate::models::{AbilityKey, AbilityRef};

/// Inputs handed to each pattern generator.
#[derive(Debug, Clone)]
pub struct PatternInput {
  /// Lower-cased champion key.
  pub champion: String,
  /// Lower-cased ability key letter.
  pub key: char,
  /// Ability slot index.
  pub index: u32,
}

/// Renders one candidate filename for a champion.
pub type PatternFn = fn(&PatternInput) -> String;

/// Override rules for a single champion.
pub struct ExceptionRule {
  /// Lower-cased champion key the rule applies to.
  pub champion: &'static str,
  /// Restricts the rule to one ability slot.
  pub only_key: Option<AbilityKey>,
  /// Filename generators tried in order.
  pub patterns: &'static [PatternFn],
}

impl ExceptionRule {
  fn applies_to(&self, ability: &AbilityRef) -> bool {
    self.champion.eq_ignore_ascii_case(&ability.champion_key)
      && self.only_key.is_none_or(|key| key == ability.ability_key)
  }
}

/// Known irregular naming schemes keyed by champion.
pub static EXCEPTION_TABLE: &[ExceptionRule] = &[
  // hweiqq, hweiqw, hweiqe: the second letter is the sub-spell.
  ExceptionRule {
    champion: "hwei",
    only_key: None,
    patterns: &[
      |p| format!("{}{}q.png", p.champion, p.key),
      |p| format!("{}{}w.png", p.champion, p.key),
      |p| format!("{}{}e.png", p.champion, p.key),
      |p| format!("{}{}{}{}.png", p.champion, p.key, p.key, p.index),
    ],
  },
  ExceptionRule {
    champion: "heimerdinger",
    only_key: None,
    patterns: &[
      |p| format!("{}_{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}_{}_{}.png", p.champion, p.key, p.index),
    ],
  },
  // Mini and Mega forms.
  ExceptionRule {
    champion: "gnar",
    only_key: None,
    patterns: &[
      |p| format!("{}_{}.png", p.champion, p.key),
      |p| format!("{}big_{}.png", p.champion, p.key),
      |p| format!("{}_{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}big_{}{}.png", p.champion, p.key, p.index),
    ],
  },
  ExceptionRule {
    champion: "elise",
    only_key: None,
    patterns: &[
      |p| format!("{}human{}.png", p.champion, p.key),
      |p| format!("{}spider{}.png", p.champion, p.key),
      |p| format!("{}human{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}spider{}{}.png", p.champion, p.key, p.index),
    ],
  },
  ExceptionRule {
    champion: "aurelionsol",
    only_key: Some(AbilityKey::R),
    patterns: &[
      |p| format!("{}{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}{}_{}.png", p.champion, p.key, p.index),
    ],
  },
  // Evolved abilities carry a `_red` suffix.
  ExceptionRule {
    champion: "khazix",
    only_key: None,
    patterns: &[
      |p| format!("{}_{}.png", p.champion, p.key),
      |p| format!("{}_{}_red.png", p.champion, p.key),
      |p| format!("{}_{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}_{}_red{}.png", p.champion, p.key, p.index),
    ],
  },
  ExceptionRule {
    champion: "rell",
    only_key: Some(AbilityKey::W),
    patterns: &[
      |p| format!("{}{}.png", p.champion, p.key),
      |p| format!("{}mount.png", p.champion),
      |p| format!("{}{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}mount{}.png", p.champion, p.index),
    ],
  },
  ExceptionRule {
    champion: "riven",
    only_key: Some(AbilityKey::R),
    patterns: &[
      |p| format!("{}bladeoftheexile.png", p.champion),
      |p| format!("{}windscar.png", p.champion),
    ],
  },
  ExceptionRule {
    champion: "tahmkench",
    only_key: Some(AbilityKey::R),
    patterns: &[
      |p| format!("{}wrapper.png", p.champion),
      |p| format!("{}{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}{}2.png", p.champion, p.key),
    ],
  },
  ExceptionRule {
    champion: "yorick",
    only_key: Some(AbilityKey::Q),
    patterns: &[
      |p| format!("{}_{}.png", p.champion, p.key),
      |p| format!("{}_{}{}.png", p.champion, p.key, p.index),
      |p| format!("{}_{}2.png", p.champion, p.key),
    ],
  },
];

/// Candidate filenames from the exception table for `ability`, in priority order.
///
/// Returns an empty list for champions without overrides, and for overridden champions when the
/// rule is restricted to a different ability slot.
pub fn exception_patterns(ability: &AbilityRef) -> Vec<String> {
  let input = &PatternInput {
    champion: ability.champion_key.to_lowercase(),
    key: ability.ability_key.lower(),
    index: ability.ability_index,
  };

  EXCEPTION_TABLE
    .iter()
    .filter(|rule| rule.applies_to(ability))
    .flat_map(move |rule| rule.patterns.iter().map(move |pattern| pattern(input)))
    .collect()
}

/// Find the first candidate whose basename exactly matches an exception pattern.
///
/// Patterns are tried in priority order, and for each pattern the candidates in supplied order;
/// comparison is case-insensitive. The matched basename is returned with its original casing.
pub fn match_exception<'a, S: AsRef<str>>(ability: &AbilityRef, candidates: &'a [S]) -> Option<&'a str> {
  exception_patterns(ability).iter().find_map(|pattern| {
    candidates
      .iter()
      .map(|candidate| basename(candidate.as_ref()))
      .find(|name| name.eq_ignore_ascii_case(pattern))
  })
}
