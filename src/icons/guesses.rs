//! Filename guesses scored by the fuzzy pass.

use std::collections::BTreeSet;

use crate::models::AbilityRef;

/// Delimiter placed between tokens in the separated rendering of a guess.
pub const TOKEN_DELIMITER: &str = "_";

/// Which ability tokens a generated guess includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessFlags {
  /// Include the champion key.
  pub champion_name: bool,
  /// Include the normalised ability display name.
  pub ability_name: bool,
  /// Include the ability slot index.
  pub ability_index: bool,
  /// Include the ability key letter.
  pub ability_key: bool,
}

const fn flags(champion_name: bool, ability_name: bool, ability_index: bool, ability_key: bool) -> GuessFlags {
  GuessFlags {
    champion_name,
    ability_name,
    ability_index,
    ability_key,
  }
}

/// Every inclusion tuple scored by the fuzzy pass, in scoring order.
///
/// The tuple that includes only the champion name is absent: it would match any icon of the
/// champion equally well.
pub const GUESS_FLAGS: [GuessFlags; 15] = [
  flags(true, true, true, true),
  flags(true, true, true, false),
  flags(true, true, false, true),
  flags(true, true, false, false),
  flags(true, false, true, true),
  flags(true, false, true, false),
  flags(true, false, false, true),
  flags(false, true, true, true),
  flags(false, true, true, false),
  flags(false, true, false, true),
  flags(false, true, false, false),
  flags(false, false, true, true),
  flags(false, false, true, false),
  flags(false, false, false, true),
  flags(false, false, false, false),
];

/// A rendered filename guess together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
  /// Tokens included in the guess.
  pub flags: GuessFlags,
  /// Whether tokens were joined with [`TOKEN_DELIMITER`].
  pub separated: bool,
  /// Lower-cased filename, always ending in `.png`.
  pub filename: String,
}

/// Generate every distinct filename guess for an ability, in scoring order.
///
/// Each tuple of [`GUESS_FLAGS`] is rendered with separators first and concatenated second.
/// Renderings that collapse to an already generated filename are skipped so the first producer
/// keeps precedence.
pub fn generate_guesses(ability: &AbilityRef) -> Vec<Guess> {
  let mut builder = GuessBuilder::new(ability);
  for flags in GUESS_FLAGS {
    builder.add(flags, true);
    builder.add(flags, false);
  }
  builder.finish()
}

/// Strip the characters that never appear in icon filenames from a display name.
pub fn normalise_ability_name(name: &str) -> String {
  name
    .chars()
    .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
    .collect()
}

struct GuessBuilder {
  champion: String,
  ability_name: String,
  ability_key: String,
  ability_index: String,
  seen: BTreeSet<String>,
  result: Vec<Guess>,
}

impl GuessBuilder {
  fn new(ability: &AbilityRef) -> Self {
    Self {
      champion: ability.champion_key.clone(),
      ability_name: normalise_ability_name(&ability.ability_display_name),
      ability_key: ability.ability_key.to_string(),
      ability_index: ability.ability_index.to_string(),
      seen: BTreeSet::new(),
      result: Vec::new(),
    }
  }

  fn add(&mut self, flags: GuessFlags, separated: bool) {
    let mut tokens: Vec<&str> = Vec::with_capacity(4);
    if flags.champion_name {
      tokens.push(&self.champion);
    }
    if flags.ability_name {
      tokens.push(&self.ability_name);
    }
    if flags.ability_key {
      tokens.push(&self.ability_key);
    }
    if flags.ability_index {
      tokens.push(&self.ability_index);
    }

    let delimiter = if separated { TOKEN_DELIMITER } else { "" };
    let filename = format!("{}.png", tokens.join(delimiter)).to_lowercase();
    self.push(Guess {
      flags,
      separated,
      filename,
    });
  }

  fn finish(self) -> Vec<Guess> {
    self.result
  }

  fn push(&mut self, guess: Guess) {
    if self.seen.insert(guess.filename.clone()) {
      self.result.push(guess);
    }
  }
}
