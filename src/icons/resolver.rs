//! Exception-first, fuzzy-second icon resolution.

use tracing::debug;

use crate::config::UpdaterConfig;
use crate::icons::exceptions::match_exception;
use crate::icons::guesses::generate_guesses;
use crate::icons::similarity::ratio;
use crate::icons::urls::{asset_icon_url, basename, cdn_fallback_url};
use crate::models::{AbilityRef, MatchResult};

/// Best (candidate, guess) pair found by the fuzzy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
  /// Candidate basename with its original casing.
  pub filename: String,
  /// Guess that produced the score.
  pub guess: String,
  /// Similarity ratio in `0..=100`.
  pub score: u8,
}

/// Score every generated guess against every candidate and keep the single best pair.
///
/// Only strictly greater scores replace the current best, so ties keep the pair found first.
/// Returns `None` when there are no candidates.
pub fn best_fuzzy_match<S: AsRef<str>>(ability: &AbilityRef, candidates: &[S]) -> Option<FuzzyMatch> {
  let names: Vec<(&str, String)> = candidates
    .iter()
    .map(|candidate| {
      let name = basename(candidate.as_ref());
      (name, name.to_lowercase())
    })
    .collect();

  let mut best: Option<FuzzyMatch> = None;
  for guess in generate_guesses(ability) {
    for (name, lowered) in &names {
      let score = ratio(&guess.filename, lowered);
      if best.as_ref().is_none_or(|current| score > current.score) {
        best = Some(FuzzyMatch {
          filename: (*name).to_string(),
          guess: guess.filename.clone(),
          score,
        });
      }
    }
  }
  best
}

/// Maps ability metadata onto icon URLs on the configured hosts.
#[derive(Debug, Clone)]
pub struct IconResolver {
  asset_host: String,
  cdn_host: String,
  match_threshold: u8,
}

impl Default for IconResolver {
  fn default() -> Self {
    Self::from_config(&UpdaterConfig::default())
  }
}

impl IconResolver {
  /// Build a resolver using the hosts and threshold of `config`.
  pub fn from_config(config: &UpdaterConfig) -> Self {
    Self {
      asset_host: config.asset_host.clone(),
      cdn_host: config.cdn_host.clone(),
      match_threshold: config.match_threshold,
    }
  }

  /// Resolve the icon of `ability` among the filenames listed for its champion.
  ///
  /// Exact exception-table hits win with confidence 1.0. Otherwise the best fuzzy match is used
  /// when its score exceeds the threshold; failing that the CDN fallback URL is returned and
  /// `confidence` carries the best score seen so callers can report weak champions.
  pub fn resolve<S: AsRef<str>>(&self, ability: &AbilityRef, candidates: &[S]) -> MatchResult {
    if let Some(filename) = match_exception(ability, candidates) {
      debug!(
        champion = %ability.champion_key,
        key = %ability.ability_key,
        filename,
        "matched exception pattern"
      );
      return self.matched(ability, filename, 1.0);
    }

    let fuzzy = best_fuzzy_match(ability, candidates);
    match fuzzy {
      Some(found) if found.score > self.match_threshold => {
        debug!(
          champion = %ability.champion_key,
          key = %ability.ability_key,
          filename = %found.filename,
          guess = %found.guess,
          score = found.score,
          "matched fuzzy guess"
        );
        self.matched(ability, &found.filename, f64::from(found.score) / 100.0)
      }
      other => {
        let score = other.map_or(0, |found| found.score);
        debug!(
          champion = %ability.champion_key,
          key = %ability.ability_key,
          score,
          "no icon match, using CDN fallback"
        );
        MatchResult {
          filename: None,
          confidence: f64::from(score) / 100.0,
          resolved_url: cdn_fallback_url(&self.cdn_host, &ability.champion_key, ability.ability_key),
        }
      }
    }
  }

  fn matched(&self, ability: &AbilityRef, filename: &str, confidence: f64) -> MatchResult {
    MatchResult {
      filename: Some(filename.to_string()),
      confidence,
      resolved_url: asset_icon_url(&self.asset_host, &ability.champion_key, filename),
    }
  }
}

/// Resolve against the public CommunityDragon hosts with the default threshold.
pub fn resolve<S: AsRef<str>>(ability: &AbilityRef, candidates: &[S]) -> MatchResult {
  IconResolver::default().resolve(ability, candidates)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::AbilityKey;

  const ASSET_PREFIX: &str = "https://raw.communitydragon.org/latest/game/assets/characters";

  #[test]
  fn riven_ultimate_uses_exception_filename() {
    let ability = AbilityRef::new("Riven", AbilityKey::R, 0, "Blade of the Exile");
    let candidates = ["riven_q.png", "rivenbladeoftheexile.png", "rivenwindscar.png"];

    let result = resolve(&ability, &candidates);
    assert_eq!(result.filename.as_deref(), Some("rivenbladeoftheexile.png"));
    assert_eq!(result.confidence, 1.0);
    assert_eq!(
      result.resolved_url,
      format!("{ASSET_PREFIX}/riven/hud/icons2d/rivenbladeoftheexile.png")
    );
  }

  #[test]
  fn gnar_mega_form_matches_exactly() {
    let ability = AbilityRef::new("Gnar", AbilityKey::E, 0, "Hop");
    let result = resolve(&ability, &["gnarbig_e.png", "other.png"]);

    assert_eq!(result.filename.as_deref(), Some("gnarbig_e.png"));
    assert_eq!(result.confidence, 1.0);
    assert!(result.resolved_url.ends_with("/gnar/hud/icons2d/gnarbig_e.png"));
  }

  #[test]
  fn every_exception_champion_resolves_its_irregular_filename() {
    let cases = [
      ("Hwei", AbilityKey::Q, 0, "hweiqw.png"),
      ("Heimerdinger", AbilityKey::Q, 1, "heimerdinger_q1.png"),
      ("Elise", AbilityKey::W, 0, "elisespiderw.png"),
      ("AurelionSol", AbilityKey::R, 2, "aurelionsolr2.png"),
      ("Khazix", AbilityKey::E, 0, "khazix_e_red.png"),
      ("Rell", AbilityKey::W, 0, "rellmount.png"),
      ("TahmKench", AbilityKey::R, 0, "tahmkenchwrapper.png"),
      ("Yorick", AbilityKey::Q, 0, "yorick_q2.png"),
    ];

    for (champion, key, index, filename) in cases {
      let ability = AbilityRef::new(champion, key, index, "Irrelevant Name");
      let result = resolve(&ability, &["unrelated.png", filename]);
      assert_eq!(result.filename.as_deref(), Some(filename), "{champion}");
      assert_eq!(result.confidence, 1.0, "{champion}");
      assert_eq!(
        result.resolved_url,
        format!(
          "{ASSET_PREFIX}/{}/hud/icons2d/{filename}",
          champion.to_lowercase()
        )
      );
    }
  }

  #[test]
  fn generic_pass_finds_champion_key_filenames() {
    let ability = AbilityRef::new("Ashe", AbilityKey::Q, 0, "Frost Shot");
    let result = resolve(&ability, &["ashe_q.png"]);

    assert_eq!(result.filename.as_deref(), Some("ashe_q.png"));
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.resolved_url, format!("{ASSET_PREFIX}/ashe/hud/icons2d/ashe_q.png"));
  }

  #[test]
  fn generic_pass_scores_exact_champion_ability_name_at_100() {
    let ability = AbilityRef::new("Lux", AbilityKey::E, 0, "Lucent Singularity");
    let candidates = ["lux_q.png", "lux_lucentsingularity.png", "lux_passive.png"];

    let found = best_fuzzy_match(&ability, &candidates).expect("candidates are present");
    assert_eq!(found.filename, "lux_lucentsingularity.png");
    assert_eq!(found.score, 100);
  }

  #[test]
  fn empty_candidates_fall_back_to_cdn() {
    let ability = AbilityRef::new("Ashe", AbilityKey::W, 0, "Volley");
    let result = resolve::<&str>(&ability, &[]);

    assert_eq!(result.filename, None);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(
      result.resolved_url,
      "https://cdn.communitydragon.org/latest/champion/Ashe/ability-icon/W"
    );
  }

  #[test]
  fn weak_matches_fall_back_to_cdn() {
    let ability = AbilityRef::new("Ashe", AbilityKey::W, 0, "Volley");
    let result = resolve(&ability, &["zzzzzzzzzzzzzzzzzzzzzzzzzzzz.dds"]);

    assert!(!result.is_matched());
    assert!(result.confidence <= 0.5);
    assert!(result.resolved_url.ends_with("/champion/Ashe/ability-icon/W"));
  }

  #[test]
  fn exception_champion_without_hit_uses_generic_pass() {
    let ability = AbilityRef::new("Riven", AbilityKey::Q, 0, "Broken Wings");
    let result = resolve(&ability, &["riven_q.png", "rivenbladeoftheexile.png"]);

    assert_eq!(result.filename.as_deref(), Some("riven_q.png"));
    assert_eq!(result.confidence, 1.0);
  }

  #[test]
  fn matching_ignores_case() {
    let ability = AbilityRef::new("Ahri", AbilityKey::Q, 0, "Orb of Deception");
    let upper = resolve(&ability, &["Ahri_Q.PNG"]);
    let lower = resolve(&ability, &["ahri_q.png"]);

    assert_eq!(upper.confidence, lower.confidence);
    assert_eq!(upper.filename.as_deref(), Some("Ahri_Q.PNG"));
    assert_eq!(lower.filename.as_deref(), Some("ahri_q.png"));
  }

  #[test]
  fn ties_keep_first_candidate() {
    let ability = AbilityRef::new("Ahri", AbilityKey::Q, 0, "Orb of Deception");
    let found = best_fuzzy_match(&ability, &["ahri_q.png", "AHRI_Q.png"]).unwrap();
    assert_eq!(found.filename, "ahri_q.png");

    let found = best_fuzzy_match(&ability, &["AHRI_Q.png", "ahri_q.png"]).unwrap();
    assert_eq!(found.filename, "AHRI_Q.png");
  }

  #[test]
  fn resolution_is_idempotent() {
    let ability = AbilityRef::new("Lux", AbilityKey::R, 0, "Final Spark");
    let candidates = vec!["lux_r.png".to_string(), "lux_q.png".to_string()];
    assert_eq!(resolve(&ability, &candidates), resolve(&ability, &candidates));
  }

  #[test]
  fn threshold_is_configurable() {
    let config = UpdaterConfig {
      match_threshold: 100,
      ..UpdaterConfig::default()
    };
    let resolver = IconResolver::from_config(&config);
    let ability = AbilityRef::new("Ashe", AbilityKey::Q, 0, "Frost Shot");

    let result = resolver.resolve(&ability, &["ashe_q.png"]);
    assert!(!result.is_matched());
    assert_eq!(result.confidence, 1.0);
  }
}
