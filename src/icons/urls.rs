use crate::models::AbilityKey;

/// URL of an icon file that was found in the champion's `hud/icons2d` directory.
///
/// Only the basename of `filename` is used; listings occasionally carry a path prefix.
pub fn asset_icon_url(asset_host: &str, champion_key: &str, filename: &str) -> String {
  format!(
    "https://{}/latest/game/assets/characters/{}/hud/icons2d/{}",
    asset_host,
    champion_key.to_lowercase(),
    basename(filename)
  )
}

/// Generic CDN URL used when no filename could be matched.
pub fn cdn_fallback_url(cdn_host: &str, champion_key: &str, ability_key: AbilityKey) -> String {
  format!(
    "https://{}/latest/champion/{}/ability-icon/{}",
    cdn_host,
    champion_key,
    ability_key.letter()
  )
}

/// Directory on the asset host listing a champion's HUD icons.
pub fn icon_listing_url(asset_host: &str, champion_key: &str) -> String {
  format!(
    "https://{}/latest/game/assets/characters/{}/hud/icons2d/",
    asset_host,
    champion_key.to_lowercase()
  )
}

/// Strip any directory prefix, accepting both separators.
pub fn basename(filename: &str) -> &str {
  filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}
