use std::collections::BTreeSet;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::debug;

use crate::icons::urls::{basename, icon_listing_url};

fn href_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r#"(?i)href\s*=\s*["']([^"'#?]+)[^"']*["']"#).expect("invalid href regex"))
}

fn icon_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)\.png$").expect("invalid png regex"))
}

/// Extract icon filenames from an HTML directory index.
///
/// Only `.png` links are kept; path prefixes, query strings and fragments are dropped. Page order
/// is preserved because the fuzzy matcher breaks ties by candidate order.
pub fn parse_directory_listing(html: &str) -> Vec<String> {
  let mut seen = BTreeSet::new();
  href_pattern()
    .captures_iter(html)
    .filter_map(|captures| captures.get(1))
    .map(|target| basename(target.as_str()).to_string())
    .filter(|name| !name.is_empty() && name != ".." && icon_pattern().is_match(name))
    .filter(|name| seen.insert(name.clone()))
    .collect()
}

/// Download and parse the HUD icon listing of a champion from the asset host.
pub fn fetch_icon_listing(asset_host: &str, champion_key: &str) -> Result<Vec<String>> {
  let url = icon_listing_url(asset_host, champion_key);
  let response = reqwest::blocking::get(&url).with_context(|| format!("failed to request {url}"))?;
  if !response.status().is_success() {
    bail!("listing request to {url} failed with status {}", response.status());
  }
  let body = response
    .text()
    .with_context(|| format!("failed to read listing body from {url}"))?;

  let filenames = parse_directory_listing(&body);
  debug!(champion = champion_key, count = filenames.len(), "fetched icon listing");
  Ok(filenames)
}
