//! Runtime configuration.
//!
//! Loaded from an optional TOML file overlaid with `TROTH_`-prefixed
//! environment variables. Every field has a default, so the server runs
//! with no configuration at all: local bind, fallback storage.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  #[serde(default = "default_host")]
  pub host: String,

  #[serde(default = "default_port")]
  pub port: u16,

  /// Directory of static pages; also the parent of the gift seed
  /// document (`<site_dir>/data/gifts.json`).
  #[serde(default = "default_site_dir")]
  pub site_dir: PathBuf,

  /// Where the fallback store persists its documents.
  #[serde(default = "default_state_dir")]
  pub state_dir: PathBuf,

  /// Hosted-store endpoint. Remote storage is enabled only when both
  /// this and `supabase_key` are present; absence degrades to the
  /// fallback store, it is never an error.
  #[serde(default)]
  pub supabase_url: Option<String>,

  #[serde(default)]
  pub supabase_key: Option<String>,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  8080
}

fn default_site_dir() -> PathBuf {
  PathBuf::from("site")
}

fn default_state_dir() -> PathBuf {
  PathBuf::from("state")
}

impl Settings {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_owned()).required(false))
      .add_source(config::Environment::with_prefix("TROTH"))
      .build()
      .context("failed to read configuration")?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  /// The gift seed document the fallback store reads: the same
  /// `data/gifts.json` the pages fetch relative to the site root, so the
  /// path stays correct wherever the site is mounted.
  pub fn gifts_seed_path(&self) -> PathBuf {
    self.site_dir.join("data").join("gifts.json")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_when_nothing_is_configured() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.host, "127.0.0.1");
    assert_eq!(settings.port, 8080);
    assert!(settings.supabase_url.is_none());
    assert!(settings.supabase_key.is_none());
  }

  #[test]
  fn seed_path_follows_the_site_dir() {
    let settings: Settings =
      serde_json::from_str(r#"{"site_dir": "/srv/wedding"}"#).unwrap();
    assert_eq!(
      settings.gifts_seed_path(),
      PathBuf::from("/srv/wedding/data/gifts.json")
    );
  }
}
