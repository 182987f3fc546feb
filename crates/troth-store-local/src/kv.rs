//! [`FileKv`] — minimal key-value storage, one JSON document per key.

use std::path::PathBuf;

use tokio::fs;
use troth_core::Result;

/// Key under which the RSVP list is persisted.
pub const RSVPS_KEY: &str = "demo_rsvps";
/// Key under which the mutated gift list is persisted.
pub const GIFTS_KEY: &str = "demo_gifts";

/// Whole-document key-value storage in a directory, one `<key>.json` file
/// per key.
///
/// Writes replace the entire document; there is no partial update and no
/// locking, so concurrent writers race and the later write wins.
#[derive(Debug, Clone)]
pub struct FileKv {
  dir: PathBuf,
}

impl FileKv {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }

  /// Read the document stored under `key`; `None` if it was never
  /// written.
  pub async fn read(&self, key: &str) -> Result<Option<String>> {
    match fs::read_to_string(self.path_for(key)).await {
      Ok(contents) => Ok(Some(contents)),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  /// Replace the document stored under `key`.
  pub async fn write(&self, key: &str, contents: &str) -> Result<()> {
    fs::create_dir_all(&self.dir).await?;
    fs::write(self.path_for(key), contents).await?;
    Ok(())
  }
}
