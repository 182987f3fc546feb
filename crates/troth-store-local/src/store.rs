//! [`LocalStore`] — the fallback implementation of [`RegistryStore`].

use std::path::PathBuf;

use chrono::Utc;
use troth_core::{
  Result, StoreError,
  gift::Gift,
  rsvp::{NewRsvp, Rsvp},
  store::RegistryStore,
};
use uuid::Uuid;

use crate::kv::{FileKv, GIFTS_KEY, RSVPS_KEY};

/// A registry store backed entirely by local files.
///
/// Gift reads come from a read-only seed document; all writes land as
/// whole documents in a [`FileKv`] directory. A reservation made here is
/// persisted under its own key and returned to the caller, but later
/// `list_gifts` calls keep reading the seed and will not reflect it.
#[derive(Debug, Clone)]
pub struct LocalStore {
  seed_path: PathBuf,
  kv:        FileKv,
}

impl LocalStore {
  /// `seed_path` is the gift seed document (typically
  /// `<site>/data/gifts.json`); `state_dir` is where written documents
  /// land.
  pub fn new(
    seed_path: impl Into<PathBuf>,
    state_dir: impl Into<PathBuf>,
  ) -> Self {
    Self { seed_path: seed_path.into(), kv: FileKv::new(state_dir) }
  }

  /// Read and parse the seed document. The registry display is
  /// non-critical, so every failure here is logged and absorbed into an
  /// empty list.
  async fn read_seed(&self) -> Vec<Gift> {
    let contents = match tokio::fs::read_to_string(&self.seed_path).await {
      Ok(contents) => contents,
      Err(err) => {
        tracing::error!(
          path = %self.seed_path.display(),
          %err,
          "failed to read gift seed"
        );
        return Vec::new();
      }
    };
    match serde_json::from_str(&contents) {
      Ok(gifts) => gifts,
      Err(err) => {
        tracing::error!(
          path = %self.seed_path.display(),
          %err,
          "failed to parse gift seed"
        );
        Vec::new()
      }
    }
  }

  /// Locate `gift_id` in the current gift set, apply `mutate`, persist
  /// the full mutated list, and return the mutated record.
  async fn mutate_gift(
    &self,
    gift_id: &str,
    mutate: impl FnOnce(&mut Gift) + Send,
  ) -> Result<Gift> {
    let mut gifts = self.list_gifts().await?;
    let gift = gifts
      .iter_mut()
      .find(|g| g.id == gift_id)
      .ok_or_else(|| StoreError::GiftNotFound(gift_id.to_owned()))?;
    mutate(gift);
    let updated = gift.clone();

    self.kv.write(GIFTS_KEY, &serde_json::to_string(&gifts)?).await?;
    Ok(updated)
  }
}

impl RegistryStore for LocalStore {
  async fn list_gifts(&self) -> Result<Vec<Gift>> {
    Ok(self.read_seed().await)
  }

  async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
    match self.kv.read(RSVPS_KEY).await? {
      Some(raw) => Ok(serde_json::from_str(&raw)?),
      None => Ok(Vec::new()),
    }
  }

  async fn save_rsvp(&self, input: NewRsvp) -> Result<Rsvp> {
    let rsvp = input.into_rsvp(format!("r_{}", Uuid::new_v4()), Utc::now());

    // Prepend so the list stays most-recent-first without re-sorting.
    let mut list = self.list_rsvps().await?;
    list.insert(0, rsvp.clone());
    self.kv.write(RSVPS_KEY, &serde_json::to_string(&list)?).await?;

    Ok(rsvp)
  }

  async fn reserve_gift(
    &self,
    gift_id: &str,
    reserved_by: Option<&str>,
  ) -> Result<Gift> {
    self.mutate_gift(gift_id, |g| g.reserve(reserved_by)).await
  }

  async fn unreserve_gift(&self, gift_id: &str) -> Result<Gift> {
    self.mutate_gift(gift_id, |g| g.clear_reservation()).await
  }
}
