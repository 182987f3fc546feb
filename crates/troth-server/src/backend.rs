//! Startup backend selection.
//!
//! The storage backend is chosen exactly once, here, and injected into
//! the API router; nothing else in the tree inspects the configuration.

use troth_core::{
  Result,
  gift::Gift,
  rsvp::{NewRsvp, Rsvp},
  store::RegistryStore,
};
use troth_store_local::LocalStore;
use troth_store_remote::{RemoteConfig, RemoteStore};

use crate::settings::Settings;

/// The backend picked at startup. Delegates every operation unchanged.
pub enum Backend {
  Remote(RemoteStore),
  Local(LocalStore),
}

impl Backend {
  /// Decide which backend this process uses.
  ///
  /// Missing remote configuration degrades to local storage and is never
  /// an error; so is a remote client that fails to construct. With
  /// `offline` set, the remote configuration is not consulted at all.
  pub fn select(settings: &Settings, offline: bool) -> Self {
    if offline {
      tracing::info!("offline mode, using local storage");
      return Self::local(settings);
    }

    match (&settings.supabase_url, &settings.supabase_key) {
      (Some(url), Some(key)) => {
        let config = RemoteConfig { url: url.clone(), key: key.clone() };
        match RemoteStore::new(config) {
          Ok(store) => {
            tracing::info!(%url, "using hosted store");
            Self::Remote(store)
          }
          Err(err) => {
            tracing::error!(
              %err,
              "failed to construct remote client, using local storage"
            );
            Self::local(settings)
          }
        }
      }
      _ => {
        tracing::warn!(
          "hosted store not configured (set TROTH_SUPABASE_URL and \
           TROTH_SUPABASE_KEY), using local storage"
        );
        Self::local(settings)
      }
    }
  }

  #[cfg(test)]
  fn is_remote(&self) -> bool {
    matches!(self, Self::Remote(_))
  }

  fn local(settings: &Settings) -> Self {
    Self::Local(LocalStore::new(
      settings.gifts_seed_path(),
      settings.state_dir.clone(),
    ))
  }
}

impl RegistryStore for Backend {
  async fn list_gifts(&self) -> Result<Vec<Gift>> {
    match self {
      Self::Remote(s) => s.list_gifts().await,
      Self::Local(s) => s.list_gifts().await,
    }
  }

  async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
    match self {
      Self::Remote(s) => s.list_rsvps().await,
      Self::Local(s) => s.list_rsvps().await,
    }
  }

  async fn save_rsvp(&self, input: NewRsvp) -> Result<Rsvp> {
    match self {
      Self::Remote(s) => s.save_rsvp(input).await,
      Self::Local(s) => s.save_rsvp(input).await,
    }
  }

  async fn reserve_gift(
    &self,
    gift_id: &str,
    reserved_by: Option<&str>,
  ) -> Result<Gift> {
    match self {
      Self::Remote(s) => s.reserve_gift(gift_id, reserved_by).await,
      Self::Local(s) => s.reserve_gift(gift_id, reserved_by).await,
    }
  }

  async fn unreserve_gift(&self, gift_id: &str) -> Result<Gift> {
    match self {
      Self::Remote(s) => s.unreserve_gift(gift_id).await,
      Self::Local(s) => s.unreserve_gift(gift_id).await,
    }
  }
}
