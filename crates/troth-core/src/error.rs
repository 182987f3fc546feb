//! Error types shared by all storage backends.

use thiserror::Error;

/// Errors surfaced by [`RegistryStore`](crate::store::RegistryStore)
/// implementations.
///
/// Remote failures are carried through to the caller unmodified. The one
/// absorbed failure path in the system is the local seed-document read,
/// which never produces an error at all (see the local backend).
#[derive(Debug, Error)]
pub enum StoreError {
  /// Reserve/unreserve named a gift id absent from the current gift set.
  /// Kept distinct so the UI can tell the user the gift no longer exists.
  #[error("gift not found: {0}")]
  GiftNotFound(String),

  /// The hosted store rejected a call (network, query, non-success
  /// response). No retry, no translation.
  #[error("remote store error: {0}")]
  Remote(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("local storage error: {0}")]
  Storage(#[from] std::io::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl StoreError {
  /// Wrap a backend-specific failure as a remote-store error.
  pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Remote(Box::new(err))
  }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
