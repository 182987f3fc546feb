//! Error type for the hosted-store backend.

use thiserror::Error;
use troth_core::StoreError;

#[derive(Debug, Error)]
pub enum RemoteError {
  /// Transport-level failure: connect, TLS, timeout, body read.
  #[error("request to remote store failed: {0}")]
  Http(#[from] reqwest::Error),

  /// The store answered with a non-success status. The body is kept so
  /// callers can surface the service's own message.
  #[error("remote store rejected {operation}: {status}: {body}")]
  Api {
    operation: &'static str,
    status:    reqwest::StatusCode,
    body:      String,
  },

  /// An update filter matched no row.
  #[error("no row in {table} matched id {id}")]
  RowNotFound { table: &'static str, id: String },

  /// `return=representation` yielded an unexpected number of rows where
  /// exactly one was required.
  #[error("expected a single {table} row, got {count}")]
  UnexpectedRowCount { table: &'static str, count: usize },
}

impl From<RemoteError> for StoreError {
  fn from(err: RemoteError) -> Self {
    match err {
      // Only gift updates filter by id, so an unmatched filter is always
      // a missing gift.
      RemoteError::RowNotFound { id, .. } => StoreError::GiftNotFound(id),
      other => StoreError::remote(other),
    }
  }
}
