//! The `RegistryStore` trait.
//!
//! The trait is implemented by storage backends (`troth-store-remote`,
//! `troth-store-local`). The API layer depends on this abstraction, not on
//! any concrete backend, so page-facing code never branches on which one
//! is configured.

use std::future::Future;

use crate::{
  Result,
  gift::Gift,
  rsvp::{NewRsvp, Rsvp},
};

/// Abstraction over the wedding-site data store.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with axum).
pub trait RegistryStore: Send + Sync {
  /// All gifts on the registry, in backend order.
  fn list_gifts(
    &self,
  ) -> impl Future<Output = Result<Vec<Gift>>> + Send + '_;

  /// All RSVPs, most recently created first.
  fn list_rsvps(
    &self,
  ) -> impl Future<Output = Result<Vec<Rsvp>>> + Send + '_;

  /// Persist a new RSVP and return the stored record, including the
  /// store-assigned id and creation timestamp.
  fn save_rsvp(
    &self,
    input: NewRsvp,
  ) -> impl Future<Output = Result<Rsvp>> + Send + '_;

  /// Mark the gift with `gift_id` reserved, optionally recording who by,
  /// and return the updated record.
  ///
  /// Fails with
  /// [`StoreError::GiftNotFound`](crate::error::StoreError::GiftNotFound)
  /// if no such gift exists.
  fn reserve_gift<'a>(
    &'a self,
    gift_id: &'a str,
    reserved_by: Option<&'a str>,
  ) -> impl Future<Output = Result<Gift>> + Send + 'a;

  /// Release the reservation on `gift_id`, clearing both pairing fields.
  /// Same not-found contract as [`reserve_gift`](Self::reserve_gift).
  fn unreserve_gift<'a>(
    &'a self,
    gift_id: &'a str,
  ) -> impl Future<Output = Result<Gift>> + Send + 'a;
}
