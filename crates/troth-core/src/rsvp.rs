//! RSVP records.
//!
//! An RSVP is written once on submission and never edited afterwards; the
//! only way one leaves the system is deletion in the backing store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored RSVP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
  /// Opaque unique identifier, assigned by the store.
  pub id:              String,
  pub name:            String,
  pub email:           String,
  pub attending:       bool,
  pub guest_count:     u32,
  pub meal_preference: Option<String>,
  pub notes:           Option<String>,
  /// Set by the store at creation; never changes afterwards.
  pub created_at:      DateTime<Utc>,
}

/// Input to [`RegistryStore::save_rsvp`](crate::store::RegistryStore::save_rsvp).
/// `id` and `created_at` are always assigned by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRsvp {
  pub name:            String,
  pub email:           String,
  pub attending:       bool,
  pub guest_count:     u32,
  #[serde(default)]
  pub meal_preference: Option<String>,
  #[serde(default)]
  pub notes:           Option<String>,
}

impl NewRsvp {
  /// Build the stored record from this input plus store-assigned metadata.
  pub fn into_rsvp(self, id: String, created_at: DateTime<Utc>) -> Rsvp {
    Rsvp {
      id,
      name: self.name,
      email: self.email,
      attending: self.attending,
      guest_count: self.guest_count,
      meal_preference: self.meal_preference,
      notes: self.notes,
      created_at,
    }
  }
}
