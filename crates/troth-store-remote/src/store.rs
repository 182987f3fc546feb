//! [`RemoteStore`] — the hosted-store implementation of
//! [`RegistryStore`].

use serde_json::json;
use troth_core::{
  Result,
  gift::Gift,
  rsvp::{NewRsvp, Rsvp},
  store::RegistryStore,
};

use crate::client::{PostgrestClient, RemoteConfig};
use crate::error::RemoteError;

/// Collection names on the hosted store.
const GIFTS: &str = "gifts";
const RSVPS: &str = "rsvps";

/// A registry store backed by the hosted database service.
#[derive(Clone)]
pub struct RemoteStore {
  client: PostgrestClient,
}

impl RemoteStore {
  pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
    Ok(Self { client: PostgrestClient::new(config)? })
  }
}

impl RegistryStore for RemoteStore {
  async fn list_gifts(&self) -> Result<Vec<Gift>> {
    Ok(self.client.select(GIFTS, None).await?)
  }

  async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
    // Ordering is applied server-side.
    Ok(self.client.select(RSVPS, Some("createdAt.desc")).await?)
  }

  async fn save_rsvp(&self, input: NewRsvp) -> Result<Rsvp> {
    // The backend assigns id and createdAt.
    Ok(self.client.insert_one(RSVPS, &input).await?)
  }

  async fn reserve_gift(
    &self,
    gift_id: &str,
    reserved_by: Option<&str>,
  ) -> Result<Gift> {
    let patch = json!({ "reserved": true, "reservedBy": reserved_by });
    Ok(self.client.update_by_id(GIFTS, gift_id, &patch).await?)
  }

  async fn unreserve_gift(&self, gift_id: &str) -> Result<Gift> {
    let patch = json!({ "reserved": false, "reservedBy": null });
    Ok(self.client.update_by_id(GIFTS, gift_id, &patch).await?)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use troth_core::rsvp::NewRsvp;

  #[test]
  fn new_rsvp_wire_shape_has_no_id_or_timestamp() {
    // The insert body must leave id/createdAt for the backend to assign.
    let input = NewRsvp {
      name:            "Alice".into(),
      email:           "alice@example.com".into(),
      attending:       true,
      guest_count:     2,
      meal_preference: None,
      notes:           None,
    };
    let row = serde_json::to_value(&input).unwrap();
    assert!(row.get("id").is_none());
    assert!(row.get("createdAt").is_none());
    assert_eq!(row["guestCount"], 2);
  }

  #[test]
  fn reserve_patch_pairs_flag_and_name() {
    let name = Some("Alice");
    let patch = json!({ "reserved": true, "reservedBy": name });
    assert_eq!(patch["reserved"], true);
    assert_eq!(patch["reservedBy"], "Alice");

    let anonymous: Option<&str> = None;
    let patch = json!({ "reserved": true, "reservedBy": anonymous });
    assert!(patch["reservedBy"].is_null());
  }
}
