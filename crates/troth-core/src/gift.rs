//! Gift-registry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gift on the registry.
///
/// Gifts are created out-of-band (seed data or remote rows, never by this
/// code) and mutated only through [`reserve`](Gift::reserve) and
/// [`clear_reservation`](Gift::clear_reservation), which keep the
/// `reserved`/`reserved_by` pair consistent: an unreserved gift never
/// carries a reserver name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
  /// Opaque unique identifier.
  pub id:          String,
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub image_url:   Option<String>,
  #[serde(default)]
  pub link:        Option<String>,
  #[serde(default)]
  pub reserved:    bool,
  #[serde(default)]
  pub reserved_by: Option<String>,
  #[serde(default)]
  pub created_at:  Option<DateTime<Utc>>,
}

impl Gift {
  /// Mark the gift reserved, optionally recording who by.
  pub fn reserve(&mut self, reserved_by: Option<&str>) {
    self.reserved = true;
    self.reserved_by = reserved_by.map(str::to_owned);
  }

  /// Release the reservation; both pairing fields are cleared together.
  pub fn clear_reservation(&mut self) {
    self.reserved = false;
    self.reserved_by = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gift() -> Gift {
    Gift {
      id:          "g_vase".into(),
      name:        "Stoneware vase".into(),
      description: None,
      image_url:   None,
      link:        None,
      reserved:    false,
      reserved_by: None,
      created_at:  None,
    }
  }

  #[test]
  fn reserve_then_clear_round_trips_pairing_fields() {
    let mut g = gift();

    g.reserve(Some("Alice"));
    assert!(g.reserved);
    assert_eq!(g.reserved_by.as_deref(), Some("Alice"));

    g.clear_reservation();
    assert!(!g.reserved);
    assert!(g.reserved_by.is_none());
  }

  #[test]
  fn reserve_without_name_leaves_reserver_empty() {
    let mut g = gift();
    g.reserve(None);
    assert!(g.reserved);
    assert!(g.reserved_by.is_none());
  }

  #[test]
  fn deserializes_sparse_seed_entries() {
    // Seed documents may carry only id and name; everything else defaults.
    let g: Gift = serde_json::from_str(r#"{"id":"g_1","name":"Candles"}"#).unwrap();
    assert!(!g.reserved);
    assert!(g.reserved_by.is_none());
    assert!(g.created_at.is_none());
  }

  #[test]
  fn serializes_with_camel_case_field_names() {
    let mut g = gift();
    g.reserve(Some("Alice"));
    let json = serde_json::to_value(&g).unwrap();
    assert_eq!(json["reservedBy"], "Alice");
    assert!(json.get("reserved_by").is_none());
  }
}
