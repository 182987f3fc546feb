//! JSON API for the wedding site.
//!
//! Exposes an axum [`Router`] backed by any
//! [`troth_core::store::RegistryStore`]. The site's pages talk to these
//! endpoints and never learn which backend is configured.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", troth_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod gifts;
pub mod rsvps;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use troth_core::store::RegistryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RegistryStore + 'static,
{
  Router::new()
    .route("/gifts", get(gifts::list::<S>))
    .route("/gifts/{id}/reserve", post(gifts::reserve::<S>))
    .route("/gifts/{id}/unreserve", post(gifts::unreserve::<S>))
    .route("/rsvps", get(rsvps::list::<S>).post(rsvps::create::<S>))
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use tower::ServiceExt as _;
  use troth_store_local::LocalStore;

  const SEED: &str = r#"[
    {"id": "g_vase", "name": "Stoneware vase"},
    {"id": "g_picnic", "name": "Picnic hamper", "link": "https://example.com/hamper"}
  ]"#;

  fn router_with_seed() -> (Router, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("temp dir");
    let seed_path = tmp.path().join("gifts.json");
    std::fs::write(&seed_path, SEED).expect("write seed");
    let store = LocalStore::new(seed_path, tmp.path().join("state"));
    (api_router(Arc::new(store)), tmp)
  }

  async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(json) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(json.to_string())
      }
      None => Body::empty(),
    };
    router.oneshot(builder.body(body).unwrap()).await.unwrap()
  }

  async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── Gifts ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_gifts_returns_the_registry() {
    let (router, _tmp) = router_with_seed();

    let resp = send(router, "GET", "/gifts", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["id"], "g_vase");
  }

  #[tokio::test]
  async fn reserve_returns_the_updated_gift() {
    let (router, _tmp) = router_with_seed();

    let resp = send(
      router,
      "POST",
      "/gifts/g_vase/reserve",
      Some(serde_json::json!({"reservedBy": "Alice"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["reserved"], true);
    assert_eq!(json["reservedBy"], "Alice");
  }

  #[tokio::test]
  async fn reserve_without_body_is_anonymous() {
    let (router, _tmp) = router_with_seed();

    let resp = send(router, "POST", "/gifts/g_picnic/reserve", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["reserved"], true);
    assert!(json["reservedBy"].is_null());
  }

  #[tokio::test]
  async fn reserve_unknown_gift_returns_404_with_error_body() {
    let (router, _tmp) = router_with_seed();

    let resp = send(router, "POST", "/gifts/g_missing/reserve", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = body_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("g_missing"));
  }

  #[tokio::test]
  async fn unreserve_clears_both_pairing_fields() {
    let (router, _tmp) = router_with_seed();

    let resp = send(
      router.clone(),
      "POST",
      "/gifts/g_vase/reserve",
      Some(serde_json::json!({"reservedBy": "Alice"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(router, "POST", "/gifts/g_vase/unreserve", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["reserved"], false);
    assert!(json["reservedBy"].is_null());
  }

  // ── RSVPs ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_rsvp_returns_201_and_the_stored_record() {
    let (router, _tmp) = router_with_seed();

    let resp = send(
      router,
      "POST",
      "/rsvps",
      Some(serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "attending": true,
        "guestCount": 2,
        "mealPreference": "vegetarian"
      })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["guestCount"], 2);
  }

  #[tokio::test]
  async fn saved_rsvp_is_first_in_the_listing() {
    let (router, _tmp) = router_with_seed();

    for name in ["Alice", "Bob"] {
      let resp = send(
        router.clone(),
        "POST",
        "/rsvps",
        Some(serde_json::json!({
          "name": name,
          "email": format!("{}@example.com", name.to_lowercase()),
          "attending": true,
          "guestCount": 1
        })),
      )
      .await;
      assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(router, "GET", "/rsvps", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let rsvps = json.as_array().unwrap();
    assert_eq!(rsvps.len(), 2);
    assert_eq!(rsvps[0]["name"], "Bob");
    assert_eq!(rsvps[1]["name"], "Alice");
  }
}
