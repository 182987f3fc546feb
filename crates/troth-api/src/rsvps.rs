//! Handlers for `/rsvps` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/rsvps` | Most recently created first |
//! | `POST` | `/rsvps` | Body: [`NewRsvp`]; returns 201 + stored record |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use troth_core::{
  rsvp::{NewRsvp, Rsvp},
  store::RegistryStore,
};

use crate::error::ApiError;

/// `GET /rsvps`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Rsvp>>, ApiError>
where
  S: RegistryStore,
{
  let rsvps = store.list_rsvps().await?;
  Ok(Json(rsvps))
}

/// `POST /rsvps` — returns 201 + the stored record, including the
/// store-assigned id and creation timestamp.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewRsvp>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RegistryStore,
{
  let rsvp = store.save_rsvp(body).await?;
  Ok((StatusCode::CREATED, Json(rsvp)))
}
