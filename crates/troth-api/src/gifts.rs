//! Handlers for `/gifts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/gifts` | The full registry |
//! | `POST` | `/gifts/{id}/reserve` | Body: `{"reservedBy":"Alice"}`, optional; 404 if unknown |
//! | `POST` | `/gifts/{id}/unreserve` | 404 if unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;
use troth_core::{gift::Gift, store::RegistryStore};

use crate::error::ApiError;

/// `GET /gifts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Gift>>, ApiError>
where
  S: RegistryStore,
{
  let gifts = store.list_gifts().await?;
  Ok(Json(gifts))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveBody {
  pub reserved_by: Option<String>,
}

/// `POST /gifts/{id}/reserve` — body optional; an absent body or name
/// records an anonymous reservation.
pub async fn reserve<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Option<Json<ReserveBody>>,
) -> Result<Json<Gift>, ApiError>
where
  S: RegistryStore,
{
  let body = body.map(|Json(b)| b).unwrap_or_default();
  let gift = store.reserve_gift(&id, body.reserved_by.as_deref()).await?;
  Ok(Json(gift))
}

/// `POST /gifts/{id}/unreserve`
pub async fn unreserve<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Gift>, ApiError>
where
  S: RegistryStore,
{
  let gift = store.unreserve_gift(&id).await?;
  Ok(Json(gift))
}
