//! Hosted-store backend: a thin PostgREST client plus the
//! [`RegistryStore`](troth_core::store::RegistryStore) implementation on
//! top of it.
//!
//! Everything the hosted service reports (network failures, query
//! rejections, rows that do not exist) propagates to the caller. This
//! crate adds no retries and substitutes no fallback results.

mod client;
mod error;
mod store;

pub use client::{PostgrestClient, RemoteConfig};
pub use error::RemoteError;
pub use store::RemoteStore;
