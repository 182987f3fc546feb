//! Fallback storage for the wedding site: a read-only gift seed document
//! plus a file-backed key-value store for writes.
//!
//! Used when no hosted store is configured. Effects are durable only on
//! the machine running the server; nothing here is shared or
//! synchronised.

mod kv;
mod store;


pub use kv::{FileKv, GIFTS_KEY, RSVPS_KEY};
pub use store::LocalStore;
