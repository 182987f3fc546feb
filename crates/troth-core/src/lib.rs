//! Core types and trait definitions for the troth wedding-site backend.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! Both storage backends and the API crate depend on it; it depends on
//! nothing heavier than serde.

pub mod error;
pub mod gift;
pub mod rsvp;
pub mod store;

pub use error::{Result, StoreError};
